//! Structured gameplay events and the sink they are delivered to.
//!
//! The engine never writes to stdout or a logger directly. Every transition,
//! decision, and downgraded action is reported as a [`TableEvent`] to an
//! injected [`EventSink`]; formatting and destination belong to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::{Action, Card, Chips};
use super::state::{Round, SeatIndex};
use super::table::Transition;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BlindKind {
    Small,
    Big,
}

impl fmt::Display for BlindKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Small => "small blind",
            Self::Big => "big blind",
        };
        write!(f, "{repr}")
    }
}

/// Why a submitted action was downgraded to a fold.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DowngradeReason {
    /// More chips than the seat owns.
    OverBet,
    /// Below the amount required to call.
    BelowCall,
    /// A fold that tried to push chips in.
    FoldWithChips,
    /// An all-in that left chips behind.
    PartialAllIn,
}

impl fmt::Display for DowngradeReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::OverBet => "bets more than the stack",
            Self::BelowCall => "bets below the required call",
            Self::FoldWithChips => "folds with a non-zero amount",
            Self::PartialAllIn => "declares all-in but keeps chips behind",
        };
        write!(f, "{repr}")
    }
}

/// Everything noteworthy the table does, in the order it happens.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TableEvent {
    /// A transition is about to execute.
    Step(Transition),
    HandStarted {
        hand: u64,
    },
    BlindPosted {
        seat: SeatIndex,
        kind: BlindKind,
        amount: Chips,
        all_in: bool,
    },
    HoleCardsDealt {
        seat: SeatIndex,
    },
    BettingRoundStarted {
        round: Round,
        first_to_act: SeatIndex,
    },
    ActionTaken {
        seat: SeatIndex,
        action: Action,
    },
    /// A strategy submitted an illegal action and it was applied as a fold.
    ActionDowngraded {
        seat: SeatIndex,
        submitted: Action,
        reason: DowngradeReason,
    },
    BoardDealt {
        round: Round,
        cards: Vec<Card>,
    },
    PotAwarded {
        seat: SeatIndex,
        amount: Chips,
    },
    /// One seat holds all the money; the game is over.
    TableWinner {
        seat: SeatIndex,
    },
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Step(transition) => format!("executing {transition}"),
            Self::HandStarted { hand } => format!("hand {hand} begins"),
            Self::BlindPosted {
                seat,
                kind,
                amount,
                all_in,
            } => {
                let suffix = if *all_in { " and is all-in" } else { "" };
                format!("seat {seat} posts the {kind} of ${amount}{suffix}")
            }
            Self::HoleCardsDealt { seat } => format!("seat {seat} is dealt hole cards"),
            Self::BettingRoundStarted {
                round,
                first_to_act,
            } => format!("{round} betting begins with seat {first_to_act}"),
            Self::ActionTaken { seat, action } => format!("seat {seat} {action}"),
            Self::ActionDowngraded {
                seat,
                submitted,
                reason,
            } => format!("seat {seat} {reason} ({submitted}); folding them"),
            Self::BoardDealt { round, cards } => {
                let cards = cards
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{round} brings {cards}")
            }
            Self::PotAwarded { seat, amount } => format!("seat {seat} wins ${amount}"),
            Self::TableWinner { seat } => format!("seat {seat} owns the table"),
        };
        write!(f, "{repr}")
    }
}

/// Where the engine sends its events. Implementations decide formatting
/// and destination; the engine only guarantees ordering.
pub trait EventSink {
    fn emit(&mut self, event: &TableEvent);
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &TableEvent) {}
}

/// Forwards events to the `log` facade: transitions at debug, downgraded
/// actions at warn, everything else at info.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &TableEvent) {
        match event {
            TableEvent::Step(_) => log::debug!("{event}"),
            TableEvent::ActionDowngraded { .. } => log::warn!("{event}"),
            _ => log::info!("{event}"),
        }
    }
}
