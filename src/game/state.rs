//! The authoritative per-hand table snapshot and its derived queries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::BOARD_SIZE;
use super::entities::{Blinds, Card, Chips, Player};

/// Betting streets in the order the engine advances them. The board fills
/// over `Flop`, then `River`, then `Turn`, which is the final street here.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Round {
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// Type alias for seat positions at the table.
pub type SeatIndex = usize;

/// Everything there is to know about the hand in progress. The engine owns
/// and mutates this; everyone else reads it (or an obscured copy of it).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TableState {
    pub round: Round,
    /// Community cards, 0/3/4/5 of them as the streets progress.
    pub board: Vec<Card>,
    pub players: Vec<Player>,
    /// Seat that must act next.
    pub action_idx: SeatIndex,
    pub small_blind_idx: SeatIndex,
    pub big_blind_idx: SeatIndex,
    pub blinds: Blinds,
}

impl TableState {
    /// Lay out a fresh game: the big blind sits after the small blind and
    /// the first action is two seats past the small blind.
    #[must_use]
    pub fn new_game(players: Vec<Player>, small_blind: Chips, small_blind_idx: SeatIndex) -> Self {
        let n = players.len();
        Self {
            round: Round::Preflop,
            board: Vec::with_capacity(BOARD_SIZE),
            players,
            action_idx: (small_blind_idx + 2) % n,
            small_blind_idx,
            big_blind_idx: (small_blind_idx + 1) % n,
            blinds: Blinds {
                small: small_blind,
                big: small_blind * 2,
            },
        }
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Seats still contesting the hand: not folded, with either chips
    /// behind or everything already in the middle.
    #[must_use]
    pub fn num_nonfolded(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !p.folded && (p.money > 0 || p.all_in))
            .count()
    }

    /// Seats that can still put chips in.
    #[must_use]
    pub fn num_bettable(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !p.folded && p.money > 0)
            .count()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.action_idx]
    }

    /// The highest standing bet among seats still in the hand.
    #[must_use]
    pub fn max_bet(&self) -> Chips {
        self.players
            .iter()
            .filter(|p| p.bet > 0 && !p.folded)
            .map(|p| p.bet)
            .max()
            .unwrap_or(0)
    }

    /// Chips the acting seat must add to match the highest bet.
    #[must_use]
    pub fn call_amount(&self) -> Chips {
        self.max_bet().saturating_sub(self.current_player().bet)
    }

    /// Every chip bet so far this hand.
    #[must_use]
    pub fn pot(&self) -> Chips {
        self.players.iter().map(|p| p.bet).sum()
    }

    /// Chips behind all stacks, bets excluded.
    #[must_use]
    pub fn total_money(&self) -> Chips {
        self.players.iter().map(|p| p.money).sum()
    }

    /// The seat with the most chips behind. `None` only for a seatless state.
    #[must_use]
    pub fn big_stack(&self) -> Option<(SeatIndex, &Player)> {
        self.players.iter().enumerate().max_by_key(|(_, p)| p.money)
    }

    /// A deep snapshot with every other seat's hole cards cleared. This is
    /// what a strategy gets to look at; mutating it changes nothing real.
    #[must_use]
    pub fn observed_by(&self, seat: SeatIndex) -> Self {
        let mut observed = self.clone();
        for (idx, player) in observed.players.iter_mut().enumerate() {
            if idx != seat {
                player.cards.clear();
            }
        }
        observed
    }
}
