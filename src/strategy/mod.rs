//! The decision-making capability plugged into each seat.
//!
//! The engine calls [`Strategy::make_action`] whenever its seat must act.
//! A strategy only ever receives an obscured [`TableState`] snapshot: every
//! other seat's hole cards are cleared, and the snapshot is an owned copy,
//! so nothing a strategy does to it can leak back into the real table.
//!
//! Returned actions do not have to be legal. The engine validates each one
//! and downgrades anything illegal, typically to a fold, so a misbehaving
//! strategy loses pots instead of halting the game.

use crate::game::entities::{Action, Chips, Player};
use crate::game::state::TableState;

pub mod presets;
pub use presets::{AlwaysCall, AlwaysFold, FixedRaiser, PictureRaiser, RandomBot};

pub trait Strategy {
    /// Decide what to do. `me` is the acting seat's own player record;
    /// `view` is the obscured table snapshot.
    fn make_action(&mut self, view: TableState, me: &Player) -> Action;

    /// Called once per showdown contender after the pot is distributed,
    /// with this seat's winnings (0 for losers). Learning strategies hook
    /// in here; the default does nothing.
    fn on_round_payout(&mut self, _view: TableState, _me: &Player, _amount: Chips) {}
}
