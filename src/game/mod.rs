//! Poker table engine - entities, hand evaluation, and the hand FSM.
//!
//! This module provides the foundational pieces of the simulator:
//! - Plain card/money/player entities and the dealable [`entities::Deck`]
//! - The five-card hand evaluator ([`eval::PokerHand`])
//! - The per-hand table snapshot and its derived queries ([`state::TableState`])
//! - Structured gameplay events and the sink they flow into ([`events`])
//! - The turn-based table engine itself ([`table::Table`])

pub mod constants;
pub mod entities;
pub mod eval;
pub mod events;
pub mod state;
pub mod table;
