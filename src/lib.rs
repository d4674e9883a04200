//! # Homegame
//!
//! A no-limit Texas Hold'em table simulator that plays hand after hand until
//! one seat holds every chip.
//!
//! The simulator is a small finite state machine (FSM) that an external
//! driver advances one transition at a time with [`Table::step`]. Player
//! decisions come from pluggable [`Strategy`] implementations, which only
//! ever see an information-restricted snapshot of the table. Showdowns are
//! resolved by the combinatorial five-card evaluator in [`game::eval`].
//!
//! ## Architecture
//!
//! A hand moves through these transitions:
//!
//! - **Reset**: restore the configured initial state
//! - **NewRound**: start a hand, or finish the game if one stack remains
//! - **DealPlayerCard**: post blinds and deal hole cards seat by seat
//! - **StartBettingRound/QueryPlayer**: run one street of betting
//! - **IncreaseRound**: deal the next street of community cards
//! - **Showdown/DetermineWinner**: rank hands and distribute the pot
//! - **IncrementButtons**: rotate the blinds for the next hand
//! - **Done**: terminal, a single player owns all the money
//!
//! The engine itself never prints; it reports structured
//! [`game::events::TableEvent`]s to an injected [`game::events::EventSink`].
//!
//! ## Example
//!
//! ```
//! use homegame::{Seat, Table};
//! use homegame::strategy::presets::AlwaysCall;
//!
//! let seats = vec![
//!     Seat::new(40, AlwaysCall),
//!     Seat::new(40, AlwaysCall),
//! ];
//! let mut table = Table::new(seats).unwrap().with_seed(7).unwrap();
//! while !table.done() {
//!     table.step().unwrap();
//! }
//! let (seat, winner) = table.winner().unwrap();
//! println!("seat {seat} takes the table with ${}", winner.money);
//! ```

/// Core game logic: entities, hand evaluation, table state, and the engine.
pub mod game;
pub use game::{
    constants,
    entities::{
        self, ACE, Action, ActionKind, Blinds, Card, Chips, Deck, JACK, KING, Player, QUEEN, Suit,
        TEN, Value,
    },
    eval::{HandTier, PokerHand},
    events::{self, EventSink, LogSink, NullSink, TableEvent},
    state::{Round, SeatIndex, TableState},
    table::{Seat, Table, TableError, Transition},
};

/// The decision-making capability plugged into each seat.
pub mod strategy;
pub use strategy::Strategy;
