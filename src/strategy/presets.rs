//! Ready-made example strategies.
//!
//! None of these play well. They exist to exercise the engine, to serve as
//! opponents for something smarter, and to show how little a [`Strategy`]
//! needs to implement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Strategy;
use crate::game::entities::{Action, Chips, Player};
use crate::game::state::TableState;

/// Folds every single hand, blinds included.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysFold;

impl Strategy for AlwaysFold {
    fn make_action(&mut self, _view: TableState, _me: &Player) -> Action {
        Action::fold()
    }
}

/// Calls the minimum required to stay in, checking when there is nothing
/// to call.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCall;

impl Strategy for AlwaysCall {
    fn make_action(&mut self, view: TableState, _me: &Player) -> Action {
        Action::call(view.call_amount())
    }
}

/// Raises by a fixed amount on top of the call, every time.
#[derive(Clone, Copy, Debug)]
pub struct FixedRaiser {
    pub raise_by: Chips,
}

impl FixedRaiser {
    #[must_use]
    pub fn new(raise_by: Chips) -> Self {
        Self { raise_by }
    }
}

impl Strategy for FixedRaiser {
    fn make_action(&mut self, view: TableState, _me: &Player) -> Action {
        Action::raise(view.call_amount() + self.raise_by)
    }
}

/// Raises a couple of chips when holding a picture card, calls otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct PictureRaiser;

impl Strategy for PictureRaiser {
    fn make_action(&mut self, view: TableState, me: &Player) -> Action {
        let required = view.call_amount();
        if me.cards.iter().any(|c| c.is_picture()) {
            Action::raise(required + 2)
        } else {
            Action::call(required)
        }
    }
}

/// Calls by default, raising a small random amount with probability
/// `aggression`. Owns its own seeded rng so runs stay reproducible.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: StdRng,
    aggression: f64,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64, aggression: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            aggression: aggression.clamp(0.0, 1.0),
        }
    }
}

impl Strategy for RandomBot {
    fn make_action(&mut self, view: TableState, _me: &Player) -> Action {
        let required = view.call_amount();
        if self.rng.random_bool(self.aggression) {
            Action::raise(required + self.rng.random_range(1..=3))
        } else {
            Action::call(required)
        }
    }
}
