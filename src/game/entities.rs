use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::constants::HOLE_CARDS;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Heart,
    Diamond,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Heart, Self::Diamond];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Heart => "♥",
            Self::Diamond => "♦",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for card face values, 2u8 (deuce) through 14u8 (ace).
pub type Value = u8;

pub const TEN: Value = 10;
pub const JACK: Value = 11;
pub const QUEEN: Value = 12;
pub const KING: Value = 13;
pub const ACE: Value = 14;

/// A card is a tuple of a uInt8 face value and a suit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl Card {
    /// Jacks and up, the cards with somebody painted on them.
    #[must_use]
    pub const fn is_picture(&self) -> bool {
        self.0 >= JACK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.0 {
            ACE => "A",
            KING => "K",
            QUEEN => "Q",
            JACK => "J",
            v => &v.to_string(),
        };
        let repr = format!("{value}{}", self.1);
        write!(f, "{repr:>3}")
    }
}

/// The deck ran dry. With at most 22 seats this is unreachable during
/// normal play and indicates a corrupted table.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("the deck is out of cards")]
pub struct DeckExhausted;

/// An ordered 52-card supply. Cards are consumed from the front and only
/// become available again after [`Deck::reset`].
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [Card; 52],
    deck_idx: usize,
}

impl Deck {
    /// Remove and return the next card.
    pub fn deal(&mut self) -> Result<Card, DeckExhausted> {
        let card = *self.cards.get(self.deck_idx).ok_or(DeckExhausted)?;
        self.deck_idx += 1;
        Ok(card)
    }

    /// Randomize the order of the full deck with the caller's rng.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.deck_idx = 0;
    }

    /// Restore the full 52-card set without changing the order.
    pub fn reset(&mut self) {
        self.deck_idx = 0;
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        52 - self.deck_idx
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = [Card(2, Suit::Club); 52];
        for (i, value) in (2..=ACE).enumerate() {
            for (j, suit) in Suit::ALL.into_iter().enumerate() {
                cards[4 * i + j] = Card(value, suit);
            }
        }
        Self { cards, deck_idx: 0 }
    }
}

/// Type alias for whole chips. All bets and player stacks are counted in
/// whole chips, so fractional or negative wagers are unrepresentable.
pub type Chips = u32;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
}

impl fmt::Display for Blinds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = format!("${}/{}", self.small, self.big);
        write!(f, "{repr}")
    }
}

/// One seat's chips and per-hand flags. Money persists across hands; the
/// hole cards, current bet, and the folded/all-in flags are cleared when
/// the buttons move.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub money: Chips,
    /// Hole cards, empty or exactly two.
    pub cards: Vec<Card>,
    /// Chips this player has pushed forward during the current hand.
    pub bet: Chips,
    pub folded: bool,
    pub all_in: bool,
}

impl Player {
    #[must_use]
    pub fn new(money: Chips) -> Self {
        Self {
            money,
            cards: Vec::with_capacity(HOLE_CARDS),
            bet: 0,
            folded: false,
            all_in: false,
        }
    }

    /// Clear everything that does not carry over to the next hand.
    pub fn clear_hand(&mut self) {
        self.cards.clear();
        self.bet = 0;
        self.folded = false;
        self.all_in = false;
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ActionKind {
    Fold,
    Call,
    Check,
    Raise,
    AllIn,
}

/// What a strategy wants to do, plus the chips it adds this action.
/// The engine validates and possibly downgrades the pair before applying it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub amount: Chips,
}

impl Action {
    #[must_use]
    pub const fn new(kind: ActionKind, amount: Chips) -> Self {
        Self { kind, amount }
    }

    #[must_use]
    pub const fn fold() -> Self {
        Self::new(ActionKind::Fold, 0)
    }

    #[must_use]
    pub const fn check() -> Self {
        Self::new(ActionKind::Check, 0)
    }

    #[must_use]
    pub const fn call(amount: Chips) -> Self {
        Self::new(ActionKind::Call, amount)
    }

    #[must_use]
    pub const fn raise(amount: Chips) -> Self {
        Self::new(ActionKind::Raise, amount)
    }

    #[must_use]
    pub const fn all_in(amount: Chips) -> Self {
        Self::new(ActionKind::AllIn, amount)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let amount = self.amount;
        let repr = match self.kind {
            ActionKind::Fold => "folds".to_string(),
            ActionKind::Check => "checks".to_string(),
            ActionKind::Call => format!("calls ${amount}"),
            ActionKind::Raise => format!("raises ${amount}"),
            ActionKind::AllIn => format!("all-ins ${amount}"),
        };
        write!(f, "{repr}")
    }
}
