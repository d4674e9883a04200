//! Five-card hand evaluation.
//!
//! Every hand maps to a single integer score: a tier base of
//! `tier * 1_000_000` plus tie-break faces packed four bits apiece, most
//! significant first. The packing keeps each slot strictly dominant over
//! everything below it (a higher pair or trips rank outweighs any kickers),
//! so comparing two hands is just comparing two numbers. The one wrinkle is
//! the wheel (A-2-3-4-5), a straight whose high card counts as 5.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use super::entities::{ACE, Card, JACK, KING, QUEEN, TEN, Value};

/// Hand categories from weakest to strongest.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum HandTier {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandTier {
    /// Tier base score. Tie-break terms stay strictly below the stride, so
    /// any hand of a higher tier outranks any hand of a lower one.
    const fn base(self) -> Score {
        self as Score * 1_000_000
    }
}

impl fmt::Display for HandTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "hi",
            Self::OnePair => "1p",
            Self::TwoPair => "2p",
            Self::ThreeOfAKind => "3k",
            Self::Straight => "s8",
            Self::Flush => "fs",
            Self::FullHouse => "fh",
            Self::FourOfAKind => "4k",
            Self::StraightFlush => "sf",
            Self::RoyalFlush => "rf",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for hand scores. Tops out at 9_000_000 for the royal flush.
pub type Score = u32;

/// Wrong number of cards handed to [`PokerHand::best`].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("best hand needs 5 to 7 cards, got {0}")]
pub struct HandSizeError(pub usize);

/// An evaluated five-card hand, totally ordered by score.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PokerHand {
    cards: [Card; 5],
    tier: HandTier,
    score: Score,
}

impl PokerHand {
    /// Evaluate exactly five cards.
    #[must_use]
    pub fn new(mut cards: [Card; 5]) -> Self {
        cards.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        let (tier, score) = evaluate(&cards);
        Self { cards, tier, score }
    }

    /// The best five-card hand buildable from 5 to 7 cards, found by
    /// scoring every five-card subset (at most C(7,5) = 21 of them).
    pub fn best(cards: &[Card]) -> Result<Self, HandSizeError> {
        let n = cards.len();
        if !(5..=7).contains(&n) {
            return Err(HandSizeError(n));
        }
        let mut best: Option<Self> = None;
        for mask in 0u32..(1 << n) {
            if mask.count_ones() != 5 {
                continue;
            }
            let mut five = [cards[0]; 5];
            let mut k = 0;
            for (i, card) in cards.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    five[k] = *card;
                    k += 1;
                }
            }
            let hand = Self::new(five);
            if best.as_ref().is_none_or(|b| hand.score > b.score) {
                best = Some(hand);
            }
        }
        // The subset loop always finds at least one hand for 5 <= n <= 7.
        best.ok_or(HandSizeError(n))
    }

    #[must_use]
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    #[must_use]
    pub fn tier(&self) -> HandTier {
        self.tier
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }
}

impl PartialEq for PokerHand {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for PokerHand {}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PokerHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (", self.tier)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, ")")
    }
}

/// Pack tie-break faces four bits apiece, most significant first. Faces top
/// out at 14, so each fits a nibble and even five packed faces stay below
/// the tier stride.
fn pack_ranks(faces: &[Score]) -> Score {
    faces.iter().fold(0, |acc, &face| (acc << 4) | face)
}

/// Score five cards already sorted by descending face value.
fn evaluate(cards: &[Card; 5]) -> (HandTier, Score) {
    let faces = cards.map(|c| c.0);
    let flush = cards.iter().all(|c| c.1 == cards[0].1);

    // Face groups ordered by count, then by face, both descending. The
    // groups after the paired/tripled ones are the kickers in face order.
    let mut groups: Vec<(u8, Value)> = Vec::with_capacity(5);
    for &face in &faces {
        match groups.iter_mut().find(|(_, v)| *v == face) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, face)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let wheel = faces == [ACE, 5, 4, 3, 2];
    let straight = groups.len() == 5 && (wheel || faces[0] - faces[4] == 4);
    let straight_high: Score = if wheel { 5 } else { Score::from(faces[0]) };

    if flush && faces == [ACE, KING, QUEEN, JACK, TEN] {
        return (HandTier::RoyalFlush, HandTier::RoyalFlush.base());
    }

    if flush && straight {
        return (
            HandTier::StraightFlush,
            HandTier::StraightFlush.base() + straight_high,
        );
    }

    if groups[0].0 == 4 {
        let quad = Score::from(groups[0].1);
        let kicker = Score::from(groups[1].1);
        return (
            HandTier::FourOfAKind,
            HandTier::FourOfAKind.base() + pack_ranks(&[quad, kicker]),
        );
    }

    if groups[0].0 == 3 && groups[1].0 == 2 {
        let trips = Score::from(groups[0].1);
        let pair = Score::from(groups[1].1);
        return (
            HandTier::FullHouse,
            HandTier::FullHouse.base() + pack_ranks(&[trips, pair]),
        );
    }

    if flush {
        return (HandTier::Flush, HandTier::Flush.base() + Score::from(faces[0]));
    }

    if straight {
        return (HandTier::Straight, HandTier::Straight.base() + straight_high);
    }

    if groups[0].0 == 3 {
        let trips = Score::from(groups[0].1);
        let kickers = [Score::from(groups[1].1), Score::from(groups[2].1)];
        return (
            HandTier::ThreeOfAKind,
            HandTier::ThreeOfAKind.base() + pack_ranks(&[trips, kickers[0], kickers[1]]),
        );
    }

    if groups[0].0 == 2 && groups[1].0 == 2 {
        let high_pair = Score::from(groups[0].1);
        let low_pair = Score::from(groups[1].1);
        let kicker = Score::from(groups[2].1);
        return (
            HandTier::TwoPair,
            HandTier::TwoPair.base() + pack_ranks(&[high_pair, low_pair, kicker]),
        );
    }

    if groups[0].0 == 2 {
        let pair = Score::from(groups[0].1);
        let kickers = [
            Score::from(groups[1].1),
            Score::from(groups[2].1),
            Score::from(groups[3].1),
        ];
        return (
            HandTier::OnePair,
            HandTier::OnePair.base() + pack_ranks(&[pair, kickers[0], kickers[1], kickers[2]]),
        );
    }

    (HandTier::HighCard, pack_ranks(&faces.map(Score::from)))
}
