//! Jokers: persistent modifiers that add chips and mult to every scored play.
//!
//! A joker's ability is a [`JokerKind`] variant evaluated by a plain `match`
//! in [`JokerKind::bonus`]; jokers carry no callbacks or mutable state.

use crate::cards::{Card, Suit};
use crate::evaluator::{Category, RankGroups};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Additive contribution of one joker to a scored hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bonus {
    pub chips: u64,
    pub mult: u64,
}

impl Bonus {
    pub const NONE: Bonus = Bonus { chips: 0, mult: 0 };

    pub const fn mult(mult: u64) -> Self {
        Self { chips: 0, mult }
    }

    pub const fn chips(chips: u64) -> Self {
        Self { chips, mult: 0 }
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl AddAssign for Bonus {
    fn add_assign(&mut self, rhs: Self) {
        self.chips = self.chips.saturating_add(rhs.chips);
        self.mult = self.mult.saturating_add(rhs.mult);
    }
}

/// What a joker does when a hand is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JokerKind {
    /// Always adds the given chips and mult.
    Flat { chips: u64, mult: u64 },
    /// Adds `mult` if at least one played card has `suit`.
    SuitMult { suit: Suit, mult: u64 },
    /// Adds `mult` per pair, where pairs = (ranks seen exactly twice) / 2.
    ///
    /// Known quirk: a lone pair, trips and quads count as zero pairs; only
    /// two distinct paired ranks yield one. Kept for balance parity.
    PerPair { mult: u64 },
}

impl JokerKind {
    pub fn bonus(self, cards: &[Card], _category: Category) -> Bonus {
        match self {
            JokerKind::Flat { chips, mult } => Bonus { chips, mult },
            JokerKind::SuitMult { suit, mult } => {
                if cards.iter().any(|c| c.suit() == suit) {
                    Bonus::mult(mult)
                } else {
                    Bonus::NONE
                }
            }
            JokerKind::PerPair { mult } => {
                let pairs = (RankGroups::from_cards(cards).exact_pairs() / 2) as u64;
                Bonus::mult(mult * pairs)
            }
        }
    }

    pub fn describe(self) -> String {
        match self {
            JokerKind::Flat { chips: 0, mult } => format!("+{mult} Mult"),
            JokerKind::Flat { chips, mult: 0 } => format!("+{chips} Chips"),
            JokerKind::Flat { chips, mult } => format!("+{chips} Chips, +{mult} Mult"),
            JokerKind::SuitMult { suit, mult } => {
                format!("+{mult} Mult if a played card is {suit}")
            }
            JokerKind::PerPair { mult } => format!("+{mult} Mult per pair"),
        }
    }
}

/// A named joker. Jokers are cheap `Copy` values taken from [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Joker {
    pub name: &'static str,
    pub rarity: Rarity,
    pub kind: JokerKind,
}

impl Joker {
    pub const fn new(name: &'static str, rarity: Rarity, kind: JokerKind) -> Self {
        Self { name, rarity, kind }
    }

    pub fn bonus(&self, cards: &[Card], category: Category) -> Bonus {
        self.kind.bonus(cards, category)
    }

    /// Opaque identifier a front end can map to artwork, e.g. `greedy_joker`.
    pub fn asset_id(&self) -> String {
        self.name.to_ascii_lowercase().replace(' ', "_")
    }

    /// Pick a catalog joker uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Joker {
        // CATALOG is a non-empty const, so choose always yields
        *CATALOG.choose(rng).unwrap_or(&JOKER)
    }

    pub fn by_name(name: &str) -> Option<Joker> {
        CATALOG.iter().copied().find(|j| j.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.rarity, self.kind.describe())
    }
}

pub const JOKER: Joker = Joker::new("Joker", Rarity::Common, JokerKind::Flat { chips: 0, mult: 4 });

pub const CATALOG: [Joker; 8] = [
    JOKER,
    Joker::new("Greedy Joker", Rarity::Common, JokerKind::SuitMult { suit: Suit::Diamonds, mult: 3 }),
    Joker::new("Lusty Joker", Rarity::Common, JokerKind::SuitMult { suit: Suit::Hearts, mult: 3 }),
    Joker::new("Wrathful Joker", Rarity::Common, JokerKind::SuitMult { suit: Suit::Spades, mult: 3 }),
    Joker::new("Gluttonous Joker", Rarity::Common, JokerKind::SuitMult { suit: Suit::Clubs, mult: 3 }),
    Joker::new("Blue Chip", Rarity::Common, JokerKind::Flat { chips: 30, mult: 0 }),
    Joker::new("Twin Joker", Rarity::Uncommon, JokerKind::PerPair { mult: 5 }),
    Joker::new("Big Spender", Rarity::Rare, JokerKind::Flat { chips: 50, mult: 6 }),
];
