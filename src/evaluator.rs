//! Poker-hand classification for 1..=5 played cards.

mod rank_groups;
mod straight_info;

pub use rank_groups::RankGroups;
pub use straight_info::StraightInfo;

use crate::cards::Card;
use std::fmt;

/// Most cards that can be played (and classified) at once.
pub const MAX_PLAYED: usize = 5;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn base_chips(self) -> u64 {
        match self {
            Category::HighCard => 5,
            Category::Pair => 10,
            Category::TwoPair => 20,
            Category::ThreeOfAKind => 30,
            Category::Straight => 30,
            Category::Flush => 35,
            Category::FullHouse => 40,
            Category::FourOfAKind => 60,
            Category::StraightFlush => 100,
            Category::RoyalFlush => 150,
        }
    }

    pub const fn base_mult(self) -> u64 {
        match self {
            Category::HighCard => 1,
            Category::Pair => 2,
            Category::TwoPair => 2,
            Category::ThreeOfAKind => 3,
            Category::Straight => 4,
            Category::Flush => 4,
            Category::FullHouse => 4,
            Category::FourOfAKind => 7,
            Category::StraightFlush => 8,
            Category::RoyalFlush => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("no cards to evaluate")]
    Empty,
    #[error("too many cards to evaluate: {0} (max 5)")]
    TooManyCards(usize),
}

/// Classify 1..=5 played cards.
///
/// Flushes and straights need exactly five cards; shorter hands can only
/// reach the count-based categories.
///
/// ```
/// use ante_rs::cards::parse_cards;
/// use ante_rs::evaluator::{classify, Category};
///
/// let cards = parse_cards("As 2h 3d 4c 5s").unwrap();
/// assert_eq!(classify(&cards).unwrap(), Category::Straight);
/// ```
pub fn classify(cards: &[Card]) -> Result<Category, EvalError> {
    match cards.len() {
        0 => return Err(EvalError::Empty),
        n if n > MAX_PLAYED => return Err(EvalError::TooManyCards(n)),
        _ => {}
    }

    let groups = RankGroups::from_cards(cards);
    let (is_flush, straight) = match <&[Card; 5]>::try_from(cards) {
        Ok(five) => {
            let is_flush = five.iter().all(|c| c.suit() == five[0].suit());
            (is_flush, StraightInfo::detect(&(*five).map(Card::rank)))
        }
        Err(_) => (false, StraightInfo::NONE),
    };

    let category = if straight.is_straight && is_flush && straight.is_broadway {
        Category::RoyalFlush
    } else if straight.is_straight && is_flush {
        Category::StraightFlush
    } else if groups.first() == 4 {
        Category::FourOfAKind
    } else if groups.first() == 3 && groups.second() == 2 {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if straight.is_straight {
        Category::Straight
    } else if groups.first() == 3 {
        Category::ThreeOfAKind
    } else if groups.first() == 2 && groups.second() == 2 {
        Category::TwoPair
    } else if groups.first() == 2 {
        Category::Pair
    } else {
        Category::HighCard
    };
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cat(s: &str) -> Category {
        classify(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn empty_and_oversized_are_errors() {
        assert_eq!(classify(&[]), Err(EvalError::Empty));
        let six = parse_cards("2s 3s 4s 5s 6s 7s").unwrap();
        assert_eq!(classify(&six), Err(EvalError::TooManyCards(6)));
    }

    #[test]
    fn five_card_categories() {
        assert_eq!(cat("10s Js Qs Ks As"), Category::RoyalFlush);
        assert_eq!(cat("2s 3s 4s 5s 6s"), Category::StraightFlush);
        assert_eq!(cat("As 2s 3s 4s 5s"), Category::StraightFlush);
        assert_eq!(cat("2s 2h 2d 2c 10s"), Category::FourOfAKind);
        assert_eq!(cat("2s 2h 2d 8c 8s"), Category::FullHouse);
        assert_eq!(cat("2s 4s 6s 8s 10s"), Category::Flush);
        assert_eq!(cat("2s 3h 4d 5c 6s"), Category::Straight);
        assert_eq!(cat("2s 2h 2d 8c 10s"), Category::ThreeOfAKind);
        assert_eq!(cat("2s 2h 6d 6c 10s"), Category::TwoPair);
        assert_eq!(cat("2s 2h 6d 8c 10s"), Category::Pair);
        assert_eq!(cat("2s 4h 6d 8c 10s"), Category::HighCard);
    }

    #[test]
    fn royal_needs_one_suit() {
        assert_eq!(cat("10s Js Qs Ks Ah"), Category::Straight);
    }

    #[test]
    fn short_hands_use_counts_only() {
        assert_eq!(cat("As"), Category::HighCard);
        assert_eq!(cat("As Ah"), Category::Pair);
        assert_eq!(cat("As Ah Kd Kc"), Category::TwoPair);
        assert_eq!(cat("As Ah Ad"), Category::ThreeOfAKind);
        assert_eq!(cat("As Ah Ad Ac"), Category::FourOfAKind);
        // four suited connectors: neither flush nor straight
        assert_eq!(cat("2s 3s 4s 5s"), Category::HighCard);
    }

    #[test]
    fn base_table_matches_category() {
        assert_eq!((Category::HighCard.base_chips(), Category::HighCard.base_mult()), (5, 1));
        assert_eq!((Category::TwoPair.base_chips(), Category::TwoPair.base_mult()), (20, 2));
        assert_eq!((Category::RoyalFlush.base_chips(), Category::RoyalFlush.base_mult()), (150, 10));
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
