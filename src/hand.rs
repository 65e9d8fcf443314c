use crate::cards::{parse_cards, Card, CardParseError};
use crate::deck::Deck;
use rand::Rng;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Cards held by the player, in draw order.
///
/// ```
/// use ante_rs::hand::Hand;
///
/// let hand: Hand = "2s 2h 6d 6c 10s".parse().unwrap();
/// assert_eq!(hand.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Cards at the selected indices, in hand order.
    pub fn selected(&self, selection: &Selection) -> Vec<Card> {
        selection.iter().filter_map(|i| self.get(i)).collect()
    }

    /// Remove the selected cards and return them in hand order.
    /// Survivors keep their relative order.
    pub fn remove_selected(&mut self, selection: &Selection) -> Vec<Card> {
        let mut removed = Vec::with_capacity(selection.len());
        let mut kept = Vec::with_capacity(self.cards.len());
        for (i, card) in self.cards.drain(..).enumerate() {
            if selection.contains(i) {
                removed.push(card);
            } else {
                kept.push(card);
            }
        }
        self.cards = kept;
        removed
    }

    /// Top the hand back up to `size` cards from `deck`. Returns the new length.
    pub fn replenish<R: Rng + ?Sized>(&mut self, size: usize, deck: &mut Deck, rng: &mut R) -> usize {
        let needed = size.saturating_sub(self.cards.len());
        if needed > 0 {
            let drawn = deck.draw_refilling(needed, rng);
            self.extend(drawn);
        }
        self.cards.len()
    }
}

impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Hand::new(parse_cards(s)?))
    }
}

/// Indices into a [`Hand`], kept sorted and capped by the caller's rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("You can only select up to {max} cards.")]
    Full { max: usize },
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Toggle `index`. Returns whether it is selected afterwards.
    /// Adding beyond `max` fails and leaves the selection unchanged.
    pub fn toggle(&mut self, index: usize, max: usize) -> Result<bool, SelectionError> {
        if self.indices.remove(&index) {
            return Ok(false);
        }
        if self.indices.len() >= max {
            return Err(SelectionError::Full { max });
        }
        self.indices.insert(index);
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn toggle_adds_and_removes() {
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(3, 5), Ok(true));
        assert!(sel.contains(3));
        assert_eq!(sel.toggle(3, 5), Ok(false));
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_respects_cap() {
        let mut sel = Selection::new();
        for i in 0..5 {
            sel.toggle(i, 5).unwrap();
        }
        assert_eq!(sel.toggle(5, 5), Err(SelectionError::Full { max: 5 }));
        assert_eq!(sel.len(), 5);
        // deselecting still works at the cap
        assert_eq!(sel.toggle(0, 5), Ok(false));
    }

    #[test]
    fn remove_selected_preserves_survivor_order() {
        let mut hand: Hand = "2s 3s 4s 5s 6s 7s".parse().unwrap();
        let mut sel = Selection::new();
        sel.toggle(4, 5).unwrap();
        sel.toggle(1, 5).unwrap();
        let removed = hand.remove_selected(&sel);
        assert_eq!(
            removed,
            vec![Card::new(Rank::Three, Suit::Spades), Card::new(Rank::Six, Suit::Spades)]
        );
        let ranks: Vec<Rank> = hand.as_slice().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Two, Rank::Four, Rank::Five, Rank::Seven]);
    }

    #[test]
    fn replenish_tops_up_to_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut deck = Deck::shuffled(&mut rng);
        let mut hand: Hand = "2s 3s 4s".parse().unwrap();
        assert_eq!(hand.replenish(8, &mut deck, &mut rng), 8);
        assert_eq!(deck.len(), 47);
        assert_eq!(hand.replenish(8, &mut deck, &mut rng), 8);
        assert_eq!(deck.len(), 47);
    }
}
