use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A 52-card draw pile. Cards are drawn from the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// One card per (suit, rank), unshuffled.
    ///
    /// ```
    /// use ante_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// A standard deck permuted with an unbiased Fisher-Yates shuffle.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(rng);
        deck
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

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards. Whenever the pile runs dry it is replaced by a freshly
    /// shuffled 52-card deck, so this always returns exactly `n` cards.
    pub fn draw_refilling<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<Card> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            match self.cards.pop() {
                Some(card) => out.push(card),
                None => {
                    tracing::debug!("deck exhausted, reshuffling a fresh deck");
                    *self = Self::shuffled(rng);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), DECK_SIZE);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        let d2 = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(d1, d2);
        assert_ne!(d1, Deck::standard());
    }

    #[test]
    fn draw_reduces_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut d = Deck::shuffled(&mut rng);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let drawn = d.draw_refilling(5, &mut rng);
        assert_eq!(drawn.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn exhausted_deck_rebuilds_mid_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut d = Deck::shuffled(&mut rng);
        let _ = d.draw_refilling(50, &mut rng);
        assert_eq!(d.len(), 2);
        let drawn = d.draw_refilling(5, &mut rng);
        assert_eq!(drawn.len(), 5);
        // two from the old pile, three from a fresh 52
        assert_eq!(d.len(), 49);
    }
}
