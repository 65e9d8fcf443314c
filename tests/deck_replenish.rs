use ante_rs::deck::{Deck, DECK_SIZE};
use ante_rs::hand::Hand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn standard_deck_has_every_card_once() {
    let deck = Deck::standard();
    let unique: HashSet<_> = deck.as_slice().iter().collect();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn two_shuffles_differ() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let a = Deck::shuffled(&mut rng);
    let b = Deck::shuffled(&mut rng);
    assert_ne!(a.as_slice(), b.as_slice());
    let sa: HashSet<_> = a.as_slice().iter().collect();
    let sb: HashSet<_> = b.as_slice().iter().collect();
    assert_eq!(sa, sb);
}

#[test]
fn replenish_tops_up_to_hand_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::shuffled(&mut rng);
    let mut hand = Hand::default();
    assert_eq!(hand.replenish(8, &mut deck, &mut rng), 8);
    assert_eq!(deck.len(), 44);
    // already full: nothing drawn
    assert_eq!(hand.replenish(8, &mut deck, &mut rng), 8);
    assert_eq!(deck.len(), 44);
}

#[test]
fn exhausted_deck_is_rebuilt_mid_replenish() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut deck = Deck::shuffled(&mut rng);
    for _ in 0..50 {
        deck.draw().unwrap();
    }
    let mut hand = Hand::default();
    assert_eq!(hand.replenish(8, &mut deck, &mut rng), 8);
    assert_eq!(hand.len(), 8);
    assert_eq!(deck.len(), DECK_SIZE - 6);
}

#[test]
fn draining_many_hands_never_runs_short() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::shuffled(&mut rng);
    for _ in 0..20 {
        let cards = deck.draw_refilling(8, &mut rng);
        assert_eq!(cards.len(), 8);
    }
}
