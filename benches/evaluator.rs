use std::hint::black_box;

use ante_rs::cards::{Card, Rank, Suit};
use ante_rs::evaluator::classify;
use ante_rs::jokers::CATALOG;
use ante_rs::scoring::{evaluate, score};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_classify(c: &mut Criterion) {
    let hi = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let pair = [Card::new(Rank::Nine, Suit::Hearts), Card::new(Rank::Nine, Suit::Clubs)];

    let mut g = c.benchmark_group("classify");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "AKQJT"), &sf, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("short_pair", "9,9"), &pair, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.finish();
}

fn bench_score(c: &mut Criterion) {
    let two_pair = [
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Six, Suit::Diamonds),
        Card::new(Rank::Six, Suit::Clubs),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let mut g = c.benchmark_group("score");
    for n in [0usize, 1, 5] {
        let jokers = &CATALOG[..n];
        g.bench_with_input(BenchmarkId::new("two_pair_jokers", n), &jokers, |b, jokers| {
            b.iter(|| evaluate(black_box(&two_pair), black_box(jokers)))
        });
    }
    g.finish();

    let category = match classify(&two_pair) {
        Ok(c) => c,
        Err(_) => return,
    };
    c.bench_function("score_full_catalog", |b| {
        b.iter(|| score(black_box(&two_pair), black_box(category), black_box(&CATALOG)))
    });
}

criterion_group!(benches, bench_classify, bench_score);
criterion_main!(benches);
