//! ante-rs: poker-hand scoring run with antes, budgets and jokers
//!
//! Goals:
//! - Deterministic rules engine; seeded runs replay exactly
//! - Small, well-documented public API driven through intents
//! - No panics for invalid input; rejected intents return `Result` errors
//!
//! ## Quick start: score a hand
//! ```
//! use ante_rs::cards::parse_cards;
//! use ante_rs::evaluator::Category;
//! use ante_rs::jokers::JOKER;
//! use ante_rs::scoring::evaluate;
//!
//! let cards = parse_cards("2s 2h 6d 6c 10s").unwrap();
//! let plain = evaluate(&cards, &[]).unwrap();
//! assert_eq!(plain.category, Category::TwoPair);
//! assert_eq!(plain.total, 40);
//!
//! let boosted = evaluate(&cards, &[JOKER]).unwrap();
//! assert_eq!(boosted.total, 20 * 6);
//! ```
//!
//! ## Quick start: drive a run
//! ```
//! use ante_rs::game::Run;
//! use ante_rs::rules::Rules;
//!
//! let rules = Rules::default().with_targets(vec![10_000], 500);
//! let mut run = Run::with_seed(rules, 7).unwrap();
//! for i in 0..5 {
//!     run.toggle_select(i).unwrap();
//! }
//! run.play().unwrap();
//! assert_eq!(run.hands_left(), 3);
//! assert_eq!(run.hand().len(), 8);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin ante-rs
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod jokers;
pub mod logging;
pub mod rules;
pub mod scoring;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
