//! Terminal front end: a menu scene for rules and a table scene for play.
//! All run changes go through [`crate::engine::GameEngine`] intents.

pub mod app;
pub mod controller;
pub mod ui;
