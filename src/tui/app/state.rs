use crate::engine::GameEngine;
use crate::game::{ActionError, Run};
use crate::rules::{PlayRule, Rules};
use crate::scoring::{ScoreBreakdown, ScoreStep};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    ToggleCard(usize),
    Play,
    Discard,
    AddJoker,
    NewRun,
}

/// The part of the last score trace that has been revealed so far.
#[derive(Debug, Clone, Copy)]
pub struct ScoreReveal<'a> {
    pub breakdown: &'a ScoreBreakdown,
    pub shown: usize,
}

impl<'a> ScoreReveal<'a> {
    pub fn visible_steps(&self) -> &'a [ScoreStep] {
        let b: &'a ScoreBreakdown = self.breakdown;
        &b.steps[..self.shown.min(b.steps.len())]
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.breakdown.steps.len()
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Rules engine; the TUI only talks to it through GameEngine intents
    pub run: Run,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_variant: PlayRule,
    pub cfg_hands: u32,
    pub cfg_discards: u32,
    pub cfg_seed: Option<u64>,
    pub cfg_animations: bool,
    pub animations: bool,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    revealed_steps: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut app = Self::from_run(Run::default());
        app.scene = Scene::Menu;
        app
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Wrap an existing run and go straight to the table.
    pub fn from_run(run: Run) -> Self {
        let rules = run.rules().clone();
        Self {
            scene: Scene::Table,
            run,
            menu_index: 0,
            cfg_variant: rules.variant,
            cfg_hands: rules.hands,
            cfg_discards: rules.discards,
            cfg_seed: None,
            cfg_animations: true,
            animations: true,
            help_open: false,
            history_open: false,
            history_offset: 0,
            revealed_steps: 0,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub(crate) fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    /// The last scored hand with as many joker steps as have been revealed.
    pub fn score_reveal(&self) -> Option<ScoreReveal<'_>> {
        self.run.last_score().map(|breakdown| ScoreReveal { breakdown, shown: self.revealed_steps })
    }

    /// Restart the reveal for a freshly scored hand.
    fn start_reveal(&mut self) {
        let steps = self.run.last_score().map_or(0, |s| s.steps.len());
        self.revealed_steps = if self.animations { 0 } else { steps };
    }

    /// Advance pacing state. Called by the controller once per tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if let Some(score) = self.run.last_score() {
            if self.revealed_steps < score.steps.len() {
                self.revealed_steps += 1;
            }
        }
    }

    /// Feed one intent result back into the UI state.
    fn apply_intent<T>(&mut self, result: Result<T, ActionError>) -> bool {
        match result {
            Ok(_) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "intent rejected");
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    fn play(&mut self) -> bool {
        let res = GameEngine::play(&mut self.run);
        let accepted = self.apply_intent(res);
        if accepted {
            self.start_reveal();
        }
        accepted
    }

    pub fn new_run(&mut self) {
        let _ = GameEngine::new_run(&mut self.run);
        self.reset_view();
    }

    /// Drop per-run view state (reveal, history scroll, error).
    pub(crate) fn reset_view(&mut self) {
        self.revealed_steps = 0;
        self.history_offset = 0;
        self.clear_action_error();
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.run.history().len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewRun => {
                if self.scene == Scene::Table {
                    self.new_run();
                    return true;
                }
                false
            }
            _ if self.scene != Scene::Table => false,
            InputAction::ToggleCard(idx) => {
                let res = GameEngine::select_card(&mut self.run, idx);
                self.apply_intent(res)
            }
            InputAction::Play => self.play(),
            InputAction::Discard => {
                let res = GameEngine::discard(&mut self.run);
                self.apply_intent(res)
            }
            InputAction::AddJoker => {
                let res = GameEngine::add_joker(&mut self.run);
                self.apply_intent(res)
            }
        }
    }

    /// Build rules from the menu fields.
    pub(crate) fn pending_rules(&self) -> Rules {
        let base = match self.cfg_variant {
            PlayRule::Strict => Rules::default(),
            PlayRule::Flexible => Rules::flexible(),
        };
        base.with_hands(self.cfg_hands).with_discards(self.cfg_discards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jokers::JOKER;

    fn table(seed: u64) -> AppState {
        let rules = Rules::default().with_targets(vec![1_000_000], 300);
        AppState::from_run(Run::with_seed(rules, seed).unwrap())
    }

    #[test]
    fn rejected_play_sets_error_and_keeps_run() {
        let mut app = table(3);
        let before = app.run.snapshot();
        assert!(!app.handle_input(InputAction::Play));
        assert_eq!(app.action_error(), Some("Select exactly 5 cards to play."));
        assert_eq!(app.run.snapshot(), before);
    }

    #[test]
    fn reveal_steps_through_jokers_one_tick_at_a_time() {
        let mut app = table(3);
        app.run.add_specific_joker(JOKER).unwrap();
        app.run.add_specific_joker(JOKER).unwrap();
        for i in 0..5 {
            assert!(app.handle_input(InputAction::ToggleCard(i)));
        }
        assert!(app.handle_input(InputAction::Play));
        assert_eq!(app.score_reveal().unwrap().visible_steps().len(), 0);
        app.on_tick();
        assert_eq!(app.score_reveal().unwrap().visible_steps().len(), 1);
        app.on_tick();
        app.on_tick();
        let reveal = app.score_reveal().unwrap();
        assert!(reveal.is_complete());
        assert_eq!(reveal.visible_steps().len(), 2);
    }

    #[test]
    fn without_animations_trace_is_shown_at_once() {
        let mut app = table(3);
        app.animations = false;
        app.run.add_specific_joker(JOKER).unwrap();
        for i in 0..5 {
            app.handle_input(InputAction::ToggleCard(i));
        }
        assert!(app.handle_input(InputAction::Play));
        assert!(app.score_reveal().unwrap().is_complete());
    }

    #[test]
    fn table_intents_ignored_in_menu() {
        let mut app = table(3);
        app.scene = Scene::Menu;
        assert!(!app.handle_input(InputAction::ToggleCard(0)));
        assert!(app.run.selection().is_empty());
    }
}
