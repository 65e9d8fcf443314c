use crate::game::Run;
use crate::rules::{PlayRule, Rules};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Variant,
    Hands,
    Discards,
    Seed,
    Animations,
}

const MENU_ITEMS: [MenuItem; 5] =
    [MenuItem::Variant, MenuItem::Hands, MenuItem::Discards, MenuItem::Seed, MenuItem::Animations];

const MAX_HANDS: u32 = 9;
const MAX_DISCARDS: u32 = 9;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Variant => format!("Rules: {}", app.cfg_variant.label()),
            MenuItem::Hands => format!("Hands per Ante: {}", app.cfg_hands),
            MenuItem::Discards => format!("Discards per Ante: {}", app.cfg_discards),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
            MenuItem::Animations => {
                format!("Score Animation: {}", if app.cfg_animations { "On" } else { "Off" })
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Variant => app.cycle_variant(),
            MenuItem::Hands => {
                if app.cfg_hands < MAX_HANDS {
                    app.cfg_hands += 1;
                }
            }
            MenuItem::Discards => {
                if app.cfg_discards < MAX_DISCARDS {
                    app.cfg_discards += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(1, |s| s.saturating_add(1)));
            }
            MenuItem::Animations => app.cfg_animations = !app.cfg_animations,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Variant => app.cycle_variant(),
            MenuItem::Hands => {
                if app.cfg_hands > 1 {
                    app.cfg_hands -= 1;
                }
            }
            MenuItem::Discards => {
                app.cfg_discards = app.cfg_discards.saturating_sub(1);
            }
            // 1 steps back down to random
            MenuItem::Seed => {
                app.cfg_seed = match app.cfg_seed {
                    Some(s) if s > 1 => Some(s - 1),
                    _ => None,
                };
            }
            MenuItem::Animations => app.cfg_animations = !app.cfg_animations,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    /// Switch variant and load its default discard budget.
    fn cycle_variant(&mut self) {
        let next = match self.cfg_variant {
            PlayRule::Strict => PlayRule::Flexible,
            PlayRule::Flexible => PlayRule::Strict,
        };
        self.cfg_variant = next;
        self.cfg_discards = match next {
            PlayRule::Strict => Rules::default().discards,
            PlayRule::Flexible => Rules::flexible().discards,
        };
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        let rules = self.run.rules();
        self.cfg_variant = rules.variant;
        self.cfg_hands = rules.hands;
        self.cfg_discards = rules.discards;
        self.cfg_animations = self.animations;
        self.scene = super::Scene::Menu;
    }

    /// Start a new run with the edited rules. Invalid rules keep the menu open.
    pub fn apply_menu(&mut self) {
        if self.cfg_hands == 0 {
            self.cfg_hands = 1;
        }
        let rules = self.pending_rules();
        let run = match self.cfg_seed {
            Some(seed) => Run::with_seed(rules, seed),
            None => Run::new(rules),
        };
        match run {
            Ok(run) => {
                tracing::info!(
                    variant = self.cfg_variant.label(),
                    hands = self.cfg_hands,
                    discards = self.cfg_discards,
                    seed = ?self.cfg_seed,
                    "rules applied"
                );
                self.run = run;
                self.animations = self.cfg_animations;
                self.reset_view();
                self.scene = super::Scene::Table;
            }
            Err(err) => self.set_action_error(err.to_string()),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
