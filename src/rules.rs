//! Run configuration: budgets, selection limits and the ante target table.

use crate::evaluator::MAX_PLAYED;

/// How many cards a play must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum PlayRule {
    /// Exactly `max_selection` cards.
    #[default]
    Strict,
    /// Anywhere from one to `max_selection` cards.
    Flexible,
}

impl PlayRule {
    pub const fn label(self) -> &'static str {
        match self {
            PlayRule::Strict => "Strict (5 cards)",
            PlayRule::Flexible => "Flexible (1-5 cards)",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesError {
    #[error("hands per ante must be at least 1")]
    NoHands,
    #[error("max selection must be between 1 and 5, got {0}")]
    BadSelection(usize),
    #[error("hand size {hand_size} is smaller than max selection {max_selection}")]
    HandTooSmall { hand_size: usize, max_selection: usize },
    #[error("ante target table is empty")]
    NoTargets,
}

/// Tunable rules of a run. Defaults reproduce the strict five-card game.
///
/// ```
/// use ante_rs::rules::Rules;
///
/// let rules = Rules::default();
/// assert_eq!(rules.target_score(1), 200);
/// assert_eq!(rules.target_score(3), 700);
/// assert_eq!(rules.target_score(5), 1300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Rules {
    pub variant: PlayRule,
    pub hands: u32,
    pub discards: u32,
    pub hand_size: usize,
    pub max_selection: usize,
    pub max_jokers: usize,
    pub ante_targets: Vec<u64>,
    /// Added per ante past the end of `ante_targets`.
    pub target_step: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            variant: PlayRule::Strict,
            hands: 4,
            discards: 2,
            hand_size: 8,
            max_selection: MAX_PLAYED,
            max_jokers: 5,
            ante_targets: vec![200, 400, 700],
            target_step: 300,
        }
    }
}

impl Rules {
    /// Any 1..=5 cards may be played, with one extra discard.
    pub fn flexible() -> Self {
        Self { variant: PlayRule::Flexible, discards: 3, ..Self::default() }
    }

    pub fn with_variant(mut self, variant: PlayRule) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_hands(mut self, hands: u32) -> Self {
        self.hands = hands;
        self
    }

    pub fn with_discards(mut self, discards: u32) -> Self {
        self.discards = discards;
        self
    }

    pub fn with_max_jokers(mut self, max_jokers: usize) -> Self {
        self.max_jokers = max_jokers;
        self
    }

    pub fn with_targets(mut self, targets: Vec<u64>, step: u64) -> Self {
        self.ante_targets = targets;
        self.target_step = step;
        self
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.hands == 0 {
            return Err(RulesError::NoHands);
        }
        if self.max_selection == 0 || self.max_selection > MAX_PLAYED {
            return Err(RulesError::BadSelection(self.max_selection));
        }
        if self.hand_size < self.max_selection {
            return Err(RulesError::HandTooSmall {
                hand_size: self.hand_size,
                max_selection: self.max_selection,
            });
        }
        if self.ante_targets.is_empty() {
            return Err(RulesError::NoTargets);
        }
        Ok(())
    }

    /// Score needed to clear `ante` (1-based). Past the table the last entry
    /// grows by `target_step` per ante.
    pub fn target_score(&self, ante: u32) -> u64 {
        let idx = ante.max(1) as usize - 1;
        if let Some(&t) = self.ante_targets.get(idx) {
            return t;
        }
        let last = self.ante_targets.last().copied().unwrap_or(0);
        let beyond = (ante as u64).saturating_sub(self.ante_targets.len() as u64);
        last.saturating_add(self.target_step.saturating_mul(beyond))
    }

    /// Whether a selection of `n` cards may be played.
    pub fn play_size_ok(&self, n: usize) -> bool {
        match self.variant {
            PlayRule::Strict => n == self.max_selection,
            PlayRule::Flexible => (1..=self.max_selection).contains(&n),
        }
    }

    /// Smallest legal play size, used in rejection messages.
    pub fn min_play(&self) -> usize {
        match self.variant {
            PlayRule::Strict => self.max_selection,
            PlayRule::Flexible => 1,
        }
    }
}
