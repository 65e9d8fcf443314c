use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{Category, EvalError};
use crate::hand::{Hand, Selection, SelectionError};
use crate::jokers::Joker;
use crate::rules::{PlayRule, Rules, RulesError};
use crate::scoring::{evaluate, ScoreBreakdown};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const WELCOME_MESSAGE: &str = "Select up to 5 cards and play a poker hand.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Active,
    GameOver,
}

/// Why an intent was refused. The run is left untouched in every case.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("The run is over. Start a new run to play again.")]
    GameOver,
    #[error("No hands left this ante.")]
    NoHandsLeft,
    #[error("Select exactly {required} cards to play.")]
    ExactSelection { required: usize, got: usize },
    #[error("Select 1 to {max} cards to play.")]
    SelectionSize { max: usize, got: usize },
    #[error("Select at least 1 card to discard.")]
    EmptySelection,
    #[error("No discards left this ante.")]
    NoDiscardsLeft,
    #[error("You can only select up to {max} cards.")]
    SelectionFull { max: usize },
    #[error("No card at position {index} (hand has {len}).")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Joker slots are full ({max} max).")]
    JokerSlotsFull { max: usize },
    #[error("hand evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

impl From<SelectionError> for ActionError {
    fn from(e: SelectionError) -> Self {
        match e {
            SelectionError::Full { max } => ActionError::SelectionFull { max },
        }
    }
}

/// What a successful play led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayOutcome {
    /// Below target with hands remaining.
    Scored,
    /// Target reached; the run moved on to `next_ante`.
    AnteCleared { next_ante: u32 },
    /// Last hand spent below target; the run is over.
    Busted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunEvent {
    Played { ante: u32, category: Category, total: u64 },
    Discarded { ante: u32, count: usize },
    JokerAdded { name: &'static str },
    AnteCleared { ante: u32, score: u64 },
    Busted { ante: u32, score: u64 },
}

impl RunEvent {
    pub fn describe(&self) -> String {
        match self {
            RunEvent::Played { ante, category, total } => {
                format!("Ante {ante}: {category} +{total}")
            }
            RunEvent::Discarded { ante, count } => format!("Ante {ante}: discarded {count}"),
            RunEvent::JokerAdded { name } => format!("Joker added: {name}"),
            RunEvent::AnteCleared { ante, score } => format!("Ante {ante} cleared with {score}"),
            RunEvent::Busted { ante, score } => format!("Busted on ante {ante} with {score}"),
        }
    }
}

/// Read-only copy of everything a front end needs to render the run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Snapshot {
    pub ante: u32,
    pub score: u64,
    pub target: u64,
    pub hands_left: u32,
    pub discards_left: u32,
    pub hand: Vec<Card>,
    pub selection: Vec<usize>,
    pub jokers: Vec<Joker>,
    pub deck_len: usize,
    pub game_over: bool,
    pub last_message: String,
    pub last_score: Option<ScoreBreakdown>,
}

/// One run of the game: the single owner of deck, hand, budgets and jokers.
#[derive(Debug, Clone)]
pub struct Run {
    pub(crate) rules: Rules,
    rng: ChaCha8Rng,
    pub(crate) ante: u32,
    pub(crate) score: u64,
    pub(crate) hands_left: u32,
    pub(crate) discards_left: u32,
    pub(crate) deck: Deck,
    pub(crate) hand: Hand,
    pub(crate) selection: Selection,
    pub(crate) jokers: Vec<Joker>,
    pub(crate) phase: Phase,
    last_message: String,
    last_score: Option<ScoreBreakdown>,
    history: Vec<RunEvent>,
}

impl Default for Run {
    fn default() -> Self {
        Self::fresh(Rules::default(), ChaCha8Rng::from_os_rng())
    }
}

impl Run {
    /// Start a run with OS-seeded shuffling.
    pub fn new(rules: Rules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self::fresh(rules, ChaCha8Rng::from_os_rng()))
    }

    /// Start a reproducible run: the same rules, seed and intents always
    /// produce the same hands.
    pub fn with_seed(rules: Rules, seed: u64) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self::fresh(rules, ChaCha8Rng::seed_from_u64(seed)))
    }

    fn fresh(rules: Rules, rng: ChaCha8Rng) -> Self {
        let mut run = Self {
            ante: 1,
            score: 0,
            hands_left: rules.hands,
            discards_left: rules.discards,
            deck: Deck::standard(),
            hand: Hand::default(),
            selection: Selection::new(),
            jokers: Vec::new(),
            phase: Phase::Active,
            last_message: WELCOME_MESSAGE.to_string(),
            last_score: None,
            history: Vec::new(),
            rules,
            rng,
        };
        run.deal_fresh();
        run
    }

    /// New shuffled deck and a full hand; selection cleared.
    fn deal_fresh(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.hand = Hand::default();
        self.hand.replenish(self.rules.hand_size, &mut self.deck, &mut self.rng);
        self.selection.clear();
    }

    /// Reset to ante 1 with fresh budgets, deck and hand, and no jokers.
    pub fn new_run(&mut self) {
        self.ante = 1;
        self.score = 0;
        self.hands_left = self.rules.hands;
        self.discards_left = self.rules.discards;
        self.jokers.clear();
        self.phase = Phase::Active;
        self.last_score = None;
        self.history.clear();
        self.deal_fresh();
        self.last_message = WELCOME_MESSAGE.to_string();
        tracing::info!(hands = self.hands_left, discards = self.discards_left, "new run");
    }

    /// Replace the rules and start over.
    pub fn new_run_with(&mut self, rules: Rules) -> Result<(), RulesError> {
        rules.validate()?;
        self.rules = rules;
        self.new_run();
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        match self.phase {
            Phase::Active => Ok(()),
            Phase::GameOver => Err(ActionError::GameOver),
        }
    }

    /// Toggle the card at `index` in or out of the selection.
    /// Returns whether it is selected afterwards.
    pub fn toggle_select(&mut self, index: usize) -> Result<bool, ActionError> {
        self.ensure_active()?;
        if index >= self.hand.len() {
            return Err(ActionError::IndexOutOfRange { index, len: self.hand.len() });
        }
        let selected = self.selection.toggle(index, self.rules.max_selection)?;
        tracing::debug!(index, selected, count = self.selection.len(), "selection changed");
        Ok(selected)
    }

    fn check_play(&self) -> Result<(), ActionError> {
        self.ensure_active()?;
        if self.hands_left == 0 {
            return Err(ActionError::NoHandsLeft);
        }
        let got = self.selection.len();
        if !self.rules.play_size_ok(got) {
            return Err(match self.rules.variant {
                PlayRule::Strict => ActionError::ExactSelection { required: self.rules.min_play(), got },
                PlayRule::Flexible => ActionError::SelectionSize { max: self.rules.max_selection, got },
            });
        }
        Ok(())
    }

    /// Play the selected cards as a poker hand.
    ///
    /// On success the score is added, one hand is spent, the played cards are
    /// replaced, and the run either stays on this ante, advances to the next
    /// one, or ends.
    pub fn play(&mut self) -> Result<(ScoreBreakdown, PlayOutcome), ActionError> {
        if let Err(e) = self.check_play() {
            tracing::debug!(error = %e, "play rejected");
            return Err(e);
        }
        let played = self.hand.selected(&self.selection);
        let result = evaluate(&played, &self.jokers)?;

        self.score = self.score.saturating_add(result.total);
        self.hands_left -= 1;
        self.hand.remove_selected(&self.selection);
        self.selection.clear();
        self.hand.replenish(self.rules.hand_size, &mut self.deck, &mut self.rng);
        self.history.push(RunEvent::Played {
            ante: self.ante,
            category: result.category,
            total: result.total,
        });
        tracing::info!(
            ante = self.ante,
            category = %result.category,
            chips = result.chips,
            mult = result.mult,
            total = result.total,
            score = self.score,
            "hand scored"
        );

        let outcome = if self.score >= self.target() {
            self.advance_ante();
            PlayOutcome::AnteCleared { next_ante: self.ante }
        } else if self.hands_left == 0 {
            self.end_run();
            PlayOutcome::Busted
        } else {
            self.last_message = format!(
                "{}! +{} ({} ×{}).",
                result.category, result.total, result.chips, result.mult
            );
            PlayOutcome::Scored
        };

        self.last_score = Some(result.clone());
        Ok((result, outcome))
    }

    fn advance_ante(&mut self) {
        self.history.push(RunEvent::AnteCleared { ante: self.ante, score: self.score });
        self.ante += 1;
        self.score = 0;
        self.hands_left = self.rules.hands;
        self.discards_left = self.rules.discards;
        self.deal_fresh();
        self.last_message = format!("Blind cleared! Welcome to Ante {}.", self.ante);
        tracing::info!(ante = self.ante, target = self.target(), "ante advanced");
    }

    fn end_run(&mut self) {
        self.history.push(RunEvent::Busted { ante: self.ante, score: self.score });
        self.phase = Phase::GameOver;
        self.last_message = "You busted this blind. Start a new run to play again.".to_string();
        tracing::info!(ante = self.ante, score = self.score, target = self.target(), "run over");
    }

    /// Throw away the selected cards and draw replacements.
    pub fn discard(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_active()?;
        if self.discards_left == 0 {
            return Err(ActionError::NoDiscardsLeft);
        }
        if self.selection.is_empty() {
            return Err(ActionError::EmptySelection);
        }
        let removed = self.hand.remove_selected(&self.selection);
        self.selection.clear();
        self.hand.replenish(self.rules.hand_size, &mut self.deck, &mut self.rng);
        self.discards_left -= 1;
        self.history.push(RunEvent::Discarded { ante: self.ante, count: removed.len() });
        self.last_message = "Discarded selected cards.".to_string();
        tracing::debug!(count = removed.len(), discards_left = self.discards_left, "discarded");
        Ok(removed)
    }

    /// Debug hook: add a random catalog joker.
    pub fn add_joker(&mut self) -> Result<Joker, ActionError> {
        self.check_joker_slot()?;
        let joker = Joker::random(&mut self.rng);
        self.push_joker(joker);
        Ok(joker)
    }

    /// Add a specific joker, subject to the same slot limit as [`Run::add_joker`].
    pub fn add_specific_joker(&mut self, joker: Joker) -> Result<(), ActionError> {
        self.check_joker_slot()?;
        self.push_joker(joker);
        Ok(())
    }

    fn check_joker_slot(&self) -> Result<(), ActionError> {
        self.ensure_active()?;
        if self.jokers.len() >= self.rules.max_jokers {
            return Err(ActionError::JokerSlotsFull { max: self.rules.max_jokers });
        }
        Ok(())
    }

    fn push_joker(&mut self, joker: Joker) {
        self.jokers.push(joker);
        self.history.push(RunEvent::JokerAdded { name: joker.name });
        self.last_message = format!("Added {}.", joker.name);
        tracing::info!(joker = joker.name, rarity = %joker.rarity, slots = self.jokers.len(), "joker added");
    }

    pub fn target(&self) -> u64 {
        self.rules.target_score(self.ante)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn ante(&self) -> u32 {
        self.ante
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn hands_left(&self) -> u32 {
        self.hands_left
    }

    pub fn discards_left(&self) -> u32 {
        self.discards_left
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn jokers(&self) -> &[Joker] {
        &self.jokers
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn last_score(&self) -> Option<&ScoreBreakdown> {
        self.last_score.as_ref()
    }

    pub fn history(&self) -> &[RunEvent] {
        &self.history
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ante: self.ante,
            score: self.score,
            target: self.target(),
            hands_left: self.hands_left,
            discards_left: self.discards_left,
            hand: self.hand.as_slice().to_vec(),
            selection: self.selection.to_vec(),
            jokers: self.jokers.clone(),
            deck_len: self.deck.len(),
            game_over: self.is_game_over(),
            last_message: self.last_message.clone(),
            last_score: self.last_score.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jokers::JOKER;

    fn seeded(rules: Rules) -> Run {
        Run::with_seed(rules, 1234).expect("valid rules")
    }

    fn select_first(run: &mut Run, n: usize) {
        for i in 0..n {
            run.toggle_select(i).unwrap();
        }
    }

    #[test]
    fn fresh_run_matches_initial_state() {
        let run = seeded(Rules::default());
        assert_eq!(run.ante(), 1);
        assert_eq!(run.score(), 0);
        assert_eq!(run.hand().len(), 8);
        assert_eq!(run.deck_len(), 44);
        assert_eq!((run.hands_left(), run.discards_left()), (4, 2));
        assert!(run.selection().is_empty());
        assert!(!run.is_game_over());
        assert_eq!(run.last_message(), WELCOME_MESSAGE);
    }

    #[test]
    fn known_hand_scores_two_pair() {
        let mut run = seeded(Rules::default());
        run.hand = "2s 2h 6d 6c 10s Ks Qd 3c".parse().unwrap();
        select_first(&mut run, 5);
        let (result, outcome) = run.play().unwrap();
        assert_eq!(result.category, Category::TwoPair);
        assert_eq!(result.total, 40);
        assert_eq!(outcome, PlayOutcome::Scored);
        assert_eq!(run.score(), 40);
        assert_eq!(run.last_message(), "Two Pair! +40 (20 ×2).");
        // survivors first, replacements appended
        assert_eq!(run.hand().as_slice()[0].to_string(), "K♠");
        assert_eq!(run.hand().len(), 8);
    }

    #[test]
    fn jokers_apply_to_play() {
        let mut run = seeded(Rules::default());
        run.add_specific_joker(JOKER).unwrap();
        run.hand = "2s 2h 6d 6c 10s Ks Qd 3c".parse().unwrap();
        select_first(&mut run, 5);
        let (result, _) = run.play().unwrap();
        assert_eq!((result.chips, result.mult, result.total), (20, 6, 120));
        assert_eq!(run.last_score().map(|s| s.total), Some(120));
    }

    #[test]
    fn rejected_play_changes_nothing() {
        let mut run = seeded(Rules::default());
        select_first(&mut run, 3);
        let before = run.snapshot();
        assert_eq!(run.play().unwrap_err(), ActionError::ExactSelection { required: 5, got: 3 });
        assert_eq!(run.snapshot(), before);
    }

    #[test]
    fn clearing_target_advances_in_the_same_call() {
        let mut run = seeded(Rules::default().with_targets(vec![1, 2], 300));
        select_first(&mut run, 5);
        let (_, outcome) = run.play().unwrap();
        assert_eq!(outcome, PlayOutcome::AnteCleared { next_ante: 2 });
        assert_eq!(run.ante(), 2);
        assert_eq!(run.score(), 0);
        assert_eq!((run.hands_left(), run.discards_left()), (4, 2));
        assert_eq!(run.deck_len(), 44);
        assert_eq!(run.last_message(), "Blind cleared! Welcome to Ante 2.");
    }

    #[test]
    fn last_hand_below_target_ends_run() {
        let mut run = seeded(Rules::default().with_hands(1).with_targets(vec![1_000_000], 300));
        select_first(&mut run, 5);
        let (_, outcome) = run.play().unwrap();
        assert_eq!(outcome, PlayOutcome::Busted);
        assert!(run.is_game_over());
        assert_eq!(run.toggle_select(0), Err(ActionError::GameOver));
        assert_eq!(run.play().unwrap_err(), ActionError::GameOver);
        assert_eq!(run.discard().unwrap_err(), ActionError::GameOver);
        assert_eq!(run.add_joker().unwrap_err(), ActionError::GameOver);

        run.new_run();
        assert!(!run.is_game_over());
        assert_eq!(run.hands_left(), 1);
    }

    #[test]
    fn discard_spends_budget_and_refills() {
        let mut run = seeded(Rules::default());
        run.toggle_select(0).unwrap();
        run.toggle_select(7).unwrap();
        let removed = run.discard().unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(run.discards_left(), 1);
        assert_eq!(run.hand().len(), 8);
        assert!(run.selection().is_empty());

        assert_eq!(run.discard().unwrap_err(), ActionError::EmptySelection);
        run.toggle_select(1).unwrap();
        run.discard().unwrap();
        run.toggle_select(1).unwrap();
        let before = run.snapshot();
        assert_eq!(run.discard().unwrap_err(), ActionError::NoDiscardsLeft);
        assert_eq!(run.snapshot(), before);
    }

    #[test]
    fn joker_slots_cap_and_new_run_clears_them() {
        let mut run = seeded(Rules::default());
        for _ in 0..5 {
            run.add_joker().unwrap();
        }
        assert_eq!(run.add_joker().unwrap_err(), ActionError::JokerSlotsFull { max: 5 });
        assert_eq!(run.jokers().len(), 5);
        run.new_run();
        assert!(run.jokers().is_empty());
        assert!(run.history().is_empty());
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut run = seeded(Rules::default());
        assert_eq!(run.toggle_select(8), Err(ActionError::IndexOutOfRange { index: 8, len: 8 }));
    }

    #[test]
    fn flexible_variant_accepts_single_card() {
        let mut run = seeded(Rules::flexible());
        assert_eq!(run.play().unwrap_err(), ActionError::SelectionSize { max: 5, got: 0 });
        run.toggle_select(0).unwrap();
        let (result, _) = run.play().unwrap();
        assert_eq!(result.category, Category::HighCard);
        assert_eq!(run.hands_left(), 3);
        assert_eq!(run.discards_left(), 3);
    }
}
