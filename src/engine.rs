// Intent boundary between the rules engine and its front ends. Every intent
// either returns a fresh snapshot or a rejection, so a UI (TUI, GUI, test
// driver) never needs to reach into `Run` internals. Implemented for `Run`.

use crate::game::{ActionError, Run, Snapshot};

pub trait GameEngine {
    // Run lifecycle
    fn new_run(&mut self) -> Snapshot;

    // Player intents
    fn select_card(&mut self, index: usize) -> Result<Snapshot, ActionError>;
    fn play(&mut self) -> Result<Snapshot, ActionError>;
    fn discard(&mut self) -> Result<Snapshot, ActionError>;
    fn add_joker(&mut self) -> Result<Snapshot, ActionError>;

    // Queries
    fn snapshot(&self) -> Snapshot;
}

impl GameEngine for Run {
    fn new_run(&mut self) -> Snapshot {
        Run::new_run(self);
        Run::snapshot(self)
    }

    fn select_card(&mut self, index: usize) -> Result<Snapshot, ActionError> {
        self.toggle_select(index)?;
        Ok(Run::snapshot(self))
    }

    fn play(&mut self) -> Result<Snapshot, ActionError> {
        Run::play(self)?;
        Ok(Run::snapshot(self))
    }

    fn discard(&mut self) -> Result<Snapshot, ActionError> {
        Run::discard(self)?;
        Ok(Run::snapshot(self))
    }

    fn add_joker(&mut self) -> Result<Snapshot, ActionError> {
        Run::add_joker(self)?;
        Ok(Run::snapshot(self))
    }

    fn snapshot(&self) -> Snapshot {
        Run::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;

    fn drive<E: GameEngine>(engine: &mut E) -> Result<Snapshot, ActionError> {
        for i in 0..5 {
            engine.select_card(i)?;
        }
        engine.play()
    }

    #[test]
    fn intents_return_snapshots() {
        let rules = Rules::default().with_targets(vec![1_000_000], 300);
        let mut run = Run::with_seed(rules, 5).unwrap();
        let snap = GameEngine::select_card(&mut run, 2).unwrap();
        assert_eq!(snap.selection, vec![2]);
        let snap = GameEngine::select_card(&mut run, 2).unwrap();
        assert!(snap.selection.is_empty());

        let snap = drive(&mut run).unwrap();
        assert_eq!(snap.hands_left, 3);
        assert_eq!(snap.hand.len(), 8);
        assert!(snap.last_score.is_some());
    }

    #[test]
    fn rejections_surface_messages() {
        let mut run = Run::with_seed(Rules::default(), 5).unwrap();
        let err = GameEngine::discard(&mut run).unwrap_err();
        assert_eq!(err.to_string(), "Select at least 1 card to discard.");
        let err = GameEngine::play(&mut run).unwrap_err();
        assert_eq!(err.to_string(), "Select exactly 5 cards to play.");
    }
}
