use crate::cards::Card;
use crate::evaluator::{classify, Category, EvalError};
use crate::jokers::{Bonus, Joker};

/// Running totals after one joker has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreStep {
    pub joker: Joker,
    pub bonus: Bonus,
    pub chips: u64,
    pub mult: u64,
    pub subtotal: u64,
}

/// Full result of scoring one played hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub category: Category,
    pub cards: Vec<Card>,
    pub base_chips: u64,
    pub base_mult: u64,
    /// One entry per joker, in acquisition order.
    pub steps: Vec<ScoreStep>,
    pub chips: u64,
    pub mult: u64,
    pub total: u64,
}

impl ScoreBreakdown {
    pub fn base_total(&self) -> u64 {
        self.base_chips.saturating_mul(self.base_mult)
    }
}

/// Score an already classified hand.
///
/// Jokers are applied in slice order; each adds its bonus to the running chips
/// and mult. The result is `chips * mult`.
///
/// ```
/// use ante_rs::cards::parse_cards;
/// use ante_rs::evaluator::Category;
/// use ante_rs::scoring::score;
///
/// let cards = parse_cards("2s 2h 6d 6c 10s").unwrap();
/// let result = score(&cards, Category::TwoPair, &[]);
/// assert_eq!((result.chips, result.mult, result.total), (20, 2, 40));
/// ```
pub fn score(cards: &[Card], category: Category, jokers: &[Joker]) -> ScoreBreakdown {
    let base_chips = category.base_chips();
    let base_mult = category.base_mult();
    let mut chips = base_chips;
    let mut mult = base_mult;
    let mut steps = Vec::with_capacity(jokers.len());

    for joker in jokers {
        let bonus = joker.bonus(cards, category);
        chips = chips.saturating_add(bonus.chips);
        mult = mult.saturating_add(bonus.mult);
        steps.push(ScoreStep {
            joker: *joker,
            bonus,
            chips,
            mult,
            subtotal: chips.saturating_mul(mult),
        });
    }

    ScoreBreakdown {
        category,
        cards: cards.to_vec(),
        base_chips,
        base_mult,
        steps,
        chips,
        mult,
        total: chips.saturating_mul(mult),
    }
}

/// Classify then score.
pub fn evaluate(cards: &[Card], jokers: &[Joker]) -> Result<ScoreBreakdown, EvalError> {
    let category = classify(cards)?;
    Ok(score(cards, category, jokers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::jokers::{Joker, JOKER};

    #[test]
    fn no_jokers_is_base_product() {
        let cards = parse_cards("2s 2h 6d 6c 10s").unwrap();
        let r = evaluate(&cards, &[]).unwrap();
        assert_eq!(r.category, Category::TwoPair);
        assert_eq!(r.total, 40);
        assert_eq!(r.base_total(), 40);
        assert!(r.steps.is_empty());
    }

    #[test]
    fn trace_follows_acquisition_order() {
        let cards = parse_cards("2s 2h 6d 6c 10s").unwrap();
        let greedy = Joker::by_name("Greedy Joker").unwrap();
        let blue = Joker::by_name("Blue Chip").unwrap();
        let r = score(&cards, Category::TwoPair, &[blue, JOKER, greedy]);

        let names: Vec<&str> = r.steps.iter().map(|s| s.joker.name).collect();
        assert_eq!(names, vec!["Blue Chip", "Joker", "Greedy Joker"]);
        assert_eq!((r.steps[0].chips, r.steps[0].mult, r.steps[0].subtotal), (50, 2, 100));
        assert_eq!((r.steps[1].chips, r.steps[1].mult, r.steps[1].subtotal), (50, 6, 300));
        assert_eq!((r.steps[2].chips, r.steps[2].mult, r.steps[2].subtotal), (50, 9, 450));
        assert_eq!(r.total, 450);
    }

    #[test]
    fn order_does_not_change_additive_total() {
        let cards = parse_cards("As Ah Ad Kc Ks").unwrap();
        let a = [JOKER, Joker::by_name("Big Spender").unwrap()];
        let b = [a[1], a[0]];
        assert_eq!(score(&cards, Category::FullHouse, &a).total, score(&cards, Category::FullHouse, &b).total);
    }

    #[test]
    fn non_firing_joker_still_records_a_step() {
        let cards = parse_cards("2s 3s").unwrap();
        let lusty = Joker::by_name("Lusty Joker").unwrap();
        let r = score(&cards, Category::HighCard, &[lusty]);
        assert_eq!(r.steps.len(), 1);
        assert!(r.steps[0].bonus.is_empty());
        assert_eq!(r.total, 5);
    }
}
