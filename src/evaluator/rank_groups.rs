use crate::cards::{Card, Rank};

/// Rank multiplicities of a set of cards, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15]; // 2..=14 used
        for c in cards {
            counts[c.rank().value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|r| {
                let n = counts[r.value() as usize];
                (n > 0).then_some((r, n))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Largest multiplicity, 0 when empty.
    pub fn first(&self) -> u8 {
        self.groups.first().map(|g| g.1).unwrap_or(0)
    }

    /// Second largest multiplicity, 0 when absent.
    pub fn second(&self) -> u8 {
        self.groups.get(1).map(|g| g.1).unwrap_or(0)
    }

    /// Counts only, descending.
    pub fn counts(&self) -> Vec<u8> {
        self.groups.iter().map(|g| g.1).collect()
    }

    /// Number of distinct ranks appearing exactly twice.
    pub fn exact_pairs(&self) -> usize {
        self.groups.iter().filter(|(_, count)| *count == 2).count()
    }

    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn groups(s: &str) -> RankGroups {
        RankGroups::from_cards(&parse_cards(s).unwrap())
    }

    #[test]
    fn quad_then_kicker() {
        let g = groups("As Ah Ad Ac Ks");
        assert_eq!(g.counts(), vec![4, 1]);
        assert_eq!(g.exact_pairs(), 0);
    }

    #[test]
    fn full_house_counts() {
        let g = groups("As Ah Ad Ks Kh");
        assert_eq!((g.first(), g.second()), (3, 2));
        assert_eq!(g.exact_pairs(), 1);
    }

    #[test]
    fn two_pair_counts() {
        let g = groups("As Ah Ks Kh 10c");
        assert_eq!(g.counts(), vec![2, 2, 1]);
        assert_eq!(g.exact_pairs(), 2);
        assert_eq!(g.groups()[0].0, Rank::Ace);
    }

    #[test]
    fn short_hand_and_empty() {
        assert_eq!(groups("7s").counts(), vec![1]);
        let empty = RankGroups::from_cards(&[]);
        assert_eq!((empty.first(), empty.second(), empty.distinct()), (0, 0, 0));
    }

    #[test]
    fn ties_sort_by_rank_desc() {
        let g = groups("5s As 10s");
        let ranks: Vec<Rank> = g.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Ten, Rank::Five]);
    }
}
