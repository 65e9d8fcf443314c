use crate::cards::Rank;

/// Straight shape of exactly five ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Ranks are exactly 10-J-Q-K-A.
    pub is_broadway: bool,
}

impl StraightInfo {
    pub const NONE: StraightInfo = StraightInfo { is_straight: false, is_broadway: false };

    /// Five distinct values spanning exactly four steps, or the wheel (A-2-3-4-5).
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut values = (*ranks).map(Rank::value);
        values.sort_unstable();
        let distinct = values.windows(2).all(|w| w[0] != w[1]);
        if !distinct {
            return Self::NONE;
        }

        if values[4] - values[0] == 4 {
            return StraightInfo { is_straight: true, is_broadway: values == [10, 11, 12, 13, 14] };
        }

        if values == [2, 3, 4, 5, 14] {
            return StraightInfo { is_straight: true, is_broadway: false };
        }

        Self::NONE
    }
}
