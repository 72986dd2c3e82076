use super::origin::{JoinType, Origin};
use crate::core::constants::{
    RANK_THRESHOLD_A, RANK_THRESHOLD_B, RANK_THRESHOLD_C, RANK_THRESHOLD_D, RANK_THRESHOLD_S,
    RANK_VALUE_MAX, RANK_VALUE_MIN,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter rank shared by adventurers, quests, monsters and items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankLabel {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl RankLabel {
    /// All labels from lowest to highest.
    pub const ALL: [RankLabel; 6] = [
        RankLabel::E,
        RankLabel::D,
        RankLabel::C,
        RankLabel::B,
        RankLabel::A,
        RankLabel::S,
    ];

    /// Threshold table walked from the top down.
    const DESCENDING: [(RankLabel, f64); 6] = [
        (RankLabel::S, RANK_THRESHOLD_S),
        (RankLabel::A, RANK_THRESHOLD_A),
        (RankLabel::B, RANK_THRESHOLD_B),
        (RankLabel::C, RANK_THRESHOLD_C),
        (RankLabel::D, RANK_THRESHOLD_D),
        (RankLabel::E, 0.0),
    ];

    /// The greatest label whose threshold is at or below `rank_value`.
    pub fn from_value(rank_value: f64) -> RankLabel {
        for (label, threshold) in Self::DESCENDING {
            if threshold <= rank_value {
                return label;
            }
        }
        RankLabel::E
    }

    pub fn threshold(&self) -> f64 {
        match self {
            RankLabel::S => RANK_THRESHOLD_S,
            RankLabel::A => RANK_THRESHOLD_A,
            RankLabel::B => RANK_THRESHOLD_B,
            RankLabel::C => RANK_THRESHOLD_C,
            RankLabel::D => RANK_THRESHOLD_D,
            RankLabel::E => 0.0,
        }
    }

    /// Integer bucket 0 (E) through 5 (S).
    pub fn bucket(&self) -> usize {
        match self {
            RankLabel::E => 0,
            RankLabel::D => 1,
            RankLabel::C => 2,
            RankLabel::B => 3,
            RankLabel::A => 4,
            RankLabel::S => 5,
        }
    }

    /// Quest rank value 1 (E) through 6 (S), the index into reward tables.
    pub fn quest_rank_value(&self) -> usize {
        self.bucket() + 1
    }

    pub fn from_bucket(bucket: usize) -> RankLabel {
        Self::ALL[bucket.min(Self::ALL.len() - 1)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankLabel::E => "E",
            RankLabel::D => "D",
            RankLabel::C => "C",
            RankLabel::B => "B",
            RankLabel::A => "A",
            RankLabel::S => "S",
        }
    }
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a rank value into the legal [0, 9999] domain.
pub fn clamp_rank_value(rank_value: f64) -> f64 {
    rank_value.clamp(RANK_VALUE_MIN, RANK_VALUE_MAX)
}

/// Roll the starting rank value for a recruit.
///
/// The join type picks the range, the origin adds a flat bonus, and the result
/// is clamped to the legal domain and to the optional caller cap.
pub fn initial_rank_value(
    join_type: JoinType,
    origin: Origin,
    cap: Option<f64>,
    rng: &mut impl Rng,
) -> f64 {
    let (min, max) = join_type.rank_range();
    let rolled = rng.gen_range(min..=max) + origin.rank_bonus();
    let value = clamp_rank_value(rolled);
    match cap {
        Some(cap) => value.min(cap).max(RANK_VALUE_MIN),
        None => value,
    }
}

/// Starting trust: origin base plus join-type bonus, floored at 0.
pub fn initial_trust(origin: Origin, join_type: JoinType) -> i32 {
    (origin.base_trust() + join_type.trust_bonus()).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(RankLabel::from_value(0.0), RankLabel::E);
        assert_eq!(RankLabel::from_value(79.9), RankLabel::E);
        assert_eq!(RankLabel::from_value(80.0), RankLabel::D);
        assert_eq!(RankLabel::from_value(199.0), RankLabel::D);
        assert_eq!(RankLabel::from_value(200.0), RankLabel::C);
        assert_eq!(RankLabel::from_value(380.0), RankLabel::B);
        assert_eq!(RankLabel::from_value(640.0), RankLabel::A);
        assert_eq!(RankLabel::from_value(999.9), RankLabel::A);
        assert_eq!(RankLabel::from_value(1000.0), RankLabel::S);
        assert_eq!(RankLabel::from_value(9999.0), RankLabel::S);
    }

    #[test]
    fn test_label_is_greatest_threshold_below_value() {
        let mut v = 0.0;
        while v <= 9999.0 {
            let label = RankLabel::from_value(v);
            assert!(label.threshold() <= v);
            if let Some(next) = RankLabel::ALL.get(label.bucket() + 1) {
                assert!(next.threshold() > v);
            }
            v += 7.3;
        }
    }

    #[test]
    fn test_bucket_and_quest_rank_value() {
        assert_eq!(RankLabel::E.bucket(), 0);
        assert_eq!(RankLabel::S.bucket(), 5);
        assert_eq!(RankLabel::E.quest_rank_value(), 1);
        assert_eq!(RankLabel::S.quest_rank_value(), 6);
        assert_eq!(RankLabel::from_bucket(3), RankLabel::B);
        assert_eq!(RankLabel::from_bucket(42), RankLabel::S);
    }

    #[test]
    fn test_initial_rank_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let local = initial_rank_value(JoinType::Local, Origin::Central, None, &mut rng);
            assert!((30.0..=190.0).contains(&local));

            let contract = initial_rank_value(JoinType::Contract, Origin::Foreign, None, &mut rng);
            assert!((310.0..=860.0).contains(&contract));

            let foreign_local = initial_rank_value(JoinType::Local, Origin::Foreign, None, &mut rng);
            assert!(foreign_local >= 0.0);

            let capped = initial_rank_value(JoinType::Contract, Origin::Central, Some(200.0), &mut rng);
            assert!(capped <= 200.0);
        }
    }

    #[test]
    fn test_initial_trust() {
        assert_eq!(initial_trust(Origin::Central, JoinType::Local), 25);
        assert_eq!(initial_trust(Origin::Northern, JoinType::Wanderer), 10);
        assert_eq!(initial_trust(Origin::Foreign, JoinType::Contract), 0);
    }
}
