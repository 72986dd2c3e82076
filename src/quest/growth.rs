//! Rank and stat growth after a quest attempt.

use crate::adventurer::{Adventurer, RankLabel, RankUpdate, StatType};
use crate::core::constants::*;
use crate::core::QuestModifiers;
use rand::Rng;

use super::types::Quest;

/// Performance EMA after an attempt. The surprise signal is the outcome
/// (1 on success, 0 on failure) minus the estimated chance.
pub fn next_perf_ema(ema: f64, success: bool, estimated_chance: f64) -> f64 {
    let r = if success { 1.0 } else { 0.0 };
    ema * PERF_EMA_DECAY + (r - estimated_chance) * PERF_EMA_WEIGHT
}

/// Multiplier that fades rank gains out between 850 and 1050.
pub fn diminishing_factor(rank_value: f64) -> f64 {
    if rank_value > DIMINISH_START_RANK {
        ((DIMINISH_ZERO_RANK - rank_value) / DIMINISH_SPAN).max(0.0)
    } else {
        1.0
    }
}

/// Rank gain for a successful quest, before the training bonus.
pub fn success_rank_delta(rank_value: f64, quest_rank: RankLabel, estimated_chance: f64) -> f64 {
    let base = RANK_BASE_REWARD_BY_QUEST_RANK[quest_rank.quest_rank_value()];
    let diff = quest_rank.bucket() as f64 - RankLabel::from_value(rank_value).bucket() as f64;

    let underdog = if diff > 0.0 {
        base * diff * UNDERDOG_BONUS_PER_RANK
    } else {
        0.0
    };
    let gap_multiplier = if diff < 0.0 {
        (1.0 + diff * GAP_PENALTY_PER_RANK).max(0.0)
    } else {
        1.0
    };
    let surprise = base * (1.0 - estimated_chance).max(0.0) * SURPRISE_BONUS_FACTOR;

    (base + underdog + surprise) * gap_multiplier * diminishing_factor(rank_value)
}

/// Full rank delta for an attempt, including the training hall bonus for
/// members still below B rank.
pub fn rank_delta(
    rank_value: f64,
    quest_rank: RankLabel,
    success: bool,
    estimated_chance: f64,
    modifiers: &QuestModifiers,
) -> f64 {
    if !success {
        return RANK_DELTA_ON_FAILURE;
    }
    let delta = success_rank_delta(rank_value, quest_rank, estimated_chance);
    if rank_value < TRAINING_RANK_CEILING {
        delta * modifiers.facilities.training_multiplier()
    } else {
        delta
    }
}

/// Update the EMA, then move the adventurer's rank.
pub fn apply_rank_update(
    adventurer: &mut Adventurer,
    quest: &Quest,
    success: bool,
    estimated_chance: f64,
    modifiers: &QuestModifiers,
    rng: &mut impl Rng,
) -> RankUpdate {
    adventurer.perf_ema = next_perf_ema(adventurer.perf_ema, success, estimated_chance);
    let delta = rank_delta(
        adventurer.rank_value(),
        quest.rank(),
        success,
        estimated_chance,
        modifiers,
    );
    adventurer.update_rank(delta, rng)
}

/// Stat gains for one attempt. Each weighted stat grows toward a soft cap of 120.
pub fn stat_gains(adventurer: &Adventurer, quest: &Quest, success: bool, modifiers: &QuestModifiers) -> Vec<(StatType, f64)> {
    let mut base = if success {
        STAT_GROWTH_SUCCESS_BASE
    } else {
        STAT_GROWTH_FAILURE_BASE
    };
    base *= modifiers.exp * modifiers.growth;
    if adventurer.rank_value() < TRAINING_RANK_CEILING {
        base *= modifiers.facilities.training_multiplier();
    }
    let difficulty = STAT_GROWTH_DIFFICULTY_BASE + quest.rank().bucket() as f64 * STAT_GROWTH_DIFFICULTY_PER_RANK;

    quest
        .weights
        .iter()
        .filter(|(_, w)| *w > 0.0)
        .map(|(stat, w)| {
            let current = adventurer.stats.get(*stat);
            let diminish = ((STAT_SOFT_CAP - current) / STAT_DIMINISH_DIVISOR).max(STAT_DIMINISH_FLOOR);
            (*stat, base * difficulty * w * diminish)
        })
        .collect()
}

/// Apply stat growth in place and return what was added.
pub fn apply_stat_growth(
    adventurer: &mut Adventurer,
    quest: &Quest,
    success: bool,
    modifiers: &QuestModifiers,
) -> Vec<(StatType, f64)> {
    let gains = stat_gains(adventurer, quest, success, modifiers);
    for (stat, gain) in &gains {
        adventurer.stats.add(*stat, *gain);
    }
    gains
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::{AdventurerId, Job, JoinType, Origin, Stats};
    use crate::core::Facilities;
    use crate::quest::{QuestId, QuestType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn adventurer(rank_value: f64) -> Adventurer {
        Adventurer::new(
            AdventurerId(1),
            "Petra".to_string(),
            Job::Knight,
            Origin::Central,
            JoinType::Local,
            rank_value,
            Stats::uniform(20.0),
        )
    }

    #[test]
    fn test_failure_is_flat_penalty() {
        let m = QuestModifiers::default();
        assert_eq!(rank_delta(500.0, RankLabel::S, false, 0.1, &m), -5.0);
    }

    #[test]
    fn test_same_rank_success() {
        // C quest (base 9) for a C adventurer at 50% estimate: 9 + 9 * 0.5 * 0.5
        let delta = success_rank_delta(250.0, RankLabel::C, 0.5);
        assert!((delta - 11.25).abs() < 1e-9);
    }

    #[test]
    fn test_underdog_bonus() {
        // B quest (base 12) for a D adventurer: diff 2 -> +12 * 2 * 0.2
        let delta = success_rank_delta(100.0, RankLabel::B, 1.0);
        assert!((delta - 16.8).abs() < 1e-9);
    }

    #[test]
    fn test_gap_penalty_zeroes_easy_quests() {
        // E quest for an S-rank adventurer is five ranks below
        assert_eq!(success_rank_delta(1000.0, RankLabel::E, 0.5), 0.0);
        // One rank below keeps 60%
        let delta = success_rank_delta(700.0, RankLabel::B, 1.0);
        assert!((delta - 12.0 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_diminishing_returns() {
        assert_eq!(diminishing_factor(800.0), 1.0);
        assert!((diminishing_factor(900.0) - 1.0).abs() < 1e-9);
        assert!((diminishing_factor(975.0) - 0.5).abs() < 1e-9);
        assert!(success_rank_delta(1050.0, RankLabel::S, 0.3) <= 0.0);
        assert_eq!(success_rank_delta(1100.0, RankLabel::S, 0.3), 0.0);
    }

    #[test]
    fn test_training_bonus_only_below_b_rank() {
        let m = QuestModifiers::with_facilities(Facilities {
            training: 2,
            ..Facilities::default()
        });
        let plain = QuestModifiers::default();
        let low = rank_delta(100.0, RankLabel::D, true, 0.5, &m);
        assert!((low - rank_delta(100.0, RankLabel::D, true, 0.5, &plain) * 1.2).abs() < 1e-9);
        let high = rank_delta(400.0, RankLabel::B, true, 0.5, &m);
        assert_eq!(high, rank_delta(400.0, RankLabel::B, true, 0.5, &plain));
    }

    #[test]
    fn test_perf_ema() {
        assert!((next_perf_ema(0.0, true, 0.2) - 0.08).abs() < 1e-9);
        assert!((next_perf_ema(0.5, false, 0.5) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_apply_rank_update_moves_rank_and_ema() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut adv = adventurer(100.0);
        let quest = Quest::new(QuestId(1), "Eastern Wolves", QuestType::Subjugation, RankLabel::D);
        let update = apply_rank_update(&mut adv, &quest, true, 0.5, &QuestModifiers::default(), &mut rng);
        assert!(update.delta_applied > 0.0);
        assert!(adv.perf_ema > 0.0);

        let update = apply_rank_update(&mut adv, &quest, false, 0.5, &QuestModifiers::default(), &mut rng);
        assert!((update.delta_applied + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_stat_growth_amounts() {
        let adv = adventurer(100.0);
        let mut quest = Quest::new(QuestId(1), "Test", QuestType::Subjugation, RankLabel::E);
        quest.weights = vec![(StatType::Str, 1.0), (StatType::Cha, 0.0)];
        let gains = stat_gains(&adv, &quest, true, &QuestModifiers::default());
        assert_eq!(gains.len(), 1);
        // 0.6 * 0.7 * 1.0 * (120 - 20) / 100
        assert!((gains[0].1 - 0.42).abs() < 1e-9);

        let fail = stat_gains(&adv, &quest, false, &QuestModifiers::default());
        assert!((fail[0].1 - 0.175).abs() < 1e-9);
    }

    #[test]
    fn test_stat_growth_soft_cap_floor() {
        let mut adv = adventurer(100.0);
        adv.stats.set(StatType::Str, 200.0);
        let mut quest = Quest::new(QuestId(1), "Test", QuestType::Subjugation, RankLabel::E);
        quest.weights = vec![(StatType::Str, 1.0)];
        let gains = apply_stat_growth(&mut adv, &quest, true, &QuestModifiers::default());
        assert!((gains[0].1 - 0.6 * 0.7 * 0.1).abs() < 1e-9);
        assert!(adv.stats.get(StatType::Str) > 200.0);
    }
}
