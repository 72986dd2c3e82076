//! Deterministic fit scores and the pre-simulation success estimate.

use crate::adventurer::Adventurer;
use crate::core::constants::*;
use crate::core::QuestModifiers;

use super::types::Quest;

/// Weighted stat sum over the quest's positive weights.
pub fn weighted_stat_sum(quest: &Quest, adventurer: &Adventurer) -> f64 {
    quest
        .weights
        .iter()
        .filter(|(_, w)| *w > 0.0)
        .map(|(stat, w)| adventurer.stats.get(*stat) * w)
        .sum()
}

/// How much an adventurer wants, and suits, a quest.
///
/// Stat fit times a temperament and trait multiplier. No randomness: the same
/// inputs always give the same score.
pub fn calculate_score(quest: &Quest, adventurer: &Adventurer) -> f64 {
    let base_score = weighted_stat_sum(quest, adventurer);

    let danger = (quest.difficulty.power_req / SCORE_DANGER_DIVISOR).min(1.0);
    let reward_rate = (quest.rewards.money as f64 / SCORE_REWARD_DIVISOR).min(1.0);
    let prestige = SCORE_PRESTIGE;

    let t = adventurer.temperament;
    let mut multiplier = 1.0
        + t.risk as f64 * danger * SCORE_RISK_WEIGHT
        + t.greed as f64 * reward_rate * SCORE_GREED_WEIGHT
        + t.social as f64 * prestige * SCORE_SOCIAL_WEIGHT;
    for trait_id in &adventurer.traits {
        let pick = trait_id.profile().auto_pick;
        multiplier += pick.danger * danger + pick.reward * reward_rate + pick.prestige * prestige;
    }

    base_score * multiplier
}

/// Estimated chance the party completes the quest, in [0.05, 0.95].
pub fn calculate_success_chance(quest: &Quest, party: &[&Adventurer], modifiers: &QuestModifiers) -> f64 {
    let power: f64 = party.iter().map(|a| weighted_stat_sum(quest, a)).sum();
    let required = quest.difficulty.power_req * party.len() as f64;
    let spec = quest.spec();
    let advantaged = party.iter().filter(|a| spec.has_job_advantage(a.job)).count();

    let chance = SUCCESS_BASE
        + (power - required) / SUCCESS_POWER_DIVISOR
        + advantaged as f64 * SUCCESS_JOB_ADVANTAGE_BONUS
        + modifiers.success;
    chance.clamp(SUCCESS_MIN, SUCCESS_MAX)
}
