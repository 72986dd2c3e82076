//! Quest orchestration: board generation, scoring and full multi-day attempts.

use super::generation::generate_daily_quests;
use super::growth::{apply_rank_update, apply_stat_growth};
use super::scoring;
use super::types::{Quest, QuestId, QuestType};
use crate::adventure::{AdventureSimulator, DayResults, KilledMonster};
use crate::adventurer::{Adventurer, AdventurerId, KillRecord, RankUpdate, StatType};
use crate::core::constants::*;
use crate::core::{Facilities, QuestModifiers};
use crate::titles::{RankTitles, TitleContext, TitleService};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Ok,
    Injured,
    Dead,
}

/// What happened to one party member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberResult {
    pub id: AdventurerId,
    pub name: String,
    pub status: MemberStatus,
    /// Damage after the member's own injury hooks
    pub damage: f64,
    pub recovery_days: u32,
    pub rank: RankUpdate,
    pub stat_gains: Vec<(StatType, f64)>,
    pub title: Option<String>,
}

/// Result of a full quest attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestOutcome {
    pub quest_id: QuestId,
    pub success: bool,
    /// The pre-simulation estimate the success roll was made against
    pub success_chance: f64,
    /// Money lost on failure, 0 on success
    pub effective_penalty: u32,
    /// Total money brought back before the guild cut
    pub reward: u32,
    pub reputation_delta: i32,
    /// Multiplier on the guild's cut from the party's trait hooks
    pub effective_share_mod: f64,
    pub totals: DayResults,
    pub member_results: Vec<MemberResult>,
    pub logs: Vec<String>,
}

impl QuestOutcome {
    pub fn dead(&self) -> impl Iterator<Item = &MemberResult> {
        self.member_results.iter().filter(|m| m.status == MemberStatus::Dead)
    }
}

/// Decide headline success from the chance roll and what was killed.
///
/// Any boss kill, or any kill whose name contains the quest's boss target or
/// target, forces success. Otherwise a quest that requires a boss fails.
pub fn resolve_success(quest: &Quest, kills: &[KilledMonster], rolled_success: bool) -> bool {
    let targets: Vec<&str> = [quest.boss_target.as_deref(), quest.target.as_deref()]
        .into_iter()
        .flatten()
        .filter(|t| !t.is_empty())
        .collect();
    let boss_killed = kills
        .iter()
        .any(|k| k.is_boss || targets.iter().any(|t| k.name.contains(t)));
    if boss_killed {
        true
    } else if quest.has_mandatory_boss() {
        false
    } else {
        rolled_success
    }
}

/// Money brought back: the base reward on success, kill bounties on free
/// hunts, and item sales, all scaled by the reward modifier.
pub fn compute_reward(quest: &Quest, success: bool, totals: &DayResults, modifiers: &QuestModifiers) -> u32 {
    let base = if success { quest.rewards.money as f64 } else { 0.0 };
    let bounties: u32 = if quest.quest_type == QuestType::FreeHunt {
        totals
            .monsters_killed
            .iter()
            .map(|k| if k.is_boss { BOSS_KILL_BONUS_MONEY } else { KILL_BONUS_MONEY })
            .sum()
    } else {
        0
    };
    let item_multiplier = if modifiers.facilities.warehouse > 0 {
        WAREHOUSE_ITEM_VALUE_MULTIPLIER
    } else {
        1.0
    } * modifiers.market;
    let items: f64 = totals
        .items_found
        .iter()
        .map(|i| i.value as f64 * item_multiplier)
        .sum();
    ((base + bounties as f64 + items) * modifiers.reward).max(0.0).floor() as u32
}

/// Roll one member's fate from the damage they took.
///
/// Above the death threshold a death roll comes first. Anyone still standing
/// with damage above the injury threshold then takes the ordinary injury roll.
pub fn roll_member_status(effective_damage: f64, facilities: &Facilities, rng: &mut impl Rng) -> (MemberStatus, u32) {
    if effective_damage > DEATH_DAMAGE_THRESHOLD {
        let death_chance =
            (DEATH_CHANCE - facilities.infirmary as f64 * INFIRMARY_DEATH_REDUCTION_PER_LEVEL).max(0.0);
        if rng.gen::<f64>() < death_chance {
            return (MemberStatus::Dead, 0);
        }
    }
    if effective_damage > INJURY_DAMAGE_THRESHOLD && rng.gen::<f64>() < INJURY_CHANCE {
        let days = INJURY_BASE_RECOVERY_DAYS + (effective_damage / INJURY_DAMAGE_PER_RECOVERY_DAY) as u32;
        return (MemberStatus::Injured, days.min(INJURY_MAX_RECOVERY_DAYS));
    }
    (MemberStatus::Ok, 0)
}

/// Owns the injected random source and drives quest attempts through the
/// adventure simulator.
pub struct QuestService<R: Rng> {
    rng: R,
    simulator: AdventureSimulator,
    titles: Box<dyn TitleService>,
}

impl<R: Rng> QuestService<R> {
    pub fn new(rng: R) -> Self {
        Self::with_parts(rng, AdventureSimulator::default(), Box::new(RankTitles))
    }

    pub fn with_parts(rng: R, simulator: AdventureSimulator, titles: Box<dyn TitleService>) -> Self {
        Self { rng, simulator, titles }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn simulator(&self) -> &AdventureSimulator {
        &self.simulator
    }

    pub fn simulator_mut(&mut self) -> &mut AdventureSimulator {
        &mut self.simulator
    }

    pub fn generate_daily_quests(
        &mut self,
        day: u32,
        reputation: i64,
        facilities: &Facilities,
        next_id: &mut u32,
    ) -> Vec<Quest> {
        generate_daily_quests(day, reputation, facilities, self.simulator.bestiary(), next_id, &mut self.rng)
    }

    pub fn calculate_score(&self, quest: &Quest, adventurer: &Adventurer) -> f64 {
        scoring::calculate_score(quest, adventurer)
    }

    pub fn calculate_success_chance(&self, quest: &Quest, party: &[&Adventurer], modifiers: &QuestModifiers) -> f64 {
        scoring::calculate_success_chance(quest, party, modifiers)
    }

    /// Run every day of the quest, then settle success, member fates, growth,
    /// titles and money. Always returns an outcome.
    pub fn attempt_quest(
        &mut self,
        quest: &Quest,
        party: &mut [&mut Adventurer],
        modifiers: &QuestModifiers,
    ) -> QuestOutcome {
        let days = quest.days.max(1);
        let mut totals = DayResults::default();
        let mut logs = Vec::new();

        let success_chance = {
            let view: Vec<&Adventurer> = party.iter().map(|a| &**a).collect();
            let chance = self.calculate_success_chance(quest, &view, modifiers);
            for day in 1..=days {
                let outcome = self
                    .simulator
                    .simulate_day(quest, &view, day, days, modifiers, &mut self.rng);
                totals.battles += outcome.results.battles;
                totals.wins += outcome.results.wins;
                totals.damage_taken += outcome.results.damage_taken;
                totals.items_found.extend(outcome.results.items_found);
                totals.monsters_killed.extend(outcome.results.monsters_killed);
                logs.extend(outcome.logs.into_iter().map(|l| format!("[Day {day}] {l}")));
            }
            chance
        };

        let rolled = self.rng.gen::<f64>() < success_chance;
        let success = resolve_success(quest, &totals.monsters_killed, rolled);

        let avg_damage = if party.is_empty() {
            0.0
        } else {
            totals.damage_taken as f64 / party.len() as f64
        };
        let ctx = TitleContext {
            quest,
            kills: &totals.monsters_killed,
        };

        let mut member_results = Vec::with_capacity(party.len());
        let mut share_mod = 1.0;
        let mut penalty_mod = 1.0;
        for adventurer in party.iter_mut() {
            let hooks = adventurer.trait_hooks();
            share_mod *= hooks.guild_share;
            penalty_mod *= hooks.penalty;

            let damage = avg_damage * hooks.injury;
            let (status, recovery_days) = roll_member_status(damage, &modifiers.facilities, &mut self.rng);

            let rank = apply_rank_update(adventurer, quest, success, success_chance, modifiers, &mut self.rng);
            let stat_gains = apply_stat_growth(adventurer, quest, success, modifiers);

            if success {
                adventurer.records.quests_succeeded += 1;
            } else {
                adventurer.records.quests_failed += 1;
            }
            for kill in &totals.monsters_killed {
                adventurer.records.record_kill(KillRecord {
                    monster: kill.name.clone(),
                    rank: kill.rank,
                    is_boss: kill.is_boss,
                });
            }

            let title = if success && adventurer.title.is_none() {
                self.titles.offer(&ctx, adventurer)
            } else {
                None
            };
            if let Some(title) = &title {
                info!(adventurer = %adventurer.name, title = %title, "title granted");
                adventurer.title = Some(title.clone());
            }

            member_results.push(MemberResult {
                id: adventurer.id,
                name: adventurer.name.clone(),
                status,
                damage,
                recovery_days,
                rank,
                stat_gains,
                title,
            });
        }

        let reward = compute_reward(quest, success, &totals, modifiers);
        let effective_penalty = if success {
            0
        } else {
            (quest.penalty.money as f64 * penalty_mod * modifiers.penalty).max(0.0).floor() as u32
        };
        let reputation_delta = if success {
            quest.rewards.reputation
        } else {
            -quest.penalty.reputation
        };

        info!(
            quest = %quest.id,
            title = %quest.title,
            success,
            chance = success_chance,
            reward,
            penalty = effective_penalty,
            battles = totals.battles,
            "quest resolved"
        );

        QuestOutcome {
            quest_id: quest.id,
            success,
            success_chance,
            effective_penalty,
            reward,
            reputation_delta,
            effective_share_mod: share_mod,
            totals,
            member_results,
            logs,
        }
    }
}
