//! One day of a quest: encounters, battles, gathering and the day's log.

use super::encounter::{generate_encounter, tournament_opponent, Encounter};
use super::formula::{CombatFormula, StandardFormula};
use super::narrative;
use super::rates::{apply_probabilistic_mod, resolve_rate};
use crate::adventurer::{Adventurer, RankLabel};
use crate::bestiary::{material_pool, material_value, Bestiary, Region};
use crate::core::constants::*;
use crate::core::QuestModifiers;
use crate::quest::{Quest, QuestType};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Relative pick weight of rare items while gathering.
const RARE_ITEM_WEIGHT: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSource {
    Drop,
    Gathered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundItem {
    pub name: String,
    pub rank: RankLabel,
    pub value: u32,
    pub is_rare: bool,
    pub source: ItemSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KilledMonster {
    pub name: String,
    pub rank: RankLabel,
    pub is_boss: bool,
}

/// Tallies for one simulated day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayResults {
    pub battles: u32,
    pub wins: u32,
    pub damage_taken: u32,
    pub items_found: Vec<FoundItem>,
    pub monsters_killed: Vec<KilledMonster>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayOutcome {
    pub results: DayResults,
    pub logs: Vec<String>,
}

/// Result of a single battle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattleOutcome {
    pub won: bool,
    pub win_rate: f64,
    pub party_power: f64,
    pub enemy_power: f64,
    pub damage: u32,
}

/// Runs quest days against the monster and item catalogs.
///
/// Holds no state between calls beyond the catalogs and the combat formula;
/// randomness is borrowed from the caller.
pub struct AdventureSimulator {
    bestiary: Bestiary,
    formula: Box<dyn CombatFormula>,
}

impl Default for AdventureSimulator {
    fn default() -> Self {
        Self::new(Bestiary::standard())
    }
}

impl AdventureSimulator {
    pub fn new(bestiary: Bestiary) -> Self {
        Self::with_formula(bestiary, Box::new(StandardFormula::default()))
    }

    pub fn with_formula(bestiary: Bestiary, formula: Box<dyn CombatFormula>) -> Self {
        Self { bestiary, formula }
    }

    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    pub fn formula(&self) -> &dyn CombatFormula {
        self.formula.as_ref()
    }

    /// Swap the combat formula, e.g. for an A/B balance run.
    pub fn set_formula(&mut self, formula: Box<dyn CombatFormula>) {
        self.formula = formula;
    }

    /// Fight one encounter. Damage is taken whether or not the party wins.
    pub fn resolve_battle(
        &self,
        party: &[&Adventurer],
        encounter: &Encounter,
        modifiers: &QuestModifiers,
        rng: &mut impl Rng,
    ) -> BattleOutcome {
        let party_power = self.formula.party_power(party);
        let enemy_power = self.formula.enemy_power(encounter);
        let trait_factor: f64 = party
            .iter()
            .map(|a| {
                let hooks = a.trait_hooks();
                if a.job.is_magic() {
                    hooks.win_rate * hooks.magic_win_rate
                } else {
                    hooks.win_rate
                }
            })
            .product();
        let win_rate = self
            .formula
            .win_rate(party_power, enemy_power, trait_factor, modifiers.win_rate);
        let won = rng.gen::<f64>() < win_rate;

        let roll = rng.gen_range(0.5..1.5);
        let raw = self.formula.damage(enemy_power, win_rate, roll) * modifiers.danger * modifiers.injury;
        let damage = raw.max(0.0).floor() as u32;

        BattleOutcome {
            won,
            win_rate,
            party_power,
            enemy_power,
            damage,
        }
    }

    /// Simulate day `day_index` (1-based) of a `total_days` quest.
    pub fn simulate_day(
        &self,
        quest: &Quest,
        party: &[&Adventurer],
        day_index: u32,
        total_days: u32,
        modifiers: &QuestModifiers,
        rng: &mut impl Rng,
    ) -> DayOutcome {
        let spec = quest.spec();
        let region = Region::from_title(&quest.title);
        let is_tournament = quest.is_tournament || quest.quest_type == QuestType::Tournament;
        let mut results = DayResults::default();
        let mut logs = Vec::new();

        // Opening, flavor and events
        if day_index <= 1 {
            logs.push(narrative::intro_line(quest, region));
        } else {
            logs.push(narrative::environment_line(region, rng));
        }
        if rng.gen::<f64>() < TRAIT_FLAVOR_CHANCE {
            if let Some(line) = narrative::trait_flavor_line(party, rng) {
                logs.push(line);
            }
        }
        if rng.gen::<f64>() < RANDOM_EVENT_CHANCE {
            let (line, damage) = narrative::random_event(rng);
            results.damage_taken += damage;
            logs.push(line);
        }

        // Battles
        let (battle_hooks, gather_hooks) = party.iter().fold((1.0, 1.0), |(b, g), a| {
            let hooks = a.trait_hooks();
            (b * hooks.battle_rate, g * hooks.gather_rate)
        });
        let mut battles = apply_probabilistic_mod(
            resolve_rate(spec.rates.battle, rng),
            battle_hooks * modifiers.battle_rate,
            rng,
        );
        let boss_day = quest.is_scheduled_boss_day(day_index, total_days)
            || spec.boss_modifier.is_some_and(|p| rng.gen::<f64>() < p);
        if boss_day {
            battles = battles.max(1);
        }

        for i in 0..battles {
            let is_boss = boss_day && i + 1 == battles;
            let encounter = if is_tournament {
                tournament_opponent(quest, region, day_index, is_boss, rng)
            } else {
                generate_encounter(
                    &self.bestiary,
                    region,
                    quest.rank(),
                    is_boss,
                    quest.boss_target.as_deref(),
                    rng,
                )
            };
            logs.push(narrative::encounter_line(&encounter));

            let outcome = self.resolve_battle(party, &encounter, modifiers, rng);
            results.battles += 1;
            results.damage_taken += outcome.damage;
            logs.push(narrative::battle_result_line(&encounter, outcome.won, outcome.damage));
            if !outcome.won {
                continue;
            }

            results.wins += 1;
            results.monsters_killed.push(KilledMonster {
                name: encounter.name.clone(),
                rank: encounter.rank,
                is_boss: encounter.is_boss,
            });
            if is_tournament {
                continue;
            }
            if let Some(item) = roll_drop(&encounter, rng) {
                logs.push(narrative::item_line(&item.name, item.value, item.is_rare));
                results.items_found.push(item);
            }
        }

        // Gathering
        let gathers = apply_probabilistic_mod(
            resolve_rate(spec.rates.gather, rng),
            gather_hooks * modifiers.gather_rate,
            rng,
        );
        for _ in 0..gathers {
            if let Some(item) = self.gather_item(region, quest.rank(), rng) {
                logs.push(narrative::item_line(&item.name, item.value, item.is_rare));
                results.items_found.push(item);
            }
        }

        if day_index > 1 && logs.len() <= 1 {
            logs.push(narrative::filler_line(rng));
        }

        debug!(
            quest = %quest.id,
            day = day_index,
            battles = results.battles,
            wins = results.wins,
            damage = results.damage_taken,
            items = results.items_found.len(),
            "simulated quest day"
        );
        DayOutcome { results, logs }
    }

    fn gather_item(&self, region: Region, rank: RankLabel, rng: &mut impl Rng) -> Option<FoundItem> {
        let pool = self.bestiary.item_pool(region, rank)?;
        let entry = pool
            .choose_weighted(rng, |i| if i.is_rare { RARE_ITEM_WEIGHT } else { 1.0 })
            .ok()?;
        Some(FoundItem {
            name: entry.name.clone(),
            rank: entry.rank,
            value: entry.value.unwrap_or_else(|| material_value(entry.rank)),
            is_rare: entry.is_rare,
            source: ItemSource::Gathered,
        })
    }
}

/// Material dropped by a defeated monster, keyed by its creature family.
fn roll_drop(encounter: &Encounter, rng: &mut impl Rng) -> Option<FoundItem> {
    let main_type = encounter.main_type?;
    let name = material_pool(main_type).choose(rng)?;
    let multiplier = if encounter.is_boss { BOSS_DROP_VALUE_MULTIPLIER } else { 1 };
    Some(FoundItem {
        name: name.to_string(),
        rank: encounter.rank,
        value: material_value(encounter.rank) * multiplier,
        is_rare: false,
        source: ItemSource::Drop,
    })
}
