//! Picking who the party fights.

use crate::adventurer::recruit::random_name;
use crate::adventurer::{Job, RankLabel};
use crate::bestiary::{Bestiary, MainType, MonsterCategory, MonsterEntry, Region};
use crate::core::constants::*;
use crate::quest::{rank_power, Quest};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Name used when the catalog has nothing at all to offer.
pub const PLACEHOLDER_MONSTER: &str = "Unknown Shadow";

const TEAM_NAMES: &[&str] = &[
    "Silver Lances",
    "Iron Wolves",
    "Crimson Blades",
    "Azure Guard",
    "Golden Hawks",
    "Black Ravens",
];

/// A single opponent for one battle.
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub name: String,
    pub rank: RankLabel,
    pub categories: Vec<MonsterCategory>,
    pub main_type: Option<MainType>,
    pub is_boss: bool,
    /// Set for synthesized opponents whose power does not come from the rank table
    pub fixed_power: Option<f64>,
}

impl Encounter {
    fn from_entry(entry: &MonsterEntry, is_boss: bool) -> Self {
        Self {
            name: entry.name.clone(),
            rank: entry.rank,
            categories: entry.categories.clone(),
            main_type: entry.main_type,
            is_boss,
            fixed_power: None,
        }
    }

    fn placeholder(rank: RankLabel, is_boss: bool) -> Self {
        Self {
            name: PLACEHOLDER_MONSTER.to_string(),
            rank,
            categories: Vec::new(),
            main_type: None,
            is_boss,
            fixed_power: None,
        }
    }

    /// Enemy power multiplier. Boss encounters win over Tough, Tough over
    /// MidTier. A Boss-category monster met as a regular encounter gets no
    /// boss multiplier.
    pub fn power_multiplier(&self) -> f64 {
        if self.is_boss {
            BOSS_POWER_MULTIPLIER
        } else if self.categories.contains(&MonsterCategory::Tough) {
            TOUGH_POWER_MULTIPLIER
        } else if self.categories.contains(&MonsterCategory::MidTier) {
            MID_TIER_POWER_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn is_opponent(&self) -> bool {
        self.fixed_power.is_some()
    }
}

/// Draw a monster from the catalog for `region` at `rank`.
///
/// Boss encounters prefer Boss-category monsters and take the quest's
/// `boss_target` name when one is given. Regular encounters skip bosses.
pub fn generate_encounter(
    bestiary: &Bestiary,
    region: Region,
    rank: RankLabel,
    is_boss: bool,
    boss_target: Option<&str>,
    rng: &mut impl Rng,
) -> Encounter {
    let Some(pool) = bestiary.monster_pool(region, rank) else {
        warn!(region = region.name(), rank = %rank, "no monsters in catalog, using placeholder");
        let mut encounter = Encounter::placeholder(rank, is_boss);
        if let (true, Some(target)) = (is_boss, boss_target) {
            encounter.name = target.to_string();
        }
        return encounter;
    };

    let filtered: Vec<&MonsterEntry> = pool
        .iter()
        .copied()
        .filter(|m| m.is_boss_category() == is_boss)
        .collect();
    let candidates = if filtered.is_empty() { &pool } else { &filtered };

    let mut encounter = match candidates.choose(rng) {
        Some(entry) => Encounter::from_entry(entry, is_boss),
        None => Encounter::placeholder(rank, is_boss),
    };
    if is_boss {
        if let Some(target) = boss_target {
            encounter.name = target.to_string();
        }
    }
    encounter
}

/// Power multiplier for a tournament round.
pub fn tournament_multiplier(day_index: u32, is_final: bool) -> f64 {
    if is_final {
        return TOURNAMENT_FINAL_MULTIPLIER;
    }
    match day_index {
        0 | 1 => 1.0,
        2 => TOURNAMENT_DAY2_MULTIPLIER,
        _ => TOURNAMENT_DAY3_MULTIPLIER,
    }
}

/// Synthesize a human opponent for a tournament round. Solo entries face a
/// single fighter; parties face a regional guild team.
pub fn tournament_opponent(
    quest: &Quest,
    region: Region,
    day_index: u32,
    is_final: bool,
    rng: &mut impl Rng,
) -> Encounter {
    let name = if quest.party_size <= 1 {
        let job = Job::ALL.choose(rng).copied().unwrap_or(Job::Warrior);
        format!("{} the {}", random_name(rng), job.name())
    } else {
        let team = TEAM_NAMES.choose(rng).copied().unwrap_or("Wanderers");
        format!("{} {}", region.adjective(), team)
    };
    let rank = quest.rank();
    Encounter {
        name,
        rank,
        categories: Vec::new(),
        main_type: None,
        is_boss: is_final,
        fixed_power: Some(rank_power(rank) * tournament_multiplier(day_index, is_final)),
    }
}
