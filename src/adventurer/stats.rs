use super::origin::Origin;
use crate::core::constants::{
    FOREIGN_LUCK_BONUS, FOREIGN_LUCK_CHANCE, STAT_MIN_SUM_MAX_ITERATIONS, STAT_MIN_SUM_RATIO,
    STAT_RANK_FACTOR_BASE, STAT_RANK_FACTOR_EXPONENT, STAT_RANK_FACTOR_SCALE, STAT_VARIANCE_BASE,
    STAT_VARIANCE_RANK_SLOPE,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const NUM_STATS: usize = 6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatType {
    Str,
    Vit,
    Mag,
    Dex,
    Int,
    Cha,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Str,
            StatType::Vit,
            StatType::Mag,
            StatType::Dex,
            StatType::Int,
            StatType::Cha,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatType::Str => "STR",
            StatType::Vit => "VIT",
            StatType::Mag => "MAG",
            StatType::Dex => "DEX",
            StatType::Int => "INT",
            StatType::Cha => "CHA",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Str => 0,
            StatType::Vit => 1,
            StatType::Mag => 2,
            StatType::Dex => 3,
            StatType::Int => 4,
            StatType::Cha => 5,
        }
    }
}

/// Six combat stats. Values are real numbers: generation rounds them, but
/// quest growth adds fractional increments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Stats {
    values: [f64; NUM_STATS],
}

impl Stats {
    pub fn new(str: f64, vit: f64, mag: f64, dex: f64, int: f64, cha: f64) -> Self {
        Self {
            values: [str, vit, mag, dex, int, cha],
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self {
            values: [value; NUM_STATS],
        }
    }

    pub fn get(&self, stat: StatType) -> f64 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatType, value: f64) {
        self.values[stat.index()] = value;
    }

    pub fn add(&mut self, stat: StatType, amount: f64) {
        self.values[stat.index()] += amount;
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// The stat with the smallest value (first one wins ties).
    pub fn lowest(&self) -> StatType {
        let mut lowest = StatType::Str;
        for stat in StatType::all() {
            if self.get(stat) < self.get(lowest) {
                lowest = stat;
            }
        }
        lowest
    }
}

/// Normalised rank position used by stat formulas, clamped to [0, 1].
fn rank_t(rank_value: f64) -> f64 {
    (rank_value / 1000.0).clamp(0.0, 1.0)
}

/// Stat scale for a rank: 0.88 at rank 0 rising to 1.58 at rank 1000.
pub fn rank_factor(rank_value: f64) -> f64 {
    STAT_RANK_FACTOR_BASE + STAT_RANK_FACTOR_SCALE * rank_t(rank_value).powf(STAT_RANK_FACTOR_EXPONENT)
}

/// Relative stat noise for a rank. Higher ranks are more consistent.
pub fn variance_rate(rank_value: f64) -> f64 {
    STAT_VARIANCE_BASE - STAT_VARIANCE_RANK_SLOPE * rank_t(rank_value)
}

/// The sum a freshly generated stat block must reach.
pub fn minimum_stat_sum(job_base: &Stats, rank_value: f64) -> f64 {
    job_base.sum() * rank_factor(rank_value) * STAT_MIN_SUM_RATIO
}

/// Generate a stat block from a job's base table.
///
/// Each stat is scaled by the rank factor, perturbed by the rank's variance,
/// shifted by the origin's flat modifier, rounded, and floored at 1. Foreign
/// adventurers roll a separate 20% chance per stat for +3. If the total falls
/// short of [`minimum_stat_sum`], the lowest stat is raised one point at a time
/// (at most 20 times).
pub fn generate_stats(job_base: &Stats, origin: Origin, rank_value: f64, rng: &mut impl Rng) -> Stats {
    let factor = rank_factor(rank_value);
    let variance = variance_rate(rank_value);
    let origin_mods = origin.stat_modifiers();

    let mut stats = Stats::default();
    for stat in StatType::all() {
        let mut value = job_base.get(stat) * factor;
        value += value * variance * rng.gen_range(-1.0..=1.0);
        value += origin_mods.get(stat);
        if origin.is_foreign() && rng.gen::<f64>() < FOREIGN_LUCK_CHANCE {
            value += FOREIGN_LUCK_BONUS;
        }
        stats.set(stat, value.round().max(1.0));
    }

    let min_sum = minimum_stat_sum(job_base, rank_value);
    let mut iterations = 0;
    while stats.sum() < min_sum && iterations < STAT_MIN_SUM_MAX_ITERATIONS {
        let lowest = stats.lowest();
        stats.add(lowest, 1.0);
        iterations += 1;
    }

    stats
}
