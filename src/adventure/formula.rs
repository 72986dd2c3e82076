//! Combat power and battle odds.
//!
//! The simulator resolves every battle through a [`CombatFormula`], so balance
//! experiments can swap in a different strategy object instead of patching the
//! standard one.

use super::encounter::Encounter;
use crate::adventurer::{Adventurer, StatType};
use crate::core::constants::*;
use crate::quest::rank_power;
use serde::{Deserialize, Serialize};

/// Tunable numbers behind [`StandardFormula`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaParams {
    /// Weight of STR, VIT, DEX and MAG in combat power
    pub primary_weight: f64,
    /// Weight of INT and CHA in combat power
    pub secondary_weight: f64,
    pub equipment_bonus: f64,
    pub arts_bonus: f64,
    /// Extra party power per member beyond the first
    pub party_bonus: f64,
    pub win_rate_base: f64,
    pub win_rate_divisor: f64,
    pub win_rate_min: f64,
    pub win_rate_max: f64,
    pub damage_factor: f64,
}

impl Default for FormulaParams {
    fn default() -> Self {
        Self {
            primary_weight: CP_PRIMARY_WEIGHT,
            secondary_weight: CP_SECONDARY_WEIGHT,
            equipment_bonus: CP_EQUIPMENT_BONUS_PER_RANK,
            arts_bonus: CP_ARTS_BONUS_PER_ART,
            party_bonus: PARTY_SIZE_BONUS_PER_MEMBER,
            win_rate_base: WIN_RATE_BASE,
            win_rate_divisor: WIN_RATE_POWER_DIVISOR,
            win_rate_min: WIN_RATE_MIN,
            win_rate_max: WIN_RATE_MAX,
            damage_factor: BATTLE_DAMAGE_FACTOR,
        }
    }
}

/// Strategy for turning a party and an encounter into battle odds.
pub trait CombatFormula {
    fn adventurer_power(&self, adventurer: &Adventurer) -> f64;

    fn party_power(&self, party: &[&Adventurer]) -> f64;

    fn enemy_power(&self, encounter: &Encounter) -> f64;

    /// Final win chance. `trait_factor` is the party's combined trait hooks and
    /// `modifier` the caller's win-rate multiplier.
    fn win_rate(&self, party_power: f64, enemy_power: f64, trait_factor: f64, modifier: f64) -> f64;

    /// Raw damage before danger/injury modifiers. `roll` is uniform in [0.5, 1.5).
    fn damage(&self, enemy_power: f64, win_rate: f64, roll: f64) -> f64;
}

/// The formula the game ships with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StandardFormula {
    pub params: FormulaParams,
}

impl StandardFormula {
    pub fn new(params: FormulaParams) -> Self {
        Self { params }
    }

    fn clamp(&self, rate: f64) -> f64 {
        rate.clamp(self.params.win_rate_min, self.params.win_rate_max)
    }
}

impl CombatFormula for StandardFormula {
    fn adventurer_power(&self, adventurer: &Adventurer) -> f64 {
        let s = &adventurer.stats;
        let primary = s.get(StatType::Str) + s.get(StatType::Vit) + s.get(StatType::Dex) + s.get(StatType::Mag);
        let secondary = s.get(StatType::Int) + s.get(StatType::Cha);
        let raw = primary * self.params.primary_weight + secondary * self.params.secondary_weight;

        let equipment = if adventurer.equipment.is_empty() {
            adventurer.equipment_level
        } else {
            adventurer.equipment_rank_sum()
        };
        raw * (1.0 + equipment as f64 * self.params.equipment_bonus)
            * (1.0 + adventurer.arts.len() as f64 * self.params.arts_bonus)
    }

    fn party_power(&self, party: &[&Adventurer]) -> f64 {
        if party.is_empty() {
            return 0.0;
        }
        let total: f64 = party.iter().map(|a| self.adventurer_power(a)).sum();
        let average = total / party.len() as f64;
        average * (1.0 + self.params.party_bonus * (party.len() - 1) as f64)
    }

    fn enemy_power(&self, encounter: &Encounter) -> f64 {
        if let Some(power) = encounter.fixed_power {
            return power;
        }
        rank_power(encounter.rank) * encounter.power_multiplier()
    }

    fn win_rate(&self, party_power: f64, enemy_power: f64, trait_factor: f64, modifier: f64) -> f64 {
        let p = self.params;
        let base = self.clamp(p.win_rate_base + (party_power - enemy_power) / p.win_rate_divisor);
        self.clamp(base * trait_factor * modifier)
    }

    fn damage(&self, enemy_power: f64, win_rate: f64, roll: f64) -> f64 {
        enemy_power * (1.0 - win_rate) * self.params.damage_factor * roll
    }
}

/// Named formula presets for A/B runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormulaKind {
    #[default]
    Standard,
    /// No bonus for party size beyond averaging
    Flat,
}

impl FormulaKind {
    pub fn name(&self) -> &'static str {
        match self {
            FormulaKind::Standard => "standard",
            FormulaKind::Flat => "flat",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Some(FormulaKind::Standard),
            "flat" => Some(FormulaKind::Flat),
            _ => None,
        }
    }

    pub fn params(&self) -> FormulaParams {
        match self {
            FormulaKind::Standard => FormulaParams::default(),
            FormulaKind::Flat => FormulaParams {
                party_bonus: 0.0,
                ..FormulaParams::default()
            },
        }
    }

    pub fn build(&self) -> Box<dyn CombatFormula> {
        Box::new(StandardFormula::new(self.params()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::{
        AdventurerId, EquipmentCategory, EquipmentItem, Job, JoinType, Origin, RankLabel, Stats,
    };
    use crate::bestiary::MonsterCategory;

    fn fighter(value: f64) -> Adventurer {
        Adventurer::new(
            AdventurerId(1),
            "Tester".to_string(),
            Job::Warrior,
            Origin::Central,
            JoinType::Local,
            0.0,
            Stats::uniform(value),
        )
    }

    fn monster(rank: RankLabel, categories: Vec<MonsterCategory>, is_boss: bool) -> Encounter {
        Encounter {
            name: "Target".to_string(),
            rank,
            categories,
            main_type: None,
            is_boss,
            fixed_power: None,
        }
    }

    #[test]
    fn test_adventurer_power_weights() {
        let formula = StandardFormula::default();
        // 4 primaries * 10 + 2 secondaries * 10 * 0.5
        assert!((formula.adventurer_power(&fighter(10.0)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_equipment_and_arts_multiply_power() {
        let formula = StandardFormula::default();
        let mut adv = fighter(10.0);
        adv.equipment_level = 5;
        assert!((formula.adventurer_power(&adv) - 55.0).abs() < 1e-9);

        // Item ranks take over from the legacy level once anything is equipped
        adv.equip(EquipmentItem {
            name: "Bronze Sword".to_string(),
            category: EquipmentCategory::Weapon,
            rank: RankLabel::E,
        });
        assert!((formula.adventurer_power(&adv) - 51.0).abs() < 1e-9);

        adv.arts.push("Power Strike".to_string());
        assert!((formula.adventurer_power(&adv) - 51.0 * 1.06).abs() < 1e-9);
    }

    #[test]
    fn test_party_power_size_bonus() {
        let formula = StandardFormula::default();
        let a = fighter(10.0);
        let b = fighter(30.0);
        // average 100, three members -> * 1.2
        let c = fighter(20.0);
        let power = formula.party_power(&[&a, &b, &c]);
        assert!((power - 100.0 * 1.2).abs() < 1e-9);

        let flat = StandardFormula::new(FormulaKind::Flat.params());
        assert!((flat.party_power(&[&a, &b, &c]) - 100.0).abs() < 1e-9);
        assert_eq!(formula.party_power(&[]), 0.0);
    }

    #[test]
    fn test_enemy_power_categories() {
        let formula = StandardFormula::default();
        let plain = monster(RankLabel::C, vec![], false);
        assert_eq!(formula.enemy_power(&plain), 120.0);

        let tough = monster(RankLabel::C, vec![MonsterCategory::Tough], false);
        assert!((formula.enemy_power(&tough) - 144.0).abs() < 1e-9);

        let mid = monster(RankLabel::C, vec![MonsterCategory::MidTier], false);
        assert!((formula.enemy_power(&mid) - 132.0).abs() < 1e-9);

        // Boss takes precedence over other categories
        let boss = monster(RankLabel::C, vec![MonsterCategory::Tough], true);
        assert!((formula.enemy_power(&boss) - 180.0).abs() < 1e-9);

        let mut fixed = monster(RankLabel::C, vec![], true);
        fixed.fixed_power = Some(99.0);
        assert_eq!(formula.enemy_power(&fixed), 99.0);
    }

    #[test]
    fn test_win_rate_double_clamp() {
        let formula = StandardFormula::default();
        // Overwhelming party clamps to 0.95 before modifiers, then again after
        assert_eq!(formula.win_rate(1000.0, 10.0, 2.0, 1.0), 0.95);
        // Hopeless party floors at 0.05 even with a heavy penalty
        assert_eq!(formula.win_rate(0.0, 1000.0, 0.5, 0.5), 0.05);
        // Even fight sits at the base rate
        assert!((formula.win_rate(100.0, 100.0, 1.0, 1.0) - 0.5).abs() < 1e-9);
        // Clamping happens before scaling: 0.95 * 0.5, not 10.5 * 0.5
        assert!((formula.win_rate(600.0, 100.0, 0.5, 1.0) - 0.475).abs() < 1e-9);
    }

    #[test]
    fn test_win_rate_always_in_bounds() {
        let formula = StandardFormula::default();
        for party in [0.0, 10.0, 100.0, 500.0, 5000.0] {
            for enemy in [0.0, 50.0, 300.0, 450.0] {
                for factor in [0.1, 0.9, 1.0, 1.3, 5.0] {
                    let rate = formula.win_rate(party, enemy, factor, 1.0);
                    assert!((0.05..=0.95).contains(&rate));
                }
            }
        }
    }

    #[test]
    fn test_damage() {
        let formula = StandardFormula::default();
        assert!((formula.damage(100.0, 0.5, 1.0) - 15.0).abs() < 1e-9);
        assert_eq!(formula.damage(100.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_formula_kind_parse() {
        assert_eq!(FormulaKind::parse("Flat"), Some(FormulaKind::Flat));
        assert_eq!(FormulaKind::parse("standard"), Some(FormulaKind::Standard));
        assert_eq!(FormulaKind::parse("bogus"), None);
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: FormulaParams = serde_json::from_str(r#"{"party_bonus": 0.25}"#).unwrap();
        assert_eq!(params.party_bonus, 0.25);
        assert_eq!(params.damage_factor, BATTLE_DAMAGE_FACTOR);
    }
}
