use super::jobs::Job;
use super::origin::{JoinType, Origin};
use super::rank::{clamp_rank_value, RankLabel};
use super::stats::Stats;
use super::traits::{TraitHooks, TraitId};
use crate::core::constants::{
    FIRST_ART_RANK, HISTORY_MAX_ENTRIES, RECORD_TOP_N, SECOND_ART_RANK,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of an adventurer in the guild roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdventurerId(pub u32);

impl fmt::Display for AdventurerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdventurerState {
    Idle,
    Planning,
    Questing,
}

/// Personality leanings in [-2, 2] that bias auto-pick scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Temperament {
    pub risk: i8,
    pub greed: i8,
    pub social: i8,
}

impl Temperament {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            risk: rng.gen_range(-2..=2),
            greed: rng.gen_range(-2..=2),
            social: rng.gen_range(-2..=2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCategory {
    Weapon,
    Armor,
    Accessory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    pub category: EquipmentCategory,
    pub rank: RankLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub quest_title: String,
    pub rank: RankLabel,
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillRecord {
    pub monster: String,
    pub rank: RankLabel,
    pub is_boss: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    pub kills: u32,
    pub boss_kills: u32,
    pub quests_succeeded: u32,
    pub quests_failed: u32,
    /// Best quest successes, highest rank first
    pub top_achievements: Vec<AchievementRecord>,
    /// Most notable kills, highest rank first (bosses ahead on ties)
    pub top_kills: Vec<KillRecord>,
}

impl Records {
    pub fn record_achievement(&mut self, record: AchievementRecord) {
        self.top_achievements.push(record);
        self.top_achievements.sort_by(|a, b| b.rank.cmp(&a.rank));
        self.top_achievements.truncate(RECORD_TOP_N);
    }

    pub fn record_kill(&mut self, record: KillRecord) {
        self.kills += 1;
        if record.is_boss {
            self.boss_kills += 1;
        }
        self.top_kills.push(record);
        self.top_kills
            .sort_by(|a, b| b.rank.cmp(&a.rank).then(b.is_boss.cmp(&a.is_boss)));
        self.top_kills.truncate(RECORD_TOP_N);
    }

    pub fn quests_total(&self) -> u32 {
        self.quests_succeeded + self.quests_failed
    }
}

/// What changed after a rank update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankUpdate {
    pub delta_applied: f64,
    pub learned_arts: Vec<String>,
    pub label_changed: bool,
}

/// One guild member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adventurer {
    pub id: AdventurerId,
    pub name: String,
    pub job: Job,
    pub origin: Origin,
    pub join_type: JoinType,

    rank_value: f64,
    rank_label: RankLabel,
    /// Moving average of success-vs-expectation surprise
    pub perf_ema: f64,

    pub stats: Stats,
    pub temperament: Temperament,
    pub traits: Vec<TraitId>,
    pub arts: Vec<String>,

    pub state: AdventurerState,
    pub recovery_days: u32,

    pub trust: i32,
    pub personal_money: i64,
    pub equipment_level: u32,
    pub equipment: Vec<EquipmentItem>,
    pub records: Records,
    pub history: Vec<String>,
    pub title: Option<String>,
    /// Presentation blurb, rewritten when the rank label changes
    pub intro: String,
}

impl Adventurer {
    /// Build an adventurer with the given rank and stats. Arts are not granted
    /// here; call [`Adventurer::update_rank`] with 0 to catch up.
    pub fn new(
        id: AdventurerId,
        name: String,
        job: Job,
        origin: Origin,
        join_type: JoinType,
        rank_value: f64,
        stats: Stats,
    ) -> Self {
        let rank_value = clamp_rank_value(rank_value);
        let mut adventurer = Self {
            id,
            name,
            job,
            origin,
            join_type,
            rank_value,
            rank_label: RankLabel::from_value(rank_value),
            perf_ema: 0.0,
            stats,
            temperament: Temperament::default(),
            traits: Vec::new(),
            arts: Vec::new(),
            state: AdventurerState::Idle,
            recovery_days: 0,
            trust: 0,
            personal_money: 0,
            equipment_level: 0,
            equipment: Vec::new(),
            records: Records::default(),
            history: Vec::new(),
            title: None,
            intro: String::new(),
        };
        adventurer.refresh_intro();
        adventurer
    }

    pub fn rank_value(&self) -> f64 {
        self.rank_value
    }

    pub fn rank_label(&self) -> RankLabel {
        self.rank_label
    }

    /// Overwrite the rank value without triggering art unlocks.
    pub fn set_rank_value(&mut self, rank_value: f64) {
        self.rank_value = clamp_rank_value(rank_value);
        let label = RankLabel::from_value(self.rank_value);
        if label != self.rank_label {
            self.rank_label = label;
            self.refresh_intro();
        }
    }

    /// Apply a rank delta, clamped to [0, 9999].
    ///
    /// Reaching 380 with no arts teaches one; reaching 1000 with fewer than two
    /// teaches another. Arts are drawn from the job's list without
    /// replacement.
    pub fn update_rank(&mut self, delta: f64, rng: &mut impl Rng) -> RankUpdate {
        let before = self.rank_value;
        self.rank_value = clamp_rank_value(self.rank_value + delta);

        let mut learned_arts = Vec::new();
        if self.rank_value >= FIRST_ART_RANK && self.arts.is_empty() {
            learned_arts.extend(self.learn_random_art(rng));
        }
        if self.rank_value >= SECOND_ART_RANK && self.arts.len() < 2 {
            learned_arts.extend(self.learn_random_art(rng));
        }

        let new_label = RankLabel::from_value(self.rank_value);
        let label_changed = new_label != self.rank_label;
        self.rank_label = new_label;
        if label_changed {
            self.refresh_intro();
        }

        RankUpdate {
            delta_applied: self.rank_value - before,
            learned_arts,
            label_changed,
        }
    }

    fn learn_random_art(&mut self, rng: &mut impl Rng) -> Option<String> {
        let unseen: Vec<&'static str> = self
            .job
            .arts()
            .iter()
            .copied()
            .filter(|art| !self.arts.iter().any(|known| known == art))
            .collect();
        let art = unseen.choose(rng)?.to_string();
        self.arts.push(art.clone());
        Some(art)
    }

    fn refresh_intro(&mut self) {
        self.intro = format!(
            "{} the {}-rank {} from the {} lands.",
            self.name,
            self.rank_label,
            self.job.name(),
            self.origin.name()
        );
    }

    /// Free to take a quest: idle and not recovering.
    pub fn is_available(&self) -> bool {
        self.state == AdventurerState::Idle && self.recovery_days == 0
    }

    /// Count down injury recovery by one day.
    pub fn tick_recovery(&mut self) {
        self.recovery_days = self.recovery_days.saturating_sub(1);
    }

    /// Equip an item. A new weapon or armor replaces the old one of the same
    /// category; accessories stack.
    pub fn equip(&mut self, item: EquipmentItem) -> Option<EquipmentItem> {
        let replaced = match item.category {
            EquipmentCategory::Weapon | EquipmentCategory::Armor => self
                .equipment
                .iter()
                .position(|e| e.category == item.category)
                .map(|idx| self.equipment.remove(idx)),
            EquipmentCategory::Accessory => None,
        };
        self.equipment.push(item);
        replaced
    }

    /// Sum of equipped item rank values (E=1 .. S=6).
    pub fn equipment_rank_sum(&self) -> u32 {
        self.equipment
            .iter()
            .map(|e| e.rank.quest_rank_value() as u32)
            .sum()
    }

    /// Product of every trait's hooks, field by field.
    pub fn trait_hooks(&self) -> TraitHooks {
        let mut combined = TraitHooks::default();
        for t in &self.traits {
            let h = t.hooks();
            combined.battle_rate *= h.battle_rate;
            combined.gather_rate *= h.gather_rate;
            combined.win_rate *= h.win_rate;
            combined.magic_win_rate *= h.magic_win_rate;
            combined.injury *= h.injury;
            combined.penalty *= h.penalty;
            combined.guild_share *= h.guild_share;
        }
        combined
    }

    pub fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > HISTORY_MAX_ENTRIES {
            let overflow = self.history.len() - HISTORY_MAX_ENTRIES;
            self.history.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make(rank: f64) -> Adventurer {
        Adventurer::new(
            AdventurerId(1),
            "Aldric".to_string(),
            Job::Warrior,
            Origin::Central,
            JoinType::Local,
            rank,
            Stats::uniform(10.0),
        )
    }

    #[test]
    fn test_new_clamps_rank_and_sets_label() {
        let adv = make(12000.0);
        assert_eq!(adv.rank_value(), 9999.0);
        assert_eq!(adv.rank_label(), RankLabel::S);
        assert!(adv.intro.contains("S-rank"));
    }

    #[test]
    fn test_update_rank_clamps() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut adv = make(10.0);
        let update = adv.update_rank(-50.0, &mut rng);
        assert_eq!(adv.rank_value(), 0.0);
        assert_eq!(update.delta_applied, -10.0);

        adv.update_rank(20000.0, &mut rng);
        assert_eq!(adv.rank_value(), 9999.0);
    }

    #[test]
    fn test_update_rank_label_change() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut adv = make(70.0);
        let update = adv.update_rank(5.0, &mut rng);
        assert!(!update.label_changed);
        let update = adv.update_rank(5.0, &mut rng);
        assert!(update.label_changed);
        assert_eq!(adv.rank_label(), RankLabel::D);
        assert!(adv.intro.contains("D-rank"));
    }

    #[test]
    fn test_arts_gate_is_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut adv = make(370.0);
        adv.update_rank(15.0, &mut rng);
        assert_eq!(adv.arts.len(), 1);
        for _ in 0..20 {
            adv.update_rank(0.0, &mut rng);
        }
        assert_eq!(adv.arts.len(), 1);

        adv.update_rank(700.0, &mut rng);
        assert_eq!(adv.arts.len(), 2);
        for _ in 0..20 {
            adv.update_rank(0.0, &mut rng);
        }
        assert_eq!(adv.arts.len(), 2);
        assert_ne!(adv.arts[0], adv.arts[1]);
    }

    #[test]
    fn test_availability() {
        let mut adv = make(0.0);
        assert!(adv.is_available());
        adv.recovery_days = 2;
        assert!(!adv.is_available());
        adv.tick_recovery();
        adv.tick_recovery();
        assert!(adv.is_available());
        adv.state = AdventurerState::Questing;
        assert!(!adv.is_available());
    }

    #[test]
    fn test_equip_replaces_same_category() {
        let mut adv = make(0.0);
        let sword = EquipmentItem {
            name: "Iron Sword".to_string(),
            category: EquipmentCategory::Weapon,
            rank: RankLabel::D,
        };
        let axe = EquipmentItem {
            name: "War Axe".to_string(),
            category: EquipmentCategory::Weapon,
            rank: RankLabel::C,
        };
        let ring = EquipmentItem {
            name: "Ring".to_string(),
            category: EquipmentCategory::Accessory,
            rank: RankLabel::E,
        };
        assert!(adv.equip(sword.clone()).is_none());
        assert!(adv.equip(ring.clone()).is_none());
        assert!(adv.equip(ring).is_none());
        assert_eq!(adv.equip(axe), Some(sword));
        let weapons = adv
            .equipment
            .iter()
            .filter(|e| e.category == EquipmentCategory::Weapon)
            .count();
        assert_eq!(weapons, 1);
        // C(3) + E(1) + E(1)
        assert_eq!(adv.equipment_rank_sum(), 5);
    }

    #[test]
    fn test_trait_hooks_multiply() {
        let mut adv = make(0.0);
        adv.traits = vec![TraitId::Brave, TraitId::Sturdy];
        let hooks = adv.trait_hooks();
        assert!((hooks.injury - 1.1 * 0.7).abs() < 1e-9);
        assert!((hooks.win_rate - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_records_keep_top_ten() {
        let mut records = Records::default();
        for i in 0..15 {
            records.record_kill(KillRecord {
                monster: format!("Slime {i}"),
                rank: if i == 3 { RankLabel::A } else { RankLabel::E },
                is_boss: false,
            });
        }
        assert_eq!(records.kills, 15);
        assert_eq!(records.top_kills.len(), 10);
        assert_eq!(records.top_kills[0].rank, RankLabel::A);
    }

    #[test]
    fn test_history_is_capped() {
        let mut adv = make(0.0);
        for i in 0..80 {
            adv.push_history(format!("day {i}"));
        }
        assert_eq!(adv.history.len(), HISTORY_MAX_ENTRIES);
        assert_eq!(adv.history.last().map(String::as_str), Some("day 79"));
    }
}
