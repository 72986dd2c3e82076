//! Job classes and their base tables.

use super::stats::Stats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    Warrior,
    Knight,
    Swordsman,
    Lancer,
    Archer,
    Hunter,
    Thief,
    Ninja,
    Mage,
    Priest,
    Sage,
    Druid,
    Bard,
    Alchemist,
    Monk,
    Summoner,
}

impl Job {
    pub const ALL: [Job; 16] = [
        Job::Warrior,
        Job::Knight,
        Job::Swordsman,
        Job::Lancer,
        Job::Archer,
        Job::Hunter,
        Job::Thief,
        Job::Ninja,
        Job::Mage,
        Job::Priest,
        Job::Sage,
        Job::Druid,
        Job::Bard,
        Job::Alchemist,
        Job::Monk,
        Job::Summoner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Job::Warrior => "Warrior",
            Job::Knight => "Knight",
            Job::Swordsman => "Swordsman",
            Job::Lancer => "Lancer",
            Job::Archer => "Archer",
            Job::Hunter => "Hunter",
            Job::Thief => "Thief",
            Job::Ninja => "Ninja",
            Job::Mage => "Mage",
            Job::Priest => "Priest",
            Job::Sage => "Sage",
            Job::Druid => "Druid",
            Job::Bard => "Bard",
            Job::Alchemist => "Alchemist",
            Job::Monk => "Monk",
            Job::Summoner => "Summoner",
        }
    }

    /// Base stat table (STR, VIT, MAG, DEX, INT, CHA) before rank scaling.
    pub fn base_stats(&self) -> Stats {
        match self {
            Job::Warrior => Stats::new(14.0, 12.0, 3.0, 8.0, 5.0, 6.0),
            Job::Knight => Stats::new(12.0, 14.0, 4.0, 6.0, 6.0, 8.0),
            Job::Swordsman => Stats::new(13.0, 9.0, 3.0, 12.0, 6.0, 6.0),
            Job::Lancer => Stats::new(13.0, 11.0, 3.0, 10.0, 5.0, 6.0),
            Job::Archer => Stats::new(8.0, 8.0, 4.0, 14.0, 8.0, 6.0),
            Job::Hunter => Stats::new(10.0, 10.0, 3.0, 12.0, 7.0, 5.0),
            Job::Thief => Stats::new(7.0, 7.0, 4.0, 15.0, 9.0, 7.0),
            Job::Ninja => Stats::new(10.0, 7.0, 6.0, 14.0, 8.0, 4.0),
            Job::Mage => Stats::new(4.0, 6.0, 15.0, 6.0, 12.0, 6.0),
            Job::Priest => Stats::new(5.0, 8.0, 12.0, 5.0, 10.0, 11.0),
            Job::Sage => Stats::new(4.0, 6.0, 13.0, 5.0, 15.0, 8.0),
            Job::Druid => Stats::new(7.0, 9.0, 11.0, 7.0, 10.0, 7.0),
            Job::Bard => Stats::new(6.0, 7.0, 8.0, 9.0, 9.0, 14.0),
            Job::Alchemist => Stats::new(5.0, 7.0, 10.0, 8.0, 14.0, 7.0),
            Job::Monk => Stats::new(12.0, 11.0, 6.0, 11.0, 6.0, 5.0),
            Job::Summoner => Stats::new(4.0, 6.0, 14.0, 6.0, 11.0, 9.0),
        }
    }

    /// Jobs whose `magic_win_rate` trait hooks apply in battle.
    pub fn is_magic(&self) -> bool {
        matches!(
            self,
            Job::Mage | Job::Priest | Job::Sage | Job::Druid | Job::Alchemist | Job::Summoner
        )
    }

    /// Arts this job can learn, drawn without replacement as rank grows.
    pub fn arts(&self) -> &'static [&'static str] {
        match self {
            Job::Warrior => &["Cleave", "War Cry", "Berserk"],
            Job::Knight => &["Shield Wall", "Holy Guard", "Oath Strike"],
            Job::Swordsman => &["Iaido", "Twin Slash", "Blade Dance"],
            Job::Lancer => &["Piercing Charge", "Dragon Dive", "Spiral Thrust"],
            Job::Archer => &["Arrow Rain", "Eagle Eye", "Piercing Shot"],
            Job::Hunter => &["Snare", "Tracking", "Beast Call"],
            Job::Thief => &["Steal", "Smoke Bomb", "Backstab"],
            Job::Ninja => &["Shadow Clone", "Shuriken Storm", "Vanish"],
            Job::Mage => &["Fireball", "Frost Lance", "Meteor"],
            Job::Priest => &["Heal", "Sanctuary", "Resurrection"],
            Job::Sage => &["Dispel", "Arcane Insight", "Time Stop"],
            Job::Druid => &["Entangle", "Wild Shape", "Rejuvenation"],
            Job::Bard => &["Ballad of Valor", "Lullaby", "Requiem"],
            Job::Alchemist => &["Acid Flask", "Transmute", "Elixir"],
            Job::Monk => &["Iron Fist", "Chi Burst", "Hundred Palms"],
            Job::Summoner => &["Summon Sprite", "Summon Golem", "Summon Phoenix"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::stats::StatType;

    #[test]
    fn test_every_job_has_three_arts() {
        for job in Job::ALL {
            assert_eq!(job.arts().len(), 3, "{}", job.name());
        }
    }

    #[test]
    fn test_base_stats_are_positive() {
        for job in Job::ALL {
            let base = job.base_stats();
            for stat in StatType::all() {
                assert!(base.get(stat) > 0.0);
            }
        }
    }

    #[test]
    fn test_magic_jobs() {
        assert!(Job::Mage.is_magic());
        assert!(Job::Summoner.is_magic());
        assert!(!Job::Warrior.is_magic());
        assert!(!Job::Bard.is_magic());
    }
}
