//! Static quest tables: type specs, difficulty tiers and the rank power curve.

use super::types::{BossDay, Difficulty, QuestCategory, QuestSpec, QuestType, Rate, Rates};
use crate::adventurer::{Job, RankLabel, StatType};

const ALL_RANKS: &[RankLabel] = &[
    RankLabel::E,
    RankLabel::D,
    RankLabel::C,
    RankLabel::B,
    RankLabel::A,
    RankLabel::S,
];

/// Base enemy (and tournament opponent) power by rank.
pub fn rank_power(rank: RankLabel) -> f64 {
    match rank {
        RankLabel::E => 50.0,
        RankLabel::D => 80.0,
        RankLabel::C => 120.0,
        RankLabel::B => 170.0,
        RankLabel::A => 230.0,
        RankLabel::S => 300.0,
    }
}

/// Difficulty tier for a quest rank.
pub fn difficulty_for(rank: RankLabel) -> Difficulty {
    let (power_req, base_reward, base_rep) = match rank {
        RankLabel::E => (10.0, 100, 1),
        RankLabel::D => (18.0, 250, 2),
        RankLabel::C => (26.0, 500, 4),
        RankLabel::B => (34.0, 1000, 7),
        RankLabel::A => (42.0, 2000, 12),
        RankLabel::S => (55.0, 4000, 20),
    };
    Difficulty {
        rank,
        power_req,
        base_reward,
        base_rep,
    }
}

pub fn quest_spec(quest_type: QuestType) -> QuestSpec {
    match quest_type {
        QuestType::Subjugation => QuestSpec {
            label: "Subjugation",
            category: QuestCategory::Combat,
            rates: Rates {
                battle: Rate::Range { min: 1.0, max: 3.0 },
                gather: Rate::Fixed(0.0),
            },
            boss_days: &[],
            boss_modifier: Some(0.1),
            weights: &[(StatType::Str, 1.0), (StatType::Vit, 0.6), (StatType::Dex, 0.4)],
            ranks: ALL_RANKS,
            days: (1, 3),
            party_size: (2, 4),
            advantaged_jobs: &[Job::Warrior, Job::Knight, Job::Lancer, Job::Monk],
        },
        QuestType::Gathering => QuestSpec {
            label: "Gathering",
            category: QuestCategory::Gathering,
            rates: Rates {
                battle: Rate::Fixed(0.3),
                gather: Rate::Range { min: 2.0, max: 4.0 },
            },
            boss_days: &[],
            boss_modifier: None,
            weights: &[(StatType::Dex, 0.8), (StatType::Int, 0.6), (StatType::Vit, 0.3)],
            ranks: &[RankLabel::E, RankLabel::D, RankLabel::C, RankLabel::B],
            days: (1, 2),
            party_size: (1, 2),
            advantaged_jobs: &[Job::Hunter, Job::Druid, Job::Alchemist, Job::Thief],
        },
        QuestType::Escort => QuestSpec {
            label: "Escort",
            category: QuestCategory::Support,
            rates: Rates {
                battle: Rate::Range { min: 0.5, max: 1.5 },
                gather: Rate::Fixed(0.0),
            },
            boss_days: &[],
            boss_modifier: Some(0.05),
            weights: &[(StatType::Vit, 1.0), (StatType::Str, 0.5), (StatType::Cha, 0.5)],
            ranks: &[RankLabel::D, RankLabel::C, RankLabel::B, RankLabel::A],
            days: (2, 4),
            party_size: (2, 3),
            advantaged_jobs: &[Job::Knight, Job::Priest, Job::Bard],
        },
        QuestType::Investigation => QuestSpec {
            label: "Investigation",
            category: QuestCategory::Exploration,
            rates: Rates {
                battle: Rate::Fixed(0.5),
                gather: Rate::Fixed(1.0),
            },
            boss_days: &[],
            boss_modifier: None,
            weights: &[(StatType::Int, 1.0), (StatType::Dex, 0.6), (StatType::Cha, 0.4)],
            ranks: &[RankLabel::E, RankLabel::D, RankLabel::C, RankLabel::B, RankLabel::A],
            days: (1, 3),
            party_size: (1, 3),
            advantaged_jobs: &[Job::Sage, Job::Thief, Job::Ninja, Job::Bard],
        },
        QuestType::BossRaid => QuestSpec {
            label: "Boss Raid",
            category: QuestCategory::Combat,
            rates: Rates {
                battle: Rate::Range { min: 1.0, max: 2.0 },
                gather: Rate::Fixed(0.0),
            },
            boss_days: &[BossDay::Final],
            boss_modifier: None,
            weights: &[(StatType::Str, 1.0), (StatType::Mag, 0.8), (StatType::Vit, 0.6)],
            ranks: &[RankLabel::C, RankLabel::B, RankLabel::A, RankLabel::S],
            days: (2, 4),
            party_size: (3, 5),
            advantaged_jobs: &[Job::Warrior, Job::Knight, Job::Mage, Job::Priest, Job::Summoner],
        },
        QuestType::FreeHunt => QuestSpec {
            label: "Free Hunt",
            category: QuestCategory::Combat,
            rates: Rates {
                battle: Rate::Range { min: 2.0, max: 4.0 },
                gather: Rate::Fixed(0.5),
            },
            boss_days: &[],
            boss_modifier: Some(0.08),
            weights: &[(StatType::Str, 0.8), (StatType::Dex, 0.8)],
            ranks: ALL_RANKS,
            days: (1, 2),
            party_size: (1, 3),
            advantaged_jobs: &[Job::Hunter, Job::Archer, Job::Swordsman],
        },
        QuestType::Dungeon => QuestSpec {
            label: "Dungeon",
            category: QuestCategory::Exploration,
            rates: Rates {
                battle: Rate::Range { min: 2.0, max: 3.0 },
                gather: Rate::Fixed(1.0),
            },
            boss_days: &[BossDay::Final],
            boss_modifier: None,
            weights: &[
                (StatType::Str, 0.6),
                (StatType::Mag, 0.6),
                (StatType::Dex, 0.6),
                (StatType::Int, 0.3),
            ],
            ranks: &[RankLabel::C, RankLabel::B, RankLabel::A, RankLabel::S],
            days: (2, 4),
            party_size: (3, 4),
            advantaged_jobs: &[Job::Thief, Job::Ninja, Job::Sage, Job::Monk],
        },
        QuestType::Tournament => QuestSpec {
            label: "Tournament",
            category: QuestCategory::Competition,
            rates: Rates {
                battle: Rate::Fixed(1.0),
                gather: Rate::Fixed(0.0),
            },
            boss_days: &[BossDay::Final],
            boss_modifier: None,
            weights: &[(StatType::Str, 0.8), (StatType::Dex, 0.6), (StatType::Mag, 0.6)],
            ranks: &[RankLabel::D, RankLabel::C, RankLabel::B, RankLabel::A, RankLabel::S],
            days: (3, 3),
            party_size: (1, 3),
            advantaged_jobs: &[Job::Swordsman, Job::Monk, Job::Ninja],
        },
    }
}
