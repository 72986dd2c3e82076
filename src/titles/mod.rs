//! Honorary titles granted after notable quest successes.

use crate::adventure::KilledMonster;
use crate::adventurer::{Adventurer, RankLabel};
use crate::quest::Quest;

/// What a successful quest achieved, handed to the title service once per
/// member who does not already hold a title.
#[derive(Debug, Clone, Copy)]
pub struct TitleContext<'a> {
    pub quest: &'a Quest,
    pub kills: &'a [KilledMonster],
}

impl TitleContext<'_> {
    /// Highest-ranked boss defeated on the quest, if any.
    pub fn top_boss(&self) -> Option<&KilledMonster> {
        self.kills.iter().filter(|k| k.is_boss).max_by_key(|k| k.rank)
    }
}

/// Decides whether a member earns a title.
pub trait TitleService {
    fn offer(&self, ctx: &TitleContext<'_>, adventurer: &Adventurer) -> Option<String>;
}

/// Titles for slaying a B-rank or stronger boss, or for clearing an S-rank quest.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankTitles;

impl TitleService for RankTitles {
    fn offer(&self, ctx: &TitleContext<'_>, adventurer: &Adventurer) -> Option<String> {
        if adventurer.title.is_some() {
            return None;
        }
        if let Some(boss) = ctx.top_boss().filter(|b| b.rank >= RankLabel::B) {
            return Some(format!("{} Slayer", boss.name));
        }
        if ctx.quest.rank() == RankLabel::S {
            return Some(format!("Hero of the {}", ctx.quest.title));
        }
        None
    }
}

/// Never grants anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTitles;

impl TitleService for NoTitles {
    fn offer(&self, _ctx: &TitleContext<'_>, _adventurer: &Adventurer) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::{AdventurerId, Job, JoinType, Origin, Stats};
    use crate::quest::{QuestId, QuestType};

    fn hero() -> Adventurer {
        Adventurer::new(
            AdventurerId(1),
            "Rowan".to_string(),
            Job::Swordsman,
            Origin::Western,
            JoinType::Wanderer,
            500.0,
            Stats::uniform(40.0),
        )
    }

    fn kill(name: &str, rank: RankLabel, is_boss: bool) -> KilledMonster {
        KilledMonster {
            name: name.to_string(),
            rank,
            is_boss,
        }
    }

    #[test]
    fn test_boss_slayer_title() {
        let quest = Quest::new(QuestId(1), "Eastern Wyvern Raid", QuestType::BossRaid, RankLabel::B);
        let kills = vec![kill("Ghoul", RankLabel::B, false), kill("Wyvern", RankLabel::B, true)];
        let ctx = TitleContext { quest: &quest, kills: &kills };
        assert_eq!(RankTitles.offer(&ctx, &hero()), Some("Wyvern Slayer".to_string()));
    }

    #[test]
    fn test_low_rank_boss_grants_nothing() {
        let quest = Quest::new(QuestId(1), "Eastern Goblin Raid", QuestType::BossRaid, RankLabel::C);
        let kills = vec![kill("Orc Warlord", RankLabel::C, true)];
        let ctx = TitleContext { quest: &quest, kills: &kills };
        assert_eq!(RankTitles.offer(&ctx, &hero()), None);
    }

    #[test]
    fn test_s_rank_quest_title() {
        let quest = Quest::new(QuestId(1), "Central Escort", QuestType::Escort, RankLabel::S);
        let ctx = TitleContext { quest: &quest, kills: &[] };
        let title = RankTitles.offer(&ctx, &hero()).unwrap_or_default();
        assert!(title.contains("Central Escort"));
    }

    #[test]
    fn test_existing_title_blocks_grant() {
        let quest = Quest::new(QuestId(1), "Central Escort", QuestType::Escort, RankLabel::S);
        let ctx = TitleContext { quest: &quest, kills: &[] };
        let mut adv = hero();
        adv.title = Some("Dragonheart".to_string());
        assert_eq!(RankTitles.offer(&ctx, &adv), None);
    }
}
