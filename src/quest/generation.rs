//! Daily quest board generation.

use super::catalog::quest_spec;
use super::types::{Quest, QuestId, QuestType};
use crate::adventurer::RankLabel;
use crate::bestiary::{Bestiary, Region};
use crate::core::constants::*;
use crate::core::Facilities;
use rand::seq::SliceRandom;
use rand::Rng;

/// Quest types that show up on the regular board.
const BOARD_TYPES: [QuestType; 7] = [
    QuestType::Subjugation,
    QuestType::Gathering,
    QuestType::Escort,
    QuestType::Investigation,
    QuestType::BossRaid,
    QuestType::FreeHunt,
    QuestType::Dungeon,
];

/// Highest quest rank the guild's reputation unlocks: one rank per 100.
pub fn rank_ceiling(reputation: i64) -> RankLabel {
    RankLabel::from_bucket((reputation.max(0) / DAILY_QUEST_REPUTATION_STEP) as usize)
}

/// Number of quests posted per day.
pub fn daily_quest_count(reputation: i64, facilities: &Facilities) -> usize {
    let from_reputation = (reputation.max(0) / DAILY_QUEST_REPUTATION_STEP) as usize;
    (DAILY_QUEST_BASE_COUNT + from_reputation + facilities.notice_board as usize).min(DAILY_QUEST_MAX_COUNT)
}

pub fn is_tournament_day(day: u32) -> bool {
    day > 0 && day % TOURNAMENT_INTERVAL_DAYS == 0
}

/// Generate the day's board. Ids are drawn from `next_id`, which is advanced.
pub fn generate_daily_quests(
    day: u32,
    reputation: i64,
    facilities: &Facilities,
    bestiary: &Bestiary,
    next_id: &mut u32,
    rng: &mut impl Rng,
) -> Vec<Quest> {
    let ceiling = rank_ceiling(reputation);
    let count = daily_quest_count(reputation, facilities);
    let mut quests = Vec::with_capacity(count + 1);

    for _ in 0..count {
        let Some((quest_type, rank)) = pick_type_and_rank(ceiling, rng) else {
            break;
        };
        let id = QuestId(*next_id);
        *next_id += 1;
        quests.push(build_quest(id, quest_type, rank, day, bestiary, rng));
    }

    if is_tournament_day(day) {
        let id = QuestId(*next_id);
        *next_id += 1;
        quests.push(build_tournament(id, ceiling.max(RankLabel::D), day, rng));
    }
    quests
}

fn pick_type_and_rank(ceiling: RankLabel, rng: &mut impl Rng) -> Option<(QuestType, RankLabel)> {
    let eligible: Vec<QuestType> = BOARD_TYPES
        .into_iter()
        .filter(|t| quest_spec(*t).ranks.iter().any(|r| *r <= ceiling))
        .collect();
    let quest_type = *eligible.choose(rng)?;
    let ranks: Vec<RankLabel> = quest_spec(quest_type)
        .ranks
        .iter()
        .copied()
        .filter(|r| *r <= ceiling)
        .collect();
    let rank = *ranks.choose(rng)?;
    Some((quest_type, rank))
}

fn build_quest(
    id: QuestId,
    quest_type: QuestType,
    rank: RankLabel,
    day: u32,
    bestiary: &Bestiary,
    rng: &mut impl Rng,
) -> Quest {
    let spec = quest_spec(quest_type);
    let region = *Region::ALL.choose(rng).unwrap_or(&Region::East);
    let adj = region.adjective();

    let (title, target, boss_target) = match quest_type {
        QuestType::Subjugation => {
            let target = regular_monster(bestiary, region, rank, rng);
            let name = target.clone().unwrap_or_else(|| "Monster".to_string());
            (format!("{adj} {name} Subjugation"), target, None)
        }
        QuestType::Gathering => {
            let item = bestiary
                .item_pool(region, rank)
                .and_then(|pool| pool.choose(rng).map(|i| i.name.clone()));
            let name = item.clone().unwrap_or_else(|| "Herb".to_string());
            (format!("{adj} {name} Gathering"), item, None)
        }
        QuestType::Escort => (format!("{adj} Caravan Escort"), None, None),
        QuestType::Investigation => (format!("{adj} Ruins Investigation"), None, None),
        QuestType::BossRaid => {
            let target = boss_name(bestiary, region, rank, rng);
            let name = target.clone().unwrap_or_else(|| "Warlord".to_string());
            (format!("{adj} {name} Raid"), target.clone(), target)
        }
        QuestType::FreeHunt => (format!("{adj} Free Hunt"), None, None),
        QuestType::Dungeon => {
            let target = boss_name(bestiary, region, rank, rng);
            let name = target.clone().unwrap_or_else(|| "the Deep".to_string());
            (format!("{adj} Dungeon of {name}"), target.clone(), target)
        }
        QuestType::Tournament => (format!("{adj} Grand Tournament"), None, None),
    };

    let mut quest = Quest::new(id, title, quest_type, rank);
    quest.target = target;
    quest.boss_target = boss_target;
    quest.created_day = day;
    quest.days = rng.gen_range(spec.days.0..=spec.days.1);
    quest.party_size = rng.gen_range(spec.party_size.0..=spec.party_size.1);
    quest.expires_in_days = Some(rng.gen_range(QUEST_MIN_EXPIRY_DAYS..=QUEST_MAX_EXPIRY_DAYS));

    let spread = rng.gen_range(1.0 - QUEST_REWARD_SPREAD..=1.0 + QUEST_REWARD_SPREAD);
    let mut reward = quest.difficulty.base_reward as f64 * spread;
    if rng.gen::<f64>() < SPECIAL_QUEST_CHANCE {
        reward *= SPECIAL_QUEST_REWARD_MULTIPLIER;
        quest.is_special = true;
        quest.manual_only = true;
    }
    quest.rewards.money = reward.floor() as u32;
    quest.penalty.money = (reward * QUEST_PENALTY_RATIO).floor() as u32;

    let boss_danger = if quest.has_mandatory_boss() { 15.0 } else { 0.0 };
    quest.danger = (quest.difficulty.power_req * 1.5 + boss_danger).min(100.0) as u32;
    quest.description = format!("{} request for a {}-rank party of {}.", spec.label, rank, quest.party_size);
    quest
}

fn regular_monster(bestiary: &Bestiary, region: Region, rank: RankLabel, rng: &mut impl Rng) -> Option<String> {
    let pool = bestiary.monster_pool(region, rank)?;
    let regulars: Vec<_> = pool.into_iter().filter(|m| !m.is_boss_category()).collect();
    regulars.choose(rng).map(|m| m.name.clone())
}

fn boss_name(bestiary: &Bestiary, region: Region, rank: RankLabel, rng: &mut impl Rng) -> Option<String> {
    bestiary
        .boss_names(region, rank)
        .choose(rng)
        .map(|n| n.to_string())
}

fn build_tournament(id: QuestId, rank: RankLabel, day: u32, rng: &mut impl Rng) -> Quest {
    let spec = quest_spec(QuestType::Tournament);
    let region = *Region::ALL.choose(rng).unwrap_or(&Region::Central);
    let mut quest = Quest::new(
        id,
        format!("{} Grand Tournament", region.adjective()),
        QuestType::Tournament,
        rank,
    );
    quest.created_day = day;
    quest.days = spec.days.1;
    quest.party_size = rng.gen_range(spec.party_size.0..=spec.party_size.1);
    quest.expires_in_days = None;
    quest.manual_only = true;
    quest.danger = (quest.difficulty.power_req * 1.5).min(100.0) as u32;
    quest.description = format!("Entrants fight {} rounds. Teams of {}.", quest.days, quest.party_size);
    quest
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_quest_count_scales_with_reputation() {
        let none = Facilities::default();
        assert_eq!(daily_quest_count(0, &none), 3);
        assert_eq!(daily_quest_count(250, &none), 5);
        assert_eq!(daily_quest_count(10_000, &none), 8);
        let board = Facilities {
            notice_board: 2,
            ..Facilities::default()
        };
        assert_eq!(daily_quest_count(0, &board), 5);
    }

    #[test]
    fn test_rank_ceiling() {
        assert_eq!(rank_ceiling(-50), RankLabel::E);
        assert_eq!(rank_ceiling(0), RankLabel::E);
        assert_eq!(rank_ceiling(199), RankLabel::D);
        assert_eq!(rank_ceiling(9_000), RankLabel::S);
    }

    #[test]
    fn test_generated_quests_respect_catalog() {
        let bestiary = Bestiary::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut next_id = 1;
        for day in 1..=29 {
            let quests = generate_daily_quests(day, 300, &Facilities::default(), &bestiary, &mut next_id, &mut rng);
            assert_eq!(quests.len(), 6);
            for q in &quests {
                let spec = q.spec();
                assert!(spec.ranks.contains(&q.rank()));
                assert!(q.rank() <= RankLabel::B);
                assert!(q.days >= spec.days.0 && q.days <= spec.days.1);
                assert!(q.party_size >= spec.party_size.0 && q.party_size <= spec.party_size.1);
                assert_eq!(q.created_day, day);
                assert!(q.expires_in_days.is_some());
                assert!(q.rewards.money > 0);
                assert!(!q.is_tournament);
            }
        }
        assert_eq!(next_id, 1 + 29 * 6);
    }

    #[test]
    fn test_boss_quests_name_their_boss() {
        let bestiary = Bestiary::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut next_id = 1;
        let mut seen = 0;
        for day in 1..=60 {
            for q in generate_daily_quests(day, 500, &Facilities::default(), &bestiary, &mut next_id, &mut rng) {
                if matches!(q.quest_type, QuestType::BossRaid | QuestType::Dungeon) {
                    let boss = q.boss_target.clone().unwrap_or_default();
                    assert!(!boss.is_empty());
                    assert!(q.title.contains(&boss));
                    seen += 1;
                }
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_title_region_round_trips() {
        let bestiary = Bestiary::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut next_id = 1;
        for q in generate_daily_quests(5, 800, &Facilities::default(), &bestiary, &mut next_id, &mut rng) {
            let region = Region::from_title(&q.title);
            assert!(q.title.starts_with(region.adjective()));
        }
    }

    #[test]
    fn test_tournament_every_thirty_days() {
        let bestiary = Bestiary::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let mut next_id = 1;
        let quests = generate_daily_quests(30, 0, &Facilities::default(), &bestiary, &mut next_id, &mut rng);
        let tournaments: Vec<_> = quests.iter().filter(|q| q.is_tournament).collect();
        assert_eq!(tournaments.len(), 1);
        let t = tournaments[0];
        assert_eq!(t.rank(), RankLabel::D);
        assert_eq!(t.expires_in_days, None);
        assert_eq!(t.days, 3);
        assert!(!is_tournament_day(0));
        assert!(!is_tournament_day(31));
    }
}
