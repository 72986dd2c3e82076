//! Flavor text for the daily quest log.
//!
//! Only the structure matters to the rest of the game: which kinds of lines
//! appear, how many, and in what order. The wording is free to change.

use super::encounter::Encounter;
use crate::adventurer::Adventurer;
use crate::bestiary::Region;
use crate::core::constants::RANDOM_EVENT_DAMAGE;
use crate::quest::Quest;
use rand::seq::SliceRandom;
use rand::Rng;

const ENVIRONMENT_LINES: &[&str] = &[
    "A cold wind sweeps across the {region} trail.",
    "Rain drums on the party's cloaks all morning.",
    "The road winds on through quiet {region} hills.",
    "Mist hangs low over the path until noon.",
    "The party makes camp under a clear, starry sky.",
];

const FILLER_LINES: &[&str] = &[
    "The day passes without incident.",
    "Nothing stirs. The party presses on.",
    "A long, uneventful march.",
];

/// A random event and the extra damage it deals the party.
const RANDOM_EVENTS: &[(&str, u32)] = &[
    ("A rockslide catches the party off guard.", RANDOM_EVENT_DAMAGE),
    ("Someone steps into a hunter's snare.", RANDOM_EVENT_DAMAGE),
    ("A traveling merchant shares news of the road.", 0),
    ("The party helps a farmer pull a cart from the mud.", 0),
    ("Spoiled rations leave everyone queasy.", RANDOM_EVENT_DAMAGE),
];

fn pick<'a>(lines: &[&'a str], fallback: &'a str, rng: &mut impl Rng) -> &'a str {
    lines.choose(rng).copied().unwrap_or(fallback)
}

/// Opening line for day 1.
pub fn intro_line(quest: &Quest, region: Region) -> String {
    match quest.target.as_deref().or(quest.boss_target.as_deref()) {
        Some(target) => format!(
            "The party sets out into the {} lands in search of {}.",
            region.adjective(),
            target
        ),
        None => format!(
            "The party sets out into the {} lands for \"{}\".",
            region.adjective(),
            quest.title
        ),
    }
}

pub fn environment_line(region: Region, rng: &mut impl Rng) -> String {
    pick(ENVIRONMENT_LINES, "The journey continues.", rng).replace("{region}", region.adjective())
}

/// A line voiced by a random trait somebody in the party has, if anyone has one.
pub fn trait_flavor_line(party: &[&Adventurer], rng: &mut impl Rng) -> Option<String> {
    let holders: Vec<(&Adventurer, _)> = party
        .iter()
        .flat_map(|a| a.traits.iter().map(move |t| (*a, *t)))
        .collect();
    let (adventurer, trait_id) = holders.choose(rng)?;
    let template = trait_id.flavor_lines().choose(rng)?;
    Some(template.replace("{name}", &adventurer.name))
}

/// Roll a random event, returning its line and extra damage.
pub fn random_event(rng: &mut impl Rng) -> (String, u32) {
    let (line, damage) = RANDOM_EVENTS
        .choose(rng)
        .copied()
        .unwrap_or(("Something rustles in the brush.", 0));
    (line.to_string(), damage)
}

pub fn encounter_line(encounter: &Encounter) -> String {
    if encounter.is_opponent() {
        format!("The party faces {} in the arena.", encounter.name)
    } else if encounter.is_boss {
        format!("{} blocks the way! The boss has appeared.", encounter.name)
    } else {
        format!("A {}-rank {} appears.", encounter.rank, encounter.name)
    }
}

pub fn battle_result_line(encounter: &Encounter, won: bool, damage: u32) -> String {
    match (won, encounter.is_opponent()) {
        (true, true) => format!("Victory over {}! ({} damage taken)", encounter.name, damage),
        (true, false) => format!("Defeated {}. ({} damage taken)", encounter.name, damage),
        (false, true) => format!("Lost the bout to {}. ({} damage taken)", encounter.name, damage),
        (false, false) => format!("Forced to retreat from {}. ({} damage taken)", encounter.name, damage),
    }
}

pub fn item_line(name: &str, value: u32, is_rare: bool) -> String {
    if is_rare {
        format!("A rare find: {} ({}G)!", name, value)
    } else {
        format!("Obtained {} ({}G).", name, value)
    }
}

pub fn filler_line(rng: &mut impl Rng) -> String {
    pick(FILLER_LINES, "The day passes.", rng).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::{AdventurerId, Job, JoinType, Origin, RankLabel, Stats, TraitId};
    use crate::quest::{QuestId, QuestType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_intro_mentions_target() {
        let mut quest = Quest::new(QuestId(1), "Northern Wolves", QuestType::Subjugation, RankLabel::D);
        assert!(intro_line(&quest, Region::North).contains("Northern Wolves"));
        quest.target = Some("Snow Wolf".to_string());
        let line = intro_line(&quest, Region::North);
        assert!(line.contains("Snow Wolf"));
        assert!(line.contains("Northern"));
    }

    #[test]
    fn test_trait_flavor_needs_traits() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut adv = Adventurer::new(
            AdventurerId(1),
            "Brenna".to_string(),
            Job::Knight,
            Origin::Central,
            JoinType::Local,
            0.0,
            Stats::uniform(10.0),
        );
        assert!(trait_flavor_line(&[&adv], &mut rng).is_none());
        adv.traits.push(TraitId::Brave);
        let line = trait_flavor_line(&[&adv], &mut rng).unwrap_or_default();
        assert!(line.contains("Brenna"));
        assert!(!line.contains("{name}"));
    }

    #[test]
    fn test_environment_line_fills_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..20 {
            assert!(!environment_line(Region::South, &mut rng).contains("{region}"));
        }
    }

    #[test]
    fn test_random_event_damage_is_fixed() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let (_, damage) = random_event(&mut rng);
            assert!(damage == 0 || damage == RANDOM_EVENT_DAMAGE);
        }
    }
}
