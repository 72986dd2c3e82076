//! Monster and item tables for the standard world.
//!
//! Central has no A or S rank monsters; encounters there fall back to the
//! East tables.

use super::types::{MainType, MonsterCategory, Region};
use crate::adventurer::RankLabel;

use MainType::*;
use MonsterCategory::{Boss, MidTier, Tough};
use RankLabel::{A, B, C, D, E, S};
use Region::{Central, East, North, South, West};

pub(crate) type MonsterRow = (
    Region,
    RankLabel,
    &'static str,
    MainType,
    &'static [MonsterCategory],
);

pub(crate) const MONSTERS: &[MonsterRow] = &[
    // East
    (East, E, "Horned Rabbit", Beast, &[]),
    (East, E, "Green Slime", Slime, &[]),
    (East, E, "Goblin Chief", Humanoid, &[Boss]),
    (East, D, "Forest Wolf", Beast, &[]),
    (East, D, "Goblin Raider", Humanoid, &[MidTier]),
    (East, D, "Hobgoblin Warlord", Humanoid, &[Boss]),
    (East, C, "Mandrake", Plant, &[]),
    (East, C, "Orc Brute", Humanoid, &[Tough]),
    (East, C, "Orc Warlord", Humanoid, &[Boss]),
    (East, B, "Ghoul", Undead, &[]),
    (East, B, "Stone Golem", Construct, &[Tough]),
    (East, B, "Wyvern", Dragon, &[Boss]),
    (East, A, "Wraith", Spirit, &[MidTier]),
    (East, A, "Chimera", Beast, &[Tough]),
    (East, A, "Elder Lich", Undead, &[Boss]),
    (East, S, "Fire Elemental Lord", Elemental, &[Tough]),
    (East, S, "Ancient Dragon", Dragon, &[]),
    (East, S, "Fallen God", God, &[Boss]),
    // North
    (North, E, "Snow Hare", Beast, &[]),
    (North, E, "Frost Slime", Slime, &[]),
    (North, E, "Kobold Boss", Humanoid, &[Boss]),
    (North, D, "Ice Beetle", Insect, &[]),
    (North, D, "Snow Wolf", Beast, &[MidTier]),
    (North, D, "Yeti", Beast, &[Boss]),
    (North, C, "Frost Wisp", Spirit, &[]),
    (North, C, "Ice Troll", Humanoid, &[Tough]),
    (North, C, "Frost Giant", Humanoid, &[Boss]),
    (North, B, "Frozen Knight", Undead, &[MidTier]),
    (North, B, "Ice Golem", Construct, &[Tough]),
    (North, B, "White Wyvern", Dragon, &[Boss]),
    (North, A, "Blizzard Spirit", Elemental, &[]),
    (North, A, "Frost Drake", Dragon, &[Tough]),
    (North, A, "Winter Queen", Spirit, &[Boss]),
    (North, S, "Glacier Colossus", Construct, &[Tough]),
    (North, S, "Aurora Wyrm", Dragon, &[]),
    (North, S, "Frost Titan", God, &[Boss]),
    // South
    (South, E, "Sand Crab", Sea, &[]),
    (South, E, "Desert Rat", Beast, &[]),
    (South, E, "Bandit Leader", Humanoid, &[Boss]),
    (South, D, "Giant Scorpion", Insect, &[MidTier]),
    (South, D, "Cactus Walker", Plant, &[]),
    (South, D, "Sandworm", Insect, &[Boss]),
    (South, C, "Mummy", Undead, &[]),
    (South, C, "Lizardman", Humanoid, &[MidTier]),
    (South, C, "Sphinx", Beast, &[Boss]),
    (South, B, "Kraken Spawn", Sea, &[Tough]),
    (South, B, "Sand Djinn", Elemental, &[]),
    (South, B, "Pharaoh's Shade", Undead, &[Boss]),
    (South, A, "Sea Serpent", Sea, &[Tough]),
    (South, A, "Basilisk", Beast, &[]),
    (South, A, "Leviathan", Sea, &[Boss]),
    (South, S, "Sun Phoenix", Spirit, &[]),
    (South, S, "Desert Behemoth", Beast, &[Tough]),
    (South, S, "Sun God Avatar", God, &[Boss]),
    // West
    (West, E, "Puffball", Fungus, &[]),
    (West, E, "Cave Bat", Beast, &[]),
    (West, E, "Mushroom King", Fungus, &[Boss]),
    (West, D, "Giant Spider", Insect, &[]),
    (West, D, "Bog Slime", Slime, &[MidTier]),
    (West, D, "Spider Queen", Insect, &[Boss]),
    (West, C, "Treant", Plant, &[Tough]),
    (West, C, "Harpy", Beast, &[]),
    (West, C, "Harpy Matriarch", Beast, &[Boss]),
    (West, B, "Clockwork Sentinel", Construct, &[MidTier]),
    (West, B, "Marsh Hag", Humanoid, &[]),
    (West, B, "Swamp Hydra", Dragon, &[Boss]),
    (West, A, "Storm Elemental", Elemental, &[]),
    (West, A, "Vampire Noble", Undead, &[Tough]),
    (West, A, "Vampire Lord", Undead, &[Boss]),
    (West, S, "World Tree Guardian", Plant, &[Tough]),
    (West, S, "Void Spirit", Spirit, &[]),
    (West, S, "Forgotten Deity", God, &[Boss]),
    // Central
    (Central, E, "Sewer Rat", Beast, &[]),
    (Central, E, "Pickpocket", Humanoid, &[]),
    (Central, E, "Thieves' Boss", Humanoid, &[Boss]),
    (Central, D, "Stray Hound", Beast, &[]),
    (Central, D, "Rogue Mercenary", Humanoid, &[MidTier]),
    (Central, D, "Mercenary Captain", Humanoid, &[Boss]),
    (Central, C, "Animated Armor", Construct, &[]),
    (Central, C, "Cultist", Humanoid, &[MidTier]),
    (Central, C, "Cult Leader", Humanoid, &[Boss]),
    (Central, B, "Gargoyle", Construct, &[Tough]),
    (Central, B, "Phantom", Spirit, &[]),
    (Central, B, "Demon Knight", Undead, &[Boss]),
];

pub(crate) type ItemRow = (Region, RankLabel, &'static str, Option<u32>, bool);

pub(crate) const ITEMS: &[ItemRow] = &[
    (East, E, "Medicinal Herb", None, false),
    (East, E, "Four-leaf Clover", Some(60), true),
    (East, D, "Iron Ore", None, false),
    (East, D, "Spirit Moss", Some(150), true),
    (East, C, "Silver Ore", None, false),
    (East, C, "Moonflower", Some(300), true),
    (East, B, "Mithril Ore", None, false),
    (East, B, "Phoenix Feather", Some(600), true),
    (East, A, "Adamant Ore", None, false),
    (East, A, "Starlight Crystal", Some(900), true),
    (East, S, "Orichalcum", None, false),
    (East, S, "World Tree Leaf", Some(1500), true),
    (North, E, "Snow Lily", None, false),
    (North, D, "Frost Crystal", None, false),
    (North, C, "Glacier Salt", None, false),
    (North, B, "Everfrost Shard", Some(550), true),
    (North, A, "Aurora Stone", None, false),
    (South, E, "Desert Rose", None, false),
    (South, D, "Sun Pearl", Some(140), true),
    (South, C, "Pearl Shell", None, false),
    (South, B, "Coral Heart", None, false),
    (South, A, "Sunstone", Some(950), true),
    (West, E, "Glowcap", None, false),
    (West, D, "Bog Iron", None, false),
    (West, C, "Witchroot", Some(280), true),
    (West, B, "Ancient Amber", None, false),
    (Central, E, "Lost Coin", None, false),
    (Central, D, "Old Map", None, false),
    (Central, C, "Sealed Letter", Some(260), true),
];

/// Value of a material or valueless item by rank.
pub fn material_value(rank: RankLabel) -> u32 {
    match rank {
        E => 20,
        D => 50,
        C => 100,
        B => 200,
        A => 300,
        S => 500,
    }
}

/// Material names dropped by a creature family.
pub fn material_pool(main_type: MainType) -> &'static [&'static str] {
    match main_type {
        Beast => &["Beast Hide", "Sharp Fang", "Thick Pelt"],
        Humanoid => &["Worn Insignia", "Rusty Blade", "Coin Pouch"],
        Slime => &["Slime Jelly", "Slime Core"],
        Plant => &["Tough Vine", "Strange Seed"],
        Fungus => &["Spore Sac", "Mushroom Cap"],
        Insect => &["Chitin Plate", "Venom Gland"],
        Sea => &["Sea Scale", "Brine Pearl"],
        Dragon => &["Dragon Scale", "Dragon Fang"],
        Undead => &["Bone Fragment", "Cursed Cloth"],
        Spirit => &["Ectoplasm", "Spirit Essence"],
        Elemental => &["Elemental Core", "Mana Shard"],
        Construct => &["Gear Spring", "Magic Circuit"],
        God => &["Divine Fragment", "Relic of Faith"],
    }
}
