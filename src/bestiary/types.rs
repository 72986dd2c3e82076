use crate::adventurer::RankLabel;
use serde::{Deserialize, Serialize};

/// World regions. Quest titles name the region they take place in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    East,
    North,
    South,
    West,
    Central,
}

impl Region {
    /// Match order used when reading a region out of a quest title.
    pub const ALL: [Region; 5] = [
        Region::East,
        Region::North,
        Region::South,
        Region::West,
        Region::Central,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::East => "East",
            Region::North => "North",
            Region::South => "South",
            Region::West => "West",
            Region::Central => "Central",
        }
    }

    /// Adjective form used in generated titles ("Eastern", "Central").
    pub fn adjective(&self) -> &'static str {
        match self {
            Region::East => "Eastern",
            Region::North => "Northern",
            Region::South => "Southern",
            Region::West => "Western",
            Region::Central => "Central",
        }
    }

    /// First region whose name appears in the title, East if none does.
    pub fn from_title(title: &str) -> Region {
        Self::ALL
            .into_iter()
            .find(|r| title.contains(r.name()))
            .unwrap_or(Region::East)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterCategory {
    Boss,
    Tough,
    MidTier,
}

/// Broad creature family, which decides what material a kill drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainType {
    Beast,
    Humanoid,
    Slime,
    Plant,
    Fungus,
    Insect,
    Sea,
    Dragon,
    Undead,
    Spirit,
    Elemental,
    Construct,
    God,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterEntry {
    pub name: String,
    pub region: Region,
    pub rank: RankLabel,
    pub categories: Vec<MonsterCategory>,
    pub main_type: Option<MainType>,
    #[serde(default)]
    pub is_boss: bool,
}

impl MonsterEntry {
    pub fn has_category(&self, category: MonsterCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_boss_category(&self) -> bool {
        self.is_boss || self.has_category(MonsterCategory::Boss)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub region: Region,
    pub rank: RankLabel,
    pub value: Option<u32>,
    #[serde(default)]
    pub is_rare: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_title() {
        assert_eq!(Region::from_title("Northern Wolf Subjugation"), Region::North);
        assert_eq!(Region::from_title("Western Herb Gathering"), Region::West);
        assert_eq!(Region::from_title("Central Plaza Escort"), Region::Central);
        assert_eq!(Region::from_title("Mysterious Request"), Region::East);
    }

    #[test]
    fn test_region_match_order_prefers_east() {
        // Both names appear; East is checked first
        assert_eq!(Region::from_title("East meets West"), Region::East);
    }
}
