//! Read-only monster and item catalogs, keyed by region and rank.
//!
//! Lookups never fail: each one walks an ordered chain of broader searches
//! and the caller picks the first tier that returns something.

pub mod data;
pub mod types;

pub use data::{material_pool, material_value};
pub use types::{ItemEntry, MainType, MonsterCategory, MonsterEntry, Region};

use crate::adventurer::RankLabel;
use crate::core::GuildError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bestiary {
    pub monsters: Vec<MonsterEntry>,
    pub items: Vec<ItemEntry>,
}

impl Bestiary {
    /// The built-in world tables.
    pub fn standard() -> Self {
        let monsters = data::MONSTERS
            .iter()
            .map(|(region, rank, name, main_type, categories)| MonsterEntry {
                name: name.to_string(),
                region: *region,
                rank: *rank,
                categories: categories.to_vec(),
                main_type: Some(*main_type),
                is_boss: categories.contains(&MonsterCategory::Boss),
            })
            .collect();
        let items = data::ITEMS
            .iter()
            .map(|(region, rank, name, value, is_rare)| ItemEntry {
                name: name.to_string(),
                region: *region,
                rank: *rank,
                value: *value,
                is_rare: *is_rare,
            })
            .collect();
        Self { monsters, items }
    }

    /// Load replacement tables from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, GuildError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    // ── Monster fallback tiers ────────────────────────────────────────

    /// Exact region and rank.
    pub fn monsters_at(&self, region: Region, rank: RankLabel) -> Option<Vec<&MonsterEntry>> {
        non_empty(
            self.monsters
                .iter()
                .filter(|m| m.region == region && m.rank == rank)
                .collect(),
        )
    }

    /// Any rank within a region.
    pub fn monsters_in_region(&self, region: Region) -> Option<Vec<&MonsterEntry>> {
        non_empty(self.monsters.iter().filter(|m| m.region == region).collect())
    }

    /// Anything at all.
    pub fn all_monsters(&self) -> Option<Vec<&MonsterEntry>> {
        non_empty(self.monsters.iter().collect())
    }

    /// Candidate pool for an encounter: exact match, then the East table at the
    /// same rank, then any rank in the region, then any monster. `None` only
    /// when the catalog is empty.
    pub fn monster_pool(&self, region: Region, rank: RankLabel) -> Option<Vec<&MonsterEntry>> {
        self.monsters_at(region, rank)
            .or_else(|| self.monsters_at(Region::East, rank))
            .or_else(|| self.monsters_in_region(region))
            .or_else(|| self.all_monsters())
    }

    // ── Item fallback tiers ───────────────────────────────────────────

    pub fn items_at(&self, region: Region, rank: RankLabel) -> Option<Vec<&ItemEntry>> {
        non_empty(
            self.items
                .iter()
                .filter(|i| i.region == region && i.rank == rank)
                .collect(),
        )
    }

    /// Gather pool, using the same fallback order as monsters.
    pub fn item_pool(&self, region: Region, rank: RankLabel) -> Option<Vec<&ItemEntry>> {
        self.items_at(region, rank)
            .or_else(|| self.items_at(Region::East, rank))
            .or_else(|| non_empty(self.items.iter().filter(|i| i.region == region).collect()))
            .or_else(|| non_empty(self.items.iter().collect()))
    }

    /// Boss names available for a region and rank, used to pick quest targets.
    pub fn boss_names(&self, region: Region, rank: RankLabel) -> Vec<&str> {
        self.monster_pool(region, rank)
            .unwrap_or_default()
            .into_iter()
            .filter(|m| m.is_boss_category())
            .map(|m| m.name.as_str())
            .collect()
    }
}

fn non_empty<T>(v: Vec<T>) -> Option<Vec<T>> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}
