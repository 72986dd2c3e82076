//! Personality traits and the modifiers they carry.
//!
//! A trait biases quest auto-pick scoring (`AutoPick`) and tweaks simulation
//! rates (`TraitHooks`). Every hook field is always present and defaults to
//! its neutral value, so callers multiply or add without checking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitId {
    Brave,
    Cautious,
    Greedy,
    Lucky,
    Studious,
    Sturdy,
    Clumsy,
    Charismatic,
    Bloodthirsty,
    Frugal,
}

/// Additive biases to the auto-pick multiplier, each scaled by the matching
/// quest factor (danger, reward rate, prestige).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AutoPick {
    pub danger: f64,
    pub reward: f64,
    pub prestige: f64,
}

/// Multiplicative simulation hooks. 1.0 is neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitHooks {
    pub battle_rate: f64,
    pub gather_rate: f64,
    pub win_rate: f64,
    /// Only applies when the holder has a magic job
    pub magic_win_rate: f64,
    pub injury: f64,
    pub penalty: f64,
    pub guild_share: f64,
}

impl Default for TraitHooks {
    fn default() -> Self {
        Self {
            battle_rate: 1.0,
            gather_rate: 1.0,
            win_rate: 1.0,
            magic_win_rate: 1.0,
            injury: 1.0,
            penalty: 1.0,
            guild_share: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitProfile {
    pub auto_pick: AutoPick,
    pub hooks: TraitHooks,
}

impl TraitId {
    pub const ALL: [TraitId; 10] = [
        TraitId::Brave,
        TraitId::Cautious,
        TraitId::Greedy,
        TraitId::Lucky,
        TraitId::Studious,
        TraitId::Sturdy,
        TraitId::Clumsy,
        TraitId::Charismatic,
        TraitId::Bloodthirsty,
        TraitId::Frugal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TraitId::Brave => "Brave",
            TraitId::Cautious => "Cautious",
            TraitId::Greedy => "Greedy",
            TraitId::Lucky => "Lucky",
            TraitId::Studious => "Studious",
            TraitId::Sturdy => "Sturdy",
            TraitId::Clumsy => "Clumsy",
            TraitId::Charismatic => "Charismatic",
            TraitId::Bloodthirsty => "Bloodthirsty",
            TraitId::Frugal => "Frugal",
        }
    }

    pub fn profile(&self) -> TraitProfile {
        let neutral = TraitHooks::default();
        let (auto_pick, hooks) = match self {
            TraitId::Brave => (
                AutoPick { danger: 0.3, ..Default::default() },
                TraitHooks { win_rate: 1.05, injury: 1.1, ..neutral },
            ),
            TraitId::Cautious => (
                AutoPick { danger: -0.3, ..Default::default() },
                TraitHooks { battle_rate: 0.9, injury: 0.8, ..neutral },
            ),
            TraitId::Greedy => (
                AutoPick { reward: 0.4, ..Default::default() },
                TraitHooks { guild_share: 0.9, ..neutral },
            ),
            TraitId::Lucky => (
                AutoPick::default(),
                TraitHooks { gather_rate: 1.2, ..neutral },
            ),
            TraitId::Studious => (
                AutoPick { prestige: 0.2, ..Default::default() },
                TraitHooks { magic_win_rate: 1.08, ..neutral },
            ),
            TraitId::Sturdy => (
                AutoPick { danger: 0.1, ..Default::default() },
                TraitHooks { injury: 0.7, ..neutral },
            ),
            TraitId::Clumsy => (
                AutoPick::default(),
                TraitHooks { win_rate: 0.95, penalty: 1.2, ..neutral },
            ),
            TraitId::Charismatic => (
                AutoPick { prestige: 0.3, ..Default::default() },
                TraitHooks { guild_share: 1.1, ..neutral },
            ),
            TraitId::Bloodthirsty => (
                AutoPick { danger: 0.2, reward: 0.1, ..Default::default() },
                TraitHooks { battle_rate: 1.2, injury: 1.15, ..neutral },
            ),
            TraitId::Frugal => (
                AutoPick { reward: -0.2, ..Default::default() },
                TraitHooks { penalty: 0.8, ..neutral },
            ),
        };
        TraitProfile { auto_pick, hooks }
    }

    pub fn hooks(&self) -> TraitHooks {
        self.profile().hooks
    }

    /// Narrative lines the simulator may pick when this trait shows up.
    /// `{name}` is replaced with the holder's name.
    pub fn flavor_lines(&self) -> &'static [&'static str] {
        match self {
            TraitId::Brave => &[
                "{name} strides ahead of the party without a second glance.",
                "{name} volunteers to take point again.",
            ],
            TraitId::Cautious => &[
                "{name} insists on checking the trail twice.",
                "{name} marks a fallback route on the map.",
            ],
            TraitId::Greedy => &[
                "{name} keeps eyeing the loot sacks.",
                "{name} haggles with a passing peddler.",
            ],
            TraitId::Lucky => &[
                "{name} trips over a pouch of coins.",
                "{name} finds a four-leaf clover by the road.",
            ],
            TraitId::Studious => &[
                "{name} reads by the campfire late into the night.",
                "{name} scribbles notes about the local flora.",
            ],
            TraitId::Sturdy => &[
                "{name} shrugs off the cold without complaint.",
                "{name} carries twice the usual load.",
            ],
            TraitId::Clumsy => &[
                "{name} drops the cooking pot into the river.",
                "{name} gets tangled in a tent rope.",
            ],
            TraitId::Charismatic => &[
                "{name} charms the innkeeper into a free meal.",
                "{name} lifts everyone's spirits with a story.",
            ],
            TraitId::Bloodthirsty => &[
                "{name} sharpens a blade with an unsettling grin.",
                "{name} hopes the next fight comes soon.",
            ],
            TraitId::Frugal => &[
                "{name} mends a torn cloak instead of buying a new one.",
                "{name} rations the supplies carefully.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hooks_are_neutral() {
        let hooks = TraitHooks::default();
        assert_eq!(hooks.win_rate, 1.0);
        assert_eq!(hooks.injury, 1.0);
        assert_eq!(hooks.guild_share, 1.0);
    }

    #[test]
    fn test_every_trait_has_flavor() {
        for t in TraitId::ALL {
            assert!(!t.flavor_lines().is_empty());
            for line in t.flavor_lines() {
                assert!(line.contains("{name}"));
            }
        }
    }

    #[test]
    fn test_sturdy_reduces_injury() {
        assert!(TraitId::Sturdy.hooks().injury < 1.0);
        assert!(TraitId::Brave.hooks().injury > 1.0);
        assert_eq!(TraitId::Lucky.profile().auto_pick, AutoPick::default());
    }
}
