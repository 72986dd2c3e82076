//! Recruitment: building new adventurers from scratch.

use super::jobs::Job;
use super::origin::{JoinType, Origin};
use super::rank::{initial_rank_value, initial_trust};
use super::stats::generate_stats;
use super::traits::TraitId;
use super::types::{Adventurer, AdventurerId, Temperament};
use rand::seq::SliceRandom;
use rand::Rng;

const GIVEN_NAMES: [&str; 24] = [
    "Aldric", "Brenna", "Cassius", "Dalia", "Edric", "Freya", "Garrick", "Helena", "Ivor",
    "Juno", "Kael", "Lysa", "Marek", "Nadia", "Osric", "Petra", "Quinn", "Rowan", "Sable",
    "Tamsin", "Ulric", "Vesna", "Wren", "Yorick",
];

const MAX_TRAITS: usize = 2;

/// Pick a display name for a recruit.
pub fn random_name(rng: &mut impl Rng) -> String {
    GIVEN_NAMES
        .choose(rng)
        .copied()
        .unwrap_or("Nameless")
        .to_string()
}

/// Roll 0 to 2 distinct traits.
pub fn random_traits(rng: &mut impl Rng) -> Vec<TraitId> {
    let count = rng.gen_range(0..=MAX_TRAITS);
    TraitId::ALL.choose_multiple(rng, count).copied().collect()
}

/// Create a recruit with rolled rank, trust, temperament, traits and stats.
///
/// Arts already earned by the starting rank are granted immediately.
pub fn create_adventurer(
    id: AdventurerId,
    name: String,
    job: Job,
    origin: Origin,
    join_type: JoinType,
    rank_cap: Option<f64>,
    rng: &mut impl Rng,
) -> Adventurer {
    let rank_value = initial_rank_value(join_type, origin, rank_cap, rng);
    let stats = generate_stats(&job.base_stats(), origin, rank_value, rng);

    let mut adventurer = Adventurer::new(id, name, job, origin, join_type, rank_value, stats);
    adventurer.trust = initial_trust(origin, join_type);
    adventurer.temperament = Temperament::random(rng);
    adventurer.traits = random_traits(rng);
    adventurer.update_rank(0.0, rng);
    adventurer
}

/// Create a recruit with random job, origin and join type.
pub fn random_recruit(id: AdventurerId, rank_cap: Option<f64>, rng: &mut impl Rng) -> Adventurer {
    let job = *Job::ALL.choose(rng).unwrap_or(&Job::Warrior);
    let origin = *Origin::ALL.choose(rng).unwrap_or(&Origin::Central);
    let join_type = *JoinType::ALL.choose(rng).unwrap_or(&JoinType::Local);
    let name = random_name(rng);
    create_adventurer(id, name, job, origin, join_type, rank_cap, rng)
}
