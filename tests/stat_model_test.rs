//! Integration test: rank values, labels and art unlocks on real recruits

use guildhall::adventurer::recruit::random_recruit;
use guildhall::adventurer::{generate_stats, AdventurerId, Job, Origin, RankLabel, StatType};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_label_always_matches_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for i in 0..100 {
        let mut adventurer = random_recruit(AdventurerId(i), None, &mut rng);
        for delta in [25.0, -60.0, 400.0, 900.0, -3000.0, 12000.0] {
            adventurer.update_rank(delta, &mut rng);
            assert_eq!(
                adventurer.rank_label(),
                RankLabel::from_value(adventurer.rank_value())
            );
        }
    }
}

#[test]
fn test_rank_value_is_clamped() {
    let mut rng = ChaCha8Rng::seed_from_u64(32);
    let mut adventurer = random_recruit(AdventurerId(1), Some(50.0), &mut rng);

    let update = adventurer.update_rank(-1000.0, &mut rng);
    assert_eq!(adventurer.rank_value(), 0.0);
    assert!(update.delta_applied >= -50.0);

    adventurer.update_rank(50_000.0, &mut rng);
    assert_eq!(adventurer.rank_value(), 9999.0);
    assert_eq!(adventurer.rank_label(), RankLabel::S);
}

#[test]
fn test_arts_unlock_at_b_and_s() {
    let mut rng = ChaCha8Rng::seed_from_u64(33);
    let mut adventurer = random_recruit(AdventurerId(1), Some(0.0), &mut rng);
    adventurer.arts.clear();

    let update = adventurer.update_rank(379.0, &mut rng);
    assert!(update.learned_arts.is_empty());

    let update = adventurer.update_rank(1.0, &mut rng);
    assert_eq!(update.learned_arts.len(), 1);
    assert!(update.label_changed);
    assert_eq!(adventurer.rank_label(), RankLabel::B);

    let update = adventurer.update_rank(620.0, &mut rng);
    assert_eq!(update.learned_arts.len(), 1);
    assert_eq!(adventurer.arts.len(), 2);
    assert_ne!(adventurer.arts[0], adventurer.arts[1]);

    // Nothing further to learn
    let update = adventurer.update_rank(500.0, &mut rng);
    assert!(update.learned_arts.is_empty());
}

#[test]
fn test_higher_rank_rolls_stronger_stats() {
    let mut rng = ChaCha8Rng::seed_from_u64(34);
    let base = Job::Knight.base_stats();
    let mut low = 0.0;
    let mut high = 0.0;
    for _ in 0..200 {
        low += generate_stats(&base, Origin::Central, 0.0, &mut rng).sum();
        high += generate_stats(&base, Origin::Central, 1000.0, &mut rng).sum();
    }
    assert!(high > low * 1.4);
}

#[test]
fn test_stats_are_whole_and_positive() {
    let mut rng = ChaCha8Rng::seed_from_u64(35);
    for job in Job::ALL {
        for origin in Origin::ALL {
            let stats = generate_stats(&job.base_stats(), origin, 500.0, &mut rng);
            for stat in StatType::all() {
                let value = stats.get(stat);
                assert!(value >= 1.0);
                assert_eq!(value, value.round());
            }
        }
    }
}
