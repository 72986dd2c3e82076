//! Turning fractional rates into whole event counts.

use crate::quest::Rate;
use rand::Rng;

/// Resolve a quest rate: fixed rates pass through, ranges draw uniformly.
pub fn resolve_rate(rate: Rate, rng: &mut impl Rng) -> f64 {
    match rate {
        Rate::Fixed(value) => value,
        Rate::Range { min, max } if max > min => rng.gen_range(min..max),
        Rate::Range { min, .. } => min,
    }
}

/// Scale a count by a modifier and round it stochastically.
///
/// The integer part is kept and the fractional remainder becomes the chance of
/// one extra event, so the expected result equals `count * modifier` exactly.
/// Negative products count as zero.
pub fn apply_probabilistic_mod(count: f64, modifier: f64, rng: &mut impl Rng) -> u32 {
    let float_val = (count * modifier).max(0.0);
    let base = float_val.floor();
    let remainder = float_val - base;
    let extra = if remainder > 0.0 && rng.gen::<f64>() < remainder {
        1
    } else {
        0
    };
    base as u32 + extra
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fixed_rate_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(resolve_rate(Rate::Fixed(5.0), &mut rng), 5.0);
        }
    }

    #[test]
    fn test_range_rate_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..1000 {
            let v = resolve_rate(Rate::Range { min: 1.0, max: 3.0 }, &mut rng);
            assert!((1.0..3.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(resolve_rate(Rate::Range { min: 2.0, max: 2.0 }, &mut rng), 2.0);
    }

    #[test]
    fn test_integer_products_are_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            assert_eq!(apply_probabilistic_mod(10.0, 1.5, &mut rng), 15);
            assert_eq!(apply_probabilistic_mod(10.0, 0.5, &mut rng), 5);
        }
    }

    #[test]
    fn test_probabilistic_rounding_is_unbiased() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let trials = 100_000;
        for (count, modifier) in [(1.0, 0.3), (3.0, 1.25), (2.0, 0.85), (1.0, 2.7)] {
            let total: u64 = (0..trials)
                .map(|_| apply_probabilistic_mod(count, modifier, &mut rng) as u64)
                .sum();
            let mean = total as f64 / trials as f64;
            let expected = count * modifier;
            assert!(
                (mean - expected).abs() < 0.02,
                "count={count} mod={modifier} mean={mean}"
            );
        }
    }

    #[test]
    fn test_zero_roll_always_adds_extra() {
        // StepRng(0, 0) yields 0.0 for every f64 draw
        let mut rng = StepRng::new(0, 0);
        assert_eq!(apply_probabilistic_mod(1.0, 0.01, &mut rng), 1);
        assert_eq!(apply_probabilistic_mod(2.0, 1.5, &mut rng), 3);
        assert_eq!(apply_probabilistic_mod(2.0, 1.0, &mut rng), 2);
    }

    #[test]
    fn test_negative_product_is_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(apply_probabilistic_mod(2.0, -1.0, &mut rng), 0);
    }
}
