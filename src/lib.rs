//! Seesaw - a torque-balance toy for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, object store, click mapping)
//! - `history`: Drop log shown beside the plank
//! - `view`: Platform-independent render model
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven constants

pub mod history;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod view;

pub use history::{History, HistoryEntry};
pub use tuning::{Tuning, TuningError, WeightMode};

use rand::Rng;

/// Default configuration constants
pub mod consts {
    /// Nominal plank length in pixels (the rendered width may differ)
    pub const PLANK_LENGTH_PX: f32 = 400.0;
    /// Tilt saturates at +/- this many degrees
    pub const MAX_ANGLE_DEG: f32 = 30.0;
    /// Torque units per degree of tilt
    pub const TORQUE_SCALE: f32 = 10.0;

    /// Weight range for dropped objects (inclusive)
    pub const MIN_WEIGHT_KG: u32 = 1;
    pub const MAX_WEIGHT_KG: u32 = 10;
    /// Largest weight a tuning may configure
    pub const WEIGHT_LIMIT_KG: u32 = 1000;
}

/// Clamp `value` into `[min, max]`, inclusive at both ends.
///
/// Unlike `f32::clamp` this never panics: when `min > max` values below `min`
/// resolve to `min`, anything else above `max` resolves to `max`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Uniform integer in `[min, max]`. An empty range yields `min`.
pub fn random_int_inclusive<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    if max < min {
        return min;
    }
    rng.random_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp_inside_range() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(2.5_f32, -1.0, 3.0), 2.5);
    }

    #[test]
    fn test_clamp_boundaries() {
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
        // Inclusive at both ends
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        assert_eq!(clamp(-1.0_f32, 5.0, 0.0), 5.0);
        assert_eq!(clamp(7.0_f32, 5.0, 0.0), 0.0);
    }

    #[test]
    fn test_random_int_degenerate_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(random_int_inclusive(&mut rng, 4, 4), 4);
        assert_eq!(random_int_inclusive(&mut rng, 9, 2), 9);
    }

    #[test]
    fn test_random_int_hits_both_ends() {
        let mut rng = Pcg32::seed_from_u64(42);
        let rolls: Vec<u32> = (0..2000).map(|_| random_int_inclusive(&mut rng, 1, 10)).collect();
        assert!(rolls.contains(&1));
        assert!(rolls.contains(&10));
    }

    proptest! {
        #[test]
        fn prop_random_int_within_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..64 {
                let w = random_int_inclusive(&mut rng, 1, 10);
                prop_assert!((1..=10).contains(&w));
            }
        }

        #[test]
        fn prop_clamp_stays_in_bounds(v in -1.0e6_f32..1.0e6, lo in -500.0_f32..0.0, hi in 0.0_f32..500.0) {
            let c = clamp(v, lo, hi);
            prop_assert!(c >= lo && c <= hi);
        }
    }
}
