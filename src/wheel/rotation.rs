//! Rotation generation
//!
//! Every spin adds between `min_spins` and `max_spins` whole turns plus a
//! random extra angle on top of the accumulated rotation, so the wheel only
//! ever moves forward.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN, MAX_SPINS, MIN_SPINS};

/// Next absolute rotation after one spin with the default turn range.
///
/// The result lies in `[current + 1800, current + 3240)`.
pub fn generate_rotation<R: Rng + ?Sized>(current_total: f64, rng: &mut R) -> f64 {
    generate_rotation_in(current_total, MIN_SPINS, MAX_SPINS, rng)
}

/// Next absolute rotation with `spins` drawn from `[min_spins, max_spins)`
pub fn generate_rotation_in<R: Rng + ?Sized>(
    current_total: f64,
    min_spins: f64,
    max_spins: f64,
    rng: &mut R,
) -> f64 {
    let spins = if max_spins > min_spins {
        rng.random_range(min_spins..max_spins)
    } else {
        min_spins
    };
    let extra = rng.random_range(0.0..FULL_TURN);
    current_total + spins * FULL_TURN + extra
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rotation_range_from_zero() {
        let mut rng = RngState::new(12345).to_rng();
        for _ in 0..10_000 {
            let total = generate_rotation(0.0, &mut rng);
            assert!((1800.0..3240.0).contains(&total), "out of range: {total}");
        }
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut rng = RngState::new(7).to_rng();
        let mut total = 0.0;
        for _ in 0..100 {
            let next = generate_rotation(total, &mut rng);
            assert!(next - total >= 1800.0);
            total = next;
        }
    }

    #[test]
    fn test_same_seed_same_rotations() {
        let mut a = RngState::new(99999).to_rng();
        let mut b = RngState::new(99999).to_rng();
        for _ in 0..10 {
            assert_eq!(generate_rotation(0.0, &mut a), generate_rotation(0.0, &mut b));
        }
    }

    #[test]
    fn test_degenerate_turn_range() {
        let mut rng = RngState::new(1).to_rng();
        let total = generate_rotation_in(0.0, 3.0, 3.0, &mut rng);
        assert!((1080.0..1440.0).contains(&total));
    }

    proptest! {
        #[test]
        fn prop_strictly_forward(seed in any::<u64>(), current in 0.0f64..1.0e9) {
            let mut rng = RngState::new(seed).to_rng();
            let next = generate_rotation(current, &mut rng);
            prop_assert!(next > current);
            prop_assert!(next - current >= 1800.0 - 1e-6);
            prop_assert!(next - current < 3240.0 + 1e-6);
        }
    }
}
