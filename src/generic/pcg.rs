//! A simple pseudorandom number generator.
//!
//! A PCG-XSH-RR generator with 64 bits of state and a seedable stream, following the reference description at <https://www.pcg-random.org/>.
//!
//! PCG was chosen as the source of (pseudo)random numbers for world sampling as it is simple, fast, and reproducible from a seed across platforms --- an estimate from a seeded [Monte-Carlo run](crate::probability::montecarlo) is the same on every run.
//!
//! The [context](crate::context) is paramaterised to anything which satisfies [Rng](rand::Rng) and [SeedableRng](rand::SeedableRng), with [Pcg32] fixed in the canonical instantiation.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

const MULTIPLIER: u64 = 6364136223846793005;

/// State and stream of a PCG-XSH-RR generator.
pub struct Pcg32 {
    state: u64,
    stream: u64,
}

impl Pcg32 {
    fn step(&mut self) -> u64 {
        let stepped = self.state;
        self.state = stepped.wrapping_mul(MULTIPLIER).wrapping_add(self.stream);
        stepped
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Pcg32::from_seed(0_u128.to_le_bytes())
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let stepped = self.step();
        let xorshifted = (((stepped >> 18) ^ stepped) >> 27) as u32;
        let rotation = (stepped >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut half = [0_u8; 8];
        half.copy_from_slice(&seed[0..8]);
        let state = u64::from_le_bytes(half);
        half.copy_from_slice(&seed[8..16]);
        let stream = u64::from_le_bytes(half);

        // The stream must be odd.
        let mut pcg = Pcg32 {
            state: 0,
            stream: (stream << 1) | 1,
        };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(state);
        pcg.step();
        pcg
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn reproducible() {
        let mut left = Pcg32::seed_from_u64(7);
        let mut right = Pcg32::seed_from_u64(7);
        for _ in 0..64 {
            assert_eq!(left.next_u32(), right.next_u32());
        }
    }

    #[test]
    fn seed_sensitive() {
        let mut left = Pcg32::seed_from_u64(7);
        let mut right = Pcg32::seed_from_u64(8);
        let disagreement = (0..64).filter(|_| left.next_u32() != right.next_u32()).count();
        assert!(disagreement > 32);
    }

    #[test]
    fn roughly_uniform() {
        use rand::Rng;

        let mut rng = Pcg32::seed_from_u64(3);
        let draws = 4096;
        let sum: f64 = (0..draws).map(|_| rng.gen::<f64>()).sum();
        let mean = sum / draws as f64;
        assert!((mean - 0.5).abs() < 0.05, "mean {mean}");
    }
}
