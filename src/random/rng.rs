//! Bridge from [`Seed`] to the `rand` ecosystem.

use super::seed::Seed;
use rand::RngCore;

/// A [`rand::RngCore`] that draws from a threaded [`Seed`].
///
/// Lets domain operators use `rand::Rng` conveniences while staying on the
/// deterministic stream. Take the advanced state back with
/// [`into_seed`](SeedRng::into_seed) and keep threading it.
///
/// ```
/// use rand::Rng;
/// use u_evolve::random::{Seed, SeedRng};
///
/// let mut rng = SeedRng::new(Seed::new(42));
/// let gene: f64 = rng.random_range(-1.0..1.0);
/// let seed = rng.into_seed();
/// # let _ = (gene, seed);
/// ```
#[derive(Debug, Clone)]
pub struct SeedRng {
    seed: Seed,
}

impl SeedRng {
    /// Wraps a seed.
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// Returns the current (advanced) seed.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Unwraps the advanced seed.
    pub fn into_seed(self) -> Seed {
        self.seed
    }
}

impl RngCore for SeedRng {
    fn next_u32(&mut self) -> u32 {
        let (value, seed) = self.seed.int(0, u32::MAX as i64);
        self.seed = seed;
        value as u32
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_next_u32_follows_seed() {
        let seed = Seed::new(9);
        let mut rng = SeedRng::new(seed);
        let (expected, next) = seed.int(0, u32::MAX as i64);
        assert_eq!(rng.next_u32() as i64, expected);
        assert_eq!(rng.into_seed(), next);
    }

    #[test]
    fn test_deterministic_across_instances() {
        let mut a = SeedRng::new(Seed::new(123));
        let mut b = SeedRng::new(Seed::new(123));
        let xs: Vec<u64> = (0..10).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..10).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_rng_helpers_respect_bounds() {
        let mut rng = SeedRng::new(Seed::new(1));
        for _ in 0..1000 {
            let x = rng.random_range(0..10);
            assert!((0..10).contains(&x));
        }
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = SeedRng::new(Seed::new(5));
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);
        let mut again = SeedRng::new(Seed::new(5));
        let first = again.next_u32().to_le_bytes();
        assert_eq!(&buf[..4], &first);
        assert_ne!(rng.seed(), Seed::new(5));
    }
}
