//! Combined linear-congruential generator state.
//!
//! [`Seed`] is a plain `Copy` value. Every draw consumes a seed and returns
//! the advanced one alongside the drawn value; nothing is mutated in place,
//! so the same seed always reproduces the same sequence.
//!
//! # Algorithm
//!
//! Two multiplicative LCG streams are advanced with Schrage's method to avoid
//! overflow and combined by subtraction:
//!
//! - stream 1: `s1' = 40014 * s1 mod 2147483563`
//! - stream 2: `s2' = 40692 * s2 mod 2147483399`
//! - output: `s1' - s2'`, wrapped into `[1, 2147483562]`
//!
//! # References
//!
//! - L'Ecuyer (1988), "Efficient and Portable Combined Random Number
//!   Generators", *Communications of the ACM* 31(6)
//! - Schrage (1979), "A More Portable Fortran Random Number Generator"

use super::generator::Generator;

const MODULUS_1: i64 = 2_147_483_563;
const MODULUS_2: i64 = 2_147_483_399;
const MULTIPLIER_1: i64 = 40_014;
const MULTIPLIER_2: i64 = 40_692;
// Schrage decomposition: modulus = multiplier * q + r
const QUOTIENT_1: i64 = 53_668;
const REMAINDER_1: i64 = 12_211;
const QUOTIENT_2: i64 = 52_774;
const REMAINDER_2: i64 = 3_791;

/// Largest raw draw returned by [`Seed::next`]. Raw draws lie in `[1, RAW_MAX]`.
pub const RAW_MAX: i64 = MODULUS_1 - 1;

/// Radix used when several raw draws are combined into one bounded integer.
const INT_BASE: i64 = RAW_MAX - 1;

const INT32_MIN: i64 = i32::MIN as i64;
const INT32_MAX: i64 = i32::MAX as i64;

/// Generator state of the combined LCG.
///
/// # Examples
///
/// ```
/// use u_evolve::random::Seed;
///
/// let seed = Seed::new(42);
/// let (a, seed) = seed.int(0, 9);
/// let (b, _) = seed.int(0, 9);
/// assert!((0..=9).contains(&a) && (0..=9).contains(&b));
///
/// // Same seed, same draws.
/// assert_eq!(Seed::new(42).int(0, 9).0, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(i64, i64)"))]
pub struct Seed {
    s1: i64,
    s2: i64,
}

/// A sub-state outside the range the generator can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid seed state ({s1}, {s2}): s1 must be in [1, 2147483562], s2 in [1, 2147483398]")]
pub struct SeedStateError {
    pub s1: i64,
    pub s2: i64,
}

impl TryFrom<(i64, i64)> for Seed {
    type Error = SeedStateError;

    /// Rebuilds a state saved with [`Seed::state`].
    fn try_from((s1, s2): (i64, i64)) -> Result<Self, Self::Error> {
        if (1..MODULUS_1).contains(&s1) && (1..MODULUS_2).contains(&s2) {
            Ok(Self { s1, s2 })
        } else {
            Err(SeedStateError { s1, s2 })
        }
    }
}

impl From<Seed> for (i64, i64) {
    fn from(seed: Seed) -> Self {
        seed.state()
    }
}

impl Seed {
    /// Creates the initial state from an arbitrary integer.
    ///
    /// The sign of `n` is ignored.
    pub fn new(n: i64) -> Self {
        let s = n.unsigned_abs();
        let q = s / (MODULUS_1 - 1) as u64;
        let s1 = (s % (MODULUS_1 - 1) as u64) as i64;
        let s2 = (q % (MODULUS_2 - 1) as u64) as i64;
        Self {
            s1: s1 + 1,
            s2: s2 + 1,
        }
    }

    /// Creates a state from the thread-local entropy source.
    ///
    /// Intended for hosts that want a fresh run each time; the engine itself
    /// only ever uses the seed it is given.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>() as i64)
    }

    /// Returns the two sub-states `(s1, s2)`.
    pub fn state(&self) -> (i64, i64) {
        (self.s1, self.s2)
    }

    /// Draws one raw value in `[1, RAW_MAX]` and advances the state.
    pub fn next(self) -> (i64, Self) {
        let k2 = self.s2 / QUOTIENT_2;
        let raw2 = MULTIPLIER_2 * (self.s2 - k2 * QUOTIENT_2) - k2 * REMAINDER_2;
        let s2 = if raw2 < 0 { raw2 + MODULUS_2 } else { raw2 };

        let k1 = self.s1 / QUOTIENT_1;
        let raw1 = MULTIPLIER_1 * (self.s1 - k1 * QUOTIENT_1) - k1 * REMAINDER_1;
        let s1 = if raw1 < 0 { raw1 + MODULUS_1 } else { raw1 };

        let z = s1 - s2;
        let z = if z < 1 { z + RAW_MAX } else { z };
        (z, Self { s1, s2 })
    }

    /// Splits the state into two independent states.
    ///
    /// Use this to hand separate streams to independent consumers; reusing
    /// one state for both would make them draw identical values.
    pub fn split(self) -> (Self, Self) {
        let (_, Seed { s1: t1, s2: t2 }) = self.next();
        let new_s1 = if self.s1 == MODULUS_1 - 1 {
            1
        } else {
            self.s1 + 1
        };
        let new_s2 = if self.s2 == 1 {
            MODULUS_2 - 1
        } else {
            self.s2 - 1
        };
        (Self { s1: new_s1, s2: t2 }, Self { s1: t1, s2: new_s2 })
    }

    /// Draws an integer in `[lo, hi]` (inclusive). Reversed bounds are swapped.
    ///
    /// Enough raw draws are combined to cover the requested width, so wide
    /// ranges such as the full `i32` span stay close to uniform.
    pub fn int(self, lo: i64, hi: i64) -> (i64, Self) {
        let (lo, hi) = if lo < hi { (lo, hi) } else { (hi, lo) };
        let width = hi as i128 - lo as i128 + 1;
        let draws = ilog_base(INT_BASE as i128, width);

        let mut acc: i128 = 1;
        let mut seed = self;
        for _ in 0..draws {
            let (x, next) = seed.next();
            acc = x as i128 + acc * INT_BASE as i128;
            seed = next;
        }

        let value = lo as i128 + acc.rem_euclid(width);
        (value as i64, seed)
    }

    /// Draws a real number in `[lo, hi]`. Reversed bounds are swapped.
    ///
    /// The value is mapped symmetrically around the midpoint so neither
    /// bound is favoured.
    pub fn float(self, lo: f64, hi: f64) -> (f64, Self) {
        let (number, seed) = self.int(INT32_MIN, INT32_MAX);
        let normalized = number as f64 / (INT32_MAX - INT32_MIN) as f64;
        let (lo, hi) = if lo < hi { (lo, hi) } else { (hi, lo) };
        let scaled = (lo + hi) / 2.0 + (hi - lo) * normalized;
        (scaled, seed)
    }

    /// Flips a coin: one draw in `[0, 1]`, `true` iff it is `1`.
    pub fn bool(self) -> (bool, Self) {
        let (bit, seed) = self.int(0, 1);
        (bit == 1, seed)
    }

    /// Runs `generator` once from this state.
    pub fn generate<G: Generator>(self, generator: &G) -> (G::Output, Self) {
        generator.step(self)
    }

    /// Draws `n` values with `draw`, in draw order.
    pub fn list<T, F>(self, n: usize, mut draw: F) -> (Vec<T>, Self)
    where
        F: FnMut(Seed) -> (T, Seed),
    {
        let mut values = Vec::with_capacity(n);
        let mut seed = self;
        for _ in 0..n {
            let (value, next) = draw(seed);
            values.push(value);
            seed = next;
        }
        (values, seed)
    }
}

/// Number of base-`b` digits needed to represent `i` (at least 1).
fn ilog_base(b: i128, i: i128) -> u32 {
    let mut digits = 1;
    let mut i = i;
    while i >= b {
        i /= b;
        digits += 1;
    }
    digits
}
