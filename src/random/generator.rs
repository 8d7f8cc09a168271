//! Composable random generators.
//!
//! A [`Generator`] describes how to draw a value from a [`Seed`] without
//! drawing it. Generators are built from the primitives in this module and
//! combined with [`Generator::map`] and [`Generator::and_then`], then run
//! with [`Generator::step`] or [`Seed::generate`].
//!
//! ```
//! use u_evolve::random::{self, Generator, Seed};
//!
//! // A point on a 100x100 grid.
//! let point = random::pair(random::int(0, 99), random::int(0, 99));
//! let ((x, y), _next) = point.step(Seed::new(1));
//! assert!((0..100).contains(&x) && (0..100).contains(&y));
//! ```

use super::seed::Seed;
use std::marker::PhantomData;

/// A recipe for drawing one value of type [`Output`](Generator::Output).
pub trait Generator {
    /// The type of value produced.
    type Output;

    /// Draws one value, returning it with the advanced seed.
    fn step(&self, seed: Seed) -> (Self::Output, Seed);

    /// Transforms every drawn value with `f`. Consumes no extra draws.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map {
            generator: self,
            f,
        }
    }

    /// Draws a value, then draws from the generator `f` builds from it.
    fn and_then<F, G>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> G,
        G: Generator,
    {
        AndThen {
            generator: self,
            f,
        }
    }
}

impl<G: Generator + ?Sized> Generator for &G {
    type Output = G::Output;

    fn step(&self, seed: Seed) -> (Self::Output, Seed) {
        (**self).step(seed)
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Output = G::Output;

    fn step(&self, seed: Seed) -> (Self::Output, Seed) {
        (**self).step(seed)
    }
}

// ============================================================================
// Primitives
// ============================================================================

/// Integers in `[lo, hi]`. See [`Seed::int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int {
    lo: i64,
    hi: i64,
}

impl Generator for Int {
    type Output = i64;

    fn step(&self, seed: Seed) -> (i64, Seed) {
        seed.int(self.lo, self.hi)
    }
}

/// Creates a generator of integers in `[lo, hi]`.
pub fn int(lo: i64, hi: i64) -> Int {
    Int { lo, hi }
}

/// Reals in `[lo, hi]`. See [`Seed::float`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float {
    lo: f64,
    hi: f64,
}

impl Generator for Float {
    type Output = f64;

    fn step(&self, seed: Seed) -> (f64, Seed) {
        seed.float(self.lo, self.hi)
    }
}

/// Creates a generator of reals in `[lo, hi]`.
pub fn float(lo: f64, hi: f64) -> Float {
    Float { lo, hi }
}

/// Fair coin flips. See [`Seed::bool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bool;

impl Generator for Bool {
    type Output = bool;

    fn step(&self, seed: Seed) -> (bool, Seed) {
        seed.bool()
    }
}

/// Creates a coin-flip generator.
pub fn bool() -> Bool {
    Bool
}

/// Always yields a clone of the same value without drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<T> {
    value: T,
}

impl<T: Clone> Generator for Constant<T> {
    type Output = T;

    fn step(&self, seed: Seed) -> (T, Seed) {
        (self.value.clone(), seed)
    }
}

/// Creates a generator that always yields `value`.
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant { value }
}

/// Wraps a plain function `Seed -> (T, Seed)`.
pub struct FromFn<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> Generator for FromFn<F, T>
where
    F: Fn(Seed) -> (T, Seed),
{
    type Output = T;

    fn step(&self, seed: Seed) -> (T, Seed) {
        (self.f)(seed)
    }
}

/// Turns a seed-threading function into a [`Generator`].
pub fn from_fn<F, T>(f: F) -> FromFn<F, T>
where
    F: Fn(Seed) -> (T, Seed),
{
    FromFn {
        f,
        _output: PhantomData,
    }
}

// ============================================================================
// Combinators
// ============================================================================

/// `n` values from one generator, in draw order.
#[derive(Debug, Clone)]
pub struct List<G> {
    n: usize,
    generator: G,
}

impl<G: Generator> Generator for List<G> {
    type Output = Vec<G::Output>;

    fn step(&self, seed: Seed) -> (Self::Output, Seed) {
        seed.list(self.n, |s| self.generator.step(s))
    }
}

/// Creates a generator of `n`-element vectors.
pub fn list<G: Generator>(n: usize, generator: G) -> List<G> {
    List { n, generator }
}

/// Draws `a`, then `b`.
#[derive(Debug, Clone)]
pub struct Pair<A, B> {
    a: A,
    b: B,
}

impl<A: Generator, B: Generator> Generator for Pair<A, B> {
    type Output = (A::Output, B::Output);

    fn step(&self, seed: Seed) -> (Self::Output, Seed) {
        let (a, seed) = self.a.step(seed);
        let (b, seed) = self.b.step(seed);
        ((a, b), seed)
    }
}

/// Creates a generator of pairs.
pub fn pair<A: Generator, B: Generator>(a: A, b: B) -> Pair<A, B> {
    Pair { a, b }
}

/// See [`Generator::map`].
#[derive(Debug, Clone)]
pub struct Map<G, F> {
    generator: G,
    f: F,
}

impl<G, F, U> Generator for Map<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> U,
{
    type Output = U;

    fn step(&self, seed: Seed) -> (U, Seed) {
        let (value, seed) = self.generator.step(seed);
        ((self.f)(value), seed)
    }
}

/// See [`Generator::and_then`].
#[derive(Debug, Clone)]
pub struct AndThen<G, F> {
    generator: G,
    f: F,
}

impl<G, F, H> Generator for AndThen<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> H,
    H: Generator,
{
    type Output = H::Output;

    fn step(&self, seed: Seed) -> (H::Output, Seed) {
        let (value, seed) = self.generator.step(seed);
        (self.f)(value).step(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_match_seed_methods() {
        let seed = Seed::new(5);
        assert_eq!(int(1, 6).step(seed), seed.int(1, 6));
        assert_eq!(bool().step(seed), seed.bool());
        assert_eq!(float(0.0, 2.0).step(seed), seed.float(0.0, 2.0));
    }

    #[test]
    fn test_constant_does_not_draw() {
        let seed = Seed::new(5);
        let (v, next) = constant("x").step(seed);
        assert_eq!(v, "x");
        assert_eq!(next, seed);
    }

    #[test]
    fn test_map_consumes_no_extra_draws() {
        let seed = Seed::new(8);
        let (doubled, after_map) = int(0, 10).map(|x| x * 2).step(seed);
        let (plain, after_plain) = int(0, 10).step(seed);
        assert_eq!(doubled, plain * 2);
        assert_eq!(after_map, after_plain);
    }

    #[test]
    fn test_pair_draws_left_then_right() {
        let seed = Seed::new(21);
        let ((a, b), end) = pair(int(0, 100), int(0, 100)).step(seed);
        let (x, s) = seed.int(0, 100);
        let (y, s) = s.int(0, 100);
        assert_eq!((a, b), (x, y));
        assert_eq!(end, s);
    }

    #[test]
    fn test_list_length_and_order() {
        let seed = Seed::new(4);
        let (values, _) = list(6, int(-3, 3)).step(seed);
        assert_eq!(values.len(), 6);
        let (expected, _) = seed.list(6, |s| s.int(-3, 3));
        assert_eq!(values, expected);
    }

    #[test]
    fn test_and_then_uses_first_draw() {
        // Draw a length, then a list of that length.
        let sized = int(1, 5).and_then(|n| list(n as usize, bool()));
        for n in 0..20 {
            let (values, _) = sized.step(Seed::new(n));
            assert!((1..=5).contains(&values.len()));
        }
    }

    #[test]
    fn test_from_fn_wraps_closure() {
        let dice = from_fn(|s: Seed| s.int(1, 6));
        let seed = Seed::new(77);
        assert_eq!(dice.step(seed), seed.int(1, 6));
        assert_eq!(seed.generate(&dice), seed.int(1, 6));
    }

    #[test]
    fn test_boxed_generator() {
        let boxed: Box<dyn Generator<Output = i64>> = Box::new(int(0, 3));
        let seed = Seed::new(2);
        assert_eq!(boxed.step(seed), seed.int(0, 3));
    }
}
