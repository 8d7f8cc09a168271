//! Deterministic, domain-agnostic genetic algorithm engine.
//!
//! - **Genetic engine** ([`genetic`]): Population lifecycle, half-population
//!   culling, pairwise reproduction into families of four, and a generation
//!   loop driven by a caller-supplied termination predicate.
//! - **Seeded PRNG** ([`random`]): A splittable combined-LCG generator whose
//!   state is threaded by value through every draw, plus composable
//!   generators and a `rand` bridge.
//! - **Non-empty collection** ([`Nonempty`]): The population container; it
//!   cannot become empty.
//!
//! # Determinism
//!
//! A run is a pure function of its problem and configuration. The same seed
//! always yields the same final population, best organism, and final seed.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain concepts: meal plans, drawings, schedules and so on
//! are supplied by consumers through [`genetic::GeneticProblem`].

pub mod genetic;
pub mod nonempty;
pub mod random;

pub use nonempty::{EmptyError, Nonempty};
