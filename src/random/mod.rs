//! Deterministic, splittable pseudorandom generation.
//!
//! All randomness in this crate flows through an explicit [`Seed`] value:
//! every draw takes a seed and returns the drawn value together with the
//! next seed. There is no global or hidden generator state, so a run is
//! fully reproducible from its initial seed.
//!
//! # Key Types
//!
//! - [`Seed`]: Combined-LCG state with primitive draws (`int`, `float`, `bool`)
//! - [`Generator`]: Composable description of a draw (`map`, `and_then`)
//! - [`SeedRng`]: Adapter exposing a seed as a [`rand::RngCore`]
//!
//! # Splitting
//!
//! [`Seed::split`] derives two independent streams from one state. Use it
//! whenever two consumers need randomness without sharing a single thread
//! of seeds.

mod generator;
mod rng;
mod seed;

pub use generator::{
    bool, constant, float, from_fn, int, list, pair, AndThen, Bool, Constant, Float, FromFn,
    Generator, Int, List, Map, Pair,
};
pub use rng::SeedRng;
pub use seed::{Seed, SeedStateError, RAW_MAX};
