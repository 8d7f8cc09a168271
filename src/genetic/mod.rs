//! Genetic algorithm engine.
//!
//! A generic, domain-agnostic GA built around a problem trait and an
//! explicitly threaded random state. Users describe their problem by
//! implementing [`GeneticProblem`] (or by filling an [`Options`] bundle with
//! closures); the engine owns the population lifecycle.
//!
//! # Core Types
//!
//! - [`GeneticProblem`]: Random DNA, evaluation, crossover, mutation, and
//!   the termination predicate
//! - [`Organism`]: A DNA value with its points
//! - [`Method`]: Maximize a score or minimize a penalty
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Population size, method, and initial seed
//! - [`Evolver`]: Runs the generation loop until the predicate accepts
//! - [`Evolution`]: Final population, best organism, and generator state
//!
//! # Generation
//!
//! Each generation sorts the population, keeps the better half, and turns
//! each adjacent pair of survivors into three children plus the better
//! parent. See [`execute_step`] for the single-step entry point.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod types;

pub use config::{ConfigError, EvolutionConfig, DEFAULT_POPULATION_SIZE};
pub use runner::{
    evolve_solution, execute_step, generate_next_generation, initial_population, produce_child,
    produce_family, Evolution, Evolver, Step,
};
pub use types::{GeneticProblem, Method, Options, Organism, Population};
