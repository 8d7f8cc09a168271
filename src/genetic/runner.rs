//! Generational evolution loop.
//!
//! One generation is: sort the population by points → keep the better half
//! → walk the survivors in adjacent pairs → each pair yields three children
//! plus its better parent → the families form the next population.
//!
//! Every random draw takes the current [`Seed`] and returns the next one;
//! the seed is threaded strictly left to right through the whole pipeline,
//! so a run is a pure function of its problem and configuration.

use super::config::{ConfigError, EvolutionConfig};
use super::types::{GeneticProblem, Method, Organism, Options, Population};
use crate::nonempty::Nonempty;
use crate::random::{from_fn, Seed};
use log::{debug, info, warn};
use std::cmp::Ordering;

/// Result of an evolution run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evolution<D> {
    /// The last population produced.
    pub population: Population<D>,

    /// DNA of the organism the termination predicate accepted.
    pub best_dna: D,

    /// Points of `best_dna`.
    pub best_points: f64,

    /// Generator state after the last draw. Feed it to a follow-up run to
    /// continue the same stream.
    pub seed: Seed,

    /// Generation count at termination (the value the predicate accepted).
    pub generations: usize,

    /// Best points of each evaluated generation, starting with the initial
    /// population.
    pub points_history: Vec<f64>,
}

/// Output of one [`execute_step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step<D> {
    /// The next population.
    pub population: Population<D>,

    /// Best organism of the population the step started from.
    pub best: Organism<D>,

    /// Advanced generator state.
    pub seed: Seed,
}

/// Executes the evolution loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = EvolutionConfig::new(Seed::new(42)).with_population_size(40);
/// let evolution = Evolver::run(&problem, &config)?;
/// println!("best: {:?} ({})", evolution.best_dna, evolution.best_points);
/// ```
pub struct Evolver;

impl Evolver {
    /// Evolves until [`GeneticProblem::is_done`] returns `true`.
    ///
    /// The initial population is stepped once before the predicate is first
    /// consulted (with generation 0); every rejection runs one more step and
    /// increments the generation count. A run therefore executes
    /// `generations + 1` steps. There is no built-in iteration cap.
    ///
    /// Seed and method come from `config` only. For an [`Options`] bundle use
    /// [`Evolver::run_options`], which reads them from the bundle.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn run<P>(problem: &P, config: &EvolutionConfig) -> Result<Evolution<P::Dna>, ConfigError>
    where
        P: GeneticProblem + ?Sized,
    {
        config.validate()?;
        Ok(evolve(problem, config))
    }

    /// Runs `options` with its own seed and method and the given population
    /// size.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `population_size` is below 2.
    pub fn run_options<D: Clone>(
        options: &Options<D>,
        population_size: usize,
    ) -> Result<Evolution<D>, ConfigError> {
        let config = EvolutionConfig::from_options(options).with_population_size(population_size);
        Self::run(options, &config)
    }
}

/// Runs `options` with its own seed and method and the default population
/// size of [`DEFAULT_POPULATION_SIZE`](super::DEFAULT_POPULATION_SIZE).
pub fn evolve_solution<D: Clone>(options: &Options<D>) -> Evolution<D> {
    evolve(options, &EvolutionConfig::from_options(options))
}

/// The generation loop. `config` must already be valid.
fn evolve<P>(problem: &P, config: &EvolutionConfig) -> Evolution<P::Dna>
where
    P: GeneticProblem + ?Sized,
{
    if !config.is_size_stable() {
        warn!(
            "population size {} is not a multiple of 4; the population will shrink",
            config.population_size
        );
    }
    info!(
        "evolving: population {}, {:?}, seed {:?}",
        config.population_size,
        config.method,
        config.seed.state()
    );

    let (population, seed) = initial_population(problem, config);
    let mut step = execute_step(problem, config, &population, seed);
    let mut generation = 0;
    let mut points_history = vec![step.best.points()];
    problem.on_generation(generation, step.best.points());

    while !problem.is_done(step.best.dna(), step.best.points(), generation) {
        step = execute_step(problem, config, &step.population, step.seed);
        generation += 1;
        points_history.push(step.best.points());
        debug!(
            "generation {}: best {}, population {}",
            generation,
            step.best.points(),
            step.population.len()
        );
        problem.on_generation(generation, step.best.points());
    }

    info!(
        "evolution done after {} generations, best {}",
        generation,
        step.best.points()
    );

    let (best_dna, best_points) = step.best.into_parts();
    Evolution {
        population: step.population,
        best_dna,
        best_points,
        seed: step.seed,
        generations: generation,
        points_history,
    }
}

/// Draws and scores `config.population_size` random organisms, starting from
/// `config.seed`. Organisms keep draw order.
pub fn initial_population<P>(problem: &P, config: &EvolutionConfig) -> (Population<P::Dna>, Seed)
where
    P: GeneticProblem + ?Sized,
{
    let organisms = from_fn(|seed: Seed| {
        let (dna, seed) = problem.random_dna(seed);
        (Organism::evaluated(problem, dna), seed)
    });
    Nonempty::random(config.population_size, &organisms, config.seed)
}

/// Produces one child from two parents.
///
/// A coin flip decides which parent's DNA goes first into
/// [`crossover`](GeneticProblem::crossover); the result is mutated and then
/// scored.
pub fn produce_child<P>(
    problem: &P,
    parent1: &Organism<P::Dna>,
    parent2: &Organism<P::Dna>,
    seed: Seed,
) -> (Organism<P::Dna>, Seed)
where
    P: GeneticProblem + ?Sized,
{
    let (dna1_is_first, seed) = seed.bool();
    let (first, second) = if dna1_is_first {
        (parent1.dna(), parent2.dna())
    } else {
        (parent2.dna(), parent1.dna())
    };
    let child = problem.crossover(first, second);
    let (child, seed) = problem.mutate(seed, child);
    (Organism::evaluated(problem, child), seed)
}

/// Produces three children and keeps the better parent.
///
/// Returns `[child1, child2, child3, best_parent]`. On equal points the
/// second parent is kept.
pub fn produce_family<P>(
    problem: &P,
    method: Method,
    parent1: &Organism<P::Dna>,
    parent2: &Organism<P::Dna>,
    seed: Seed,
) -> ([Organism<P::Dna>; 4], Seed)
where
    P: GeneticProblem + ?Sized,
{
    let best_parent = method.best_of(parent1, parent2).clone();
    let (child1, seed) = produce_child(problem, parent1, parent2, seed);
    let (child2, seed) = produce_child(problem, parent1, parent2, seed);
    let (child3, seed) = produce_child(problem, parent1, parent2, seed);
    ([child1, child2, child3, best_parent], seed)
}

/// Replaces `population` with the offspring of its better half.
///
/// Survivors are paired by adjacency in ascending point order: `(0, 1)`,
/// `(2, 3)`, and so on. An odd survivor left at the end is dropped. If no
/// pair can be formed, `population` is returned unchanged.
pub fn generate_next_generation<P>(
    problem: &P,
    config: &EvolutionConfig,
    population: &Population<P::Dna>,
    seed: Seed,
) -> (Population<P::Dna>, Seed)
where
    P: GeneticProblem + ?Sized,
{
    let sorted = sort_by_points(population);
    reproduce(problem, config, population, &sorted, seed)
}

/// Runs one generation and reports the best organism of the *current*
/// population (before replacement).
pub fn execute_step<P>(
    problem: &P,
    config: &EvolutionConfig,
    population: &Population<P::Dna>,
    seed: Seed,
) -> Step<P::Dna>
where
    P: GeneticProblem + ?Sized,
{
    let sorted = sort_by_points(population);
    let best = match config.method {
        Method::MaximizeScore => sorted[sorted.len() - 1],
        Method::MinimizePenalty => sorted[0],
    }
    .clone();
    let (population, seed) = reproduce(problem, config, population, &sorted, seed);
    Step {
        population,
        best,
        seed,
    }
}

/// Stable ascending sort by points. The result is never empty.
fn sort_by_points<D>(population: &Population<D>) -> Vec<&Organism<D>> {
    let mut sorted: Vec<&Organism<D>> = population.iter().collect();
    sorted.sort_by(|a, b| {
        a.points()
            .partial_cmp(&b.points())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

/// The better half of an ascending sort: the top for maximization, the
/// bottom for minimization.
fn select_survivors<'a, D>(
    config: &EvolutionConfig,
    sorted: &'a [&'a Organism<D>],
) -> &'a [&'a Organism<D>] {
    let half = config.half_population_size().min(sorted.len());
    match config.method {
        Method::MaximizeScore => &sorted[sorted.len() - half..],
        Method::MinimizePenalty => &sorted[..half],
    }
}

fn reproduce<P>(
    problem: &P,
    config: &EvolutionConfig,
    population: &Population<P::Dna>,
    sorted: &[&Organism<P::Dna>],
    seed: Seed,
) -> (Population<P::Dna>, Seed)
where
    P: GeneticProblem + ?Sized,
{
    let survivors = select_survivors(config, sorted);
    let pairs = survivors.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        warn!(
            "odd survivor count {}; dropping organism with points {}",
            survivors.len(),
            pairs.remainder()[0].points()
        );
    }

    let mut next = Vec::with_capacity(survivors.len() * 2);
    let mut seed = seed;
    for pair in pairs {
        let (family, next_seed) = produce_family(problem, config.method, pair[0], pair[1], seed);
        next.extend(family);
        seed = next_seed;
    }

    match Nonempty::from_vec(next) {
        Some(next) => (next, seed),
        None => {
            warn!("no survivor pairs; keeping the current population");
            (population.clone(), seed)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
