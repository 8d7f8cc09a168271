//! Core types for the genetic engine.
//!
//! [`GeneticProblem`] is the contract between the generic engine and a
//! domain: it supplies random DNA, fitness evaluation, crossover, mutation,
//! and the termination predicate. [`Options`] is a ready-made implementation
//! built from closures.

use crate::nonempty::Nonempty;
use crate::random::Seed;

/// Which direction of fitness is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Higher points are better.
    MaximizeScore,
    /// Lower points are better.
    MinimizePenalty,
}

impl Method {
    /// Returns `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Method::MaximizeScore => a > b,
            Method::MinimizePenalty => a < b,
        }
    }

    /// The better of two organisms. Ties go to `second`.
    pub fn best_of<'a, D>(self, first: &'a Organism<D>, second: &'a Organism<D>) -> &'a Organism<D> {
        if self.is_better(first.points, second.points) {
            first
        } else {
            second
        }
    }
}

/// A DNA value paired with its fitness.
///
/// Organisms are immutable: a mutated DNA is a new organism.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Organism<D> {
    dna: D,
    points: f64,
}

impl<D> Organism<D> {
    /// Pairs `dna` with an already computed score.
    pub fn new(dna: D, points: f64) -> Self {
        Self { dna, points }
    }

    /// Scores `dna` with the problem's evaluator.
    pub fn evaluated<P>(problem: &P, dna: D) -> Self
    where
        P: GeneticProblem<Dna = D> + ?Sized,
    {
        let points = problem.evaluate(&dna);
        Self { dna, points }
    }

    pub fn dna(&self) -> &D {
        &self.dna
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn into_dna(self) -> D {
        self.dna
    }

    pub fn into_parts(self) -> (D, f64) {
        (self.dna, self.points)
    }
}

/// The fixed-size, never-empty set of organisms evolved each generation.
pub type Population<D> = Nonempty<Organism<D>>;

/// Defines an evolution problem.
///
/// Every operator that needs randomness receives a [`Seed`] and must return
/// the advanced one; the engine threads it through the run so that the whole
/// evolution is reproducible from the initial seed.
///
/// # Implementing
///
/// ```
/// use u_evolve::genetic::GeneticProblem;
/// use u_evolve::random::Seed;
///
/// /// Find the integer closest to 42.
/// struct Target;
///
/// impl GeneticProblem for Target {
///     type Dna = i64;
///
///     fn random_dna(&self, seed: Seed) -> (i64, Seed) {
///         seed.int(0, 100)
///     }
///
///     fn evaluate(&self, dna: &i64) -> f64 {
///         (dna - 42).abs() as f64
///     }
///
///     fn crossover(&self, first: &i64, second: &i64) -> i64 {
///         (first + second) / 2
///     }
///
///     fn mutate(&self, seed: Seed, dna: i64) -> (i64, Seed) {
///         let (delta, seed) = seed.int(-2, 2);
///         (dna + delta, seed)
///     }
///
///     fn is_done(&self, _dna: &i64, points: f64, generation: usize) -> bool {
///         points == 0.0 || generation >= 100
///     }
/// }
/// ```
pub trait GeneticProblem {
    /// The candidate-solution representation.
    type Dna: Clone;

    /// Draws a random DNA value for the initial population.
    fn random_dna(&self, seed: Seed) -> (Self::Dna, Seed);

    /// Scores a DNA value. Interpreted according to the run's [`Method`].
    fn evaluate(&self, dna: &Self::Dna) -> f64;

    /// Combines two parents into one child DNA.
    fn crossover(&self, first: &Self::Dna, second: &Self::Dna) -> Self::Dna;

    /// Perturbs a DNA value.
    ///
    /// The default returns `dna` unchanged and draws nothing.
    fn mutate(&self, seed: Seed, dna: Self::Dna) -> (Self::Dna, Seed) {
        (dna, seed)
    }

    /// Termination predicate, given the best DNA of the latest generation,
    /// its points, and the generation count.
    fn is_done(&self, best: &Self::Dna, points: f64, generation: usize) -> bool;

    /// Called after each generation with the best points seen in it.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_points: f64) {}
}

type DnaGenerator<D> = Box<dyn Fn(Seed) -> (D, Seed)>;
type Evaluate<D> = Box<dyn Fn(&D) -> f64>;
type Crossover<D> = Box<dyn Fn(&D, &D) -> D>;
type Mutate<D> = Box<dyn Fn(Seed, D) -> (D, Seed)>;
type DonePredicate<D> = Box<dyn Fn(&D, f64, usize) -> bool>;

/// A [`GeneticProblem`] assembled from closures, plus the seed and method
/// of the run.
///
/// Every field is supplied by the caller; [`Evolver::run_options`] and
/// [`evolve_solution`] take the seed and method from here.
///
/// [`Evolver::run_options`]: super::Evolver::run_options
/// [`evolve_solution`]: super::evolve_solution
///
/// ```
/// use u_evolve::genetic::{evolve_solution, Method, Options};
/// use u_evolve::random::Seed;
///
/// let options = Options::new(
///     |seed: Seed| seed.int(0, 100),
///     |dna: &i64| *dna as f64,
///     |a: &i64, b: &i64| *a.max(b),
///     |seed: Seed, dna: i64| (dna, seed),
///     |_dna: &i64, _points, generation| generation >= 3,
///     Seed::new(42),
///     Method::MaximizeScore,
/// );
///
/// let evolution = evolve_solution(&options);
/// assert_eq!(evolution.generations, 3);
/// ```
pub struct Options<D> {
    pub random_dna_generator: DnaGenerator<D>,
    pub evaluate_organism: Evaluate<D>,
    pub crossover_dnas: Crossover<D>,
    pub mutate_dna: Mutate<D>,
    pub is_done_evolving: DonePredicate<D>,
    pub initial_seed: Seed,
    pub method: Method,
}

impl<D: 'static> Options<D> {
    /// Builds the bundle. Fields follow the struct's declaration order.
    pub fn new<G, E, C, M, P>(
        random_dna_generator: G,
        evaluate_organism: E,
        crossover_dnas: C,
        mutate_dna: M,
        is_done_evolving: P,
        initial_seed: Seed,
        method: Method,
    ) -> Self
    where
        G: Fn(Seed) -> (D, Seed) + 'static,
        E: Fn(&D) -> f64 + 'static,
        C: Fn(&D, &D) -> D + 'static,
        M: Fn(Seed, D) -> (D, Seed) + 'static,
        P: Fn(&D, f64, usize) -> bool + 'static,
    {
        Self {
            random_dna_generator: Box::new(random_dna_generator),
            evaluate_organism: Box::new(evaluate_organism),
            crossover_dnas: Box::new(crossover_dnas),
            mutate_dna: Box::new(mutate_dna),
            is_done_evolving: Box::new(is_done_evolving),
            initial_seed,
            method,
        }
    }

    /// Replaces the mutation operator.
    pub fn with_mutation<M>(mut self, mutate_dna: M) -> Self
    where
        M: Fn(Seed, D) -> (D, Seed) + 'static,
    {
        self.mutate_dna = Box::new(mutate_dna);
        self
    }

    /// Replaces the optimization direction.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

impl<D: Clone> GeneticProblem for Options<D> {
    type Dna = D;

    fn random_dna(&self, seed: Seed) -> (D, Seed) {
        (self.random_dna_generator)(seed)
    }

    fn evaluate(&self, dna: &D) -> f64 {
        (self.evaluate_organism)(dna)
    }

    fn crossover(&self, first: &D, second: &D) -> D {
        (self.crossover_dnas)(first, second)
    }

    fn mutate(&self, seed: Seed, dna: D) -> (D, Seed) {
        (self.mutate_dna)(seed, dna)
    }

    fn is_done(&self, best: &D, points: f64, generation: usize) -> bool {
        (self.is_done_evolving)(best, points, generation)
    }
}

impl<D> std::fmt::Debug for Options<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("initial_seed", &self.initial_seed)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_is_better() {
        assert!(Method::MaximizeScore.is_better(2.0, 1.0));
        assert!(!Method::MaximizeScore.is_better(1.0, 1.0));
        assert!(Method::MinimizePenalty.is_better(1.0, 2.0));
        assert!(!Method::MinimizePenalty.is_better(1.0, 1.0));
    }

    #[test]
    fn test_best_of_ties_go_to_second() {
        let a = Organism::new("a", 1.0);
        let b = Organism::new("b", 1.0);
        assert_eq!(Method::MaximizeScore.best_of(&a, &b).dna(), &"b");
        assert_eq!(Method::MinimizePenalty.best_of(&a, &b).dna(), &"b");
    }

    #[test]
    fn test_best_of_by_direction() {
        let low = Organism::new("low", 1.0);
        let high = Organism::new("high", 9.0);
        assert_eq!(Method::MaximizeScore.best_of(&low, &high).dna(), &"high");
        assert_eq!(Method::MaximizeScore.best_of(&high, &low).dna(), &"high");
        assert_eq!(Method::MinimizePenalty.best_of(&low, &high).dna(), &"low");
        assert_eq!(Method::MinimizePenalty.best_of(&high, &low).dna(), &"low");
    }

    fn identity(seed: Seed, dna: i64) -> (i64, Seed) {
        (dna, seed)
    }

    fn int_options(method: Method) -> Options<i64> {
        Options::new(
            |seed: Seed| seed.int(0, 10),
            |dna: &i64| (*dna * 2) as f64,
            |a: &i64, _b: &i64| *a,
            identity,
            |_: &i64, _, _| true,
            Seed::new(1),
            method,
        )
    }

    #[test]
    fn test_organism_evaluated_uses_problem() {
        let options = int_options(Method::MaximizeScore);
        let organism = Organism::evaluated(&options, 21);
        assert_eq!(organism.points(), 42.0);
        assert_eq!(organism.into_parts(), (21, 42.0));
    }

    #[test]
    fn test_options_keep_given_operators() {
        let options = int_options(Method::MinimizePenalty);
        let seed = Seed::new(8);
        assert_eq!(options.mutate(seed, 7), (7, seed));
        assert_eq!(options.method, Method::MinimizePenalty);
        assert_eq!(options.initial_seed, Seed::new(1));
    }

    #[test]
    fn test_options_with_mutation_and_method() {
        let options = int_options(Method::MinimizePenalty)
            .with_mutation(|seed: Seed, dna: i64| {
                let (delta, seed) = seed.int(1, 1);
                (dna + delta, seed)
            })
            .with_method(Method::MaximizeScore);

        let (dna, seed) = options.mutate(Seed::new(2), 10);
        assert_eq!(dna, 11);
        assert_ne!(seed, Seed::new(2));
        assert_eq!(options.method, Method::MaximizeScore);
    }
}
