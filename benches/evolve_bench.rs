//! Criterion benchmarks for the u-evolve engine and PRNG.
//!
//! Uses synthetic problems (Sphere function, OneMax) to measure pure engine
//! overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_evolve::genetic::{EvolutionConfig, Evolver, GeneticProblem, Method};
use u_evolve::random::{self, Generator, Seed, SeedRng};

// ===========================================================================
// Sphere function: minimize sum(x_i^2)
// ===========================================================================

struct SphereProblem {
    dim: usize,
    generations: usize,
}

impl GeneticProblem for SphereProblem {
    type Dna = Vec<f64>;

    fn random_dna(&self, seed: Seed) -> (Vec<f64>, Seed) {
        random::list(self.dim, random::float(-5.0, 5.0)).step(seed)
    }

    fn evaluate(&self, dna: &Vec<f64>) -> f64 {
        dna.iter().map(|x| x * x).sum()
    }

    fn crossover(&self, first: &Vec<f64>, second: &Vec<f64>) -> Vec<f64> {
        let point = self.dim / 2;
        let mut child = first.clone();
        child[point..].copy_from_slice(&second[point..]);
        child
    }

    fn mutate(&self, seed: Seed, mut dna: Vec<f64>) -> (Vec<f64>, Seed) {
        let mut rng = SeedRng::new(seed);
        let i = rng.random_range(0..self.dim);
        dna[i] += rng.random_range(-0.5..0.5);
        (dna, rng.into_seed())
    }

    fn is_done(&self, _best: &Vec<f64>, _points: f64, generation: usize) -> bool {
        generation >= self.generations
    }
}

// ===========================================================================
// OneMax: maximize number of true bits
// ===========================================================================

struct OneMaxProblem {
    n: usize,
    generations: usize,
}

impl GeneticProblem for OneMaxProblem {
    type Dna = Vec<bool>;

    fn random_dna(&self, seed: Seed) -> (Vec<bool>, Seed) {
        seed.list(self.n, Seed::bool)
    }

    fn evaluate(&self, dna: &Vec<bool>) -> f64 {
        dna.iter().filter(|&&b| b).count() as f64
    }

    fn crossover(&self, first: &Vec<bool>, second: &Vec<bool>) -> Vec<bool> {
        first
            .iter()
            .zip(second)
            .enumerate()
            .map(|(i, (&a, &b))| if i % 2 == 0 { a } else { b })
            .collect()
    }

    fn mutate(&self, seed: Seed, mut dna: Vec<bool>) -> (Vec<bool>, Seed) {
        let (i, seed) = seed.int(0, self.n as i64 - 1);
        dna[i as usize] = !dna[i as usize];
        (dna, seed)
    }

    fn is_done(&self, _best: &Vec<bool>, points: f64, generation: usize) -> bool {
        points as usize == self.n || generation >= self.generations
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_sphere");
    group.sample_size(10);

    for (dim, pop, gen) in [(10usize, 20usize, 50usize), (50, 40, 30), (100, 100, 20)] {
        let problem = SphereProblem {
            dim,
            generations: gen,
        };
        let config = EvolutionConfig::new(Seed::new(42))
            .with_population_size(pop)
            .with_method(Method::MinimizePenalty);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_g{}", dim, pop, gen), dim),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = Evolver::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_onemax");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let problem = OneMaxProblem { n, generations: 50 };
        let config = EvolutionConfig::new(Seed::new(42)).with_population_size(20);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = Evolver::run(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_prng(c: &mut Criterion) {
    let mut group = c.benchmark_group("prng");

    group.bench_function("int_small", |b| {
        b.iter(|| black_box(Seed::new(42)).list(1000, |s| s.int(0, 99)))
    });
    group.bench_function("float", |b| {
        b.iter(|| black_box(Seed::new(42)).list(1000, |s| s.float(0.0, 1.0)))
    });
    group.bench_function("split", |b| b.iter(|| black_box(Seed::new(42)).split()));
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_onemax, bench_prng);
criterion_main!(benches);
