//! Performance benchmarks for the relaxation methods
//!
//! # What We're Measuring
//!
//! 1. **Cost per sweep**: every method runs a fixed number of sweeps (the
//!    tolerance is set so low that no run converges). All three visit each
//!    interior cell once per sweep, so times should be close; Jacobi pays
//!    for its second buffer, Gauss-Seidel and SOR for the snapshot used to
//!    measure the change.
//!
//! 2. **Time to convergence**: each method runs until the tolerance is
//!    reached. Here the iteration counts dominate:
//!
//! ```text
//! N = 20, tol = 1e-6:  Jacobi ≈ 1100 sweeps, Gauss-Seidel ≈ 590, SOR(1.8) ≈ 90
//! ```
//!
//! 3. **Parallel Jacobi** (feature `parallel`): sequential vs rayon sweep on
//!    large grids, toggled through the runtime threshold.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all solver benchmarks
//! cargo bench --bench solver_performance
//!
//! # Only the per-sweep group
//! cargo bench --bench solver_performance "Cost per Sweep"
//!
//! # With rayon
//! cargo bench --bench solver_performance --features parallel
//! ```
//!
//! # Expected Scaling
//!
//! A sweep is O(N²), so doubling N should roughly quadruple the per-sweep
//! time. Time to convergence grows faster: Jacobi and Gauss-Seidel need
//! O(N²) sweeps, SOR with a good ω only O(N).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use laplace_rs::grid::DirichletBoundary;
use laplace_rs::solver::{
    GaussSeidelSolver, JacobiSolver, Scenario, Solver, SolverConfiguration, SorSolver,
};

/// Sweeps per run in the per-sweep group
const FIXED_SWEEPS: usize = 50;

fn scenario(size: usize) -> Scenario {
    Scenario::new(size, DirichletBoundary::default()).unwrap()
}

fn solvers() -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(JacobiSolver::new()),
        Box::new(GaussSeidelSolver::new()),
        Box::new(SorSolver::new(1.8)),
    ]
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Fixed number of sweeps, grid sizes 32 to 256
///
/// Throughput is reported in interior cells updated per second, which
/// should stay roughly flat across sizes until the grid leaves the cache.
fn benchmark_cost_per_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cost per Sweep");
    let config = SolverConfiguration::new(FIXED_SWEEPS, f64::MIN_POSITIVE);

    for size in [32, 64, 128, 256] {
        let scenario = scenario(size);
        let cells = ((size - 2) * (size - 2) * FIXED_SWEEPS) as u64;
        group.throughput(Throughput::Elements(cells));

        for solver in solvers() {
            group.bench_with_input(BenchmarkId::new(solver.name(), size), &size, |b, _| {
                b.iter(|| solver.solve(black_box(&scenario), black_box(&config)).unwrap());
            });
        }
    }

    group.finish();
}

/// Full solve to tol = 1e-6 on small and medium grids
fn benchmark_time_to_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("Time to Convergence");
    group.sample_size(20);
    let config = SolverConfiguration::new(100_000, 1e-6);

    for size in [20, 50] {
        let scenario = scenario(size);

        for solver in solvers() {
            group.bench_with_input(BenchmarkId::new(solver.name(), size), &size, |b, _| {
                b.iter(|| solver.solve(black_box(&scenario), black_box(&config)).unwrap());
            });
        }
    }

    group.finish();
}

/// Sequential vs rayon Jacobi sweep on large grids
#[cfg(feature = "parallel")]
fn benchmark_parallel_jacobi(c: &mut Criterion) {
    use laplace_rs::solver::{parallel_threshold, set_parallel_threshold};

    let mut group = c.benchmark_group("Parallel Jacobi");
    let config = SolverConfiguration::new(FIXED_SWEEPS, f64::MIN_POSITIVE);
    let previous = parallel_threshold();

    for size in [256, 512] {
        let scenario = scenario(size);
        let solver = JacobiSolver::new();

        set_parallel_threshold(usize::MAX);
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| solver.solve(black_box(&scenario), black_box(&config)).unwrap());
        });

        set_parallel_threshold(1);
        group.bench_with_input(BenchmarkId::new("rayon", size), &size, |b, _| {
            b.iter(|| solver.solve(black_box(&scenario), black_box(&config)).unwrap());
        });
    }

    set_parallel_threshold(previous);
    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, benchmark_cost_per_sweep, benchmark_time_to_convergence);

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    benchmark_cost_per_sweep,
    benchmark_time_to_convergence,
    benchmark_parallel_jacobi,
);

criterion_main!(benches);
