//! Convergence tests for the relaxation methods
//!
//! These tests verify the convergence behaviour every method must show on
//! the standard problem (top edge at 100, other edges at 0), and the
//! relative speed of the three methods.

use laplace_rs::grid::{apply_boundary_conditions, Grid};
use laplace_rs::solver::{
    gauss_seidel, jacobi, sor, GaussSeidelSolver, JacobiSolver, Solver, SolverConfiguration,
    SorSolver, SolveStatus,
};

mod common;
use common::heated_top;

fn initial(n: usize) -> Grid {
    apply_boundary_conditions(Grid::new(n).unwrap())
}

#[test]
fn test_iteration_ordering_on_medium_grid() {
    // SOR(1.8) < Gauss-Seidel < Jacobi on a 20x20 grid
    let scenario = heated_top(20);
    let config = SolverConfiguration::new(5000, 1e-6);

    let j = JacobiSolver::new().solve(&scenario, &config).unwrap();
    let gs = GaussSeidelSolver::new().solve(&scenario, &config).unwrap();
    let s = SorSolver::new(1.8).solve(&scenario, &config).unwrap();

    println!(
        "iterations: Jacobi {}, Gauss-Seidel {}, SOR {}",
        j.iterations(),
        gs.iterations(),
        s.iterations()
    );

    assert!(j.is_converged() && gs.is_converged() && s.is_converged());
    assert!(s.iterations() < gs.iterations());
    assert!(gs.iterations() < j.iterations());
}

#[test]
fn test_gauss_seidel_about_twice_as_fast_as_jacobi() {
    let j = jacobi(initial(20), 5000, 1e-6).unwrap();
    let gs = gauss_seidel(initial(20), 5000, 1e-6).unwrap();

    let ratio = j.iterations() as f64 / gs.iterations() as f64;
    assert!(ratio > 1.5 && ratio < 2.5, "Jacobi/Gauss-Seidel ratio {}", ratio);
}

#[test]
fn test_single_interior_cell_all_methods() {
    // N = 3: the only interior cell converges to (100 + 0 + 0 + 0) / 4
    let j = jacobi(initial(3), 100, 1e-6).unwrap();
    let gs = gauss_seidel(initial(3), 100, 1e-6).unwrap();
    let s10 = sor(initial(3), 1.0, 100, 1e-6).unwrap();
    let s15 = sor(initial(3), 1.5, 100, 1e-6).unwrap();

    for result in [&j, &gs, &s10, &s15] {
        assert!(result.is_converged(), "{} did not converge", result.method);
        assert!((result.grid[(1, 1)] - 25.0).abs() < 1e-6);
    }

    assert!(j.iterations() <= 2);
    assert!(gs.iterations() <= 2);
}

#[test]
fn test_errors_non_negative() {
    for result in [
        jacobi(initial(10), 300, 1e-6).unwrap(),
        gauss_seidel(initial(10), 300, 1e-6).unwrap(),
        sor(initial(10), 1.6, 300, 1e-6).unwrap(),
    ] {
        assert!(result.errors.iter().all(|&e| e >= 0.0), "{}", result.method);
    }
}

#[test]
fn test_jacobi_and_gauss_seidel_errors_decrease() {
    // Monotone after the first few sweeps
    for result in [
        jacobi(initial(20), 5000, 1e-6).unwrap(),
        gauss_seidel(initial(20), 5000, 1e-6).unwrap(),
    ] {
        for (k, pair) in result.errors.windows(2).enumerate().skip(5) {
            assert!(
                pair[1] <= pair[0],
                "{}: error increased at iteration {} ({} -> {})",
                result.method,
                k + 2,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_sor_error_trend() {
    // Over-relaxation can make the error oscillate; only the trend is checked.
    let result = sor(initial(20), 1.8, 5000, 1e-6).unwrap();
    let errors = &result.errors;
    let half = errors.len() / 2;

    assert!(errors[errors.len() - 1] < errors[0]);
    let first_half_max = errors[..half].iter().cloned().fold(0.0, f64::max);
    let second_half_max = errors[half..].iter().cloned().fold(0.0, f64::max);
    assert!(second_half_max < first_half_max);
}

#[test]
fn test_exhaustion_is_not_an_error() {
    let result = jacobi(initial(30), 10, 1e-9).unwrap();

    assert_eq!(result.status, SolveStatus::Exhausted { iterations: 10 });
    assert_eq!(result.errors.len(), 10);
    assert!(result.final_error().unwrap() >= 1e-9);
}

#[test]
fn test_error_sequence_length_bounded_by_cap() {
    for cap in [1, 2, 7, 50] {
        let result = gauss_seidel(initial(15), cap, 1e-12).unwrap();
        assert_eq!(result.iterations(), cap);
    }
}

#[test]
fn test_converging_iteration_is_last() {
    let result = gauss_seidel(initial(12), 5000, 1e-6).unwrap();
    let (last, rest) = result.errors.split_last().unwrap();

    assert!(*last < 1e-6);
    assert!(rest.iter().all(|&e| e >= 1e-6));
}

#[test]
fn test_optimal_omega_beats_fixed_choices() {
    let n = 30;
    let optimal = sor(initial(n), SorSolver::optimal_omega(n), 5000, 1e-6).unwrap();

    for omega in [1.0, 1.3, 1.95] {
        let other = sor(initial(n), omega, 5000, 1e-6).unwrap();
        assert!(
            optimal.iterations() <= other.iterations(),
            "omega {} needed {} iterations, optimal needed {}",
            omega,
            other.iterations(),
            optimal.iterations()
        );
    }
}
