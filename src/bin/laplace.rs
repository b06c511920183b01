//! `laplace`: compare Jacobi, Gauss-Seidel and SOR on the 2D Laplace problem
//!
//! Reads the run parameters, solves with the three methods, prints a
//! summary and writes:
//!
//! ```text
//! <output>/plots/error_comparison.png   convergence curves, log scale
//! <output>/plots/potential_heatmap.png  SOR potential, "hot" colormap
//! <output>/data/error_history.csv       error per iteration and method
//! <output>/data/potential_sor.csv       SOR potential, N x N
//! ```
//!
//! Verbosity is controlled through `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::fs;
use std::io;

use clap::Parser;

use laplace_rs::cli::{read_parameters, CliOptions, RunParameters};
use laplace_rs::comparison::{compare, Comparison};
use laplace_rs::error::Result;
use laplace_rs::output::export::{export_error_history_csv, export_grid_csv, CsvConfig, CsvMetadata};
use laplace_rs::output::visualization::{plot_convergence, plot_heatmap, PlotConfig};

const BANNER: &str = "2D Laplace Equation Solver using Iterative Methods";

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let options = CliOptions::parse();

    println!("{}", BANNER);

    let stdin = io::stdin();
    let parameters = read_parameters(&options, &mut stdin.lock(), &mut io::stdout())?;

    let scenario = parameters.scenario()?;
    let comparison = compare(&scenario, &parameters.solver_configuration(), parameters.omega)?;

    println!();
    print!("{}", comparison.summary());

    write_plots(&options, &comparison)?;

    if options.no_export {
        log::info!("CSV export skipped");
    } else {
        write_data(&options, &parameters, &comparison)?;
    }

    Ok(())
}

fn write_plots(options: &CliOptions, comparison: &Comparison) -> Result<()> {
    let dir = options.plots_dir();
    fs::create_dir_all(&dir)?;

    let convergence_path = dir.join("error_comparison.png");
    plot_convergence(
        &comparison.results(),
        &convergence_path.to_string_lossy(),
        Some(&PlotConfig::convergence(format!(
            "Convergence Comparison (N = {})",
            comparison.size
        ))),
    )?;

    let heatmap_path = dir.join("potential_heatmap.png");
    plot_heatmap(
        &comparison.sor.grid,
        &heatmap_path.to_string_lossy(),
        Some(&PlotConfig::heatmap("Steady State Potential (SOR)")),
    )?;

    println!("Plots written to {}", dir.display());
    Ok(())
}

fn write_data(options: &CliOptions, parameters: &RunParameters, comparison: &Comparison) -> Result<()> {
    let dir = options.data_dir();
    fs::create_dir_all(&dir)?;

    let mut metadata = CsvMetadata::from_run(
        parameters.grid_size,
        parameters.max_iterations,
        parameters.tolerance,
    )
    .omega(parameters.omega);
    metadata.add_custom("Fastest".to_string(), comparison.fastest().method.to_string());

    let history_path = dir.join("error_history.csv");
    export_error_history_csv(
        &comparison.results(),
        &history_path.to_string_lossy(),
        Some(&CsvConfig::default().with_metadata(metadata.clone())),
    )?;

    let grid_path = dir.join("potential_sor.csv");
    export_grid_csv(
        &comparison.sor.grid,
        &grid_path.to_string_lossy(),
        Some(&CsvConfig::high_precision().with_metadata(metadata.method("SOR"))),
    )?;

    println!("Data written to {}", dir.display());
    Ok(())
}
