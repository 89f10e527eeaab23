//! fairdice-simulate: find the optimum, then verify it by Monte Carlo rolls.

use std::time::Instant;

use fairdice::constants::{DEFAULT_STEPS, MIN_SUM};
use fairdice::dice_mechanics::face_probabilities;
use fairdice::env_config::init_rayon_threads;
use fairdice::report::{build_report, print_summary};
use fairdice::search::{run_grid_search, SearchConfig};
use fairdice::simulation::simulate_sums;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut steps: usize = DEFAULT_STEPS;
    let mut rolls: u64 = 1_000_000;
    let mut seed: u64 = 42;
    let mut threads: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--steps" => {
                i += 1;
                steps = args[i].parse().expect("Invalid --steps");
            }
            "--rolls" => {
                i += 1;
                rolls = args[i].parse().expect("Invalid --rolls");
            }
            "--seed" => {
                i += 1;
                seed = args[i].parse().expect("Invalid --seed");
            }
            "--threads" => {
                i += 1;
                threads = Some(args[i].parse().expect("Invalid --threads"));
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = SearchConfig { steps };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    if rolls == 0 {
        eprintln!("Invalid configuration: --rolls must be positive");
        std::process::exit(1);
    }

    init_rayon_threads(threads);

    println!("=== fairdice-simulate ===");
    let t0 = Instant::now();
    let result = match run_grid_search(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    };
    println!("Searched in {:.2}s\n", t0.elapsed().as_secs_f64());

    let report = build_report(steps, &result);
    print_summary(&report);

    println!("\nRolling 2 dice {} times (seed={})...", rolls, seed);
    let faces = face_probabilities(result.x, result.y);
    let sim = simulate_sums(&faces, rolls, seed);
    println!("Simulated in {:.2}s\n", sim.elapsed.as_secs_f64());

    println!("{:>4}  {:>12}  {:>12}  {:>10}", "sum", "exact", "empirical", "deviation");
    for k in 0..sim.counts.len() {
        println!(
            "{:>4}  {:>12.6}  {:>12.6}  {:>10.6}",
            k + MIN_SUM,
            sim.exact[k],
            sim.frequencies[k],
            (sim.frequencies[k] - sim.exact[k]).abs()
        );
    }
    println!("\nMax abs deviation: {:.6}", sim.max_abs_deviation);
}

fn print_usage() {
    println!(
        "fairdice-simulate: find the optimum, then verify it by Monte Carlo rolls.

USAGE:
    fairdice-simulate [OPTIONS]

OPTIONS:
    --steps <N>     Unit-interval subdivisions for the search [default: 10000]
    --rolls <N>     Number of two-dice rolls [default: 1000000]
    --seed <S>      Base RNG seed [default: 42]
    --threads <N>   Rayon thread count [default: RAYON_NUM_THREADS or rayon's choice]
    -h, --help      Print this help"
    );
}
