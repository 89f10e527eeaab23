//! fairdice-search: grid-search the fairest weighted die, report and plot.

use std::path::Path;
use std::time::Instant;

use fairdice::constants::{DEFAULT_STEPS, HEATMAP_MAX_CELLS_PER_AXIS};
use fairdice::env_config::init_rayon_threads;
use fairdice::export::save_heatmap_json;
use fairdice::plot::render_plots;
use fairdice::report::{build_report, print_summary, save_report};
use fairdice::search::{run_grid_search, SearchConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut steps: usize = DEFAULT_STEPS;
    let mut threads: Option<usize> = None;
    let mut json_path: Option<String> = None;
    let mut heatmap_json_path: Option<String> = None;
    let mut plots_dir = "outputs/plots".to_string();
    let mut no_plots = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--steps" => {
                i += 1;
                steps = args[i].parse().expect("Invalid --steps");
            }
            "--threads" => {
                i += 1;
                threads = Some(args[i].parse().expect("Invalid --threads"));
            }
            "--json" => {
                i += 1;
                json_path = Some(args[i].clone());
            }
            "--heatmap-json" => {
                i += 1;
                heatmap_json_path = Some(args[i].clone());
            }
            "--plots" => {
                i += 1;
                plots_dir = args[i].clone();
            }
            "--no-plots" => {
                no_plots = true;
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

    init_rayon_threads(threads);

    let n = config.grid_steps() + 1;
    println!("=== fairdice-search ===");
    println!(
        "Grid: {}x{} samples over [0, 0.5] x [0, 0.5] ({} admissible)",
        n,
        n,
        n * (n + 1) / 2
    );

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

    if let Some(path) = json_path {
        match save_report(&report, &path) {
            Ok(()) => println!("\nWrote report to {}", path),
            Err(e) => {
                eprintln!("Failed to write report to {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    if let Some(path) = heatmap_json_path {
        match save_heatmap_json(&result.grid, HEATMAP_MAX_CELLS_PER_AXIS, &path) {
            Ok(rows) => println!("Wrote {} heatmap rows to {}", rows, path),
            Err(e) => {
                eprintln!("Failed to write heatmap to {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    if !no_plots {
        match render_plots(&result, &report, Path::new(&plots_dir)) {
            Ok(()) => println!("Wrote plots to {}", plots_dir),
            Err(e) => {
                eprintln!("Failed to render plots: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!(
        "fairdice-search: grid-search the fairest weighted die, report and plot.

USAGE:
    fairdice-search [OPTIONS]

OPTIONS:
    --steps <N>          Unit-interval subdivisions, halved for [0, 0.5] [default: 10000]
    --threads <N>        Rayon thread count [default: RAYON_NUM_THREADS or rayon's choice]
    --json <PATH>        Write the search report as JSON
    --heatmap-json <PATH> Write downsampled heatmap cells as JSON
    --plots <DIR>        Output directory for PNG plots [default: outputs/plots]
    --no-plots           Skip rendering
    -h, --help           Print this help"
    );
}
