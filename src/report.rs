//! Search reporting: console summary and serializable JSON report.

use serde::Serialize;

use crate::constants::{NATURAL_COORD, NUM_FACES, NUM_SUMS};
use crate::dice_mechanics::{face_probabilities, sum_probabilities};
use crate::search::SearchResult;

/// The minimizing grid point and its loss.
#[derive(Serialize)]
pub struct OptimumRecord {
    pub x: f64,
    pub y: f64,
    pub loss: f64,
}

/// Everything the presentation layer consumes: the optimum, the derived
/// probability vectors with their sum checks, and the natural die's sum
/// distribution for comparison.
#[derive(Serialize)]
pub struct SearchReport {
    /// Configured resolution (unit-interval subdivisions, before halving).
    pub steps: usize,
    pub optimum: OptimumRecord,
    pub face_probabilities: [f64; NUM_FACES],
    /// Σ p1..p6, should be 1.
    pub face_sum: f64,
    pub sum_probabilities: [f64; NUM_SUMS],
    /// Σ q2..q12, should be 1.
    pub sum_check: f64,
    /// Sum distribution of the natural fair die, for the bar chart.
    pub natural_sum_probabilities: [f64; NUM_SUMS],
    pub max_loss: f64,
}

/// Derive the report from a finished search.
pub fn build_report(steps: usize, result: &SearchResult) -> SearchReport {
    let p_opt = face_probabilities(result.x, result.y);
    let q_opt = sum_probabilities(&p_opt);
    let p_nat = face_probabilities(NATURAL_COORD, NATURAL_COORD);
    let q_nat = sum_probabilities(&p_nat);
    SearchReport {
        steps,
        optimum: OptimumRecord {
            x: result.x,
            y: result.y,
            loss: result.min_loss,
        },
        face_probabilities: p_opt,
        face_sum: p_opt.iter().sum(),
        sum_probabilities: q_opt,
        sum_check: q_opt.iter().sum(),
        natural_sum_probabilities: q_nat,
        max_loss: result.max_loss,
    }
}

fn format_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|p| format!("{:.6}", p)).collect();
    format!("({})", parts.join(", "))
}

/// Human-readable summary of the optimum, with sum sanity checks.
pub fn print_summary(report: &SearchReport) {
    println!(
        "The best probabilities p1..p6 found for one die are: {}, sum check = {},",
        format_vec(&report.face_probabilities),
        report.face_sum
    );
    println!(
        "yielding these probabilities q2..q12 for two dice: {}, sum check = {};",
        format_vec(&report.sum_probabilities),
        report.sum_check
    );
    println!(
        "the two-dice probabilities have log variance = {} at (x, y) = ({}, {}).",
        report.optimum.loss, report.optimum.x, report.optimum.y
    );
}

/// Write the report as pretty-printed JSON.
pub fn save_report(report: &SearchReport, path: &str) -> std::io::Result<()> {
    if let Some(dir) = std::path::Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
}
