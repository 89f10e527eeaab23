//! Integration tests for the grid search driver and reporting.

use fairdice::constants::NATURAL_COORD;
use fairdice::objective::loss;
use fairdice::report::build_report;
use fairdice::search::{is_admissible, run_grid_search, SearchConfig, SearchError};

#[test]
fn optimum_lies_in_admissible_triangle() {
    let result = run_grid_search(&SearchConfig { steps: 20 }).unwrap();
    assert!(is_admissible(result.x, result.y));
    assert!(result.min_loss.is_finite());
    assert!(result.max_loss >= result.min_loss);
}

#[test]
fn optimum_beats_natural_point_when_on_grid() {
    // steps = 12 halves to 6 subdivisions of [0, 0.5], putting
    // 1/6 = 2 * (0.5 / 6) exactly on the grid.
    let result = run_grid_search(&SearchConfig { steps: 12 }).unwrap();
    let natural = loss(NATURAL_COORD, NATURAL_COORD);
    assert!(
        result.min_loss <= natural + 1e-12,
        "min {} should not exceed natural-point loss {}",
        result.min_loss,
        natural
    );
}

#[test]
fn repeated_searches_are_deterministic() {
    let a = run_grid_search(&SearchConfig { steps: 30 }).unwrap();
    let b = run_grid_search(&SearchConfig { steps: 30 }).unwrap();
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.min_loss.to_bits(), b.min_loss.to_bits());
    assert_eq!(a.max_loss.to_bits(), b.max_loss.to_bits());
}

#[test]
fn refinement_never_worsens_the_minimum() {
    // A grid whose subdivisions divide a finer grid's is a subset of it.
    let coarse = run_grid_search(&SearchConfig { steps: 12 }).unwrap();
    let fine = run_grid_search(&SearchConfig { steps: 48 }).unwrap();
    assert!(fine.min_loss <= coarse.min_loss + 1e-12);
}

#[test]
fn invalid_steps_fail_before_searching() {
    for steps in [0usize, 1] {
        match run_grid_search(&SearchConfig { steps }) {
            Err(SearchError::InvalidSteps(s)) => assert_eq!(s, steps),
            _ => panic!("steps={steps} should be rejected"),
        }
    }
}

#[test]
fn grid_corners_behave() {
    let result = run_grid_search(&SearchConfig { steps: 10 }).unwrap();
    let grid = &result.grid;
    let steps = grid.steps();
    // (0, 0), (0.5, 0) and (0, 0.5) are admissible; (0.5, 0.5) is not.
    assert!(grid.loss_at(0, 0).is_finite());
    assert!(grid.loss_at(steps, 0).is_finite());
    assert!(grid.loss_at(0, steps).is_finite());
    assert!(grid.loss_at(steps, steps).is_nan());
    assert_eq!(grid.coord(steps), 0.5);
}

#[test]
fn report_matches_search_result() {
    let result = run_grid_search(&SearchConfig { steps: 12 }).unwrap();
    let report = build_report(12, &result);
    assert_eq!(report.optimum.x.to_bits(), result.x.to_bits());
    assert_eq!(report.optimum.y.to_bits(), result.y.to_bits());
    assert_eq!(report.max_loss.to_bits(), result.max_loss.to_bits());
    assert!((report.face_sum - 1.0).abs() < 1e-9);
    assert!((report.sum_check - 1.0).abs() < 1e-9);
    // The report's loss is reproducible from its own coordinates.
    assert_eq!(
        loss(report.optimum.x, report.optimum.y).to_bits(),
        report.optimum.loss.to_bits()
    );
}

#[test]
fn json_report_round_trips_key_fields() {
    let result = run_grid_search(&SearchConfig { steps: 12 }).unwrap();
    let report = build_report(12, &result);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["steps"], 12);
    assert_eq!(
        json["sum_probabilities"].as_array().unwrap().len(),
        11
    );
    assert!(json["optimum"]["loss"].as_f64().unwrap().is_finite());
}
