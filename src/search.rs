//! Grid search driver: enumerate the admissible triangle, track the optimum.
//!
//! The grid covers [0, 0.5]² with steps/2 + 1 samples per axis; only points
//! with x + y ≤ 0.5 describe a valid die, so each row of fixed x enumerates
//! y indices 0..=(steps − ix) and the rest of the row stays NaN. Rows are
//! independent and evaluated in parallel; the final reduction walks rows in
//! ix order with strict comparisons, so the reported optimum is the first
//! minimum a sequential row-major (x-outer, y-inner) scan would encounter.

use std::fmt;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::constants::{DEFAULT_STEPS, MIRROR_PAIR_MASS};
use crate::objective::loss;

/// Whether (x, y) describes a valid symmetric die: all six face
/// probabilities non-negative and summing to 1.
#[inline]
pub fn is_admissible(x: f64, y: f64) -> bool {
    x >= 0.0 && y >= 0.0 && x + y <= MIRROR_PAIR_MASS
}

/// Search configuration. `steps` counts uniform subdivisions of the unit
/// interval and is halved internally for the [0, 0.5] domain.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl SearchConfig {
    /// Reject invalid configuration before any grid work starts.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.steps < 2 {
            return Err(SearchError::InvalidSteps(self.steps));
        }
        Ok(())
    }

    /// Grid subdivisions per axis after halving for the [0, 0.5] domain.
    pub fn grid_steps(&self) -> usize {
        self.steps / 2
    }
}

/// Configuration errors, raised before the search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// steps must be at least 2 (one subdivision of [0, 0.5] after halving).
    InvalidSteps(usize),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidSteps(steps) => {
                write!(f, "invalid steps {steps}: must be at least 2")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Loss values over the full (steps+1)² grid, row-major with x outer.
/// Cells outside the admissible triangle hold NaN.
pub struct LossGrid {
    steps: usize,
    values: Vec<f64>,
}

impl LossGrid {
    fn from_rows(steps: usize, rows: Vec<Vec<f64>>) -> Self {
        let values = rows.into_iter().flatten().collect();
        Self { steps, values }
    }

    /// Subdivisions of [0, 0.5] per axis.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Samples per axis (steps + 1).
    pub fn axis_len(&self) -> usize {
        self.steps + 1
    }

    /// Coordinate of sample index i on either axis: i · 0.5 / steps.
    #[inline]
    pub fn coord(&self, i: usize) -> f64 {
        i as f64 * (MIRROR_PAIR_MASS / self.steps as f64)
    }

    /// Loss at grid cell (ix, iy); NaN outside the admissible triangle.
    #[inline]
    pub fn loss_at(&self, ix: usize, iy: usize) -> f64 {
        self.values[ix * (self.steps + 1) + iy]
    }
}

/// Result of a grid search: the minimizing point, the value range, and the
/// full grid (read-only hand-off to reporting and plotting).
pub struct SearchResult {
    pub x: f64,
    pub y: f64,
    pub min_loss: f64,
    pub max_loss: f64,
    pub grid: LossGrid,
    pub elapsed: Duration,
}

/// One evaluated row of fixed x: its loss values plus the row's extremes.
struct RowResult {
    values: Vec<f64>,
    min_iy: usize,
    min_loss: f64,
    max_loss: f64,
}

fn evaluate_row(steps: usize, ix: usize) -> RowResult {
    let h = MIRROR_PAIR_MASS / steps as f64;
    let x = ix as f64 * h;
    let mut values = vec![f64::NAN; steps + 1];
    let mut min_iy = 0usize;
    let mut min_loss = f64::INFINITY;
    let mut max_loss = f64::NEG_INFINITY;

    // Admissible y's are in [0, 0.5 - x]: iy ranges over 0..=(steps - ix),
    // so every row contains at least the iy = 0 cell.
    for iy in 0..=(steps - ix) {
        let y = iy as f64 * h;
        let l = loss(x, y);
        values[iy] = l;
        if l < min_loss {
            min_iy = iy;
            min_loss = l;
        }
        if l > max_loss {
            max_loss = l;
        }
    }

    RowResult {
        values,
        min_iy,
        min_loss,
        max_loss,
    }
}

/// Exhaustively evaluate the loss over the admissible triangle and return the
/// minimizing (x, y), the observed loss range, and the full grid.
///
/// Rows are evaluated with rayon and reduced sequentially in ix order; ties
/// in the minimum break toward the first point encountered in row-major
/// (x-outer, y-inner) order, identical to a sequential scan.
pub fn run_grid_search(config: &SearchConfig) -> Result<SearchResult, SearchError> {
    config.validate()?;
    let steps = config.grid_steps();
    let start = Instant::now();

    let rows: Vec<RowResult> = (0..=steps)
        .into_par_iter()
        .map(|ix| evaluate_row(steps, ix))
        .collect();

    let mut min_ix = 0usize;
    let mut min_iy = 0usize;
    let mut min_loss = f64::INFINITY;
    let mut max_loss = f64::NEG_INFINITY;
    for (ix, row) in rows.iter().enumerate() {
        if row.min_loss < min_loss {
            min_ix = ix;
            min_iy = row.min_iy;
            min_loss = row.min_loss;
        }
        if row.max_loss > max_loss {
            max_loss = row.max_loss;
        }
    }

    let grid = LossGrid::from_rows(steps, rows.into_iter().map(|r| r.values).collect());
    let (x, y) = (grid.coord(min_ix), grid.coord(min_iy));
    Ok(SearchResult {
        x,
        y,
        min_loss,
        max_loss,
        grid,
        elapsed: start.elapsed(),
    })
}
