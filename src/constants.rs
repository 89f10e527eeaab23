//! Shared dimensions and reference values.
//!
//! The die is symmetric: faces 1/6, 2/5 and 3/4 are forced to carry equal
//! probability, so each mirrored half of the die carries exactly
//! [`MIRROR_PAIR_MASS`] = 0.5 of the total mass and a die is described by the
//! two free parameters (x, y) = (p1, p2).

/// Number of faces on one die.
pub const NUM_FACES: usize = 6;

/// Number of possible sums of two dice (2 through 12).
pub const NUM_SUMS: usize = 11;

/// Smallest possible sum of two dice.
pub const MIN_SUM: usize = 2;

/// Probability mass carried by each mirrored half of the die: x + y + z = 0.5.
/// Also the upper bound of the search domain in each of x and y.
pub const MIRROR_PAIR_MASS: f64 = 0.5;

/// Uniform probability over the 11 possible sums.
pub const UNIFORM_SUM_PROB: f64 = 1.0 / NUM_SUMS as f64;

/// The "natural" fair die: x = y = z = 1/6.
pub const NATURAL_COORD: f64 = 1.0 / 6.0;

/// Default number of uniform grid subdivisions of the unit interval.
/// Halved internally because the search domain is [0, 0.5] per axis.
pub const DEFAULT_STEPS: usize = 10_000;

/// Tolerance for probability sum checks in tests and sanity output.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Rendering cap: the heatmap is downsampled to at most this many cells per
/// axis (a 5001×5001 grid would otherwise mean 25M rectangles).
pub const HEATMAP_MAX_CELLS_PER_AXIS: usize = 400;
