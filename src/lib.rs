//! # fairdice: the fairest possible two-dice roll
//!
//! Finds the weighting of a six-sided die that makes the **sum of two
//! independent rolls** as close to uniform over 2..12 as the die's mirror
//! symmetry allows, by exhaustive grid search.
//!
//! ## Problem setup
//!
//! Face probabilities are constrained to the symmetric form
//! (x, y, z, z, y, x) with z = 0.5 − x − y, so a die is fully described by a
//! point (x, y) in the right triangle x ≥ 0, y ≥ 0, x + y ≤ 0.5. For each
//! candidate die the sum distribution q2..q12 of two rolls follows by direct
//! convolution, and the objective is the log-variance of that distribution
//! relative to uniform 1/11.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Parameterization | [`dice_mechanics::face_probabilities`] | (x, y) → face vector p1..p6 |
//! | Convolution | [`dice_mechanics::sum_probabilities`] | p1..p6 → sum vector q2..q12 |
//! | Objective | [`objective::loss`] | log-variance of q2..q12 vs uniform |
//! | Driver | [`search::run_grid_search`] | row-major triangle enumeration, min/max tracking |
//! | Reporting | [`report`], [`export`] | console summary + JSON |
//! | Rendering | [`plot`] | loss heatmap + sum-distribution bar chart |
//! | Verification | [`simulation`] | Monte Carlo check of the optimum |
//!
//! The grid has (steps/2 + 1) samples per axis over [0, 0.5]; rows of fixed x
//! are evaluated in parallel (the objective is pure) and reduced in row-major
//! order, so the reported optimum is identical to a sequential scan.

pub mod constants;
pub mod dice_mechanics;
pub mod env_config;
pub mod export;
pub mod objective;
pub mod plot;
pub mod report;
pub mod search;
pub mod simulation;
