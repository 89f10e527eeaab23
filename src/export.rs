//! Flatten the loss grid into JSON rows for external tooling.
//!
//! Mirrors the console/plot data contract: one row per sampled grid cell with
//! its coordinates and loss. Inadmissible cells are omitted rather than
//! encoded as a sentinel (JSON has no NaN).

use serde::Serialize;

use crate::search::LossGrid;

/// One heatmap cell.
#[derive(Serialize)]
pub struct HeatmapRow {
    pub ix: usize,
    pub iy: usize,
    pub x: f64,
    pub y: f64,
    pub loss: f64,
}

/// Flatten the grid, keeping at most `max_per_axis` samples per axis by
/// striding. Inadmissible (NaN) cells are skipped.
pub fn heatmap_rows(grid: &LossGrid, max_per_axis: usize) -> Vec<HeatmapRow> {
    let n = grid.axis_len();
    let stride = n.div_ceil(max_per_axis).max(1);
    let mut rows = Vec::new();
    for ix in (0..n).step_by(stride) {
        for iy in (0..n).step_by(stride) {
            let loss = grid.loss_at(ix, iy);
            if loss.is_nan() {
                continue;
            }
            rows.push(HeatmapRow {
                ix,
                iy,
                x: grid.coord(ix),
                y: grid.coord(iy),
                loss,
            });
        }
    }
    rows
}

/// Write `{ "cells": [...] }` to `path`.
pub fn save_heatmap_json(
    grid: &LossGrid,
    max_per_axis: usize,
    path: &str,
) -> std::io::Result<usize> {
    let rows = heatmap_rows(grid, max_per_axis);
    let output = serde_json::json!({ "cells": rows });
    let json = serde_json::to_string(&output)?;
    if let Some(dir) = std::path::Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    std::fs::write(path, json)?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{run_grid_search, SearchConfig};

    #[test]
    fn rows_cover_only_the_triangle() {
        let result = run_grid_search(&SearchConfig { steps: 16 }).unwrap();
        let rows = heatmap_rows(&result.grid, 1000);
        // Full 9x9 grid has 81 cells; the triangle keeps 9+8+...+1 = 45.
        assert_eq!(rows.len(), 45);
        for r in &rows {
            assert!(r.x + r.y <= 0.5 + 1e-12);
            assert!(r.loss.is_finite());
        }
    }

    #[test]
    fn downsampling_strides_the_grid() {
        let result = run_grid_search(&SearchConfig { steps: 16 }).unwrap();
        let full = heatmap_rows(&result.grid, 1000).len();
        let coarse = heatmap_rows(&result.grid, 3).len();
        assert!(coarse < full);
    }
}
