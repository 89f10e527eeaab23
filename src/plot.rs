//! Chart rendering: loss heatmap and sum-distribution bar chart.
//!
//! Two PNG panels mirroring the console report: the loss surface over the
//! admissible triangle (with the optimum and the natural die marked) and a
//! grouped bar comparison of the optimal vs natural sum distributions against
//! the uniform 1/11 line.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::constants::{
    HEATMAP_MAX_CELLS_PER_AXIS, MIN_SUM, MIRROR_PAIR_MASS, NATURAL_COORD, NUM_SUMS,
    UNIFORM_SUM_PROB,
};
use crate::report::SearchReport;
use crate::search::SearchResult;

const BAR_WIDTH: f64 = 0.3;

/// RdBu-style diverging ramp: t = 0 (minimum loss) is red, t = 1 is blue,
/// passing through white.
fn diverging_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8, s: f64| (a as f64 + (b as f64 - a as f64) * s).round() as u8;
    let (red, white, blue) = ((178, 24, 43), (247, 247, 247), (33, 102, 172));
    if t < 0.5 {
        let s = t * 2.0;
        RGBColor(
            lerp(red.0, white.0, s),
            lerp(red.1, white.1, s),
            lerp(red.2, white.2, s),
        )
    } else {
        let s = (t - 0.5) * 2.0;
        RGBColor(
            lerp(white.0, blue.0, s),
            lerp(white.1, blue.1, s),
            lerp(white.2, blue.2, s),
        )
    }
}

/// Render both panels into `out_dir` as `loss_heatmap.png` and
/// `sum_distribution.png`.
pub fn render_plots(
    result: &SearchResult,
    report: &SearchReport,
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(out_dir)?;
    plot_loss_heatmap(result, &out_dir.join("loss_heatmap.png"))?;
    plot_sum_distribution(report, &out_dir.join("sum_distribution.png"))?;
    Ok(())
}

/// Heatmap of loss over the (x, y) grid, annotated with the search optimum
/// and the natural fair-die point (1/6, 1/6).
pub fn plot_loss_heatmap(result: &SearchResult, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (800, 760)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "log variance of 2-dice probabilities",
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..MIRROR_PAIR_MASS, 0.0..MIRROR_PAIR_MASS)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("x = p1 = p6")
        .y_desc("y = p2 = p5")
        .draw()?;

    let grid = &result.grid;
    let n = grid.axis_len();
    let stride = n.div_ceil(HEATMAP_MAX_CELLS_PER_AXIS).max(1);
    let cell = stride as f64 * (MIRROR_PAIR_MASS / grid.steps() as f64);
    let span = result.max_loss - result.min_loss;

    chart.draw_series(
        (0..n)
            .step_by(stride)
            .flat_map(|ix| (0..n).step_by(stride).map(move |iy| (ix, iy)))
            .filter_map(|(ix, iy)| {
                let l = grid.loss_at(ix, iy);
                if l.is_nan() {
                    return None;
                }
                let t = if span > 0.0 {
                    (l - result.min_loss) / span
                } else {
                    0.5
                };
                let (x0, y0) = (grid.coord(ix), grid.coord(iy));
                let (x1, y1) = (
                    (x0 + cell).min(MIRROR_PAIR_MASS),
                    (y0 + cell).min(MIRROR_PAIR_MASS),
                );
                Some(Rectangle::new(
                    [(x0, y0), (x1, y1)],
                    diverging_color(t).filled(),
                ))
            }),
    )?;

    for (x, y, label) in [
        (result.x, result.y, "fairest possible (min)"),
        (NATURAL_COORD, NATURAL_COORD, "\"natural\""),
    ] {
        chart.draw_series(std::iter::once(Circle::new((x, y), 3, BLACK.filled())))?;
        chart.draw_series(std::iter::once(Text::new(
            label,
            (x + 0.006, y + 0.006),
            ("sans-serif", 14),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Grouped bars: natural vs fairest-possible sum distribution, with the
/// uniform 1/11 reference line.
pub fn plot_sum_distribution(report: &SearchReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (800, 560)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = report
        .sum_probabilities
        .iter()
        .chain(&report.natural_sum_probabilities)
        .fold(UNIFORM_SUM_PROB, |a, &b| a.max(b))
        * 1.15;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "probability distribution of sum of 2 dice",
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(2.0 - 2.0 * BAR_WIDTH..12.0 + 2.0 * BAR_WIDTH, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(NUM_SUMS)
        .x_label_formatter(&|v| format!("{}", v.round() as i64))
        .x_desc("sum of the 2 dice rolled")
        .y_desc("probability")
        .draw()?;

    chart
        .draw_series((0..NUM_SUMS).map(|k| {
            let s = (k + MIN_SUM) as f64;
            Rectangle::new(
                [(s - BAR_WIDTH, 0.0), (s, report.natural_sum_probabilities[k])],
                BLUE.filled(),
            )
        }))?
        .label("\"natural\"")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], BLUE.filled()));

    chart
        .draw_series((0..NUM_SUMS).map(|k| {
            let s = (k + MIN_SUM) as f64;
            Rectangle::new(
                [(s, 0.0), (s + BAR_WIDTH, report.sum_probabilities[k])],
                RED.filled(),
            )
        }))?
        .label("fairest possible")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], RED.filled()));

    chart.draw_series(LineSeries::new(
        vec![
            (2.0 - BAR_WIDTH, UNIFORM_SUM_PROB),
            (12.0 + BAR_WIDTH, UNIFORM_SUM_PROB),
        ],
        &BLACK,
    ))?;
    chart.draw_series(std::iter::once(Text::new(
        "uniform",
        (10.0, UNIFORM_SUM_PROB * 1.03),
        ("sans-serif", 14),
    )))?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::RGBColor;

    #[test]
    fn diverging_ramp_endpoints() {
        assert_eq!(diverging_color(0.0), RGBColor(178, 24, 43));
        assert_eq!(diverging_color(1.0), RGBColor(33, 102, 172));
        assert_eq!(diverging_color(0.5), RGBColor(247, 247, 247));
    }
}
