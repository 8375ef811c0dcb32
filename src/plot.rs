use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::histogram::Histogram;

/// Rendering errors surfaced by the export path.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing error: {0}")]
    Draw(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;

/// Drawing options, passed explicitly per render call.
///
/// `show_fit` toggles the display of fit annotations when a fit result is
/// attached to the histogram; this crate never performs a fit, so with the
/// histograms it produces the toggle renders nothing.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Draw the statistics block (entries, mean, std dev) in the top-right
    /// corner.
    pub show_stats: bool,
    /// Display fit annotations if a fit is attached.
    pub show_fit: bool,
    /// Lower bound of the y axis.
    pub y_axis_minimum: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            show_stats: true,
            show_fit: true,
            y_axis_minimum: 0.0,
        }
    }
}

fn draw_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Render the histogram as a bar chart with per-bin error bars and write it
/// to `path`, overwriting any existing file. The output format follows the
/// file extension (the canonical artifact is a `.jpg`).
pub fn render_histogram<P: AsRef<Path>>(
    hist: &Histogram,
    path: P,
    options: &PlotOptions,
) -> Result<()> {
    let root = BitMapBackend::new(path.as_ref(), (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let y_lo = options.y_axis_minimum;
    let mut y_hi = (0..hist.num_bins())
        .map(|i| hist.bin_content(i) + hist.bin_error(i))
        .fold(f64::NEG_INFINITY, f64::max);
    if !y_hi.is_finite() || y_hi <= y_lo {
        // Empty (or all-below-minimum) histogram: fall back to a unit range.
        y_hi = y_lo + 1.0;
    } else {
        y_hi += 0.1 * (y_hi - y_lo);
    }

    let mut chart = ChartBuilder::on(&root)
        .caption("Generated phi distribution", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(hist.low()..hist.high(), y_lo..y_hi)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("phi")
        .y_desc("Counts")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series((0..hist.num_bins()).map(|i| {
            let (lo, hi) = hist.bin_edges(i);
            Rectangle::new(
                [(lo, y_lo), (hi, hist.bin_content(i))],
                BLUE.mix(0.35).filled(),
            )
        }))
        .map_err(draw_err)?;

    chart
        .draw_series(
            (0..hist.num_bins())
                .filter(|&i| hist.bin_entry_count(i) > 0)
                .map(|i| {
                    let content = hist.bin_content(i);
                    let error = hist.bin_error(i);
                    ErrorBar::new_vertical(
                        hist.bin_center(i),
                        content - error,
                        content,
                        content + error,
                        BLUE.filled(),
                        4,
                    )
                }),
        )
        .map_err(draw_err)?;

    if options.show_stats {
        let lines = [
            format!("Entries  {}", hist.entries()),
            format!("Mean     {:.4}", hist.mean()),
            format!("Std Dev  {:.4}", hist.std_dev()),
        ];
        for (k, line) in lines.iter().enumerate() {
            root.draw(&Text::new(
                line.clone(),
                (700, 40 + 20 * k as i32),
                ("sans-serif", 16),
            ))
            .map_err(draw_err)?;
        }
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PlotOptions::default();
        assert!(options.show_stats);
        assert!(options.show_fit);
        assert_eq!(options.y_axis_minimum, 0.0);
    }
}
