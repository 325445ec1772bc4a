//! Turns the sample history into one rendered frame.

use crate::data::{History, Sample, Stats};

use super::canvas::{Canvas, Cell, Paint, Point};
use super::theme::Theme;

/// Bars scale against at least this many milliseconds, so low-latency
/// traces don't look falsely dramatic.
const SCALE_FLOOR_MS: u64 = 100;

/// The chart row bars grow up from; row 1 is the border.
const BASE_ROW: usize = 2;

/// Render the history window onto a fresh canvas: border, zone-colored
/// bars, timeout markers, and the centered stat overlay.
///
/// `width` and `height` must be at least the caller-guarded usable
/// minimum; layout math below roughly 10x6 is undefined.
pub fn plot(label: &str, history: &History, width: usize, height: usize, theme: &Theme) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    canvas.draw_box(Point::new(1, 1), Point::new(width, height), None, false);

    let window: Vec<Sample> = history.window(width.saturating_sub(3)).copied().collect();
    let Some(stats) = Stats::over(window.iter()) else {
        // Nothing usable yet: show the bare bordered frame.
        return canvas;
    };

    let max_ping = stats.max.max(SCALE_FLOOR_MS) as f64;
    let budget = height - 3;
    let yellow_row = (budget as f64 * 100.0 / max_ping).round() as usize;
    let green_row = (budget as f64 * 50.0 / max_ping).round() as usize;
    let zone = |p: Point| theme.zone_color(p.y, green_row, yellow_row);

    for (offset, sample) in window.iter().enumerate() {
        let column = offset + BASE_ROW;
        match sample {
            Sample::Timeout => {
                canvas.draw_point(
                    Point::new(column, BASE_ROW),
                    Cell::Glyph('?'),
                    Some(Paint::Fixed(theme.timeout)),
                );
            }
            Sample::Unknown => {}
            Sample::Value(ms) => {
                let bar_height =
                    ((budget as f64 * *ms as f64 / max_ping).round() as usize).max(1);
                canvas.draw_vertical_line(
                    '#',
                    column,
                    BASE_ROW,
                    BASE_ROW + bar_height,
                    Some(Paint::Computed(&zone)),
                );
            }
        }
    }

    draw_overlay(&mut canvas, label, &stats, width, height);
    canvas
}

/// Centered stat box over the middle of the chart, with the target
/// label on the top border row.
fn draw_overlay(canvas: &mut Canvas, label: &str, stats: &Stats, width: usize, height: usize) {
    let lines = stats.overlay_lines();
    let box_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mid_x = (width as f64 / 2.0).round() as usize;
    let mid_y = (height as f64 / 2.0).round() as usize;
    let half = (box_width as f64 / 2.0).round() as usize;

    // A box wider than the canvas is clamped to its edges, the same
    // clipping long labels get below.
    let left = mid_x.saturating_sub(half + 1);
    let right = (mid_x + half).saturating_sub(1).min(width);
    canvas.draw_box(
        Point::new(left, mid_y + lines.len()),
        Point::new(right, mid_y - 1),
        None,
        true,
    );

    let text_start = mid_x.saturating_sub(half);
    for (idx, line) in lines.iter().enumerate() {
        draw_clipped(canvas, line, mid_y + idx, text_start);
    }

    let label_start = mid_x.saturating_sub((label.chars().count() as f64 / 2.0).round() as usize);
    draw_clipped(canvas, label, height, label_start);
}

/// Draw text clipped at the right edge rather than panicking past it.
fn draw_clipped(canvas: &mut Canvas, text: &str, row: usize, from_col: usize) {
    let fitted: String = text.chars().take(canvas.width() + 1 - from_col).collect();
    canvas.draw_text(&fitted, row, from_col, None);
}
