//! Canvas-to-text compositing with minimized color directives.

use std::fmt::Write;

use crossterm::style::{Color, ResetColor, SetForegroundColor};

use super::canvas::Canvas;

/// Flatten a rendered canvas into one string per row, top to bottom.
///
/// Each row is scanned left to right tracking the active color. A
/// switch directive is emitted only when an occupied cell's color
/// differs from the active one, and a single reset when an uncolored
/// cell follows an active color, so a directive is never re-emitted
/// for a color that is already active.
pub fn compose(canvas: &Canvas) -> Vec<String> {
    let mut rows = Vec::with_capacity(canvas.height() + 1);
    for y in (0..=canvas.height()).rev() {
        let mut out = String::with_capacity(canvas.width() + 1);
        let mut active: Option<Color> = None;
        for x in 0..=canvas.width() {
            let p = super::canvas::Point::new(x, y);
            let cell = canvas.get(p);
            match canvas.color(p) {
                Some(color) if cell.is_occupied() => {
                    if active != Some(color) {
                        let _ = write!(out, "{}", SetForegroundColor(color));
                        active = Some(color);
                    }
                }
                None if active.is_some() => {
                    let _ = write!(out, "{}", ResetColor);
                    active = None;
                }
                _ => {}
            }
            out.push(cell.render());
        }
        rows.push(out);
    }
    rows
}
