//! Rendering: the drawing surface, the plotting algorithm, and the
//! color-directive compositor.

mod canvas;
mod compose;
mod plot;
mod theme;

pub use canvas::{Canvas, CanvasError, Cell, Grid, Paint, Point};
pub use compose::compose;
pub use plot::plot;
pub use theme::Theme;
