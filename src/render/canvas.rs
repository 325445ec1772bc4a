//! Character-and-color drawing surface for the chart.
//!
//! Coordinates are y-up with the origin at the bottom-left corner, so
//! drawing code can think in chart terms ("bars grow upward") while the
//! storage stays row-major. A [`Canvas`] pairs a glyph grid with a
//! color grid of identical dimensions.

use crossterm::style::Color;
use thiserror::Error;

/// Errors from the drawing primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    /// Only axis-aligned lines can be drawn.
    #[error("diagonal lines are not supported (from {from:?} to {to:?})")]
    Diagonal { from: Point, to: Point },
}

/// A position on the canvas. (0, 0) is the bottom-left cell.
///
/// Ordering is lexicographic by (x, y), which lets line endpoints be
/// normalized with a plain `min`/`max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A single canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A visible character; `Glyph(' ')` is the blank default.
    Glyph(char),
    /// Renders as a space but counts as occupied, so the compositor
    /// tracks it like any other written cell.
    Hidden,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

impl Cell {
    /// The empty cell every canvas starts out filled with.
    pub const BLANK: Cell = Cell::Glyph(' ');

    /// Whether this cell has been written with something other than blank space.
    pub fn is_occupied(&self) -> bool {
        match self {
            Cell::Glyph(c) => *c != ' ',
            Cell::Hidden => true,
        }
    }

    /// The character to emit for this cell.
    pub fn render(&self) -> char {
        match self {
            Cell::Glyph(c) => *c,
            Cell::Hidden => ' ',
        }
    }
}

/// Rectangular (width+1) x (height+1) cell store indexed by [`Point`].
///
/// Access outside `[0, width] x [0, height]` is a caller bug and panics.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `default`.
    pub fn new(width: usize, height: usize, default: T) -> Self {
        Self { width, height, cells: vec![default; (width + 1) * (height + 1)] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Storage offset for a point; y is flipped so row 0 is the top.
    fn index_of(&self, p: Point) -> usize {
        assert!(
            p.x <= self.width && p.y <= self.height,
            "point ({}, {}) outside {}x{} grid",
            p.x,
            p.y,
            self.width,
            self.height,
        );
        (self.height - p.y) * (self.width + 1) + p.x
    }

    pub fn get(&self, p: Point) -> &T {
        &self.cells[self.index_of(p)]
    }

    pub fn set(&mut self, p: Point, value: T) {
        let idx = self.index_of(p);
        self.cells[idx] = value;
    }
}

/// How to color drawn cells: a fixed color, or one computed per cell
/// from its position (used for the latency zone bands). Resolved lazily
/// at draw time.
#[derive(Clone, Copy)]
pub enum Paint<'a> {
    Fixed(Color),
    Computed(&'a dyn Fn(Point) -> Color),
}

impl Paint<'_> {
    fn resolve(&self, p: Point) -> Color {
        match self {
            Paint::Fixed(color) => *color,
            Paint::Computed(f) => f(p),
        }
    }
}

/// Glyph grid plus a parallel color grid, always dimensionally identical.
#[derive(Debug, Clone)]
pub struct Canvas {
    glyphs: Grid<Cell>,
    colors: Grid<Option<Color>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            glyphs: Grid::new(width, height, Cell::BLANK),
            colors: Grid::new(width, height, None),
        }
    }

    pub fn width(&self) -> usize {
        self.glyphs.width()
    }

    pub fn height(&self) -> usize {
        self.glyphs.height()
    }

    pub fn get(&self, p: Point) -> Cell {
        *self.glyphs.get(p)
    }

    pub fn color(&self, p: Point) -> Option<Color> {
        *self.colors.get(p)
    }

    /// Write one cell. Without a paint the color entry is cleared.
    pub fn draw_point(&mut self, p: Point, cell: Cell, paint: Option<Paint>) {
        self.glyphs.set(p, cell);
        self.colors.set(p, paint.map(|paint| paint.resolve(p)));
    }

    /// Write `text` left to right starting at (`from_col`, `row`),
    /// one cell per character.
    pub fn draw_text(&mut self, text: &str, row: usize, from_col: usize, paint: Option<Paint>) {
        for (idx, c) in text.chars().enumerate() {
            self.draw_point(Point::new(from_col + idx, row), Cell::Glyph(c), paint);
        }
    }

    /// Fill columns `from_col..=to_col` of `row` with `ch`.
    pub fn draw_horizontal_line(
        &mut self,
        ch: char,
        row: usize,
        from_col: usize,
        to_col: usize,
        paint: Option<Paint>,
    ) {
        for x in from_col..=to_col {
            self.draw_point(Point::new(x, row), Cell::Glyph(ch), paint);
        }
    }

    /// Fill rows `from_row..=to_row` of `col` with `ch`.
    pub fn draw_vertical_line(
        &mut self,
        ch: char,
        col: usize,
        from_row: usize,
        to_row: usize,
        paint: Option<Paint>,
    ) {
        for y in from_row..=to_row {
            self.draw_point(Point::new(col, y), Cell::Glyph(ch), paint);
        }
    }

    /// Draw an axis-aligned line between two points, in either order.
    /// Defaults to `|` for vertical and `-` for horizontal runs.
    pub fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        paint: Option<Paint>,
        ch: Option<char>,
    ) -> Result<(), CanvasError> {
        let (a, b) = (from.min(to), from.max(to));
        if a.x == b.x {
            self.draw_vertical_line(ch.unwrap_or('|'), a.x, a.y, b.y, paint);
            Ok(())
        } else if a.y == b.y {
            self.draw_horizontal_line(ch.unwrap_or('-'), a.y, a.x, b.x, paint);
            Ok(())
        } else {
            Err(CanvasError::Diagonal { from, to })
        }
    }

    /// Draw the perimeter of the rectangle spanned by two corners, given
    /// in any order. With `blank` the perimeter is cleared instead:
    /// every perimeter cell becomes a blank with no color.
    pub fn draw_box(&mut self, c1: Point, c2: Point, paint: Option<Paint>, blank: bool) {
        let bottom_left = Point::new(c1.x.min(c2.x), c1.y.min(c2.y));
        let top_right = Point::new(c1.x.max(c2.x), c1.y.max(c2.y));

        let (vertical, horizontal) = if blank { (' ', ' ') } else { ('|', '-') };
        self.draw_horizontal_line(horizontal, bottom_left.y, bottom_left.x, top_right.x, paint);
        self.draw_horizontal_line(horizontal, top_right.y, bottom_left.x, top_right.x, paint);
        self.draw_vertical_line(vertical, bottom_left.x, bottom_left.y, top_right.y, paint);
        self.draw_vertical_line(vertical, top_right.x, bottom_left.y, top_right.y, paint);
    }
}
