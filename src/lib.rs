//! # pingscope
//!
//! An ASCII "oscilloscope" for network latency: samples round-trip
//! times from the platform `ping` tool and renders a live, scrolling,
//! color-coded bar chart with a summary-statistics overlay.
//!
//! ## Architecture
//!
//! ```text
//! source (ping dialects | simulator)
//!    └─> Sample ─> data::History (rolling ring)
//!                      └─> render::plot ─> Canvas ─> render::compose ─> terminal
//! ```
//!
//! - **[`source`]**: the [`SampleSource`] trait with one parser per ping
//!   output dialect (Windows, Linux, BSD/macOS) plus a random-walk
//!   [`Simulator`]; the `ping` subprocess itself lives in
//!   [`source::Probe`]
//! - **[`data`]**: the [`Sample`] model, the fixed-capacity newest-first
//!   [`History`] ring, and derived [`Stats`]
//! - **[`render`]**: a y-up character-and-color [`Canvas`] with drawing
//!   primitives, the bar-chart plotting algorithm, and a compositor that
//!   emits per-row text with minimized color directives
//! - **[`app`]**: glues a source and a history into one frame per tick
//!
//! ## Usage
//!
//! ```bash
//! pingscope 8.8.8.8        # live chart against a real host
//! pingscope --simulate     # synthetic demo data, no network needed
//! ```
//!
//! As a library:
//!
//! ```
//! use pingscope::{App, Simulator, Theme};
//!
//! let source = Box::new(Simulator::seeded(1, "demo"));
//! let mut app = App::new(source, "demo", Theme::dark());
//! app.tick().unwrap();
//! let frame = app.render_frame(60, 20);
//! assert_eq!(frame.len(), 21);
//! ```

pub mod app;
pub mod data;
pub mod render;
pub mod source;

pub use app::App;
pub use data::{History, Sample, Stats};
pub use render::{Canvas, CanvasError, Cell, Paint, Point, Theme};
pub use source::{
    DarwinDialect, LinuxDialect, Probe, SampleSource, Simulator, SourceError, WindowsDialect,
};
