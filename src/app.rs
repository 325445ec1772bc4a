//! Application state: one sample source, one history, one frame at a time.

use anyhow::Result;

use crate::data::History;
use crate::render::{compose, plot, Theme};
use crate::source::SampleSource;

/// Minimum canvas size for a usable chart; below this the layout math
/// is undefined, so the frame degrades to a resize prompt.
pub const MIN_WIDTH: usize = 20;
pub const MIN_HEIGHT: usize = 10;

/// Owns the sample source and the rolling history, and produces frames.
pub struct App {
    source: Box<dyn SampleSource>,
    pub history: History,
    label: String,
    theme: Theme,
}

impl App {
    pub fn new(source: Box<dyn SampleSource>, label: impl Into<String>, theme: Theme) -> Self {
        Self { source, history: History::new(), label: label.into(), theme }
    }

    /// The label shown on the chart's top border.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Description of the active source (dialect or simulator).
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Block for the next sample and record it.
    ///
    /// Returns `Ok(false)` once the probe's output has ended.
    pub fn tick(&mut self) -> Result<bool> {
        match self.source.next_sample()? {
            Some(sample) => {
                self.history.push(sample);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Render one frame at the given canvas size, ready to print.
    pub fn render_frame(&self, width: usize, height: usize) -> Vec<String> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return vec![format!(
                "Terminal too small: {}x{} (minimum {}x{})",
                width, height, MIN_WIDTH, MIN_HEIGHT
            )];
        }
        compose(&plot(&self.label, &self.history, width, height, &self.theme))
    }
}
