//! Color palette for the chart.
//!
//! Supports light and dark palettes with automatic terminal detection.

use crossterm::style::Color;

/// Colors for the latency zones and the timeout marker.
///
/// Use [`Theme::auto_detect()`] for automatic selection based on the
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Bar color at or below the 50 ms-equivalent zone row.
    pub green: Color,
    /// Bar color between the green and 100 ms-equivalent zone rows.
    pub yellow: Color,
    /// Bar color above the yellow zone row.
    pub red: Color,
    /// Color of the `?` marker drawn for timed-out probes.
    pub timeout: Color,
}

impl Theme {
    /// Palette for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
            timeout: Color::Red,
        }
    }

    /// Palette for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            green: Color::DarkGreen,
            yellow: Color::DarkYellow,
            red: Color::DarkRed,
            timeout: Color::DarkRed,
        }
    }

    /// Auto-detect based on terminal background luminance; falls back
    /// to dark when the terminal cannot be probed.
    pub fn auto_detect() -> Self {
        Self::from_luma(terminal_light::luma().ok())
    }

    /// Pick the palette for a measured background luminance. `None`
    /// (probe failed) and dark backgrounds both select the dark palette.
    pub fn from_luma(luma: Option<f32>) -> Self {
        match luma {
            Some(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// The bar color for a cell row given the two zone boundaries.
    pub fn zone_color(&self, row: usize, green_row: usize, yellow_row: usize) -> Color {
        if row <= green_row {
            self.green
        } else if row <= yellow_row {
            self.yellow
        } else {
            self.red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_selects_palette() {
        assert_eq!(Theme::from_luma(Some(0.9)).green, Theme::light().green);
        assert_eq!(Theme::from_luma(Some(0.1)).green, Theme::dark().green);
    }

    #[test]
    fn test_failed_luma_probe_falls_back_to_dark() {
        let theme = Theme::from_luma(None);
        let dark = Theme::dark();
        assert_eq!(theme.green, dark.green);
        assert_eq!(theme.yellow, dark.yellow);
        assert_eq!(theme.red, dark.red);
        assert_eq!(theme.timeout, dark.timeout);
    }

    #[test]
    fn test_zone_color_bands() {
        let theme = Theme::dark();
        assert_eq!(theme.zone_color(2, 5, 10), theme.green);
        assert_eq!(theme.zone_color(5, 5, 10), theme.green);
        assert_eq!(theme.zone_color(6, 5, 10), theme.yellow);
        assert_eq!(theme.zone_color(10, 5, 10), theme.yellow);
        assert_eq!(theme.zone_color(11, 5, 10), theme.red);
    }
}
