//! Summary statistics over the rendered window.

use super::sample::Sample;

/// Derived statistics for the stat overlay; computed per frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Mean latency over the window's usable samples.
    pub avg: f64,
    /// Lowest latency seen in the window.
    pub min: u64,
    /// Highest latency seen in the window.
    pub max: u64,
    /// Most recent usable latency in the window.
    pub cur: u64,
}

impl Stats {
    /// Compute stats over a newest-first window, ignoring timeouts and
    /// placeholders. Returns `None` when the window has no usable sample.
    pub fn over<'a>(window: impl Iterator<Item = &'a Sample>) -> Option<Self> {
        let mut values = window.filter_map(|s| s.millis());
        let first = values.next()?;
        let (mut count, mut sum, mut min, mut max) = (1u64, first, first, first);
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        Some(Self { avg: sum as f64 / count as f64, min, max, cur: first })
    }

    /// The four overlay lines, each with the value right-justified to a
    /// common width so the box around them lines up.
    pub fn overlay_lines(&self) -> [String; 4] {
        [
            format!("Avg: {:6.0}", self.avg),
            format!("Min: {:6}", self.min),
            format!("Max: {:6}", self.max),
            format!("Cur: {:6}", self.cur),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_ignore_timeouts_and_placeholders() {
        let window = [
            Sample::Unknown,
            Sample::Value(10),
            Sample::Timeout,
            Sample::Value(30),
        ];
        let stats = Stats::over(window.iter()).unwrap();
        assert_eq!(stats.avg, 20.0);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 30);
        assert_eq!(stats.cur, 10);
    }

    #[test]
    fn test_stats_none_without_usable_samples() {
        let window = [Sample::Unknown, Sample::Timeout];
        assert!(Stats::over(window.iter()).is_none());
    }

    #[test]
    fn test_overlay_lines_are_fixed_width() {
        let stats = Stats { avg: 13.4, min: 9, max: 127, cur: 13 };
        let lines = stats.overlay_lines();
        assert_eq!(lines[0], "Avg:     13");
        assert_eq!(lines[1], "Min:      9");
        assert_eq!(lines[2], "Max:    127");
        assert_eq!(lines[3], "Cur:     13");
        assert!(lines.iter().all(|l| l.len() == 11));
    }
}
