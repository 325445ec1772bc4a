//! Parser for the Windows `ping` output dialect.
//!
//! Reply lines look like `Reply from 8.8.8.8: bytes=32 time=27ms TTL=56`.
//! Timeouts and transmit failures are reported as their own lines.

use std::io;
use std::sync::LazyLock;

use regex::Regex;

use super::{SampleSource, SourceError};
use crate::data::Sample;

/// A reply line carries five numbers (address octets and byte count)
/// before the round-trip time; the sixth is the one we want.
static REPLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is).*?\d+.*?\d+.*?\d+.*?\d+.*?\d+.*?(\d+)").expect("pattern compiles")
});

/// [`SampleSource`] over Windows-style ping output.
#[derive(Debug)]
pub struct WindowsDialect<I> {
    lines: I,
    description: String,
}

impl<I> WindowsDialect<I> {
    pub fn new(lines: I, target: &str) -> Self {
        Self { lines, description: format!("ping {} (windows)", target) }
    }
}

impl<I> SampleSource for WindowsDialect<I>
where
    I: Iterator<Item = io::Result<String>> + Send,
{
    fn next_sample(&mut self) -> Result<Option<Sample>, SourceError> {
        for line in self.lines.by_ref() {
            let line = line?;
            if line.starts_with("Reply from") {
                let caps = REPLY_RE.captures(&line).ok_or_else(|| SourceError::Malformed {
                    dialect: "windows",
                    line: line.clone(),
                })?;
                let ms = caps[1].parse::<u64>().map_err(|_| SourceError::Malformed {
                    dialect: "windows",
                    line: line.clone(),
                })?;
                return Ok(Some(Sample::Value(ms)));
            }
            if line.contains("timed out") || line.contains("failure") {
                return Ok(Some(Sample::Timeout));
            }
            // Banner and statistics lines: wait for the next line.
        }
        Ok(None)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::test_support::feed;

    #[test]
    fn test_reply_line_parses_round_trip_time() {
        let mut source = WindowsDialect::new(
            feed(&["Reply from 8.8.8.8: bytes=32 time=27ms TTL=56"]),
            "8.8.8.8",
        );
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Value(27)));
    }

    #[test]
    fn test_timed_out_line_yields_timeout() {
        let mut source = WindowsDialect::new(feed(&["Request timed out."]), "8.8.8.8");
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Timeout));
    }

    #[test]
    fn test_transmit_failure_yields_timeout() {
        let mut source =
            WindowsDialect::new(feed(&["PING: transmit failed. General failure."]), "8.8.8.8");
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Timeout));
    }

    #[test]
    fn test_banner_lines_are_skipped() {
        let mut source = WindowsDialect::new(
            feed(&[
                "",
                "Pinging 8.8.8.8 with 32 bytes of data:",
                "Reply from 8.8.8.8: bytes=32 time=31ms TTL=56",
            ]),
            "8.8.8.8",
        );
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Value(31)));
    }

    #[test]
    fn test_stream_end_yields_none() {
        let mut source = WindowsDialect::new(feed(&["statistics follow"]), "8.8.8.8");
        assert_eq!(source.next_sample().unwrap(), None);
    }

    #[test]
    fn test_prefix_match_without_time_is_fatal() {
        let mut source = WindowsDialect::new(
            feed(&["Reply from host: something unexpected"]),
            "8.8.8.8",
        );
        let err = source.next_sample().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { dialect: "windows", .. }));
    }
}
