//! Parser for the BSD/macOS `ping` output dialect.
//!
//! Reply lines carry payload bytes, source address, sequence number,
//! TTL, and time; only the time field is consumed. Timeouts print as
//! `Request timeout for icmp_seq N`.

use std::io;
use std::sync::LazyLock;

use regex::Regex;

use super::{SampleSource, SourceError};
use crate::data::Sample;

static REPLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xis)
        \s?([0-9]*)                 # payload bytes
        \sbytes\sfrom\s
        (\d+\.\d+\.\d+\.\d+):
        \s+icmp_seq=(\d+)
        \s+ttl=(\d+)
        \s+time=(?:([0-9\.]+)\s+ms)
        ",
    )
    .expect("pattern compiles")
});

/// [`SampleSource`] over BSD/macOS-style ping output.
#[derive(Debug)]
pub struct DarwinDialect<I> {
    lines: I,
    description: String,
}

impl<I> DarwinDialect<I> {
    pub fn new(lines: I, target: &str) -> Self {
        Self { lines, description: format!("ping {} (darwin)", target) }
    }
}

impl<I> SampleSource for DarwinDialect<I>
where
    I: Iterator<Item = io::Result<String>> + Send,
{
    fn next_sample(&mut self) -> Result<Option<Sample>, SourceError> {
        for line in self.lines.by_ref() {
            let line = line?;
            if line.starts_with("64 bytes from") {
                let caps = REPLY_RE.captures(&line).ok_or_else(|| SourceError::Malformed {
                    dialect: "darwin",
                    line: line.clone(),
                })?;
                let ms: f64 = caps[5].parse().map_err(|_| SourceError::Malformed {
                    dialect: "darwin",
                    line: line.clone(),
                })?;
                return Ok(Some(Sample::Value(ms.round() as u64)));
            }
            if line.starts_with("Request timeout") {
                return Ok(Some(Sample::Timeout));
            }
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
    fn test_reply_line_parses_time_field() {
        let mut source = DarwinDialect::new(
            feed(&["64 bytes from 8.8.8.8: icmp_seq=0 ttl=115 time=14.165 ms"]),
            "8.8.8.8",
        );
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Value(14)));
    }

    #[test]
    fn test_request_timeout_yields_timeout() {
        let mut source =
            DarwinDialect::new(feed(&["Request timeout for icmp_seq 4"]), "8.8.8.8");
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Timeout));
    }

    #[test]
    fn test_header_lines_are_skipped() {
        let mut source = DarwinDialect::new(
            feed(&[
                "PING 8.8.8.8 (8.8.8.8): 56 data bytes",
                "64 bytes from 8.8.8.8: icmp_seq=0 ttl=115 time=27.5 ms",
            ]),
            "8.8.8.8",
        );
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Value(28)));
    }

    #[test]
    fn test_prefix_match_without_fields_is_fatal() {
        let mut source =
            DarwinDialect::new(feed(&["64 bytes from somewhere strange"]), "8.8.8.8");
        let err = source.next_sample().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { dialect: "darwin", .. }));
    }
}
