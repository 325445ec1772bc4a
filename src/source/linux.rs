//! Parser for the Linux (iputils) `ping` output dialect.
//!
//! Reply lines look like
//! `64 bytes from 8.8.8.8: icmp_seq=1 ttl=56 time=13.4 ms`.
//! iputils prints nothing matchable for a dropped echo (the sequence
//! number simply skips), so this dialect has no timeout branch.

use std::io;
use std::sync::LazyLock;

use regex::Regex;

use super::{SampleSource, SourceError};
use crate::data::Sample;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)time=(\d+(?:\.\d+)?) *ms").expect("pattern compiles"));

/// [`SampleSource`] over Linux-style ping output.
#[derive(Debug)]
pub struct LinuxDialect<I> {
    lines: I,
    description: String,
}

impl<I> LinuxDialect<I> {
    pub fn new(lines: I, target: &str) -> Self {
        Self { lines, description: format!("ping {} (linux)", target) }
    }
}

impl<I> SampleSource for LinuxDialect<I>
where
    I: Iterator<Item = io::Result<String>> + Send,
{
    fn next_sample(&mut self) -> Result<Option<Sample>, SourceError> {
        for line in self.lines.by_ref() {
            let line = line?;
            if !line.starts_with("64 bytes from") {
                continue;
            }
            let caps = TIME_RE.captures(&line).ok_or_else(|| SourceError::Malformed {
                dialect: "linux",
                line: line.clone(),
            })?;
            let ms: f64 = caps[1].parse().map_err(|_| SourceError::Malformed {
                dialect: "linux",
                line: line.clone(),
            })?;
            return Ok(Some(Sample::Value(ms.round() as u64)));
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
    fn test_reply_line_rounds_fractional_time() {
        let mut source = LinuxDialect::new(
            feed(&["64 bytes from 8.8.8.8: icmp_seq=1 ttl=56 time=13.4 ms"]),
            "8.8.8.8",
        );
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Value(13)));
    }

    #[test]
    fn test_integer_time_parses() {
        let mut source = LinuxDialect::new(
            feed(&["64 bytes from 1.1.1.1: icmp_seq=3 ttl=60 time=9 ms"]),
            "1.1.1.1",
        );
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Value(9)));
    }

    #[test]
    fn test_header_and_statistics_lines_are_skipped() {
        let mut source = LinuxDialect::new(
            feed(&[
                "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.",
                "64 bytes from 8.8.8.8: icmp_seq=1 ttl=56 time=20.6 ms",
                "--- 8.8.8.8 ping statistics ---",
            ]),
            "8.8.8.8",
        );
        assert_eq!(source.next_sample().unwrap(), Some(Sample::Value(21)));
        assert_eq!(source.next_sample().unwrap(), None);
    }

    #[test]
    fn test_prefix_match_without_time_is_fatal() {
        let mut source =
            LinuxDialect::new(feed(&["64 bytes from 8.8.8.8: icmp_seq=1 ttl=56"]), "8.8.8.8");
        let err = source.next_sample().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { dialect: "linux", .. }));
    }
}
