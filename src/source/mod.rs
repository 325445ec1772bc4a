//! Sample acquisition: platform dialect parsers over the probe's
//! output, plus a synthetic simulator.
//!
//! Each parser understands one `ping` output grammar and turns raw
//! lines into [`Sample`]s; the simulator needs no probe at all. All of
//! them present the same blocking-pull [`SampleSource`] interface.

mod darwin;
mod linux;
mod probe;
mod simulate;
mod windows;

pub use darwin::DarwinDialect;
pub use linux::LinuxDialect;
pub use probe::Probe;
pub use simulate::Simulator;
pub use windows::WindowsDialect;

use std::io;

use anyhow::Context;
use thiserror::Error;

use crate::data::Sample;

/// Errors surfaced while pulling samples from a probe.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading from the probe's output failed.
    #[error("reading probe output failed: {0}")]
    Io(#[from] io::Error),

    /// A line matched a dialect's reply prefix but not its full grammar.
    /// Treated as fatal: it means the probe tool's output format drifted.
    #[error("malformed {dialect} reply line: {line:?}")]
    Malformed { dialect: &'static str, line: String },
}

/// A blocking stream of latency samples.
///
/// Implementations parse one probe dialect (or synthesize samples) and
/// live for the process lifetime. The blocking wait between samples is
/// owned by the underlying line source.
pub trait SampleSource: Send {
    /// Block until the next sample is available.
    ///
    /// Returns `Ok(None)` once the probe's output has ended.
    fn next_sample(&mut self) -> Result<Option<Sample>, SourceError>;

    /// Human-readable description of the source, for status display.
    fn description(&self) -> &str;
}

/// Build the sample source for a target: the simulator when requested,
/// otherwise the platform `ping` wrapped in the matching dialect parser.
pub fn for_target(target: &str, simulate: bool) -> anyhow::Result<Box<dyn SampleSource>> {
    if simulate {
        return Ok(Box::new(Simulator::new(target)));
    }

    let probe = Probe::spawn(target)
        .with_context(|| format!("failed to start ping for {}", target))?;

    let source: Box<dyn SampleSource> = match std::env::consts::OS {
        "windows" => Box::new(WindowsDialect::new(probe, target)),
        "macos" => Box::new(DarwinDialect::new(probe, target)),
        _ => Box::new(LinuxDialect::new(probe, target)),
    };
    Ok(source)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;

    /// Feed literal lines to a dialect parser as if they came from the probe.
    pub fn feed(lines: &[&str]) -> std::vec::IntoIter<io::Result<String>> {
        lines.iter().map(|l| Ok(l.to_string())).collect::<Vec<_>>().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_flag_overrides_target() {
        let source = for_target("google.com", true).unwrap();
        assert!(source.description().contains("simulated"));
    }
}
