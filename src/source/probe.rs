//! The external `ping` subprocess and its output lines.

use std::io::{self, BufRead, BufReader, Lines};
use std::process::{Child, ChildStdout, Command, Stdio};

/// A running `ping` child process, iterated as its stdout lines.
///
/// The blocking wait between samples lives here: `next()` blocks until
/// ping prints another line. The child is killed when the probe drops.
#[derive(Debug)]
pub struct Probe {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
}

impl Probe {
    /// Spawn the platform `ping` against a target.
    ///
    /// Windows ping exits after four echoes unless asked to run until
    /// interrupted; everywhere else continuous mode is the default.
    pub fn spawn(target: &str) -> io::Result<Self> {
        let mut command = Command::new("ping");
        if cfg!(target_os = "windows") {
            command.arg("-t");
        }
        let mut child = command
            .arg(target)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("ping stdout was not captured"))?;
        Ok(Self { child, lines: BufReader::new(stdout).lines() })
    }
}

impl Iterator for Probe {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        // Reap the child so an interrupted run doesn't leave ping behind.
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
