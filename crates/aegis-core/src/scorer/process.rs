//! Process-spawning scorer channel.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::warn;

use crate::report::model::Report;
use crate::scorer::{ChannelError, Scorer};

/// Default wall-clock budget for one scan.
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_secs(30);

/// Scorer reachable as `<program> [args...] <target> <content>`.
///
/// The child's entire stdout is collected after exit and parsed as one JSON
/// report. Stderr is surfaced to the operator via tracing and never affects
/// the returned report.
#[derive(Debug, Clone)]
pub struct ProcessScorer {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessScorer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: DEFAULT_SCAN_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Interprets collected scorer output.
///
/// Fail-closed: a non-zero exit or stdout that does not parse as a single
/// JSON report substitutes [`Report::fail_closed`] instead of propagating
/// an error.
pub(crate) fn interpret_output(exited_ok: bool, stdout: &[u8]) -> Report {
    if !exited_ok {
        warn!("scorer exited non-zero; substituting fail-closed report");
        return Report::fail_closed();
    }

    match serde_json::from_slice(stdout) {
        Ok(report) => report,
        Err(err) => {
            warn!("failed to parse scorer output: {err}");
            Report::fail_closed()
        }
    }
}

#[async_trait]
impl Scorer for ProcessScorer {
    async fn evaluate(&self, target: &str, content: &str) -> Result<Report, ChannelError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .arg(content)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Ensures a timed-out child does not outlive the scan.
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ChannelError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => return Err(ChannelError::Timeout(self.timeout)),
        };

        for line in String::from_utf8_lossy(&output.stderr).lines() {
            warn!("scorer stderr: {line}");
        }

        Ok(interpret_output(output.status.success(), &output.stdout))
    }
}
