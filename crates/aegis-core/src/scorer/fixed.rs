//! In-process scorer for tests and offline operation.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::report::model::{Report, ReportStatus};
use crate::scorer::{ChannelError, Scorer};

/// Scorer that answers every evaluation with a preset report and records
/// the arguments it was invoked with.
#[derive(Debug)]
pub struct StaticScorer {
    report: Report,
    calls: Mutex<Vec<(String, String)>>,
}

impl StaticScorer {
    pub fn new(report: Report) -> Self {
        Self {
            report,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Degraded local verdict used when no external scorer is reachable:
    /// a WARNING at score 60 so the shell never claims an unverified target
    /// is secure.
    pub fn fallback() -> Self {
        Self::new(Report {
            status: ReportStatus::Warning,
            score: Some(60),
            message: Some("scorer core unreachable; local fallback verdict".to_string()),
            threat_level: Some("medium".to_string()),
            breakdown: None,
        })
    }

    /// `(target, content)` pairs seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl Scorer for StaticScorer {
    async fn evaluate(&self, target: &str, content: &str) -> Result<Report, ChannelError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((target.to_string(), content.to_string()));
        Ok(self.report.clone())
    }
}
