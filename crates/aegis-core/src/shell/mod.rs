//! Shell controller: the single owner of displayed trust state.
//!
//! All shared state (trust state, activity log, current target) is owned
//! exclusively by [`ShellController`] and mutated only from its own
//! sequential handlers; no locking is needed.
//!
//! The scan flow is split into `begin_verify` / `apply_scan` so the
//! in-flight await sits between two synchronous state transitions. Each
//! navigation bumps an epoch and a scan result is applied only if its
//! ticket still matches, so a stale report can never overwrite a newer
//! target's state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PLACEHOLDER_CONTENT;
use crate::log::{ActivityLog, LogCategory};
use crate::report::model::{Report, SessionSummary, ToolInfo};
use crate::scorer::{ChannelError, Scorer};
use crate::trust::alerts::extract_alerts;
use crate::trust::classify::{TrustState, TrustTier, classify};

pub mod target;
pub mod window;

pub use target::normalize_target;
pub use window::{HostWindow, LoggingWindow, WindowCommand};

/// Host bootstrap profile.
///
/// The hardened profile reaches the scorer only through the isolated
/// process channel; the permissive profile additionally allows an
/// in-process scorer. Both exist in the field, so the shell models the
/// choice instead of resolving it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BridgeProfile {
    #[default]
    Hardened,
    Permissive,
}

/// Handle for one in-flight scan. Carries the target being scanned and the
/// navigation epoch it belongs to.
#[derive(Debug, Clone)]
pub struct ScanTicket {
    epoch: u64,
    target: String,
}

impl ScanTicket {
    pub fn target(&self) -> &str {
        &self.target
    }
}

pub struct ShellController {
    scorer: Arc<dyn Scorer>,
    window: Box<dyn HostWindow>,
    profile: BridgeProfile,
    state: TrustState,
    target: Option<String>,
    epoch: u64,
    log: ActivityLog,
    last_report: Option<Report>,
    alerts: Vec<String>,
}

impl ShellController {
    pub fn new(scorer: Arc<dyn Scorer>, profile: BridgeProfile) -> Self {
        Self {
            scorer,
            window: Box::new(LoggingWindow),
            profile,
            state: TrustState::Unknown,
            target: None,
            epoch: 0,
            log: ActivityLog::new(),
            last_report: None,
            alerts: Vec::new(),
        }
    }

    pub fn with_window(mut self, window: Box<dyn HostWindow>) -> Self {
        self.window = window;
        self
    }

    pub fn state(&self) -> TrustState {
        self.state
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Normalizes and loads a new target. Resets trust state to UNKNOWN and
    /// invalidates any in-flight scan.
    pub fn navigate(&mut self, input: &str) -> &str {
        let target = normalize_target(input);
        debug!("navigating to {target}");

        self.epoch += 1;
        self.state = TrustState::Unknown;
        self.last_report = None;
        self.alerts.clear();
        self.log
            .push(LogCategory::Nav, format!("Navigating to {target}"));
        self.target = Some(target);
        self.target.as_deref().unwrap_or_default()
    }

    /// Moves the shell into SCANNING and issues a ticket for the current
    /// target. Returns `None` when nothing has been navigated to yet.
    pub fn begin_verify(&mut self) -> Option<ScanTicket> {
        let target = self.target.clone()?;

        self.state = TrustState::Scanning;
        self.alerts.clear();
        self.log.push(
            LogCategory::Warn,
            format!("Initiating security scan for {target}"),
        );

        Some(ScanTicket {
            epoch: self.epoch,
            target,
        })
    }

    /// Applies a resolved scan. Stale tickets (navigation happened since
    /// `begin_verify`) are dropped with an info entry; channel failures land
    /// as BLOCKED with score 0. Nothing here is fatal.
    pub fn apply_scan(&mut self, ticket: ScanTicket, outcome: Result<Report, ChannelError>) {
        if ticket.epoch != self.epoch {
            self.log.push(
                LogCategory::Info,
                format!("Discarding stale scan result for {}", ticket.target),
            );
            return;
        }

        match outcome {
            Ok(report) => {
                let (tier, score) = classify(&report);
                match tier {
                    TrustTier::Secure => self.log.push(
                        LogCategory::Success,
                        format!("Verification: PASS (score {score})"),
                    ),
                    TrustTier::Warning => self.log.push(
                        LogCategory::Danger,
                        format!(
                            "Verification: WARNING - {}",
                            report.message.as_deref().unwrap_or("issues found")
                        ),
                    ),
                    TrustTier::Blocked => self.log.push(
                        LogCategory::Danger,
                        format!(
                            "Verification: BLOCKED - {}",
                            report.message.as_deref().unwrap_or("critical threat")
                        ),
                    ),
                }

                self.alerts = extract_alerts(&report);
                for alert in &self.alerts {
                    self.log.push(LogCategory::Danger, alert.clone());
                }

                self.state = TrustState::Scored { tier, score };
                self.last_report = Some(report);
            }
            Err(err) => {
                self.log
                    .push(LogCategory::Danger, format!("Scorer unreachable: {err}"));
                self.state = TrustState::Scored {
                    tier: TrustTier::Blocked,
                    score: 0,
                };
                self.last_report = None;
            }
        }
    }

    /// Full verify flow: begin, await the scorer, apply. `content` falls
    /// back to the placeholder snapshot when absent.
    pub async fn verify(&mut self, content: Option<&str>) {
        let Some(ticket) = self.begin_verify() else {
            self.log
                .push(LogCategory::Info, "Nothing to verify: no target loaded");
            return;
        };

        let scorer = Arc::clone(&self.scorer);
        let outcome = scorer
            .evaluate(ticket.target(), content.unwrap_or(PLACEHOLDER_CONTENT))
            .await;

        self.apply_scan(ticket, outcome);
    }

    /// Fire-and-forget window control signal. No acknowledgment, no log
    /// entry.
    pub fn window_command(&self, command: WindowCommand) {
        match command {
            WindowCommand::Minimize => self.window.minimize(),
            WindowCommand::ToggleMaximize => self.window.toggle_maximize(),
            WindowCommand::Close => self.window.close(),
        }
    }

    pub fn summary(&self, tool: ToolInfo) -> SessionSummary {
        SessionSummary {
            contract_version: crate::REPORT_CONTRACT_VERSION.to_string(),
            tool,
            profile: self.profile,
            target: self.target.clone(),
            trust: self.state,
            alerts: self.alerts.clone(),
            log: self.log.snapshot(),
            report: self.last_report.clone(),
        }
    }
}
