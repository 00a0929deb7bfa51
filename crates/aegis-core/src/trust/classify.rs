//! Trust classification for scorer reports.
//!
//! This module derives the displayed trust verdict from a scorer report.
//!
//! Responsibilities:
//! - Map a report status onto a discrete tier
//! - Substitute tier-default scores when the report carries none
//! - Compute CI-compatible exit codes
//!
//! Non-responsibilities:
//! - Talking to the scorer (handled in `scorer`)
//! - Per-dimension alerting (handled in `trust::alerts`)
//! - Tracking in-flight scans (SCANNING/UNKNOWN live on `TrustState`,
//!   owned by the shell controller)
//!
//! The classification policy is intentionally simple and explainable:
//!
//!   - status `secure`  → SECURE,  default score 100
//!   - status `warning` → WARNING, default score 60
//!   - anything else    → BLOCKED, default score 0
//!
//! An explicit numeric score in the report always wins over the default.

use serde::{Deserialize, Serialize};

use crate::report::model::{Report, ReportStatus};

/// Discrete trust verdict derived from a report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustTier {
    Secure,
    Warning,
    Blocked,
}

impl TrustTier {
    /// Presentation color for the tier badge and omnibox border.
    pub fn color(self) -> &'static str {
        match self {
            TrustTier::Secure => "green",
            TrustTier::Warning => "yellow",
            TrustTier::Blocked => "red",
        }
    }

    /// Exit code mapping:
    /// - SECURE  → 0
    /// - WARNING → 1
    /// - BLOCKED → 2
    pub fn exit_code(self) -> i32 {
        match self {
            TrustTier::Secure => 0,
            TrustTier::Warning => 1,
            TrustTier::Blocked => 2,
        }
    }
}

impl std::fmt::Display for TrustTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string(self).unwrap().trim_matches('"')
        )
    }
}

/// Displayed trust state of the shell.
///
/// Mutated only by the shell controller: navigation resets it to `Unknown`,
/// starting a scan moves it to `Scanning`, and scan resolution (success or
/// failure) lands on `Scored`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TrustState {
    /// No scan has run for the current target.
    #[default]
    Unknown,
    /// A scan is in flight.
    Scanning,
    Scored { tier: TrustTier, score: u8 },
}

impl TrustState {
    /// Short display form: a percentage when scored, a placeholder otherwise.
    pub fn display(&self) -> String {
        match self {
            TrustState::Unknown => "--".to_string(),
            TrustState::Scanning => "scanning".to_string(),
            TrustState::Scored { score, .. } => format!("{score}%"),
        }
    }

    /// Presentation color, extending [`TrustTier::color`] with the neutral
    /// sentinel treatments.
    pub fn color(&self) -> &'static str {
        match self {
            TrustState::Unknown => "neutral",
            TrustState::Scanning => "neutral-animated",
            TrustState::Scored { tier, .. } => tier.color(),
        }
    }
}

/// Derives the trust tier and display score from a scorer report.
///
/// Pure and deterministic: identical reports always classify identically,
/// and missing fields substitute tier defaults rather than failing.
pub fn classify(report: &Report) -> (TrustTier, u8) {
    match report.status {
        ReportStatus::Secure => (TrustTier::Secure, report.score.unwrap_or(100)),
        ReportStatus::Warning => (TrustTier::Warning, report.score.unwrap_or(60)),
        // blocked, error, unrecognized: fail closed.
        _ => (TrustTier::Blocked, report.score.unwrap_or(0)),
    }
}
