use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::log::LogEntry;
use crate::shell::BridgeProfile;
use crate::trust::classify::TrustState;

/// Scorer verdict for a single target.
///
/// This struct is the wire contract with the external scorer process: its
/// stdout must deserialize into exactly this shape. Unknown top-level fields
/// are tolerated; an unrecognized `status` string collapses to
/// [`ReportStatus::Unknown`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    #[serde(default)]
    pub status: ReportStatus,

    /// Aggregate score 0-100. Absent scores fall back to tier defaults
    /// during classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(
        rename = "threatLevel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub threat_level: Option<String>,

    /// Per-dimension fractional sub-scores in [0, 1]. Insertion order is
    /// preserved and drives alert ordering. May include an `overall` key
    /// that alerting ignores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Map<String, Value>>,
}

impl Report {
    /// The fail-closed substitute for a scorer that exited non-zero or wrote
    /// unparsable output.
    ///
    /// Serializes to `{"status":"error","threatLevel":"unknown","score":0}`
    /// and classifies as BLOCKED with score 0.
    pub fn fail_closed() -> Self {
        Self {
            status: ReportStatus::Error,
            score: Some(0),
            message: None,
            threat_level: Some("unknown".to_string()),
            breakdown: None,
        }
    }
}

/// Scorer-declared status of a target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Secure,
    Warning,
    Blocked,
    Error,
    /// Catch-all for statuses this shell does not recognize. Classified the
    /// same as `blocked`/`error`.
    #[serde(other)]
    #[default]
    Unknown,
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Full outcome of one navigate-and-verify session, the stable JSON output
/// of the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub contract_version: String,
    pub tool: ToolInfo,
    pub profile: BridgeProfile,
    pub target: Option<String>,
    pub trust: TrustState,
    pub alerts: Vec<String>,
    pub log: Vec<LogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
}

impl SessionSummary {
    /// CI-compatible exit code for this session.
    ///
    /// Scored sessions map through the tier (SECURE 0, WARNING 1,
    /// BLOCKED 2). Sessions that never reached a verdict exit 0: absence of
    /// a scan is not a finding.
    pub fn exit_code(&self) -> i32 {
        match self.trust {
            TrustState::Scored { tier, .. } => tier.exit_code(),
            TrustState::Unknown | TrustState::Scanning => 0,
        }
    }
}
