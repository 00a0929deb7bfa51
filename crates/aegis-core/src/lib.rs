pub mod log;
pub mod report;
pub mod scorer;
pub mod shell;
pub mod trust;

pub const TOOL_NAME: &str = "aegis";

/// JSON contract version of the scorer report accepted by this shell.
/// This must be bumped only when the accepted report shape changes
/// semantically.
pub const REPORT_CONTRACT_VERSION: &str = "0.1.0";

/// Stand-in page content passed to the scorer when no real snapshot of the
/// rendered target is available. The scorer contract requires a content
/// argument even in that degraded case.
pub const PLACEHOLDER_CONTENT: &str = "<html><body>Checking Content...</body></html>";
