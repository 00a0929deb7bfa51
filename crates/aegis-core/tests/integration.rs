//! End-to-end flows through the shell controller with an in-process scorer.

use std::sync::Arc;

use aegis_core::PLACEHOLDER_CONTENT;
use aegis_core::log::LogCategory;
use aegis_core::report::model::{Report, ReportStatus, ToolInfo};
use aegis_core::scorer::fixed::StaticScorer;
use aegis_core::shell::{BridgeProfile, ShellController};
use aegis_core::trust::classify::{TrustState, TrustTier};
use serde_json::json;

fn tool() -> ToolInfo {
    ToolInfo {
        name: "aegis".into(),
        version: "0.1.0".into(),
    }
}

#[tokio::test]
async fn navigate_then_verify_secure_target() {
    let scorer = Arc::new(StaticScorer::new(Report {
        status: ReportStatus::Secure,
        score: Some(95),
        message: None,
        threat_level: None,
        breakdown: None,
    }));
    let mut shell = ShellController::new(scorer.clone(), BridgeProfile::Hardened);

    // Navigation normalizes, resets trust state and logs one nav entry.
    shell.navigate("bank.com");
    assert_eq!(shell.target(), Some("https://bank.com"));
    assert_eq!(shell.state(), TrustState::Unknown);

    let nav_entries: Vec<_> = shell
        .log()
        .iter()
        .filter(|e| e.category == LogCategory::Nav)
        .collect();
    assert_eq!(nav_entries.len(), 1);

    // Verification invokes the scorer with the normalized target and the
    // placeholder content snapshot.
    shell.verify(None).await;
    assert_eq!(
        scorer.calls(),
        vec![("https://bank.com".to_string(), PLACEHOLDER_CONTENT.to_string())]
    );

    assert_eq!(
        shell.state(),
        TrustState::Scored {
            tier: TrustTier::Secure,
            score: 95
        }
    );

    let success_entries: Vec<_> = shell
        .log()
        .iter()
        .filter(|e| e.category == LogCategory::Success)
        .collect();
    assert_eq!(success_entries.len(), 1);
    assert!(success_entries[0].message.contains("PASS"));
}

#[tokio::test]
async fn breakdown_alerts_flow_into_log_and_summary() {
    let report: Report = serde_json::from_value(json!({
        "status": "warning",
        "score": 55,
        "message": "tracking detected",
        "breakdown": {"overall": 0.55, "privacy": 0.4, "ads": 0.5, "tls": 0.95}
    }))
    .unwrap();

    let scorer = Arc::new(StaticScorer::new(report));
    let mut shell = ShellController::new(scorer, BridgeProfile::Hardened);
    shell.navigate("tracker.example");
    shell.verify(None).await;

    assert_eq!(
        shell.alerts(),
        [
            "Alert: privacy score is low (40%)",
            "Alert: ads score is low (50%)",
        ]
    );

    let summary = shell.summary(tool());
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(summary.alerts.len(), 2);

    // One danger entry for the verdict plus one per alert.
    let danger_count = summary
        .log
        .iter()
        .filter(|e| e.category == LogCategory::Danger)
        .count();
    assert_eq!(danger_count, 3);
}

#[tokio::test]
async fn renavigation_resets_a_previous_verdict() {
    let scorer = Arc::new(StaticScorer::new(Report {
        status: ReportStatus::Secure,
        score: None,
        message: None,
        threat_level: None,
        breakdown: None,
    }));
    let mut shell = ShellController::new(scorer, BridgeProfile::Hardened);

    shell.navigate("first.com");
    shell.verify(None).await;
    assert_eq!(
        shell.state(),
        TrustState::Scored {
            tier: TrustTier::Secure,
            score: 100
        }
    );

    shell.navigate("second.com");
    assert_eq!(shell.state(), TrustState::Unknown);
    assert!(shell.alerts().is_empty());

    let summary = shell.summary(tool());
    assert_eq!(summary.exit_code(), 0);
    assert!(summary.report.is_none());
}

#[tokio::test]
async fn summary_json_has_the_stable_shape() {
    let scorer = Arc::new(StaticScorer::fallback());
    let mut shell = ShellController::new(scorer, BridgeProfile::Permissive);
    shell.navigate("example.com");
    shell.verify(None).await;

    let value = serde_json::to_value(shell.summary(tool())).unwrap();

    assert!(value.get("contract_version").is_some());
    assert!(value.get("tool").is_some());
    assert_eq!(value["profile"], "permissive");
    assert_eq!(value["target"], "https://example.com");
    assert_eq!(value["trust"]["state"], "scored");
    assert_eq!(value["trust"]["tier"], "WARNING");
    assert_eq!(value["trust"]["score"], 60);
    assert!(value["log"].as_array().is_some());
}
