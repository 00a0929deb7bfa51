use crate::report::model::SessionSummary;
use crate::trust::classify::TrustState;

pub fn render_text(summary: &SessionSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", summary.tool.name, summary.tool.version));
    out.push_str(&format!(
        "Target: {}\n",
        summary.target.as_deref().unwrap_or("(none)")
    ));

    match summary.trust {
        TrustState::Scored { tier, score } => {
            out.push_str(&format!("Trust: {tier} ({score}%)\n"));
        }
        _ => out.push_str(&format!("Trust: {}\n", summary.trust.display())),
    }

    if !summary.alerts.is_empty() {
        out.push_str("Alerts:\n");
        for alert in &summary.alerts {
            out.push_str(&format!("  - {alert}\n"));
        }
    }

    out.push_str("Activity:\n");
    for entry in &summary.log {
        out.push_str(&format!(
            "  [{}] [{:?}] {}\n",
            entry.timestamp.format("%H:%M:%S"),
            entry.category,
            entry.message
        ));
    }
    out
}
