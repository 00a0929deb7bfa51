//! Per-dimension alerting over a report's breakdown.

use crate::report::model::Report;

/// Breakdown values strictly below this fraction produce an alert line.
/// Fixed policy, not configurable.
pub const ALERT_THRESHOLD: f64 = 0.7;

/// Breakdown key excluded from alerting: it is the aggregate, not a
/// dimension.
const OVERALL_KEY: &str = "overall";

/// Scans the report breakdown for sub-threshold dimensions and emits one
/// human-readable alert line per finding.
///
/// Pure function. Ordering follows the breakdown's insertion order.
/// Non-numeric breakdown values are skipped rather than treated as
/// findings.
pub fn extract_alerts(report: &Report) -> Vec<String> {
    let Some(breakdown) = &report.breakdown else {
        return Vec::new();
    };

    breakdown
        .iter()
        .filter(|(dim, _)| dim.as_str() != OVERALL_KEY)
        .filter_map(|(dim, value)| {
            let value = value.as_f64()?;
            (value < ALERT_THRESHOLD).then(|| {
                format!(
                    "Alert: {dim} score is low ({}%)",
                    (value * 100.0).round() as i64
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::ReportStatus;
    use serde_json::{Map, Value, json};

    fn report_with_breakdown(pairs: &[(&str, Value)]) -> Report {
        let mut breakdown = Map::new();
        for (k, v) in pairs {
            breakdown.insert(k.to_string(), v.clone());
        }
        Report {
            status: ReportStatus::Secure,
            score: None,
            message: None,
            threat_level: None,
            breakdown: Some(breakdown),
        }
    }

    #[test]
    fn missing_breakdown_yields_no_alerts() {
        let report = Report {
            status: ReportStatus::Secure,
            score: None,
            message: None,
            threat_level: None,
            breakdown: None,
        };
        assert!(extract_alerts(&report).is_empty());
    }

    #[test]
    fn overall_key_never_alerts() {
        let report = report_with_breakdown(&[("overall", json!(0.1))]);
        assert!(extract_alerts(&report).is_empty());
    }

    #[test]
    fn only_sub_threshold_dimensions_alert() {
        let report = report_with_breakdown(&[
            ("overall", json!(0.9)),
            ("privacy", json!(0.5)),
            ("ads", json!(0.8)),
        ]);

        assert_eq!(
            extract_alerts(&report),
            vec!["Alert: privacy score is low (50%)"]
        );
    }

    #[test]
    fn threshold_is_strict() {
        let report = report_with_breakdown(&[
            ("at_threshold", json!(0.7)),
            ("just_below", json!(0.699)),
        ]);

        assert_eq!(
            extract_alerts(&report),
            vec!["Alert: just_below score is low (70%)"]
        );
    }

    #[test]
    fn alerts_follow_breakdown_insertion_order() {
        let report = report_with_breakdown(&[
            ("zeta", json!(0.2)),
            ("alpha", json!(0.3)),
            ("mid", json!(0.95)),
            ("beta", json!(0.1)),
        ]);

        assert_eq!(
            extract_alerts(&report),
            vec![
                "Alert: zeta score is low (20%)",
                "Alert: alpha score is low (30%)",
                "Alert: beta score is low (10%)",
            ]
        );
    }

    #[test]
    fn percentage_rounds_to_nearest_integer() {
        let report = report_with_breakdown(&[("a", json!(0.346)), ("b", json!(0.0))]);

        assert_eq!(
            extract_alerts(&report),
            vec!["Alert: a score is low (35%)", "Alert: b score is low (0%)"]
        );
    }

    #[test]
    fn non_numeric_values_are_skipped() {
        let report = report_with_breakdown(&[("weird", json!("low")), ("bad", json!(0.4))]);

        assert_eq!(
            extract_alerts(&report),
            vec!["Alert: bad score is low (40%)"]
        );
    }
}
