use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use rehab_ai::config::AppConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Shared handler state: readiness, metrics, and the configured workflow defaults.
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
    pub min_score: u8,
    pub agency_code: String,
}

impl AppState {
    pub fn new(config: &AppConfig, metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            min_score: config.matching.min_score,
            agency_code: config.reporting.agency_code.clone(),
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_iso_dates() {
        assert_eq!(
            parse_date(" 2024-10-01 "),
            Ok(NaiveDate::from_ymd_opt(2024, 10, 1).expect("valid date"))
        );
    }

    #[test]
    fn rejects_other_layouts() {
        let err = parse_date("10/01/2024").expect_err("slashes rejected");
        assert!(err.contains("YYYY-MM-DD"));
    }
}
