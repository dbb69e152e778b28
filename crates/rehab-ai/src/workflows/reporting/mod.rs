//! RSA-911 case aggregation and export.
//!
//! Aggregation is total: any slice of cases, including an empty one, yields a
//! report with zeroed sections. Only [`export`] can fail.

pub mod domain;
pub mod export;
mod summary;
pub mod views;

pub use domain::{
    AgeBand, CaseOutcome, CaseStatus, CostRecord, EmploymentDetails, ReportCase, ReportPeriod,
    ServiceRecord,
};
pub use export::{export_report, export_report_as, ExportError, ExportFormat, ExportedReport};
pub use views::{
    CostAnalysis, Demographics, OutcomeStatistics, RSA911Report, ReportSummary, ServiceStatistics,
    ServiceTally, TopService,
};

use chrono::Utc;
use std::io::Read;
use tracing::debug;

pub const DEFAULT_AGENCY_CODE: &str = "TX-001";
const REPORT_ID_PREFIX: &str = "RSA-911";

/// Builds RSA-911 reports for a single agency.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    agency_name: String,
    agency_code: String,
}

impl ReportGenerator {
    pub fn new(agency_name: impl Into<String>) -> Self {
        Self {
            agency_name: agency_name.into(),
            agency_code: DEFAULT_AGENCY_CODE.to_string(),
        }
    }

    pub fn with_agency_code(mut self, agency_code: impl Into<String>) -> Self {
        self.agency_code = agency_code.into();
        self
    }

    pub fn agency_code(&self) -> &str {
        &self.agency_code
    }

    pub fn generate(&self, cases: &[ReportCase], period: ReportPeriod) -> RSA911Report {
        let filtered: Vec<ReportCase> = cases
            .iter()
            .filter(|case| period.contains(case.service_start_date))
            .cloned()
            .collect();

        let generated_date = Utc::now();
        let report = RSA911Report {
            report_id: format!("{REPORT_ID_PREFIX}-{}", generated_date.timestamp_millis()),
            report_period: period,
            agency_name: self.agency_name.clone(),
            agency_code: self.agency_code.clone(),
            generated_date,
            summary: summary::summarize(&filtered),
            demographics: summary::demographics(&filtered),
            outcomes: summary::outcome_statistics(&filtered),
            services: summary::service_statistics(&filtered),
            costs: summary::cost_analysis(&filtered),
            cases: filtered,
        };

        debug!(
            report_id = %report.report_id,
            agency_code = %report.agency_code,
            supplied = cases.len(),
            included = report.summary.total_cases,
            "rsa-911 report generated"
        );

        report
    }
}

/// Aggregate the cases whose service start date falls inside `period`.
pub fn generate_rsa911_report(
    cases: &[ReportCase],
    period: ReportPeriod,
    agency_name: &str,
    agency_code: Option<&str>,
) -> RSA911Report {
    let generator = ReportGenerator::new(agency_name);
    let generator = match agency_code {
        Some(code) => generator.with_agency_code(code),
        None => generator,
    };
    generator.generate(cases, period)
}

/// Read a JSON array of case records.
pub fn load_cases<R: Read>(reader: R) -> serde_json::Result<Vec<ReportCase>> {
    serde_json::from_reader(reader)
}
