use super::domain::{ReportCase, ReportPeriod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only RSA-911 aggregate for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RSA911Report {
    pub report_id: String,
    pub report_period: ReportPeriod,
    pub agency_name: String,
    pub agency_code: String,
    pub generated_date: DateTime<Utc>,
    pub summary: ReportSummary,
    pub demographics: Demographics,
    pub outcomes: OutcomeStatistics,
    pub services: ServiceStatistics,
    pub costs: CostAnalysis,
    pub cases: Vec<ReportCase>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_cases: usize,
    pub new_cases: usize,
    pub closed_cases: usize,
    pub active_cases: usize,
    pub successful_outcomes: usize,
    /// Percentage, one decimal place.
    pub success_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_distribution: BTreeMap<String, usize>,
    pub disability_types: BTreeMap<String, usize>,
    pub gender_distribution: BTreeMap<String, usize>,
    pub ethnicity_distribution: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeStatistics {
    pub total_closures: usize,
    pub employed: usize,
    pub education: usize,
    pub self_employed: usize,
    pub unsuccessful: usize,
    pub other: usize,
    pub average_wage: f64,
    pub average_hours_worked: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceTally {
    pub count: usize,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopService {
    pub service: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatistics {
    pub total_services: usize,
    pub total_hours: f64,
    pub services_by_type: BTreeMap<String, ServiceTally>,
    pub top_services: Vec<TopService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub total_costs: f64,
    pub average_cost_per_client: f64,
    pub costs_by_category: BTreeMap<String, f64>,
    pub cost_per_successful_outcome: f64,
}
