use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One client's service episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCase {
    pub case_id: String,
    pub client_id: String,
    pub client_age: i32,
    #[serde(default)]
    pub disability: Vec<String>,
    pub service_start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_end_date: Option<NaiveDate>,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CaseOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_details: Option<EmploymentDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub services_provided: Vec<ServiceRecord>,
    #[serde(default)]
    pub costs: Vec<CostRecord>,
}

impl ReportCase {
    pub fn is_closed(&self) -> bool {
        self.status == CaseStatus::Closed
    }

    pub fn has_successful_outcome(&self) -> bool {
        self.outcome.map(CaseOutcome::is_successful).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseOutcome {
    Employed,
    Education,
    SelfEmployed,
    Unsuccessful,
    Other,
}

impl CaseOutcome {
    /// Employment, self-employment, and further education all count as success.
    pub const fn is_successful(self) -> bool {
        matches!(self, Self::Employed | Self::SelfEmployed | Self::Education)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employed => "Employed",
            Self::Education => "Education",
            Self::SelfEmployed => "Self-Employed",
            Self::Unsuccessful => "Unsuccessful",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentDetails {
    pub employer: String,
    pub position: String,
    pub salary: f64,
    /// Weekly hours.
    pub hours: f64,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub service_type: String,
    pub service_date: NaiveDate,
    pub hours: f64,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub vendor: String,
}

/// Inclusive date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Fixed age bands used for RSA-911 demographics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    Teen,
    YoungAdult,
    TwentyFiveToThirtyFour,
    ThirtyFiveToFortyFour,
    FortyFiveToFiftyFour,
    FiftyFiveToSixtyFour,
    SixtyFivePlus,
}

impl AgeBand {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Teen,
            Self::YoungAdult,
            Self::TwentyFiveToThirtyFour,
            Self::ThirtyFiveToFortyFour,
            Self::FortyFiveToFiftyFour,
            Self::FiftyFiveToSixtyFour,
            Self::SixtyFivePlus,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Teen => "14-18",
            Self::YoungAdult => "19-24",
            Self::TwentyFiveToThirtyFour => "25-34",
            Self::ThirtyFiveToFortyFour => "35-44",
            Self::FortyFiveToFiftyFour => "45-54",
            Self::FiftyFiveToSixtyFour => "55-64",
            Self::SixtyFivePlus => "65+",
        }
    }

    /// Ages outside every named band, including those under 14, fall into `65+`.
    pub const fn for_age(age: i32) -> Self {
        match age {
            14..=18 => Self::Teen,
            19..=24 => Self::YoungAdult,
            25..=34 => Self::TwentyFiveToThirtyFour,
            35..=44 => Self::ThirtyFiveToFortyFour,
            45..=54 => Self::FortyFiveToFiftyFour,
            55..=64 => Self::FiftyFiveToSixtyFour,
            _ => Self::SixtyFivePlus,
        }
    }
}
