use serde::{Deserialize, Serialize};

/// Client snapshot supplied to a screening call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub id: String,
    pub age: i32,
    #[serde(default)]
    pub disability: Vec<String>,
    pub employment_status: EmploymentStatus,
    #[serde(default)]
    pub education: String,
    pub income: f64,
    #[serde(default)]
    pub veteran_status: bool,
    #[serde(default)]
    pub social_security: bool,
    #[serde(default)]
    pub state_resident: bool,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Unemployed,
    Underemployed,
    Employed,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unemployed => "Unemployed",
            Self::Underemployed => "Underemployed",
            Self::Employed => "Employed",
        }
    }
}

/// Benefit programs covered by the screener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "WIOA Adult")]
    WioaAdult,
    #[serde(rename = "WIOA Youth")]
    WioaYouth,
    #[serde(rename = "WIOA Dislocated Worker")]
    WioaDislocatedWorker,
    #[serde(rename = "Vocational Rehabilitation")]
    VocationalRehabilitation,
    #[serde(rename = "Trade Adjustment Assistance")]
    TradeAdjustmentAssistance,
    #[serde(rename = "SNAP E&T")]
    SnapEmploymentAndTraining,
    #[serde(rename = "TANF")]
    Tanf,
}

impl Program {
    /// Evaluation order; recommendation ties resolve to the earliest entry.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::WioaAdult,
            Self::WioaYouth,
            Self::WioaDislocatedWorker,
            Self::VocationalRehabilitation,
            Self::TradeAdjustmentAssistance,
            Self::SnapEmploymentAndTraining,
            Self::Tanf,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WioaAdult => "WIOA Adult",
            Self::WioaYouth => "WIOA Youth",
            Self::WioaDislocatedWorker => "WIOA Dislocated Worker",
            Self::VocationalRehabilitation => "Vocational Rehabilitation",
            Self::TradeAdjustmentAssistance => "Trade Adjustment Assistance",
            Self::SnapEmploymentAndTraining => "SNAP E&T",
            Self::Tanf => "TANF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Verdict for a single program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityAssessment {
    pub eligible: bool,
    pub program: Program,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    pub priority: Priority,
    pub required_documents: Vec<String>,
    pub optional_documents: Vec<String>,
    /// Days.
    pub estimated_processing_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityScreeningResult {
    pub client_id: String,
    pub assessments: Vec<EligibilityAssessment>,
    pub recommended_program: Option<Program>,
    pub overall_priority: Priority,
    pub next_steps: Vec<String>,
}

impl EligibilityScreeningResult {
    pub fn assessment(&self, program: Program) -> Option<&EligibilityAssessment> {
        self.assessments
            .iter()
            .find(|assessment| assessment.program == program)
    }

    pub fn eligible_programs(&self) -> impl Iterator<Item = Program> + '_ {
        self.assessments
            .iter()
            .filter(|assessment| assessment.eligible)
            .map(|assessment| assessment.program)
    }
}
