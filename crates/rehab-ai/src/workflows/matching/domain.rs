use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Workplace accommodations advertised by a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityFeatures {
    pub asl_interpreter: bool,
    pub visual_alerts: bool,
    pub captioning: bool,
    pub accessible_workspace: bool,
    pub remote_options: bool,
    pub flexible_schedule: bool,
}

impl AccessibilityFeatures {
    pub const fn offers(&self, feature: AccessibilityFeature) -> bool {
        match feature {
            AccessibilityFeature::AslInterpreter => self.asl_interpreter,
            AccessibilityFeature::VisualAlerts => self.visual_alerts,
            AccessibilityFeature::Captioning => self.captioning,
            AccessibilityFeature::AccessibleWorkspace => self.accessible_workspace,
            AccessibilityFeature::RemoteOptions => self.remote_options,
            AccessibilityFeature::FlexibleSchedule => self.flexible_schedule,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibilityFeature {
    AslInterpreter,
    VisualAlerts,
    Captioning,
    AccessibleWorkspace,
    RemoteOptions,
    FlexibleSchedule,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certifications {
    pub deaf_friendly: bool,
    pub lgbtq_inclusive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub salary_range: SalaryRange,
    #[serde(default)]
    pub accessibility: AccessibilityFeatures,
    #[serde(default)]
    pub certifications: Certifications,
}

/// Optional client preferences; anything left unset never penalizes a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPreferences {
    pub deaf_friendly: bool,
    pub lgbtq_inclusive: bool,
    pub remote_work: bool,
    pub flexible_hours: bool,
    pub locations: Vec<String>,
    pub salary_range: Option<SalaryRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchingRequest {
    pub client_id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Years.
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub accessibility_needs: Vec<String>,
    #[serde(default)]
    pub preferences: MatchPreferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills_score: u8,
    pub accessibility_score: u8,
    pub certification_score: u8,
    pub preferences_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    pub job: Job,
    pub match_score: u8,
    pub breakdown: ScoreBreakdown,
    pub reasoning: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatches {
    pub matches: Vec<JobMatchResult>,
}
