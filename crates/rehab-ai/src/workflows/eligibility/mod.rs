//! Benefit-program eligibility screening.
//!
//! A profile is run through every program rule in [`Program::ordered`]; the
//! rules never fail, so odd inputs such as a negative age simply produce
//! ineligible verdicts. Only a payload that cannot be read as a profile is
//! reported as an error.

pub mod domain;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    ClientProfile, EligibilityAssessment, EligibilityScreeningResult, EmploymentStatus, Priority,
    Program,
};

use crate::envelope::{EnvelopeError, ServiceResponse};
use tracing::debug;

pub const REQUEST_PREFIX: &str = "eligibility";
pub const ERROR_CODE: &str = "ELIGIBILITY_SCREENING_ERROR";

/// Stateless screener applying the fixed program rule table.
#[derive(Debug, Default, Clone, Copy)]
pub struct EligibilityScreener;

impl EligibilityScreener {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, program: Program, profile: &ClientProfile) -> EligibilityAssessment {
        rules::assess_program(program, profile)
    }

    pub fn screen(&self, profile: &ClientProfile) -> EligibilityScreeningResult {
        let assessments: Vec<EligibilityAssessment> = Program::ordered()
            .into_iter()
            .map(|program| self.assess(program, profile))
            .collect();

        let eligible: Vec<&EligibilityAssessment> = assessments
            .iter()
            .filter(|assessment| assessment.eligible)
            .collect();

        let recommended_program = policy::recommend(&eligible);
        let overall_priority = policy::overall_priority(&eligible);
        let next_steps = policy::next_steps(&eligible, recommended_program);

        debug!(
            client_id = %profile.id,
            eligible = eligible.len(),
            recommended = ?recommended_program,
            priority = overall_priority.label(),
            "eligibility screening complete"
        );

        EligibilityScreeningResult {
            client_id: profile.id.clone(),
            assessments,
            recommended_program,
            overall_priority,
            next_steps,
        }
    }
}

/// Error raised when a screening payload cannot be turned into a profile.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("client profile is required")]
    MissingProfile,
    #[error("client profile could not be read: {0}")]
    MalformedProfile(#[from] serde_json::Error),
}

impl EnvelopeError for ScreeningError {
    fn code(&self) -> &'static str {
        ERROR_CODE
    }
}

impl ClientProfile {
    pub fn from_value(value: serde_json::Value) -> Result<Self, ScreeningError> {
        if value.is_null() {
            return Err(ScreeningError::MissingProfile);
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Screen a typed profile. Always succeeds.
pub fn screen_eligibility(profile: &ClientProfile) -> ServiceResponse<EligibilityScreeningResult> {
    ServiceResponse::ok(REQUEST_PREFIX, EligibilityScreener::new().screen(profile))
}

/// Screen an untyped request body, reporting unreadable profiles through the envelope.
pub fn screen_eligibility_payload(
    payload: serde_json::Value,
) -> ServiceResponse<EligibilityScreeningResult> {
    let result = ClientProfile::from_value(payload)
        .map(|profile| EligibilityScreener::new().screen(&profile));
    ServiceResponse::from_result(REQUEST_PREFIX, result)
}
