//! Accessibility-aware job matching.

pub mod domain;
mod scoring;
mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    AccessibilityFeature, AccessibilityFeatures, Certifications, Job, JobMatchResult, JobMatches,
    JobMatchingRequest, MatchPreferences, SalaryRange, ScoreBreakdown,
};
pub use weights::{MatchWeights, MATCH_WEIGHTS};

use crate::envelope::{EnvelopeError, ServiceResponse};
use tracing::debug;

pub const REQUEST_PREFIX: &str = "job-match";
pub const ERROR_CODE: &str = "JOB_MATCHING_ERROR";
pub const DEFAULT_MIN_SCORE: u8 = 80;

/// Stateless matcher holding only the cut-off threshold.
#[derive(Debug, Clone, Copy)]
pub struct JobMatcher {
    min_score: u8,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}

impl JobMatcher {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Matcher for a caller-supplied threshold. Scores are whole numbers, so a
    /// fractional threshold rounds up. `None` when no score can reach it.
    pub fn for_threshold(min_score: f64) -> Option<Self> {
        if min_score.is_nan() || min_score > 100.0 {
            return None;
        }
        Some(Self::new(min_score.ceil().max(0.0) as u8))
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Score one posting without applying the threshold.
    pub fn score(&self, request: &JobMatchingRequest, job: &Job) -> JobMatchResult {
        let mut reasoning = Vec::new();

        let breakdown = ScoreBreakdown {
            skills_score: scoring::skills_score(
                &request.skills,
                &job.required_skills,
                &mut reasoning,
            ),
            accessibility_score: scoring::accessibility_score(
                &request.accessibility_needs,
                &job.accessibility,
                &mut reasoning,
            ),
            certification_score: scoring::certification_score(
                &request.preferences,
                &job.certifications,
                &mut reasoning,
            ),
            preferences_score: scoring::preferences_score(
                &request.preferences,
                job,
                &mut reasoning,
            ),
        };

        JobMatchResult {
            job: job.clone(),
            match_score: MATCH_WEIGHTS.combine(&breakdown),
            breakdown,
            reasoning,
        }
    }

    /// Score every posting, keep those at or above the threshold, best first.
    /// Equal scores keep their input order.
    pub fn find_matches(&self, request: &JobMatchingRequest, jobs: &[Job]) -> JobMatches {
        let mut matches: Vec<JobMatchResult> = jobs
            .iter()
            .map(|job| self.score(request, job))
            .filter(|result| result.match_score >= self.min_score)
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!(
            client_id = %request.client_id,
            candidates = jobs.len(),
            matched = matches.len(),
            min_score = self.min_score,
            "job matching complete"
        );

        JobMatches { matches }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    #[error("job matching request is required")]
    MissingRequest,
    #[error("job matching request could not be read: {0}")]
    MalformedRequest(#[from] serde_json::Error),
}

impl EnvelopeError for MatchingError {
    fn code(&self) -> &'static str {
        ERROR_CODE
    }
}

impl JobMatchingRequest {
    pub fn from_value(value: serde_json::Value) -> Result<Self, MatchingError> {
        if value.is_null() {
            return Err(MatchingError::MissingRequest);
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn matches_for(request: &JobMatchingRequest, jobs: &[Job], min_score: f64) -> JobMatches {
    JobMatcher::for_threshold(min_score)
        .map(|matcher| matcher.find_matches(request, jobs))
        .unwrap_or_default()
}

pub fn find_matching_jobs(
    request: &JobMatchingRequest,
    jobs: &[Job],
    min_score: f64,
) -> ServiceResponse<JobMatches> {
    ServiceResponse::ok(REQUEST_PREFIX, matches_for(request, jobs, min_score))
}

pub fn find_matching_jobs_payload(
    payload: serde_json::Value,
    jobs: &[Job],
    min_score: f64,
) -> ServiceResponse<JobMatches> {
    let result = JobMatchingRequest::from_value(payload)
        .map(|request| matches_for(&request, jobs, min_score));
    ServiceResponse::from_result(REQUEST_PREFIX, result)
}
