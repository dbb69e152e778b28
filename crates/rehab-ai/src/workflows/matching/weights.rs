use super::domain::ScoreBreakdown;

/// Rubric weights for combining sub-scores into the match score.
pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.4,
    accessibility: 0.3,
    certification: 0.2,
    preferences: 0.1,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub accessibility: f64,
    pub certification: f64,
    pub preferences: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.accessibility + self.certification + self.preferences
    }

    /// Sub-scores arrive already rounded; only the weighted sum is rounded here.
    pub fn combine(&self, breakdown: &ScoreBreakdown) -> u8 {
        let total = f64::from(breakdown.skills_score) * self.skills
            + f64::from(breakdown.accessibility_score) * self.accessibility
            + f64::from(breakdown.certification_score) * self.certification
            + f64::from(breakdown.preferences_score) * self.preferences;
        total.round().clamp(0.0, 100.0) as u8
    }
}
