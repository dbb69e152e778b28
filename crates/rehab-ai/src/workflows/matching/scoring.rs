use super::domain::{
    AccessibilityFeature, AccessibilityFeatures, Certifications, Job, MatchPreferences,
};

/// Need phrases recognised in free-form client input, in lookup order.
const ACCESSIBILITY_NEEDS: [(&str, AccessibilityFeature); 6] = [
    ("asl interpreter", AccessibilityFeature::AslInterpreter),
    ("visual alerts", AccessibilityFeature::VisualAlerts),
    ("captioning", AccessibilityFeature::Captioning),
    ("accessible workspace", AccessibilityFeature::AccessibleWorkspace),
    ("remote work", AccessibilityFeature::RemoteOptions),
    ("flexible hours", AccessibilityFeature::FlexibleSchedule),
];

const CERTIFICATION_PENALTY: i32 = 50;
const LOCATION_PENALTY: i32 = 30;
const SALARY_PENALTY: i32 = 40;

fn ratio_score(matched: usize, total: usize) -> u8 {
    ((matched as f64 / total as f64) * 100.0).round() as u8
}

/// Loose containment in either direction, so "react" and "react native" match.
fn overlaps(left: &str, right: &str) -> bool {
    left.contains(right) || right.contains(left)
}

pub(crate) fn skills_score(
    client_skills: &[String],
    required_skills: &[String],
    reasoning: &mut Vec<String>,
) -> u8 {
    if required_skills.is_empty() {
        reasoning.push("No specific skills required".to_string());
        return 100;
    }

    let client: Vec<String> = client_skills.iter().map(|s| s.to_lowercase()).collect();
    let matched = required_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .filter(|skill| client.iter().any(|candidate| overlaps(candidate, skill)))
        .count();

    let score = ratio_score(matched, required_skills.len());
    reasoning.push(format!(
        "Skills match: {matched}/{} ({score}%)",
        required_skills.len()
    ));
    score
}

pub(crate) fn accessibility_feature_for(need: &str) -> Option<AccessibilityFeature> {
    let need = need.to_lowercase();
    ACCESSIBILITY_NEEDS
        .iter()
        .find(|(phrase, _)| overlaps(&need, phrase))
        .map(|(_, feature)| *feature)
}

pub(crate) fn accessibility_score(
    needs: &[String],
    features: &AccessibilityFeatures,
    reasoning: &mut Vec<String>,
) -> u8 {
    if needs.is_empty() {
        reasoning.push("No specific accessibility needs".to_string());
        return 100;
    }

    let met = needs
        .iter()
        .filter(|need| {
            accessibility_feature_for(need)
                .map(|feature| features.offers(feature))
                .unwrap_or(false)
        })
        .count();

    let score = ratio_score(met, needs.len());
    reasoning.push(format!(
        "Accessibility match: {met}/{} needs met ({score}%)",
        needs.len()
    ));
    score
}

pub(crate) fn certification_score(
    preferences: &MatchPreferences,
    certifications: &Certifications,
    reasoning: &mut Vec<String>,
) -> u8 {
    let mut score = 100;
    let mut details = Vec::new();

    if preferences.deaf_friendly {
        if certifications.deaf_friendly {
            details.push("Deaf-friendly certified ✓");
        } else {
            score -= CERTIFICATION_PENALTY;
            details.push("Not Deaf-friendly certified");
        }
    }

    if preferences.lgbtq_inclusive {
        if certifications.lgbtq_inclusive {
            details.push("LGBTQ+ inclusive certified ✓");
        } else {
            score -= CERTIFICATION_PENALTY;
            details.push("Not LGBTQ+ inclusive certified");
        }
    }

    let score = score.max(0);
    if !details.is_empty() {
        reasoning.push(format!(
            "Certifications: {} ({score}%)",
            details.join(", ")
        ));
    }
    score as u8
}

pub(crate) fn preferences_score(
    preferences: &MatchPreferences,
    job: &Job,
    reasoning: &mut Vec<String>,
) -> u8 {
    let mut score = 100;
    let mut details = Vec::new();

    if !preferences.locations.is_empty() {
        let job_location = job.location.to_lowercase();
        let location_match = preferences
            .locations
            .iter()
            .any(|location| job_location.contains(&location.to_lowercase()));

        if location_match {
            details.push("Location match ✓");
        } else if !job.accessibility.remote_options {
            score -= LOCATION_PENALTY;
            details.push("Location mismatch");
        }
    }

    if let Some(expected) = preferences.salary_range {
        if job.salary_range.max < expected.min {
            score -= SALARY_PENALTY;
            details.push("Salary below minimum");
        } else if job.salary_range.min >= expected.min {
            details.push("Salary meets expectations ✓");
        }
    }

    if preferences.remote_work && job.accessibility.remote_options {
        details.push("Remote work available ✓");
    }

    if preferences.flexible_hours && job.accessibility.flexible_schedule {
        details.push("Flexible schedule available ✓");
    }

    let score = score.max(0);
    if !details.is_empty() {
        reasoning.push(format!("Preferences: {} ({score}%)", details.join(", ")));
    }
    score as u8
}
