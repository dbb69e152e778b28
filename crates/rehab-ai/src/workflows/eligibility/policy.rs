use super::domain::{EligibilityAssessment, Priority, Program};

const DOCUMENTS_IN_NEXT_STEP: usize = 3;

/// Highest-confidence eligible program; the first one wins a tie.
pub(crate) fn recommend(eligible: &[&EligibilityAssessment]) -> Option<Program> {
    eligible
        .iter()
        .copied()
        .reduce(|best, current| {
            if current.confidence > best.confidence {
                current
            } else {
                best
            }
        })
        .map(|assessment| assessment.program)
}

pub(crate) fn overall_priority(eligible: &[&EligibilityAssessment]) -> Priority {
    eligible
        .iter()
        .map(|assessment| assessment.priority)
        .max()
        .unwrap_or(Priority::Low)
}

pub(crate) fn next_steps(
    eligible: &[&EligibilityAssessment],
    recommended: Option<Program>,
) -> Vec<String> {
    if eligible.is_empty() {
        return vec![
            "Schedule consultation to explore alternative programs".to_string(),
            "Review documentation requirements for potential future eligibility".to_string(),
        ];
    }

    let mut steps = Vec::new();

    let recommended = recommended.and_then(|program| {
        eligible
            .iter()
            .find(|assessment| assessment.program == program)
    });

    if let Some(assessment) = recommended {
        let documents = assessment
            .required_documents
            .iter()
            .take(DOCUMENTS_IN_NEXT_STEP)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        steps.push(format!("Apply for {} program", assessment.program.label()));
        steps.push(format!("Gather required documents: {documents}"));
        steps.push("Schedule intake appointment".to_string());
        steps.push(format!(
            "Expected processing time: {} days",
            assessment.estimated_processing_time
        ));
    }

    if eligible.len() > 1 {
        steps.push(format!(
            "Consider applying to {} eligible programs",
            eligible.len()
        ));
    }

    steps
}
