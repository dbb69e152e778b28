use super::domain::{ClientProfile, EligibilityAssessment, EmploymentStatus, Priority, Program};

const ADULT_MIN_AGE: i32 = 18;
const YOUTH_MIN_AGE: i32 = 14;
const YOUTH_MAX_AGE: i32 = 24;
const YOUTH_INCOME_LIMIT: f64 = 30_000.0;
const SNAP_INCOME_LIMIT: f64 = 20_000.0;
const TANF_INCOME_LIMIT: f64 = 15_000.0;

/// Static paperwork and turnaround metadata for a program.
#[derive(Debug)]
pub(crate) struct ProgramRequirements {
    pub required_documents: &'static [&'static str],
    pub optional_documents: &'static [&'static str],
    pub processing_days: u32,
}

const WIOA_ADULT: ProgramRequirements = ProgramRequirements {
    required_documents: &[
        "Government-issued ID",
        "Social Security Card",
        "Proof of residency",
        "Selective Service registration (if applicable)",
    ],
    optional_documents: &[
        "Employment history",
        "Educational transcripts",
        "Disability documentation",
    ],
    processing_days: 14,
};

const WIOA_YOUTH: ProgramRequirements = ProgramRequirements {
    required_documents: &[
        "Birth certificate or ID",
        "Social Security Card",
        "Proof of income (family)",
        "School enrollment status",
    ],
    optional_documents: &[
        "IEP or 504 plan",
        "Foster care documentation",
        "Homeless verification",
    ],
    processing_days: 10,
};

const WIOA_DISLOCATED_WORKER: ProgramRequirements = ProgramRequirements {
    required_documents: &[
        "Termination notice",
        "Government-issued ID",
        "Social Security Card",
        "Proof of residency",
        "Most recent pay stubs",
    ],
    optional_documents: &["Unemployment insurance documentation", "WARN notice"],
    processing_days: 14,
};

const VOCATIONAL_REHABILITATION: ProgramRequirements = ProgramRequirements {
    required_documents: &[
        "Government-issued ID",
        "Social Security Card",
        "Medical/disability documentation",
        "Proof of residency",
    ],
    optional_documents: &[
        "SSI/SSDI documentation",
        "IEP or 504 plan",
        "Employment history",
        "Educational transcripts",
    ],
    processing_days: 21,
};

const TRADE_ADJUSTMENT_ASSISTANCE: ProgramRequirements = ProgramRequirements {
    required_documents: &[
        "TAA certification letter",
        "Separation notice",
        "Government-issued ID",
        "Social Security Card",
    ],
    optional_documents: &["Pay stubs", "Employment verification"],
    processing_days: 30,
};

const SNAP_EMPLOYMENT_AND_TRAINING: ProgramRequirements = ProgramRequirements {
    required_documents: &[
        "SNAP eligibility documentation",
        "Government-issued ID",
        "Proof of income",
        "Proof of residency",
    ],
    optional_documents: &["Household composition documentation"],
    processing_days: 14,
};

const TANF: ProgramRequirements = ProgramRequirements {
    required_documents: &[
        "Government-issued ID",
        "Social Security Cards (all family members)",
        "Birth certificates (children)",
        "Proof of income",
        "Proof of residency",
    ],
    optional_documents: &["Child support documentation", "School enrollment records"],
    processing_days: 21,
};

impl Program {
    pub(crate) const fn requirements(self) -> &'static ProgramRequirements {
        match self {
            Self::WioaAdult => &WIOA_ADULT,
            Self::WioaYouth => &WIOA_YOUTH,
            Self::WioaDislocatedWorker => &WIOA_DISLOCATED_WORKER,
            Self::VocationalRehabilitation => &VOCATIONAL_REHABILITATION,
            Self::TradeAdjustmentAssistance => &TRADE_ADJUSTMENT_ASSISTANCE,
            Self::SnapEmploymentAndTraining => &SNAP_EMPLOYMENT_AND_TRAINING,
            Self::Tanf => &TANF,
        }
    }
}

/// Outcome of one rule before metadata is attached. Confidence is signed so
/// penalties can stack before clamping.
struct RuleVerdict {
    eligible: bool,
    confidence: i32,
    reasoning: Vec<String>,
    priority: Priority,
}

pub(crate) fn assess_program(program: Program, profile: &ClientProfile) -> EligibilityAssessment {
    let verdict = match program {
        Program::WioaAdult => wioa_adult(profile),
        Program::WioaYouth => wioa_youth(profile),
        Program::WioaDislocatedWorker => wioa_dislocated_worker(profile),
        Program::VocationalRehabilitation => vocational_rehabilitation(profile),
        Program::TradeAdjustmentAssistance => trade_adjustment_assistance(),
        Program::SnapEmploymentAndTraining => snap_employment_and_training(profile),
        Program::Tanf => tanf(profile),
    };

    let requirements = program.requirements();

    EligibilityAssessment {
        eligible: verdict.eligible,
        program,
        confidence: verdict.confidence.clamp(0, 100) as u8,
        reasoning: verdict.reasoning,
        priority: verdict.priority,
        required_documents: to_owned(requirements.required_documents),
        optional_documents: to_owned(requirements.optional_documents),
        estimated_processing_time: requirements.processing_days,
    }
}

fn to_owned(documents: &[&str]) -> Vec<String> {
    documents.iter().map(|doc| doc.to_string()).collect()
}

fn wioa_adult(profile: &ClientProfile) -> RuleVerdict {
    let mut reasoning = Vec::new();
    let (eligible, mut confidence) = if profile.age < ADULT_MIN_AGE {
        reasoning.push("Must be 18 years or older".to_string());
        (false, 0)
    } else {
        reasoning.push("Age requirement met (18+)".to_string());
        (true, 100)
    };

    if profile.state_resident {
        reasoning.push("State residency verified".to_string());
    } else {
        confidence -= 30;
        reasoning.push("State residency not confirmed".to_string());
    }

    let priority = if profile.disability.is_empty() {
        Priority::Medium
    } else {
        Priority::High
    };

    RuleVerdict {
        eligible,
        confidence,
        reasoning,
        priority,
    }
}

fn wioa_youth(profile: &ClientProfile) -> RuleVerdict {
    let mut reasoning = Vec::new();
    let in_range = (YOUTH_MIN_AGE..=YOUTH_MAX_AGE).contains(&profile.age);
    let (eligible, mut confidence) = if in_range {
        reasoning.push("Age requirement met (14-24)".to_string());
        (true, 100)
    } else {
        reasoning.push("Must be between 14-24 years old".to_string());
        (false, 0)
    };

    if profile.income > YOUTH_INCOME_LIMIT {
        confidence -= 40;
        reasoning.push("Income may exceed low-income threshold".to_string());
    } else {
        reasoning.push("Income within low-income range".to_string());
    }

    RuleVerdict {
        eligible,
        confidence,
        reasoning,
        priority: Priority::High,
    }
}

fn wioa_dislocated_worker(profile: &ClientProfile) -> RuleVerdict {
    let unemployed = profile.employment_status == EmploymentStatus::Unemployed;
    let reasoning = if unemployed {
        vec!["Unemployed status confirmed".to_string()]
    } else {
        vec!["Not currently unemployed".to_string()]
    };

    RuleVerdict {
        eligible: unemployed,
        confidence: if unemployed { 80 } else { 0 },
        reasoning,
        priority: Priority::Medium,
    }
}

fn vocational_rehabilitation(profile: &ClientProfile) -> RuleVerdict {
    let mut reasoning = Vec::new();
    let eligible = !profile.disability.is_empty();
    if eligible {
        reasoning.push(format!(
            "Documented disabilities: {}",
            profile.disability.join(", ")
        ));
    } else {
        reasoning.push("No documented disability on file".to_string());
    }

    if matches!(
        profile.employment_status,
        EmploymentStatus::Unemployed | EmploymentStatus::Underemployed
    ) {
        reasoning.push("Employment impediment documented".to_string());
    }

    let priority = if profile.social_security {
        Priority::High
    } else {
        Priority::Medium
    };

    RuleVerdict {
        eligible,
        confidence: if eligible { 100 } else { 0 },
        reasoning,
        priority,
    }
}

/// Employer-side TAA certification is not part of the profile, so this never
/// qualifies.
fn trade_adjustment_assistance() -> RuleVerdict {
    RuleVerdict {
        eligible: false,
        confidence: 0,
        reasoning: vec![
            "Requires TAA certification from employer".to_string(),
            "Must be separated from TAA-certified company".to_string(),
        ],
        priority: Priority::Low,
    }
}

fn snap_employment_and_training(profile: &ClientProfile) -> RuleVerdict {
    let mut confidence = 80;
    let reasoning = if profile.income > SNAP_INCOME_LIMIT {
        confidence -= 40;
        vec!["Income may exceed SNAP eligibility threshold".to_string()]
    } else {
        vec!["Income likely within SNAP eligibility".to_string()]
    };

    RuleVerdict {
        eligible: true,
        confidence,
        reasoning,
        priority: Priority::Low,
    }
}

fn tanf(profile: &ClientProfile) -> RuleVerdict {
    let mut confidence = 70;
    let reasoning = if profile.income > TANF_INCOME_LIMIT {
        confidence -= 40;
        vec!["Income may exceed TANF threshold".to_string()]
    } else {
        vec!["Income within TANF eligibility range".to_string()]
    };

    RuleVerdict {
        eligible: true,
        confidence,
        reasoning,
        priority: Priority::Medium,
    }
}
