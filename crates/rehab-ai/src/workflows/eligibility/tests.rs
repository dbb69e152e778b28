use super::*;
use serde_json::json;

fn profile() -> ClientProfile {
    ClientProfile {
        id: "client-001".to_string(),
        age: 30,
        disability: Vec::new(),
        employment_status: EmploymentStatus::Unemployed,
        education: "High School".to_string(),
        income: 20_000.0,
        veteran_status: false,
        social_security: false,
        state_resident: true,
        state: "TX".to_string(),
    }
}

fn assessment(result: &EligibilityScreeningResult, program: Program) -> &EligibilityAssessment {
    result
        .assessment(program)
        .unwrap_or_else(|| panic!("{} assessed", program.label()))
}

#[test]
fn adult_profile_qualifies_for_wioa_adult() {
    let result = EligibilityScreener::new().screen(&profile());

    let adult = assessment(&result, Program::WioaAdult);
    assert!(adult.eligible);
    assert_eq!(adult.confidence, 100);
    assert_eq!(adult.priority, Priority::Medium);
    assert_eq!(adult.estimated_processing_time, 14);
    assert_eq!(result.client_id, "client-001");
}

#[test]
fn assessments_follow_fixed_program_order() {
    let result = EligibilityScreener::new().screen(&profile());
    let programs: Vec<Program> = result.assessments.iter().map(|a| a.program).collect();
    assert_eq!(programs, Program::ordered().to_vec());
}

#[test]
fn non_resident_adult_loses_confidence() {
    let mut client = profile();
    client.state_resident = false;

    let result = EligibilityScreener::new().screen(&client);
    let adult = assessment(&result, Program::WioaAdult);

    assert!(adult.eligible);
    assert_eq!(adult.confidence, 70);
    assert!(adult
        .reasoning
        .iter()
        .any(|note| note == "State residency not confirmed"));
}

#[test]
fn minors_under_fourteen_fail_adult_and_youth_rules() {
    let mut client = profile();
    client.age = 12;
    client.state_resident = false;
    client.income = 45_000.0;

    let result = EligibilityScreener::new().screen(&client);

    let adult = assessment(&result, Program::WioaAdult);
    let youth = assessment(&result, Program::WioaYouth);
    assert!(!adult.eligible);
    assert!(!youth.eligible);
    assert_eq!(adult.confidence, 0, "penalties never push below zero");
    assert_eq!(youth.confidence, 0);
}

#[test]
fn negative_age_is_absorbed_into_rule_outputs() {
    let mut client = profile();
    client.age = -5;

    let result = EligibilityScreener::new().screen(&client);

    assert_eq!(result.assessments.len(), 7);
    assert!(!assessment(&result, Program::WioaAdult).eligible);
    assert!(!assessment(&result, Program::WioaYouth).eligible);
}

#[test]
fn youth_income_above_threshold_reduces_confidence() {
    let mut client = profile();
    client.age = 20;
    client.income = 35_000.0;

    let result = EligibilityScreener::new().screen(&client);
    let youth = assessment(&result, Program::WioaYouth);

    assert!(youth.eligible);
    assert_eq!(youth.confidence, 60);
    assert_eq!(youth.priority, Priority::High);
}

#[test]
fn dislocated_worker_requires_unemployment() {
    let mut client = profile();
    client.employment_status = EmploymentStatus::Underemployed;

    let result = EligibilityScreener::new().screen(&client);
    let worker = assessment(&result, Program::WioaDislocatedWorker);

    assert!(!worker.eligible);
    assert_eq!(worker.confidence, 0);
    assert_eq!(worker.priority, Priority::Medium);
}

#[test]
fn vocational_rehabilitation_high_priority_with_social_security() {
    let mut client = profile();
    client.age = 28;
    client.disability = vec!["Deaf".to_string(), "Visual Impairment".to_string()];
    client.social_security = true;

    let result = EligibilityScreener::new().screen(&client);
    let vr = assessment(&result, Program::VocationalRehabilitation);

    assert!(vr.eligible);
    assert_eq!(vr.confidence, 100);
    assert_eq!(vr.priority, Priority::High);
    assert!(vr
        .reasoning
        .iter()
        .any(|note| note == "Documented disabilities: Deaf, Visual Impairment"));
    assert!(vr
        .reasoning
        .iter()
        .any(|note| note == "Employment impediment documented"));
}

#[test]
fn trade_adjustment_is_never_eligible() {
    let result = EligibilityScreener::new().screen(&profile());
    let taa = assessment(&result, Program::TradeAdjustmentAssistance);

    assert!(!taa.eligible);
    assert_eq!(taa.confidence, 0);
    assert_eq!(taa.priority, Priority::Low);
    assert_eq!(taa.reasoning.len(), 2);
    assert_eq!(taa.estimated_processing_time, 30);
}

#[test]
fn snap_and_tanf_confidence_tracks_income() {
    let mut client = profile();
    client.income = 10_000.0;
    let low = EligibilityScreener::new().screen(&client);
    assert_eq!(assessment(&low, Program::SnapEmploymentAndTraining).confidence, 80);
    assert_eq!(assessment(&low, Program::Tanf).confidence, 70);

    client.income = 25_000.0;
    let high = EligibilityScreener::new().screen(&client);
    assert_eq!(assessment(&high, Program::SnapEmploymentAndTraining).confidence, 40);
    assert_eq!(assessment(&high, Program::Tanf).confidence, 30);
    assert!(assessment(&high, Program::Tanf).eligible);
}

#[test]
fn every_program_lists_required_documents() {
    let result = EligibilityScreener::new().screen(&profile());
    for assessment in &result.assessments {
        assert!(
            !assessment.required_documents.is_empty(),
            "{} should require documents",
            assessment.program.label()
        );
        assert!(assessment.confidence <= 100);
    }
}

#[test]
fn recommendation_prefers_first_of_tied_confidence() {
    let mut client = profile();
    client.disability = vec!["Deaf".to_string()];

    let result = EligibilityScreener::new().screen(&client);

    // WIOA Adult and Vocational Rehabilitation both sit at 100.
    assert_eq!(result.recommended_program, Some(Program::WioaAdult));
    assert_eq!(result.overall_priority, Priority::High);
}

#[test]
fn next_steps_describe_recommended_program() {
    let result = EligibilityScreener::new().screen(&profile());

    assert_eq!(result.recommended_program, Some(Program::WioaAdult));
    assert_eq!(
        result.next_steps,
        vec![
            "Apply for WIOA Adult program".to_string(),
            concat!(
                "Gather required documents: ",
                "Government-issued ID, Social Security Card, Proof of residency"
            )
            .to_string(),
            "Schedule intake appointment".to_string(),
            "Expected processing time: 14 days".to_string(),
            "Consider applying to 4 eligible programs".to_string(),
        ]
    );
}

#[test]
fn recommended_program_is_always_eligible() {
    let ages = [-1, 10, 16, 22, 40, 70];
    for age in ages {
        let mut client = profile();
        client.age = age;
        client.employment_status = EmploymentStatus::Employed;
        let result = EligibilityScreener::new().screen(&client);
        if let Some(program) = result.recommended_program {
            assert!(assessment(&result, program).eligible);
        }
    }
}

#[test]
fn payload_null_reports_screening_error() {
    let response = screen_eligibility_payload(serde_json::Value::Null);

    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error_code(), Some(ERROR_CODE));
    assert!(response.request_id.starts_with("eligibility-"));
}

#[test]
fn payload_with_wrong_shape_reports_screening_error() {
    let response = screen_eligibility_payload(json!({ "id": "client-9", "age": "thirty" }));

    assert!(!response.success);
    assert_eq!(response.error_code(), Some("ELIGIBILITY_SCREENING_ERROR"));
}

#[test]
fn payload_decodes_camel_case_profile() {
    let response = screen_eligibility_payload(json!({
        "id": "client-2",
        "age": 28,
        "disability": ["Deaf"],
        "employmentStatus": "unemployed",
        "education": "Bachelor's",
        "income": 18000,
        "veteranStatus": false,
        "socialSecurity": true,
        "stateResident": true,
        "state": "TX"
    }));

    assert!(response.success);
    let data = response.data.expect("screening result");
    assert_eq!(data.client_id, "client-2");
    assert_eq!(
        data.eligible_programs().collect::<Vec<_>>(),
        vec![
            Program::WioaAdult,
            Program::WioaDislocatedWorker,
            Program::VocationalRehabilitation,
            Program::SnapEmploymentAndTraining,
            Program::Tanf,
        ]
    );
}

#[test]
fn screening_result_serializes_program_names_and_priorities() {
    let response = screen_eligibility(&profile());
    let json = serde_json::to_value(&response).expect("serializes");

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["recommendedProgram"], "WIOA Adult");
    assert_eq!(json["data"]["overallPriority"], "medium");
    assert_eq!(json["data"]["assessments"][5]["program"], "SNAP E&T");
}
