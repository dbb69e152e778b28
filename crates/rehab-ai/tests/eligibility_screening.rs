use rehab_ai::workflows::eligibility::{
    screen_eligibility, screen_eligibility_payload, ClientProfile, EligibilityScreener,
    EmploymentStatus, Priority, Program,
};
use serde_json::json;

fn profile(age: i32) -> ClientProfile {
    ClientProfile {
        id: format!("client-{age}"),
        age,
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

#[test]
fn children_are_not_eligible_for_wioa_youth_or_adult() {
    for age in [-3, 0, 10, 13] {
        let result = EligibilityScreener::new().screen(&profile(age));
        for program in [Program::WioaYouth, Program::WioaAdult] {
            let assessment = result.assessment(program).expect("program assessed");
            assert!(!assessment.eligible, "{} at age {age}", program.label());
        }
    }
}

#[test]
fn every_assessment_is_bounded_and_documented() {
    let mut profiles = vec![profile(16), profile(30), profile(70), profile(-5)];
    let mut wealthy = profile(45);
    wealthy.income = 250_000.0;
    wealthy.state_resident = false;
    wealthy.employment_status = EmploymentStatus::Employed;
    profiles.push(wealthy);

    for client in &profiles {
        let result = EligibilityScreener::new().screen(client);
        assert_eq!(result.assessments.len(), 7);
        for assessment in &result.assessments {
            assert!(assessment.confidence <= 100);
            assert!(!assessment.required_documents.is_empty());
        }
        if let Some(program) = result.recommended_program {
            let recommended = result.assessment(program).expect("recommended assessed");
            assert!(recommended.eligible);
        }
    }
}

#[test]
fn deaf_client_on_ssi_is_high_priority_for_vr() {
    let mut client = profile(28);
    client.disability = vec!["Deaf".to_string(), "Visual Impairment".to_string()];
    client.social_security = true;

    let response = screen_eligibility(&client);
    assert!(response.success);
    assert!(response.request_id.starts_with("eligibility-"));

    let result = response.data.expect("screening result");
    let vr = result
        .assessment(Program::VocationalRehabilitation)
        .expect("vr assessed");
    assert!(vr.eligible);
    assert_eq!(vr.priority, Priority::High);
    assert_eq!(result.overall_priority, Priority::High);
}

#[test]
fn json_payload_screens_like_typed_profile() {
    let payload = json!({
        "id": "client-json",
        "age": 30,
        "disability": [],
        "employmentStatus": "unemployed",
        "education": "GED",
        "income": 20000,
        "veteranStatus": false,
        "socialSecurity": false,
        "stateResident": true,
        "state": "TX"
    });

    let response = screen_eligibility_payload(payload);
    assert!(response.success);
    let result = response.data.expect("screening result");
    assert!(result.eligible_programs().any(|p| p == Program::WioaAdult));
    assert_eq!(result.client_id, "client-json");
}

#[test]
fn missing_payload_becomes_error_envelope() {
    let response = screen_eligibility_payload(serde_json::Value::Null);
    assert!(!response.success);
    assert_eq!(response.error_code(), Some("ELIGIBILITY_SCREENING_ERROR"));

    let response = screen_eligibility_payload(json!({ "age": "thirty" }));
    assert_eq!(response.error_code(), Some("ELIGIBILITY_SCREENING_ERROR"));
}

#[test]
fn repeated_screening_yields_identical_results() {
    let mut client = profile(34);
    client.disability = vec!["Hard of Hearing".to_string()];
    client.veteran_status = true;

    let first = screen_eligibility(&client);
    let mut second = screen_eligibility(&client);

    second.request_id = first.request_id.clone();
    second.timestamp = first.timestamp;
    assert_eq!(first, second);
}
