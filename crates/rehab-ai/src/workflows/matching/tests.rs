use super::*;
use serde_json::json;

fn job(id: &str, skills: &[&str]) -> Job {
    Job {
        id: id.to_string(),
        title: "Software Developer".to_string(),
        company: "Tech Corp".to_string(),
        location: "Austin, TX".to_string(),
        description: "Build accessible web applications".to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        salary_range: SalaryRange {
            min: 60_000.0,
            max: 90_000.0,
        },
        accessibility: AccessibilityFeatures {
            asl_interpreter: true,
            visual_alerts: true,
            captioning: true,
            accessible_workspace: true,
            remote_options: false,
            flexible_schedule: true,
        },
        certifications: Certifications {
            deaf_friendly: true,
            lgbtq_inclusive: true,
        },
    }
}

fn request() -> JobMatchingRequest {
    JobMatchingRequest {
        client_id: "client-001".to_string(),
        skills: vec!["JavaScript".to_string(), "React".to_string()],
        experience: 3.0,
        education: "Bachelor's Degree".to_string(),
        accessibility_needs: vec!["ASL interpreter".to_string(), "Captioning".to_string()],
        preferences: MatchPreferences {
            deaf_friendly: true,
            lgbtq_inclusive: true,
            locations: vec!["Austin".to_string()],
            salary_range: Some(SalaryRange {
                min: 55_000.0,
                max: 85_000.0,
            }),
            ..MatchPreferences::default()
        },
    }
}

#[test]
fn perfect_fit_scores_one_hundred() {
    let result = JobMatcher::default().score(&request(), &job("job-1", &["JavaScript", "React"]));

    assert_eq!(result.match_score, 100);
    assert_eq!(
        result.breakdown,
        ScoreBreakdown {
            skills_score: 100,
            accessibility_score: 100,
            certification_score: 100,
            preferences_score: 100,
        }
    );
    let preferences = "Preferences: Location match ✓, Salary meets expectations ✓";
    assert!(result
        .reasoning
        .iter()
        .any(|note| note.starts_with(preferences)));
}

#[test]
fn match_score_is_weighted_sum_of_rounded_parts() {
    let mut posting = job("job-2", &["JavaScript", "Python", "SQL"]);
    posting.certifications.lgbtq_inclusive = false;
    posting.location = "Dallas, TX".to_string();

    let result = JobMatcher::default().score(&request(), &posting);

    assert_eq!(result.breakdown.skills_score, 33);
    assert_eq!(result.breakdown.accessibility_score, 100);
    assert_eq!(result.breakdown.certification_score, 50);
    assert_eq!(result.breakdown.preferences_score, 70);
    // 33 * 0.4 + 100 * 0.3 + 50 * 0.2 + 70 * 0.1 = 60.2
    assert_eq!(result.match_score, 60);
}

#[test]
fn remote_jobs_are_not_penalized_for_location() {
    let mut posting = job("job-3", &["React"]);
    posting.location = "Seattle, WA".to_string();
    posting.accessibility.remote_options = true;

    let result = JobMatcher::default().score(&request(), &posting);
    assert_eq!(result.breakdown.preferences_score, 100);
}

#[test]
fn salary_below_expectation_costs_forty_points() {
    let mut posting = job("job-4", &["React"]);
    posting.salary_range = SalaryRange {
        min: 30_000.0,
        max: 40_000.0,
    };
    posting.location = "Houston, TX".to_string();

    let result = JobMatcher::default().score(&request(), &posting);
    assert_eq!(result.breakdown.preferences_score, 30);
    assert!(result
        .reasoning
        .iter()
        .any(|note| note.contains("Location mismatch") && note.contains("Salary below minimum")));
}

#[test]
fn empty_client_profile_scores_all_components_fully() {
    let bare = JobMatchingRequest {
        client_id: "client-002".to_string(),
        skills: Vec::new(),
        experience: 0.0,
        education: String::new(),
        accessibility_needs: Vec::new(),
        preferences: MatchPreferences::default(),
    };

    let result = JobMatcher::default().score(&bare, &job("job-5", &[]));
    assert_eq!(result.match_score, 100);
}

#[test]
fn find_matches_filters_and_sorts_descending() {
    let mut weak = job("weak", &["Rust", "Go", "Kotlin"]);
    weak.certifications = Certifications::default();
    let strong = job("strong", &["JavaScript"]);
    let partial = job("partial", &["JavaScript", "SQL"]);

    let jobs = vec![weak, partial, strong];
    let matches = JobMatcher::new(50).find_matches(&request(), &jobs).matches;

    let ids: Vec<&str> = matches.iter().map(|m| m.job.id.as_str()).collect();
    assert_eq!(ids, vec!["strong", "partial"]);
    assert!(matches.iter().all(|m| m.match_score >= 50));
    assert!(matches
        .windows(2)
        .all(|pair| pair[0].match_score >= pair[1].match_score));
}

#[test]
fn equal_scores_keep_input_order() {
    let jobs = vec![
        job("first", &["JavaScript"]),
        job("second", &["React"]),
        job("third", &["JavaScript", "React"]),
    ];

    let matches = JobMatcher::new(0).find_matches(&request(), &jobs).matches;
    let ids: Vec<&str> = matches.iter().map(|m| m.job.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn default_threshold_is_eighty() {
    assert_eq!(JobMatcher::default().min_score(), 80);
}

#[test]
fn fractional_threshold_rounds_up_to_whole_score() {
    assert_eq!(JobMatcher::for_threshold(70.5).map(|m| m.min_score()), Some(71));
    assert_eq!(JobMatcher::for_threshold(80.0).map(|m| m.min_score()), Some(80));
    assert_eq!(JobMatcher::for_threshold(-5.0).map(|m| m.min_score()), Some(0));
    assert!(JobMatcher::for_threshold(100.5).is_none());
    assert!(JobMatcher::for_threshold(f64::NAN).is_none());
}

#[test]
fn unreachable_threshold_matches_nothing() {
    let jobs = vec![job("job-7", &["JavaScript", "React"])];
    let response = find_matching_jobs(&request(), &jobs, 100.5);
    assert!(response.success);
    assert!(response.data.expect("matches").matches.is_empty());

    let response = find_matching_jobs(&request(), &jobs, 99.5);
    assert_eq!(response.data.expect("matches").matches.len(), 1);
}

#[test]
fn breakdown_fields_stay_within_bounds() {
    let postings = vec![
        job("a", &[]),
        job("b", &["COBOL"]),
        job("c", &["javascript", "react", "node", "graphql"]),
    ];
    for posting in &postings {
        let result = JobMatcher::default().score(&request(), posting);
        let b = result.breakdown;
        for part in [
            b.skills_score,
            b.accessibility_score,
            b.certification_score,
            b.preferences_score,
        ] {
            assert!(part <= 100);
        }
        let expected = (f64::from(b.skills_score) * 0.4
            + f64::from(b.accessibility_score) * 0.3
            + f64::from(b.certification_score) * 0.2
            + f64::from(b.preferences_score) * 0.1)
            .round() as u8;
        assert_eq!(result.match_score, expected);
    }
}

#[test]
fn payload_without_request_reports_matching_error() {
    let response = find_matching_jobs_payload(serde_json::Value::Null, &[], 80.0);
    assert!(!response.success);
    assert_eq!(response.error_code(), Some("JOB_MATCHING_ERROR"));
    assert!(response.request_id.starts_with("job-match-"));
}

#[test]
fn payload_decodes_camel_case_request() {
    let payload = json!({
        "clientId": "client-003",
        "skills": ["javascript"],
        "experience": 2,
        "education": "Associate",
        "accessibilityNeeds": ["visual alerts"],
        "preferences": { "deafFriendly": true, "salaryRange": { "min": 50000, "max": 70000 } }
    });

    let response = find_matching_jobs_payload(payload, &[job("job-6", &["JavaScript"])], 80.0);
    assert!(response.success);
    let matches = response.data.expect("matches").matches;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].match_score, 100);
}
