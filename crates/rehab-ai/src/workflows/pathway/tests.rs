use super::*;

fn profile(pathway_type: PathwayType, pathway_stage: PathwayStage) -> PathwayProfile {
    PathwayProfile {
        client_id: "client-001".to_string(),
        pathway_type,
        pathway_stage,
        goals: vec!["Land a remote role".to_string()],
        accommodations_profile: AccommodationsProfile::default(),
        vr_status: None,
    }
}

fn resource(id: &str, vr_coverage: bool, tags: &[&str]) -> Resource {
    Resource {
        id: id.to_string(),
        title: format!("Resource {id}"),
        description: String::new(),
        pathway_types: vec![PathwayType::Job],
        stages: vec![PathwayStage::Search],
        vr_coverage,
        access_tags: tags.iter().map(|tag| tag.to_string()).collect(),
        url: None,
    }
}

#[test]
fn stage_lists_match_pathways() {
    assert_eq!(PathwayType::Job.stages().len(), 8);
    assert_eq!(PathwayType::Business.stages().len(), 6);
    assert_eq!(PathwayType::Developer.stages().len(), 7);
    assert_eq!(PathwayType::Creative.stages().len(), 6);
    assert_eq!(PathwayType::Creative.stages()[4], PathwayStage::Business);
}

#[test]
fn progress_reports_position_and_next_stage() {
    let progress = PathwayProgress::for_profile(&profile(PathwayType::Job, PathwayStage::Search));
    assert_eq!(progress.stage_index, Some(2));
    assert_eq!(progress.total_stages, 8);
    // 3 / 8 = 37.5%
    assert_eq!(progress.percent_complete, 38);
    assert_eq!(progress.next_stage, Some(PathwayStage::Apply));
    assert!(!progress.is_complete());
}

#[test]
fn final_stage_has_no_next_stage() {
    let progress =
        PathwayProgress::for_profile(&profile(PathwayType::Developer, PathwayStage::Owner));
    assert_eq!(progress.percent_complete, 100);
    assert_eq!(progress.next_stage, None);
    assert!(progress.is_complete());
}

#[test]
fn foreign_stage_yields_zero_progress() {
    let progress =
        PathwayProgress::for_profile(&profile(PathwayType::Business, PathwayStage::Frontend));
    assert_eq!(progress.stage_index, None);
    assert_eq!(progress.percent_complete, 0);
    assert_eq!(progress.next_stage, Some(PathwayStage::Idea));
    assert!(!progress.is_complete());
}

#[test]
fn accommodations_require_matching_tags() {
    let resources = vec![
        resource("asl", false, &[ASL_AVAILABLE_TAG]),
        resource("captions", false, &[CAPTIONING_INCLUDED_TAG]),
        resource("both", false, &[ASL_AVAILABLE_TAG, CAPTIONING_INCLUDED_TAG]),
        resource("none", false, &[]),
    ];

    let asl_only = AccommodationsProfile {
        asl_preferred: true,
        ..AccommodationsProfile::default()
    };
    let ids: Vec<String> = filter_by_accommodations(resources.clone(), &asl_only)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["asl", "both"]);

    let both = AccommodationsProfile {
        asl_preferred: true,
        captioning_required: true,
        ..AccommodationsProfile::default()
    };
    let ids: Vec<String> = filter_by_accommodations(resources.clone(), &both)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["both"]);

    let unrestricted = filter_by_accommodations(resources, &AccommodationsProfile::default());
    assert_eq!(unrestricted.len(), 4);
}

#[test]
fn priority_sort_prefers_vr_then_tag_count() {
    let mut resources = vec![
        resource("plain", false, &["a", "b", "c"]),
        resource("vr-one", true, &["a"]),
        resource("vr-two", true, &["a", "b"]),
        resource("plain-tie", false, &["x", "y", "z"]),
    ];

    sort_resources_by_priority(&mut resources);
    let ids: Vec<&str> = resources.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["vr-two", "vr-one", "plain", "plain-tie"]);
}

#[test]
fn recommendations_filter_sort_and_cap() {
    let mut resources: Vec<Resource> = (0..7)
        .map(|i| resource(&format!("r{i}"), i % 2 == 0, &[ASL_AVAILABLE_TAG]))
        .collect();
    let mut wrong_stage = resource("wrong-stage", true, &[ASL_AVAILABLE_TAG]);
    wrong_stage.stages = vec![PathwayStage::Onboard];
    let mut wrong_type = resource("wrong-type", true, &[ASL_AVAILABLE_TAG]);
    wrong_type.pathway_types = vec![PathwayType::Creative];
    resources.push(wrong_stage);
    resources.push(wrong_type);

    let mut client = profile(PathwayType::Job, PathwayStage::Search);
    client.accommodations_profile.asl_preferred = true;

    let recommended = recommend_resources(&client, &resources);
    let ids: Vec<&str> = recommended.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r0", "r2", "r4", "r6", "r1"]);
}

#[test]
fn recommendations_bundle_progress() {
    let bundle = pathway_recommendations(
        &profile(PathwayType::Job, PathwayStage::Search),
        &[resource("r0", true, &[])],
    );
    assert_eq!(bundle.client_id, "client-001");
    assert_eq!(bundle.progress.next_stage, Some(PathwayStage::Apply));
    assert_eq!(bundle.resources.len(), 1);
}

#[test]
fn profile_decodes_camel_case_with_defaults() {
    let profile: PathwayProfile = serde_json::from_value(serde_json::json!({
        "clientId": "client-9",
        "pathwayType": "creative",
        "pathwayStage": "business",
        "accommodationsProfile": { "captioningRequired": true }
    }))
    .expect("profile decodes");

    assert_eq!(profile.pathway_type, PathwayType::Creative);
    assert_eq!(profile.pathway_stage, PathwayStage::Business);
    assert!(profile.accommodations_profile.captioning_required);
    assert!(!profile.accommodations_profile.asl_preferred);
}
