//! Career pathway progress and resource recommendations.

pub mod domain;

#[cfg(test)]
mod tests;

pub use domain::{
    AccommodationsProfile, PathwayProfile, PathwayStage, PathwayType, Resource,
    ASL_AVAILABLE_TAG, CAPTIONING_INCLUDED_TAG,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Where a profile sits within its pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayProgress {
    pub pathway_type: PathwayType,
    /// Zero-based; `None` when the stage is not part of the pathway.
    pub stage_index: Option<usize>,
    pub total_stages: usize,
    pub percent_complete: u8,
    pub next_stage: Option<PathwayStage>,
}

impl PathwayProgress {
    pub fn for_profile(profile: &PathwayProfile) -> Self {
        let stages = profile.pathway_type.stages();
        let total_stages = stages.len();
        let stage_index = stages
            .iter()
            .position(|stage| *stage == profile.pathway_stage);

        let (percent_complete, next_stage) = match stage_index {
            Some(index) => (
                ((index + 1) as f64 / total_stages as f64 * 100.0).round() as u8,
                stages.get(index + 1).copied(),
            ),
            None => (0, stages.first().copied()),
        };

        Self {
            pathway_type: profile.pathway_type,
            stage_index,
            total_stages,
            percent_complete,
            next_stage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage_index.is_some() && self.next_stage.is_none()
    }
}

/// Drop resources that cannot meet the profile's communication needs.
pub fn filter_by_accommodations(
    resources: Vec<Resource>,
    accommodations: &AccommodationsProfile,
) -> Vec<Resource> {
    resources
        .into_iter()
        .filter(|resource| !accommodations.asl_preferred || resource.has_tag(ASL_AVAILABLE_TAG))
        .filter(|resource| {
            !accommodations.captioning_required || resource.has_tag(CAPTIONING_INCLUDED_TAG)
        })
        .collect()
}

/// VR-covered resources first, then those with more access tags. Stable.
pub fn sort_resources_by_priority(resources: &mut [Resource]) {
    resources.sort_by(|a, b| {
        b.vr_coverage
            .cmp(&a.vr_coverage)
            .then_with(|| b.access_tags.len().cmp(&a.access_tags.len()))
    });
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayRecommendations {
    pub client_id: String,
    pub progress: PathwayProgress,
    pub resources: Vec<Resource>,
}

/// Up to [`MAX_RECOMMENDATIONS`] resources for the profile's current stage.
pub fn recommend_resources(profile: &PathwayProfile, resources: &[Resource]) -> Vec<Resource> {
    let candidates: Vec<Resource> = resources
        .iter()
        .filter(|resource| {
            resource.pathway_types.contains(&profile.pathway_type)
                && resource.stages.contains(&profile.pathway_stage)
        })
        .cloned()
        .collect();
    let staged = candidates.len();

    let mut accessible = filter_by_accommodations(candidates, &profile.accommodations_profile);
    sort_resources_by_priority(&mut accessible);
    accessible.truncate(MAX_RECOMMENDATIONS);

    debug!(
        client_id = %profile.client_id,
        pathway = profile.pathway_type.label(),
        staged,
        recommended = accessible.len(),
        "pathway resources recommended"
    );

    accessible
}

pub fn pathway_recommendations(
    profile: &PathwayProfile,
    resources: &[Resource],
) -> PathwayRecommendations {
    PathwayRecommendations {
        client_id: profile.client_id.clone(),
        progress: PathwayProgress::for_profile(profile),
        resources: recommend_resources(profile, resources),
    }
}
