use serde::{Deserialize, Serialize};

pub const ASL_AVAILABLE_TAG: &str = "asl-available";
pub const CAPTIONING_INCLUDED_TAG: &str = "captioning-included";

/// The four career pathways a client can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathwayType {
    Job,
    Business,
    Developer,
    Creative,
}

impl PathwayType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Job, Self::Business, Self::Developer, Self::Creative]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Job => "Job",
            Self::Business => "Business",
            Self::Developer => "Developer",
            Self::Creative => "Creative",
        }
    }

    /// Stages in the order a client moves through them.
    pub const fn stages(self) -> &'static [PathwayStage] {
        use PathwayStage::*;
        match self {
            Self::Job => &[
                Explore, Prepare, Search, Apply, Onboard, Maintain, Grow, Transition,
            ],
            Self::Business => &[Idea, Validate, Startup, Established, Scale, Exit],
            Self::Developer => &[
                Beginner, Frontend, Backend, Fullstack, Platform, Ai, Owner,
            ],
            Self::Creative => &[Spark, Craft, Audience, Income, Business, Pivot],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathwayStage {
    Explore,
    Prepare,
    Search,
    Apply,
    Onboard,
    Maintain,
    Grow,
    Transition,
    Idea,
    Validate,
    Startup,
    Established,
    Scale,
    Exit,
    Beginner,
    Frontend,
    Backend,
    Fullstack,
    Platform,
    Ai,
    Owner,
    Spark,
    Craft,
    Audience,
    Income,
    Business,
    Pivot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationsProfile {
    pub visual_needs: bool,
    pub asl_preferred: bool,
    pub captioning_required: bool,
    pub visual_alerts: bool,
    pub custom_needs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayProfile {
    pub client_id: String,
    pub pathway_type: PathwayType,
    pub pathway_stage: PathwayStage,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub accommodations_profile: AccommodationsProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vr_status: Option<String>,
}

/// A service, course, or program a client can be pointed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub pathway_types: Vec<PathwayType>,
    pub stages: Vec<PathwayStage>,
    #[serde(default)]
    pub vr_coverage: bool,
    #[serde(default)]
    pub access_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Resource {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.access_tags.iter().any(|candidate| candidate == tag)
    }
}
