//! Wire shapes of the O*NET JSON responses, as far as this service reads them.
//!
//! Every field is optional or defaulted: the service omits keys freely and
//! normalization decides what a missing value means.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    pub keyword: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub total: Option<u32>,
    #[serde(default)]
    pub occupation: Vec<SearchRowPayload>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRowPayload {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    pub relevance_score: Option<f64>,
    pub tags: Option<TagsPayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagsPayload {
    #[serde(default)]
    pub bright_outlook: bool,
    #[serde(default)]
    pub green: bool,
}

#[derive(Debug, Deserialize)]
pub struct OverviewPayload {
    #[serde(default)]
    pub description: String,
    pub bright_outlook: Option<BrightOutlookPayload>,
    pub green: Option<GreenPayload>,
}

#[derive(Debug, Deserialize)]
pub struct BrightOutlookPayload {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct GreenPayload {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct TechnologySkillsPayload {
    #[serde(default)]
    pub category: Vec<TechnologyCategoryPayload>,
}

#[derive(Debug, Deserialize)]
pub struct TechnologyCategoryPayload {
    #[serde(default)]
    pub title: TitlePayload,
    #[serde(default)]
    pub example: Vec<TechnologyExamplePayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TitlePayload {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TechnologyExamplePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hot_technology: bool,
}

/// Shared by the skills, work activities and work values details reports.
#[derive(Debug, Deserialize)]
pub struct ElementsPayload {
    #[serde(default)]
    pub element: Vec<ElementPayload>,
}

#[derive(Debug, Deserialize)]
pub struct ElementPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub score: Option<ScorePayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScorePayload {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub scale: String,
}

#[derive(Debug, Deserialize)]
pub struct EducationPayload {
    #[serde(default)]
    pub level_required: LevelRequiredPayload,
}

#[derive(Debug, Default, Deserialize)]
pub struct LevelRequiredPayload {
    #[serde(default)]
    pub category: Vec<EducationCategoryPayload>,
}

#[derive(Debug, Deserialize)]
pub struct EducationCategoryPayload {
    #[serde(default)]
    pub name: String,
    pub score: Option<ScorePayload>,
}

#[derive(Debug, Deserialize)]
pub struct WorkContextPayload {
    #[serde(default)]
    pub element: Vec<WorkContextElementPayload>,
}

#[derive(Debug, Deserialize)]
pub struct WorkContextElementPayload {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub response: Vec<WorkContextResponsePayload>,
}

#[derive(Debug, Deserialize)]
pub struct WorkContextResponsePayload {
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JobZonePayload {
    pub value: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub related_experience: String,
    #[serde(default)]
    pub job_training: String,
    #[serde(default)]
    pub job_zone_examples: String,
}
