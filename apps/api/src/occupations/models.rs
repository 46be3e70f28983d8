use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Search
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupationTags {
    pub bright_outlook: bool,
    pub green: bool,
}

/// One search-result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationSummary {
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<OccupationTags>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub keyword: String,
    pub start: u32,
    pub end: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    pub results: Vec<OccupationSummary>,
}

/// Identity carried from a search-result selection into the detail report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedOccupation {
    pub code: String,
    pub title: String,
}

impl From<&OccupationSummary> for SelectedOccupation {
    fn from(summary: &OccupationSummary) -> Self {
        Self {
            code: summary.code.clone(),
            title: summary.title.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report sections
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of one optional report section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportSection<T> {
    Available { content: T },
    /// The section endpoint answered 4xx: the service has no such data for this occupation.
    Unavailable { reason: String },
    /// Transport failure, a non-4xx status, or a payload that could not be normalized.
    Failed { reason: String },
}

impl<T> ReportSection<T> {
    #[cfg(test)]
    pub fn content(&self) -> Option<&T> {
        match self {
            ReportSection::Available { content } => Some(content),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ReportSection::Available { .. })
    }

    #[cfg(test)]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ReportSection::Unavailable { .. })
    }

    #[cfg(test)]
    pub fn reason(&self) -> Option<&str> {
        match self {
            ReportSection::Available { .. } => None,
            ReportSection::Unavailable { reason } | ReportSection::Failed { reason } => {
                Some(reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrightOutlook {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Green {
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub description: String,
    pub bright_outlook: Option<BrightOutlook>,
    pub green: Option<Green>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyExample {
    pub name: String,
    pub hot_technology: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyCategory {
    pub category: String,
    pub examples: Vec<TechnologyExample>,
}

/// A named descriptor with a 0–100 score: skills, work activities, work values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredElement {
    pub name: String,
    pub description: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationLevel {
    pub level_name: String,
    pub score_percent: f64,
    pub scale_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextResponse {
    pub percentage: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkContextItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub description: String,
    pub responses: Vec<ContextResponse>,
}

/// How strongly a job zone should be emphasized; encodes preparation burden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Zone 1. Rendered as "success".
    Favorable,
    /// Zone 2. Rendered as "info".
    Informational,
    /// Zones 3 and 4. Rendered as "warning".
    Cautionary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobZone {
    pub zone_level: u8,
    pub severity: Severity,
    pub title: String,
    pub education: String,
    pub related_experience: String,
    pub job_training: String,
    pub examples: String,
}

/// Composite detail report for one occupation.
///
/// The overview is mandatory: a report only exists if it was fetched, so it is not
/// wrapped in `ReportSection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupationReport {
    pub code: String,
    pub title: String,
    pub overview: Overview,
    pub job_zone: ReportSection<JobZone>,
    pub technology_skills: ReportSection<Vec<TechnologyCategory>>,
    pub skills: ReportSection<Vec<ScoredElement>>,
    pub education: ReportSection<Vec<EducationLevel>>,
    pub work_activities: ReportSection<Vec<ScoredElement>>,
    pub work_context: ReportSection<Vec<WorkContextItem>>,
    pub work_values: ReportSection<Vec<ScoredElement>>,
}
