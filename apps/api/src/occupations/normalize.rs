//! Per-section normalization: raw O*NET JSON in, display-ready structures out.
//!
//! List-valued sections are truncated to the first `top_n` items in the order the
//! service returned them. Nothing is re-ranked.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::occupations::models::{
    BrightOutlook, ContextResponse, EducationLevel, Green, JobZone, OccupationSummary,
    OccupationTags, Overview, ScoredElement, Severity, TechnologyCategory, TechnologyExample,
    WorkContextItem,
};
use crate::occupations::payloads::{
    EducationPayload, ElementsPayload, JobZonePayload, OverviewPayload, SearchRowPayload,
    TechnologySkillsPayload, WorkContextPayload,
};

const JOB_ZONE_PREFIX: &str = "Job Zone ";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Unexpected payload shape: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Job zone level {0} is outside 1-4")]
    ZoneOutOfRange(i64),
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, NormalizeError> {
    Ok(serde_json::from_value(value)?)
}

impl Severity {
    /// Zone 1 is favorable, zone 2 informational, zones 3–4 cautionary.
    pub fn for_zone(level: i64) -> Result<Self, NormalizeError> {
        match level {
            1 => Ok(Severity::Favorable),
            2 => Ok(Severity::Informational),
            3 | 4 => Ok(Severity::Cautionary),
            other => Err(NormalizeError::ZoneOutOfRange(other)),
        }
    }
}

pub fn search_row(row: SearchRowPayload) -> OccupationSummary {
    OccupationSummary {
        code: row.code,
        title: row.title,
        relevance_score: row.relevance_score,
        tags: row.tags.map(|t| OccupationTags {
            bright_outlook: t.bright_outlook,
            green: t.green,
        }),
    }
}

pub fn overview(value: Value) -> Result<Overview, NormalizeError> {
    let payload: OverviewPayload = decode(value)?;
    Ok(Overview {
        description: payload.description,
        bright_outlook: payload.bright_outlook.map(|b| BrightOutlook {
            description: b.description,
        }),
        green: payload.green.map(|g| Green {
            category: g.category,
            description: g.description,
        }),
    })
}

pub fn technology_skills(
    value: Value,
    top_n: usize,
) -> Result<Vec<TechnologyCategory>, NormalizeError> {
    let payload: TechnologySkillsPayload = decode(value)?;
    Ok(payload
        .category
        .into_iter()
        .take(top_n)
        .map(|c| TechnologyCategory {
            category: c.title.name,
            examples: c
                .example
                .into_iter()
                .map(|e| TechnologyExample {
                    name: e.name,
                    hot_technology: e.hot_technology,
                })
                .collect(),
        })
        .collect())
}

/// Skills, work activities and work values share one element shape.
pub fn scored_elements(value: Value, top_n: usize) -> Result<Vec<ScoredElement>, NormalizeError> {
    let payload: ElementsPayload = decode(value)?;
    Ok(payload
        .element
        .into_iter()
        .take(top_n)
        .map(|e| ScoredElement {
            name: e.name,
            description: e.description,
            score: e.score.map(|s| s.value).unwrap_or_default(),
        })
        .collect())
}

/// Education categories are always returned in full.
pub fn education(value: Value) -> Result<Vec<EducationLevel>, NormalizeError> {
    let payload: EducationPayload = decode(value)?;
    Ok(payload
        .level_required
        .category
        .into_iter()
        .map(|c| {
            let score = c.score.unwrap_or_default();
            EducationLevel {
                level_name: c.name,
                score_percent: score.value,
                scale_description: score.scale,
            }
        })
        .collect())
}

pub fn work_context(value: Value, top_n: usize) -> Result<Vec<WorkContextItem>, NormalizeError> {
    let payload: WorkContextPayload = decode(value)?;
    Ok(payload
        .element
        .into_iter()
        .take(top_n)
        .map(|e| WorkContextItem {
            name: e.name,
            description: e.description,
            responses: e
                .response
                .into_iter()
                .map(|r| ContextResponse {
                    percentage: r.percentage,
                    label: r.name,
                })
                .collect(),
        })
        .collect())
}

pub fn job_zone(value: Value) -> Result<JobZone, NormalizeError> {
    let payload: JobZonePayload = decode(value)?;
    let level = payload.value.unwrap_or(1);
    let severity = Severity::for_zone(level)?;
    let title = payload.title.replacen(JOB_ZONE_PREFIX, "", 1);

    Ok(JobZone {
        // for_zone has bounded the level to 1..=4
        zone_level: level as u8,
        severity,
        title,
        education: payload.education,
        related_experience: payload.related_experience,
        job_training: payload.job_training,
        examples: payload.job_zone_examples,
    })
}
