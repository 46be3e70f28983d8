//! Report Assembler: fans one occupation code out across the detail endpoints
//! and folds the answers into an `OccupationReport`.
//!
//! The overview is mandatory and any failure there aborts the report. The seven
//! optional sections are fetched concurrently and resolve independently: a 4xx
//! becomes `Unavailable`, any other failure becomes `Failed`.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::occupations::models::{OccupationReport, Overview, ReportSection, SelectedOccupation};
use crate::occupations::normalize::{self, NormalizeError};
use crate::onet_client::{Endpoints, GatewayError, OccupationSource};

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Error)]
pub enum SectionError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report unavailable for occupation {code}: {source}")]
    ReportUnavailable {
        code: String,
        #[source]
        source: SectionError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    TechnologySkills,
    Skills,
    Education,
    WorkActivities,
    WorkContext,
    WorkValues,
    JobZone,
}

impl Section {
    pub const OPTIONAL: [Section; 7] = [
        Section::TechnologySkills,
        Section::Skills,
        Section::Education,
        Section::WorkActivities,
        Section::WorkContext,
        Section::WorkValues,
        Section::JobZone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::TechnologySkills => "Technology Skills",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::WorkActivities => "Work Activities",
            Section::WorkContext => "Work Context Details",
            Section::WorkValues => "Work Values",
            Section::JobZone => "Job Zone Details",
        }
    }

    pub fn url(self, endpoints: &Endpoints, code: &str) -> String {
        let details = match self {
            Section::TechnologySkills => return endpoints.technology_skills(code),
            Section::Skills => "skills",
            Section::Education => "education",
            Section::WorkActivities => "work_activities",
            Section::WorkContext => "work_context",
            Section::WorkValues => "work_values",
            Section::JobZone => "job_zone",
        };
        endpoints.details(code, details)
    }

    fn query(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Section::TechnologySkills => &[("display", "long")],
            _ => &[],
        }
    }

    pub fn unavailable_notice(self) -> String {
        format!(
            "{} data is not available in the Details report for this occupation.",
            self.label()
        )
    }
}

/// Builds the full detail report for `selected`, keeping the first `top_n` items of
/// each list-valued section.
pub async fn build_report(
    source: &dyn OccupationSource,
    endpoints: &Endpoints,
    selected: &SelectedOccupation,
    top_n: usize,
) -> Result<OccupationReport, ReportError> {
    let code = selected.code.as_str();

    let overview = fetch_overview(source, endpoints, code)
        .await
        .map_err(|cause| ReportError::ReportUnavailable {
            code: code.to_string(),
            source: cause,
        })?;

    let (
        technology_skills,
        skills,
        education,
        work_activities,
        work_context,
        work_values,
        job_zone,
    ) = tokio::join!(
        fetch_section(source, endpoints, code, Section::TechnologySkills, |v| {
            normalize::technology_skills(v, top_n)
        }),
        fetch_section(source, endpoints, code, Section::Skills, |v| {
            normalize::scored_elements(v, top_n)
        }),
        fetch_section(source, endpoints, code, Section::Education, normalize::education),
        fetch_section(source, endpoints, code, Section::WorkActivities, |v| {
            normalize::scored_elements(v, top_n)
        }),
        fetch_section(source, endpoints, code, Section::WorkContext, |v| {
            normalize::work_context(v, top_n)
        }),
        fetch_section(source, endpoints, code, Section::WorkValues, |v| {
            normalize::scored_elements(v, top_n)
        }),
        fetch_section(source, endpoints, code, Section::JobZone, normalize::job_zone),
    );

    let report = OccupationReport {
        code: selected.code.clone(),
        title: selected.title.clone(),
        overview,
        job_zone,
        technology_skills,
        skills,
        education,
        work_activities,
        work_context,
        work_values,
    };

    info!(
        "Built report for {code} ({}): {}/{} optional sections available",
        selected.title,
        available_count(&report),
        Section::OPTIONAL.len()
    );

    Ok(report)
}

async fn fetch_overview(
    source: &dyn OccupationSource,
    endpoints: &Endpoints,
    code: &str,
) -> Result<Overview, SectionError> {
    let value = source.fetch(&endpoints.overview(code), &[]).await?;
    Ok(normalize::overview(value)?)
}

async fn fetch_section<T, F>(
    source: &dyn OccupationSource,
    endpoints: &Endpoints,
    code: &str,
    section: Section,
    normalize: F,
) -> ReportSection<T>
where
    F: FnOnce(Value) -> Result<T, NormalizeError>,
{
    let result = source
        .fetch(&section.url(endpoints, code), section.query())
        .await;

    match result {
        Ok(value) => match normalize(value) {
            Ok(content) => ReportSection::Available { content },
            Err(e) => {
                warn!("{} payload for {code} could not be read: {e}", section.label());
                ReportSection::Failed {
                    reason: format!("{} data could not be read: {e}", section.label()),
                }
            }
        },
        Err(e) if e.is_client_error() => {
            debug!(
                "{} not available for {code} (status {:?})",
                section.label(),
                e.status()
            );
            ReportSection::Unavailable {
                reason: section.unavailable_notice(),
            }
        }
        Err(e) => {
            warn!("{} request for {code} failed: {e}", section.label());
            ReportSection::Failed {
                reason: format!("{} data could not be retrieved: {e}", section.label()),
            }
        }
    }
}

fn available_count(report: &OccupationReport) -> usize {
    [
        report.job_zone.is_available(),
        report.technology_skills.is_available(),
        report.skills.is_available(),
        report.education.is_available(),
        report.work_activities.is_available(),
        report.work_context.is_available(),
        report.work_values.is_available(),
    ]
    .iter()
    .filter(|available| **available)
    .count()
}
