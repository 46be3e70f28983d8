//! URL construction for the O*NET endpoints this service consumes.

#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// `base_url` is normalized to end with `/` so relative paths join cleanly.
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search(&self) -> String {
        format!("{}search", self.base_url)
    }

    pub fn overview(&self, code: &str) -> String {
        format!("{}occupations/{code}/", self.base_url)
    }

    pub fn technology_skills(&self, code: &str) -> String {
        format!("{}occupations/{code}/summary/technology_skills", self.base_url)
    }

    /// `report` is one of the details slugs: `skills`, `education`, `work_activities`,
    /// `work_context`, `work_values`, `job_zone`.
    pub fn details(&self, code: &str, report: &str) -> String {
        format!("{}occupations/{code}/details/{report}", self.base_url)
    }
}
