//! In-memory `OccupationSource` for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::onet_client::{Endpoints, GatewayError, OccupationSource};

pub const TEST_BASE_URL: &str = "http://onet.test/ws/online/";

enum Canned {
    Json(Value),
    Status(u16),
}

/// Serves canned payloads by URL. Unregistered URLs answer 404.
#[derive(Default)]
pub struct MockSource {
    responses: HashMap<String, Canned>,
    calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoints() -> Endpoints {
        Endpoints::new(TEST_BASE_URL)
    }

    pub fn with_json(mut self, url: String, value: Value) -> Self {
        self.responses.insert(url, Canned::Json(value));
        self
    }

    pub fn with_status(mut self, url: String, status: u16) -> Self {
        self.responses.insert(url, Canned::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Every endpoint of one occupation populated with `n` items per list section.
    pub fn full_occupation(code: &str, n: usize) -> Self {
        let e = Self::endpoints();
        Self::new()
            .with_json(e.overview(code), json!({ "code": code, "description": "X" }))
            .with_json(e.technology_skills(code), technology_payload(n))
            .with_json(e.details(code, "skills"), elements_payload("Skill", n))
            .with_json(e.details(code, "education"), education_payload(n))
            .with_json(e.details(code, "work_activities"), elements_payload("Activity", n))
            .with_json(e.details(code, "work_context"), work_context_payload(n))
            .with_json(e.details(code, "work_values"), elements_payload("Value", n))
            .with_json(
                e.details(code, "job_zone"),
                json!({
                    "value": 4,
                    "title": "Job Zone Four: Considerable Preparation Needed",
                    "education": "Bachelor's degree",
                    "related_experience": "Considerable",
                    "job_training": "Several years",
                    "job_zone_examples": "Web developers"
                }),
            )
    }
}

#[async_trait]
impl OccupationSource for MockSource {
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push((
            url.to_string(),
            query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        match self.responses.get(url) {
            Some(Canned::Json(value)) => Ok(value.clone()),
            Some(Canned::Status(status)) => Err(GatewayError::Http {
                status: *status,
                body: String::new(),
            }),
            None => Err(GatewayError::Http {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

pub fn elements_payload(prefix: &str, n: usize) -> Value {
    let element: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "name": format!("{prefix} {i}"),
                "description": format!("{prefix} description {i}"),
                "score": { "scale": "Importance", "value": 100 - i as i64 }
            })
        })
        .collect();
    json!({ "element": element })
}

pub fn technology_payload(n: usize) -> Value {
    let category: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "title": { "name": format!("Category {i}") },
                "example": [{ "name": format!("Tool {i}"), "hot_technology": i == 0 }]
            })
        })
        .collect();
    json!({ "category": category })
}

pub fn education_payload(n: usize) -> Value {
    let category: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "name": format!("Level {i}"),
                "score": { "scale": "% of respondents", "value": 10 * i as i64 }
            })
        })
        .collect();
    json!({ "level_required": { "category": category } })
}

pub fn work_context_payload(n: usize) -> Value {
    let element: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "name": format!("Context {i}"),
                "description": format!("Context question {i}"),
                "response": [
                    { "percentage": 60, "name": "Every day" },
                    { "percentage": 40, "name": "Once a week" }
                ]
            })
        })
        .collect();
    json!({ "element": element })
}
