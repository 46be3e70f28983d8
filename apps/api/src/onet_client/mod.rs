//! O*NET Web Services client. The only module that talks to the remote API.
//!
//! Every request is an authenticated GET that asks for JSON. Status codes are
//! never interpreted here: non-2xx responses are raised as `GatewayError::Http`
//! and callers decide whether that means "absent" or "fatal".
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod endpoints;

pub use endpoints::Endpoints;

pub const DEFAULT_BASE_URL: &str = "https://services.onetcenter.org/ws/online/";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GatewayError {
    /// True when the remote service answered with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GatewayError::Http { status, .. } if (400..500).contains(status))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Anything that can answer a GET for a fully-qualified endpoint URL with JSON.
///
/// `OnetClient` is the production implementation; tests substitute canned payloads.
#[async_trait]
pub trait OccupationSource: Send + Sync {
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, GatewayError>;
}

#[derive(Clone)]
pub struct OnetClient {
    client: Client,
    username: String,
    password: String,
}

impl OnetClient {
    pub fn new(username: String, password: String) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            username,
            password,
        })
    }
}

#[async_trait]
impl OccupationSource for OnetClient {
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, GatewayError> {
        debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json")
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("GET {url} returned {status}");
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;
    use std::net::SocketAddr;

    // "user:pass"
    const EXPECTED_AUTH: &str = "Basic dXNlcjpwYXNz";

    async fn echo(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<Value>, StatusCode> {
        let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        if auth != Some(EXPECTED_AUTH) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        let accept = headers.get("accept").and_then(|v| v.to_str().ok());
        Ok(Json(json!({ "accept": accept, "query": params })))
    }

    async fn spawn_server() -> SocketAddr {
        let app = Router::new()
            .route("/echo", get(echo))
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "no such report") }))
            .route("/text", get(|| async { "not json" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client() -> OnetClient {
        OnetClient::new("user".to_string(), "pass".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_auth_accept_and_query() {
        let addr = spawn_server().await;
        let value = client()
            .fetch(&format!("http://{addr}/echo"), &[("keyword", "nurse aide"), ("start", "1")])
            .await
            .unwrap();
        assert_eq!(value["accept"], "application/json");
        assert_eq!(value["query"]["keyword"], "nurse aide");
        assert_eq!(value["query"]["start"], "1");
    }

    #[tokio::test]
    async fn test_fetch_raises_http_error_with_body() {
        let addr = spawn_server().await;
        let err = client()
            .fetch(&format!("http://{addr}/missing"), &[])
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.status(), Some(404));
        match err {
            GatewayError::Http { body, .. } => assert_eq!(body, "no such report"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_wrong_credentials_as_http_error() {
        let addr = spawn_server().await;
        let client = OnetClient::new("user".to_string(), "wrong".to_string()).unwrap();
        let err = client.fetch(&format!("http://{addr}/echo"), &[]).await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body_is_parse_error() {
        let addr = spawn_server().await;
        let err = client()
            .fetch(&format!("http://{addr}/text"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = client()
            .fetch(&format!("http://{addr}/echo"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_client_error_range() {
        let err = |status| GatewayError::Http {
            status,
            body: String::new(),
        };
        assert!(err(400).is_client_error());
        assert!(err(422).is_client_error());
        assert!(!err(500).is_client_error());
        assert!(!err(302).is_client_error());
    }
}
