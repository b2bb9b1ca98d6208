//! Remote content source backed by the portfolio REST API.
//!
//! Every endpoint answers with `{ "success": true, "data": ... }` or, on failure,
//! `{ "success": false, "error" | "message": ... }`. Bodies without the envelope
//! are taken as the payload itself.

use crate::domain::model::{
    AboutInfo, ContactReceipt, ContactSubmission, HealthStatus, Project, ResearchEntry,
    ServiceOffering, Testimonial,
};
use crate::domain::ports::ContentProvider;
use crate::core::catalog;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::retry::{retry_with_backoff, RetryPolicy};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const FALLBACK_SERVER_MESSAGE: &str = "Server error";

#[derive(Deserialize)]
struct ProjectList {
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct ProjectItem {
    project: Project,
}

#[derive(Deserialize)]
struct AboutPayload {
    about: AboutInfo,
}

#[derive(Deserialize)]
struct ResearchList {
    research: Vec<ResearchEntry>,
}

#[derive(Deserialize)]
struct ServiceList {
    services: Vec<ServiceOffering>,
}

#[derive(Deserialize)]
struct TestimonialList {
    testimonials: Vec<Testimonial>,
}

#[derive(Deserialize)]
struct TestimonialItem {
    testimonial: Testimonial,
}

/// Decoded response: the payload plus the envelope's top-level message.
struct Payload<T> {
    data: T,
    message: Option<String>,
}

pub struct RemoteContentProvider {
    client: Client,
    api_base: Url,
    retry: RetryPolicy,
}

impl RemoteContentProvider {
    /// `backend_url` is the site backend root; requests go to `<backend_url>/api/...`.
    pub fn new(backend_url: &str, timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        validate_url("remote.backend_url", backend_url)?;

        let api_base = Url::parse(&format!("{}/api/", backend_url.trim_end_matches('/')))
            .map_err(|e| PortfolioError::InvalidConfigValueError {
                field: "remote.backend_url".to_string(),
                value: backend_url.to_string(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PortfolioError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        tracing::debug!("remote content API at {}", api_base);
        Ok(Self {
            client,
            api_base,
            retry,
        })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_base
            .join(path)
            .map_err(|e| PortfolioError::ConfigError {
                message: format!("invalid endpoint '{}': {}", path, e),
            })
    }

    fn project_endpoint(&self, id: &str) -> Result<Url> {
        let mut url = self.endpoint("projects/")?;
        url.path_segments_mut()
            .map_err(|_| PortfolioError::ConfigError {
                message: format!("backend URL cannot carry a path: {}", self.api_base),
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
        label: &str,
    ) -> Result<T> {
        retry_with_backoff(&self.retry, label, || {
            let url = url.clone();
            async move {
                tracing::debug!("GET {}", url);
                let response = self
                    .client
                    .get(url)
                    .query(query)
                    .send()
                    .await
                    .map_err(PortfolioError::from)?;
                read_payload::<T>(response).await.map(|payload| payload.data)
            }
        })
        .await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Payload<T>> {
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        read_payload(response).await
    }
}

async fn read_payload<T: DeserializeOwned>(response: Response) -> Result<Payload<T>> {
    let status = response.status();
    let body = response.text().await?;
    tracing::debug!("API response status: {}", status);

    if !status.is_success() {
        return Err(PortfolioError::RemoteError {
            status: status.as_u16(),
            message: server_message(&body),
        });
    }

    let (data, message) = unwrap_envelope(status, &body)?;
    Ok(Payload {
        data: serde_json::from_value(data)?,
        message,
    })
}

fn unwrap_envelope(status: StatusCode, body: &str) -> Result<(Value, Option<String>)> {
    let value: Value = serde_json::from_str(body)?;
    let message = text_field(&value, "message");

    match value.get("success").and_then(Value::as_bool) {
        Some(true) => Ok((value.get("data").cloned().unwrap_or(Value::Null), message)),
        Some(false) => Err(PortfolioError::RemoteError {
            status: status.as_u16(),
            message: error_text(&value),
        }),
        None => Ok((value, message)),
    }
}

/// Human-readable text from an error body: `error`, then `message`, then `detail`.
pub fn server_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => error_text(&value),
        Err(_) => FALLBACK_SERVER_MESSAGE.to_string(),
    }
}

fn error_text(value: &Value) -> String {
    ["error", "message", "detail"]
        .iter()
        .find_map(|key| text_field(value, key))
        .unwrap_or_else(|| FALLBACK_SERVER_MESSAGE.to_string())
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl ContentProvider for RemoteContentProvider {
    fn source_name(&self) -> &'static str {
        "remote"
    }

    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>> {
        let url = self.endpoint("projects/")?;
        let list: ProjectList = match category.filter(|c| !catalog::is_all(c)) {
            Some(slug) => self.get(url, &[("category", slug)], "projects").await?,
            None => self.get(url, &[], "projects").await?,
        };
        Ok(list.projects)
    }

    async fn project(&self, id: &str) -> Result<Project> {
        let url = self.project_endpoint(id)?;
        match self.get::<ProjectItem>(url, &[], "project").await {
            Ok(item) => Ok(item.project),
            Err(PortfolioError::RemoteError { status: 404, .. }) => {
                Err(PortfolioError::NotFound { id: id.to_string() })
            }
            Err(e) => Err(e),
        }
    }

    async fn about(&self) -> Result<AboutInfo> {
        let payload: AboutPayload = self.get(self.endpoint("about/")?, &[], "about").await?;
        Ok(payload.about)
    }

    async fn research(&self) -> Result<Vec<ResearchEntry>> {
        let list: ResearchList = self.get(self.endpoint("research/")?, &[], "research").await?;
        Ok(list.research)
    }

    async fn services(&self) -> Result<Vec<ServiceOffering>> {
        let list: ServiceList = self.get(self.endpoint("services/")?, &[], "services").await?;
        Ok(list.services)
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        let list: TestimonialList = self
            .get(self.endpoint("testimonials/")?, &[], "testimonials")
            .await?;
        Ok(list.testimonials)
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactReceipt> {
        let payload: Payload<ContactReceipt> =
            self.post(self.endpoint("contact/")?, submission).await?;
        let mut receipt = payload.data;
        if receipt.message.is_none() {
            receipt.message = payload.message;
        }
        Ok(receipt)
    }

    async fn submit_testimonial(&self, testimonial: &Testimonial) -> Result<Testimonial> {
        let payload: Payload<TestimonialItem> =
            self.post(self.endpoint("testimonials/")?, testimonial).await?;
        Ok(payload.data.testimonial)
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get(self.endpoint("health/")?, &[], "health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(url: &str) -> RemoteContentProvider {
        RemoteContentProvider::new(url, DEFAULT_TIMEOUT, RetryPolicy::none()).unwrap()
    }

    #[test]
    fn test_api_base_is_derived_from_backend_url() {
        assert_eq!(provider("http://localhost:8001").api_base().as_str(), "http://localhost:8001/api/");
        assert_eq!(provider("https://example.com/site/").api_base().as_str(), "https://example.com/site/api/");
    }

    #[test]
    fn test_project_endpoint_escapes_id() {
        let p = provider("http://localhost:8001");
        assert_eq!(
            p.project_endpoint("a b").unwrap().as_str(),
            "http://localhost:8001/api/projects/a%20b"
        );
    }

    #[test]
    fn test_rejects_invalid_backend_url() {
        assert!(RemoteContentProvider::new("", DEFAULT_TIMEOUT, RetryPolicy::none()).is_err());
        assert!(RemoteContentProvider::new("ftp://x", DEFAULT_TIMEOUT, RetryPolicy::none()).is_err());
    }

    #[test]
    fn test_server_message_precedence() {
        assert_eq!(server_message(r#"{"error":"boom","message":"m"}"#), "boom");
        assert_eq!(server_message(r#"{"success":false,"message":"m"}"#), "m");
        assert_eq!(server_message(r#"{"detail":"Project not found"}"#), "Project not found");
        assert_eq!(server_message(r#"{"other":1}"#), "Server error");
        assert_eq!(server_message("<html>502</html>"), "Server error");
    }

    #[test]
    fn test_unwrap_envelope() {
        let (data, message) =
            unwrap_envelope(StatusCode::OK, r#"{"success":true,"data":{"x":1},"message":"ok"}"#).unwrap();
        assert_eq!(data["x"], 1);
        assert_eq!(message.as_deref(), Some("ok"));

        let (data, _) = unwrap_envelope(StatusCode::OK, r#"{"projects":[]}"#).unwrap();
        assert!(data["projects"].is_array());

        let err = unwrap_envelope(StatusCode::OK, r#"{"success":false,"error":"nope"}"#).unwrap_err();
        assert!(matches!(err, PortfolioError::RemoteError { status: 200, ref message } if message == "nope"));
    }
}
