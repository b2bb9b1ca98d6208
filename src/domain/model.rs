use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One portfolio case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub company: String,
    pub image: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tools: Vec<String>,
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gallery: Vec<String>,
}

/// Backend list fields are optional and may be stored as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Project {
    /// Slug form of the category, comparable with [`Category::id`].
    pub fn category_slug(&self) -> String {
        crate::core::catalog::normalize_category(&self.category)
    }

    /// Gallery images; a project without a gallery shows its cover image.
    pub fn gallery_images(&self) -> Vec<&str> {
        if self.gallery.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.gallery.iter().map(String::as_str).collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResearchStatus {
    Ongoing,
    PrototypePhase,
    Deployed,
    Other(String),
}

impl From<String> for ResearchStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ongoing" => ResearchStatus::Ongoing,
            "Prototype Phase" => ResearchStatus::PrototypePhase,
            "Deployed" => ResearchStatus::Deployed,
            _ => ResearchStatus::Other(value),
        }
    }
}

impl From<ResearchStatus> for String {
    fn from(status: ResearchStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ResearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearchStatus::Ongoing => f.write_str("Ongoing"),
            ResearchStatus::PrototypePhase => f.write_str("Prototype Phase"),
            ResearchStatus::Deployed => f.write_str("Deployed"),
            ResearchStatus::Other(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchEntry {
    pub title: String,
    pub organization: String,
    pub description: String,
    pub status: ResearchStatus,
    #[serde(default)]
    pub collaboration: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub behance: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "backgroundImage")]
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub story: String,
    #[serde(default)]
    pub competencies: Vec<Competency>,
    #[serde(default)]
    pub credentials: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

/// Body of `POST /api/contact/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub service: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub submission_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}
