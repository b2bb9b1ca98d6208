use crate::core::catalog::{self, ALL_CATEGORIES};
use crate::domain::model::{
    AboutInfo, Category, ContactInfo, ContactReceipt, ContactSubmission, HealthStatus, Hero,
    NavigationItem, Project, ResearchEntry, ServiceOffering, Testimonial,
};
use crate::domain::ports::ContentProvider;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

const BUILTIN_CONTENT: &str = include_str!("../../content/site.json");

pub const CONTACT_CONFIRMATION: &str =
    "Thank you for your message! I'll get back to you within 24 hours.";

/// Everything the site displays, loaded once and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub about: AboutInfo,
    pub projects: Vec<Project>,
    pub categories: Vec<Category>,
    pub research: Vec<ResearchEntry>,
    pub services: Vec<ServiceOffering>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactInfo,
    pub navigation: Vec<NavigationItem>,
}

impl SiteContent {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.check()?;
        Ok(content)
    }

    /// Project ids must be unique. A project whose category is not declared
    /// is kept but will never match a filter, so it is only logged.
    fn check(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id.as_str()) {
                return Err(PortfolioError::ConfigError {
                    message: format!("duplicate project id '{}' in site content", project.id),
                });
            }
        }

        let declared: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();
        for project in &self.projects {
            let slug = project.category_slug();
            if !declared.contains(slug.as_str()) {
                tracing::warn!(
                    "project '{}' has undeclared category '{}'",
                    project.id,
                    project.category
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct StaticContentProvider {
    content: Arc<SiteContent>,
}

impl StaticContentProvider {
    pub fn new(content: Arc<SiteContent>) -> Self {
        Self { content }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(SiteContent::builtin()?)))
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }
}

#[async_trait]
impl ContentProvider for StaticContentProvider {
    fn source_name(&self) -> &'static str {
        "static"
    }

    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>> {
        let key = category.unwrap_or(ALL_CATEGORIES);
        Ok(catalog::filter_by_category(&self.content.projects, key)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn project(&self, id: &str) -> Result<Project> {
        catalog::locate_project(&self.content.projects, id).cloned()
    }

    async fn about(&self) -> Result<AboutInfo> {
        Ok(self.content.about.clone())
    }

    async fn research(&self) -> Result<Vec<ResearchEntry>> {
        Ok(self.content.research.clone())
    }

    async fn services(&self) -> Result<Vec<ServiceOffering>> {
        Ok(self.content.services.clone())
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        Ok(self.content.testimonials.clone())
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactReceipt> {
        // Nothing is stored; the receipt only confirms the input was accepted.
        let submission_id = format!("local-{}", Utc::now().timestamp_millis());
        tracing::info!(
            "contact request from {} <{}> about '{}' recorded as {}",
            submission.name,
            submission.email,
            submission.service,
            submission_id
        );
        Ok(ContactReceipt {
            submission_id,
            message: Some(CONTACT_CONFIRMATION.to_string()),
        })
    }

    async fn submit_testimonial(&self, testimonial: &Testimonial) -> Result<Testimonial> {
        tracing::info!("testimonial from {} held for approval", testimonial.name);
        Ok(testimonial.clone())
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: "static-content".to_string(),
        })
    }
}
