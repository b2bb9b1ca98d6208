use crate::domain::model::{
    AboutInfo, ContactReceipt, ContactSubmission, HealthStatus, Project, ResearchEntry,
    ServiceOffering, Testimonial,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the API-shaped site content.
///
/// The static store and the remote adapter both implement this, so pages are
/// written once against the trait and the source is picked at startup.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short name used in logs ("static", "remote").
    fn source_name(&self) -> &'static str;

    /// All projects, or only those in `category` (a slug such as `"3d-design"`).
    /// `None` and `Some("all")` are equivalent.
    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>>;

    /// A single project. Absent ids yield `PortfolioError::NotFound`.
    async fn project(&self, id: &str) -> Result<Project>;

    async fn about(&self) -> Result<AboutInfo>;

    async fn research(&self) -> Result<Vec<ResearchEntry>>;

    async fn services(&self) -> Result<Vec<ServiceOffering>>;

    async fn testimonials(&self) -> Result<Vec<Testimonial>>;

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactReceipt>;

    /// Submitted testimonials are held for approval and not listed until then.
    async fn submit_testimonial(&self, testimonial: &Testimonial) -> Result<Testimonial>;

    async fn health(&self) -> Result<HealthStatus>;
}
