//! Page loaders. Each page reads API-shaped records through the configured
//! [`ContentProvider`] and site chrome (hero, navigation, contact details,
//! categories) from the bundled [`SiteContent`]. Failures stop here and become
//! a [`PageState`]; nothing propagates past the page.

use crate::adapters::static_store::SiteContent;
use crate::app::routes::Route;
use crate::core::catalog::{self, ALL_CATEGORIES};
use crate::core::contact::{ContactForm, SERVICE_OPTIONS, TIMELINE_OPTIONS};
use crate::domain::model::{
    AboutInfo, Category, ContactInfo, Hero, NavigationItem, Project, ResearchEntry,
    ServiceOffering, Testimonial,
};
use crate::domain::ports::ContentProvider;
use crate::utils::error::{ErrorCategory, PortfolioError, Result};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    NotFound,
    Failed { message: String, retryable: bool },
}

impl<T> PageState<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => PageState::Ready(value),
            Err(PortfolioError::NotFound { id }) => {
                tracing::debug!("project {} not found", id);
                PageState::NotFound
            }
            Err(e) => {
                tracing::warn!("page load failed: {} ({:?})", e, e.category());
                PageState::Failed {
                    message: e.user_friendly_message(),
                    retryable: matches!(
                        e.category(),
                        ErrorCategory::Remote | ErrorCategory::Network
                    ),
                }
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub hero: Hero,
    pub featured: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub hero: Hero,
    pub about: AboutInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioView {
    pub categories: Vec<Category>,
    pub selected: String,
    pub selected_label: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetailView {
    pub project: Project,
    pub related: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchView {
    pub entries: Vec<ResearchEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesView {
    pub services: Vec<ServiceOffering>,
}

#[derive(Debug, Clone)]
pub struct ContactView {
    pub contact: ContactInfo,
    pub service_options: &'static [&'static str],
    pub timeline_options: &'static [&'static str],
    pub form: ContactForm,
}

#[derive(Debug, Clone)]
pub enum Page {
    Home(PageState<HomeView>),
    About(PageState<AboutView>),
    Portfolio(PageState<PortfolioView>),
    Research(PageState<ResearchView>),
    Services(PageState<ServicesView>),
    Contact(ContactView),
    ProjectDetail(PageState<ProjectDetailView>),
    Unknown(String),
}

impl Page {
    /// Placeholder shown while `route` is fetching. The contact page renders
    /// from bundled content and has no pending state.
    pub fn loading(route: &Route) -> Option<Page> {
        match route {
            Route::Home => Some(Page::Home(PageState::Loading)),
            Route::About => Some(Page::About(PageState::Loading)),
            Route::Portfolio => Some(Page::Portfolio(PageState::Loading)),
            Route::Research => Some(Page::Research(PageState::Loading)),
            Route::Services => Some(Page::Services(PageState::Loading)),
            Route::ProjectDetail(_) => Some(Page::ProjectDetail(PageState::Loading)),
            Route::Contact => None,
        }
    }
}

pub struct Site {
    content: Arc<SiteContent>,
    provider: Arc<dyn ContentProvider>,
}

impl Site {
    pub fn new(content: Arc<SiteContent>, provider: Arc<dyn ContentProvider>) -> Self {
        Self { content, provider }
    }

    pub fn provider(&self) -> &dyn ContentProvider {
        self.provider.as_ref()
    }

    pub fn navigation(&self) -> &[NavigationItem] {
        &self.content.navigation
    }

    pub async fn load(&self, path: &str, category: &str) -> Page {
        match Route::parse(path) {
            Some(route) => self.load_route(&route, category).await,
            None => Page::Unknown(path.to_string()),
        }
    }

    pub async fn load_route(&self, route: &Route, category: &str) -> Page {
        tracing::debug!("loading {} from {} content", route, self.provider.source_name());
        match route {
            Route::Home => Page::Home(self.home().await),
            Route::About => Page::About(self.about().await),
            Route::Portfolio => Page::Portfolio(self.portfolio(category).await),
            Route::Research => Page::Research(self.research().await),
            Route::Services => Page::Services(self.services().await),
            Route::Contact => Page::Contact(self.contact()),
            Route::ProjectDetail(id) => Page::ProjectDetail(self.project_detail(id).await),
        }
    }

    /// Hero, the first three projects and the testimonials; either fetch
    /// failing fails the page.
    pub async fn home(&self) -> PageState<HomeView> {
        let result = tokio::try_join!(self.provider.projects(None), self.provider.testimonials());
        PageState::from_result(result.map(|(projects, testimonials)| HomeView {
            hero: self.content.hero.clone(),
            featured: catalog::featured_projects(&projects).to_vec(),
            testimonials,
        }))
    }

    pub async fn about(&self) -> PageState<AboutView> {
        PageState::from_result(self.provider.about().await.map(|about| AboutView {
            hero: self.content.hero.clone(),
            about,
        }))
    }

    /// The full collection is fetched once and filtered locally, so switching
    /// category never depends on server-side filtering.
    pub async fn portfolio(&self, category: &str) -> PageState<PortfolioView> {
        let selected = if category.trim().is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category.trim().to_string()
        };

        PageState::from_result(self.provider.projects(None).await.map(|projects| {
            let filtered = catalog::filter_by_category(&projects, &selected)
                .into_iter()
                .cloned()
                .collect();
            let selected_label = catalog::category_label(&self.content.categories, &selected)
                .unwrap_or(selected.as_str())
                .to_string();
            PortfolioView {
                categories: self.content.categories.clone(),
                selected,
                selected_label,
                projects: filtered,
            }
        }))
    }

    pub async fn project_detail(&self, id: &str) -> PageState<ProjectDetailView> {
        let result = self.provider.projects(None).await.and_then(|projects| {
            let project = with_detail_defaults(catalog::locate_project(&projects, id)?.clone());
            let related = catalog::related_projects(&projects, id)
                .into_iter()
                .cloned()
                .collect();
            Ok(ProjectDetailView { project, related })
        });
        PageState::from_result(result)
    }

    pub async fn research(&self) -> PageState<ResearchView> {
        PageState::from_result(
            self.provider
                .research()
                .await
                .map(|entries| ResearchView { entries }),
        )
    }

    pub async fn services(&self) -> PageState<ServicesView> {
        PageState::from_result(
            self.provider
                .services()
                .await
                .map(|services| ServicesView { services }),
        )
    }

    pub fn contact(&self) -> ContactView {
        ContactView {
            contact: self.content.contact.clone(),
            service_options: &SERVICE_OPTIONS,
            timeline_options: &TIMELINE_OPTIONS,
            form: ContactForm::new(),
        }
    }
}

const DEFAULT_DURATION: &str = "6 months";
const DEFAULT_ROLE: &str = "Lead Designer";
const DEFAULT_CHALLENGE: &str = "The main challenge was to balance sustainability goals with commercial viability while maintaining design excellence.";
const DEFAULT_SOLUTION: &str = "Implemented a comprehensive approach combining sustainable materials, innovative design processes, and stakeholder collaboration.";
const DEFAULT_RESULTS: [&str; 4] = [
    "Significant positive impact achieved",
    "Successfully met project objectives",
    "Delivered measurable results",
    "Gained valuable industry recognition",
];

/// Case-study sections the record leaves out get generic copy so the detail
/// page always has every section.
fn with_detail_defaults(mut project: Project) -> Project {
    project.duration.get_or_insert_with(|| DEFAULT_DURATION.to_string());
    project.role.get_or_insert_with(|| DEFAULT_ROLE.to_string());
    project.challenge.get_or_insert_with(|| DEFAULT_CHALLENGE.to_string());
    project.solution.get_or_insert_with(|| DEFAULT_SOLUTION.to_string());
    if project.results.is_empty() {
        project.results = DEFAULT_RESULTS.iter().map(|r| r.to_string()).collect();
    }
    project
}

impl PortfolioView {
    pub fn count(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_state_from_errors() {
        let state: PageState<()> =
            PageState::from_result(Err(PortfolioError::NotFound { id: "9".to_string() }));
        assert_eq!(state, PageState::NotFound);

        let state: PageState<()> = PageState::from_result(Err(PortfolioError::network()));
        assert!(matches!(state, PageState::Failed { retryable: true, .. }));

        let state: PageState<()> = PageState::from_result(Err(PortfolioError::RemoteError {
            status: 400,
            message: "Invalid category".to_string(),
        }));
        assert_eq!(
            state,
            PageState::Failed {
                message: "Invalid category".to_string(),
                retryable: true
            }
        );

        let state: PageState<()> = PageState::from_result(Err(PortfolioError::ConfigError {
            message: "x".to_string(),
        }));
        assert!(matches!(state, PageState::Failed { retryable: false, .. }));
    }

    #[test]
    fn test_loading_placeholder_per_route() {
        assert!(matches!(Page::loading(&Route::Home), Some(Page::Home(PageState::Loading))));
        assert!(matches!(
            Page::loading(&Route::ProjectDetail("3".to_string())),
            Some(Page::ProjectDetail(PageState::Loading))
        ));
        assert!(Page::loading(&Route::Contact).is_none());
    }

    #[test]
    fn test_detail_defaults_fill_missing_sections_only() {
        let bare: Project = serde_json::from_value(serde_json::json!({
            "id": "7",
            "title": "Draft",
            "category": "Styling",
            "company": "Studio",
            "image": "cover.jpg",
            "description": "D",
            "impact": "I",
            "role": "Stylist",
            "results": null
        }))
        .unwrap();

        let project = with_detail_defaults(bare);
        assert_eq!(project.duration.as_deref(), Some(DEFAULT_DURATION));
        assert_eq!(project.role.as_deref(), Some("Stylist"));
        assert_eq!(project.challenge.as_deref(), Some(DEFAULT_CHALLENGE));
        assert_eq!(project.solution.as_deref(), Some(DEFAULT_SOLUTION));
        assert_eq!(project.results.len(), DEFAULT_RESULTS.len());
        assert_eq!(project.gallery_images(), vec!["cover.jpg"]);
    }

    #[test]
    fn test_ready_accessor() {
        assert_eq!(PageState::Ready(3).ready(), Some(&3));
        assert_eq!(PageState::<i32>::Loading.ready(), None);
    }
}
