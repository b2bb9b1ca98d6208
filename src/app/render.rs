//! Plain-text rendering of pages.

use crate::app::pages::{
    AboutView, ContactView, HomeView, Page, PageState, PortfolioView, ProjectDetailView,
    ResearchView, ServicesView,
};
use crate::app::routes::Route;
use crate::core::contact::FormStatus;
use crate::domain::model::{NavigationItem, Project};
use std::fmt::{self, Display, Formatter};

pub const LOADING: &str = "Loading...";

impl<T: Display> Display for PageState<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PageState::Loading => writeln!(f, "{}", LOADING),
            PageState::Ready(view) => view.fmt(f),
            PageState::NotFound => {
                writeln!(f, "Project not found")?;
                writeln!(f, "The project you're looking for doesn't exist.")?;
                writeln!(f, "<- Back to Portfolio (/portfolio)")
            }
            PageState::Failed { message, retryable } => {
                writeln!(f, "Error: {}", message)?;
                if *retryable {
                    writeln!(f, "[Try again]")?;
                }
                Ok(())
            }
        }
    }
}

fn project_card(f: &mut Formatter<'_>, project: &Project) -> fmt::Result {
    writeln!(f, "  [{}] {} ({})", project.id, project.title, project.category)?;
    writeln!(f, "      {} | {}", project.company, project.description)?;
    let tools: Vec<&str> = project.tools.iter().take(3).map(String::as_str).collect();
    if !tools.is_empty() {
        writeln!(f, "      Tools: {}", tools.join(", "))?;
    }
    writeln!(f, "      Impact: {}", project.impact)
}

impl Display for HomeView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.hero.name)?;
        writeln!(f, "{}", self.hero.title)?;
        writeln!(f, "{}", self.hero.tagline)?;
        writeln!(f)?;
        writeln!(f, "{}", self.hero.description)?;
        writeln!(f)?;
        writeln!(f, "Featured Work")?;
        for project in &self.featured {
            project_card(f, project)?;
        }
        if !self.testimonials.is_empty() {
            writeln!(f)?;
            writeln!(f, "What Collaborators Say")?;
            for t in &self.testimonials {
                writeln!(f, "  \"{}\"", t.text)?;
                writeln!(f, "    - {}, {} at {}", t.name, t.role, t.company)?;
            }
        }
        Ok(())
    }
}

impl Display for AboutView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "About {}", self.hero.name)?;
        writeln!(f, "{}", self.about.story)?;
        writeln!(f)?;
        writeln!(f, "Core Competencies")?;
        for c in &self.about.competencies {
            writeln!(f, "  - {}", c.text)?;
        }
        writeln!(f)?;
        writeln!(f, "Experience")?;
        for exp in &self.about.experience {
            writeln!(f, "  {} - {} ({})", exp.role, exp.company, exp.period)?;
            writeln!(f, "      {}", exp.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Education & Credentials")?;
        for credential in &self.about.credentials {
            writeln!(f, "  - {}", credential)?;
        }
        Ok(())
    }
}

impl Display for PortfolioView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Portfolio")?;
        let tabs: Vec<String> = self
            .categories
            .iter()
            .map(|c| {
                if c.id == self.selected {
                    format!("[{}]", c.label)
                } else {
                    c.label.clone()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" | "))?;
        writeln!(f)?;
        writeln!(f, "Showing {} projects in {}", self.count(), self.selected_label)?;
        for project in &self.projects {
            project_card(f, project)?;
        }
        if self.projects.is_empty() {
            writeln!(f, "No projects found")?;
            writeln!(f, "Try selecting a different category to explore more projects.")?;
        }
        Ok(())
    }
}

impl Display for ProjectDetailView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = &self.project;
        writeln!(f, "{}", p.title)?;
        writeln!(f, "{} | {}", p.category, p.company)?;
        if let Some(duration) = &p.duration {
            writeln!(f, "Duration: {}", duration)?;
        }
        if let Some(role) = &p.role {
            writeln!(f, "Role: {}", role)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", p.description)?;
        if let Some(challenge) = &p.challenge {
            writeln!(f, "\nChallenge\n  {}", challenge)?;
        }
        if let Some(solution) = &p.solution {
            writeln!(f, "\nSolution\n  {}", solution)?;
        }
        writeln!(f, "\nImpact\n  {}", p.impact)?;
        if !p.results.is_empty() {
            writeln!(f, "\nResults")?;
            for result in &p.results {
                writeln!(f, "  - {}", result)?;
            }
        }
        writeln!(f, "\nTools: {}", p.tools.join(", "))?;
        writeln!(f, "Gallery:")?;
        for image in p.gallery_images() {
            writeln!(f, "  {}", image)?;
        }
        if !self.related.is_empty() {
            writeln!(f, "\nRelated Projects")?;
            for related in &self.related {
                writeln!(f, "  {} -> /project/{}", related.title, related.id)?;
            }
        }
        Ok(())
    }
}

impl Display for ResearchView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Research & Innovation")?;
        for entry in &self.entries {
            writeln!(f, "  {} [{}]", entry.title, entry.status)?;
            writeln!(f, "      {}", entry.organization)?;
            writeln!(f, "      {}", entry.description)?;
            if let Some(collaboration) = &entry.collaboration {
                writeln!(f, "      Collaboration: {}", collaboration)?;
            }
            if !entry.publications.is_empty() {
                writeln!(f, "      Publications: {}", entry.publications.join("; "))?;
            }
        }
        Ok(())
    }
}

impl Display for ServicesView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Services")?;
        for service in &self.services {
            writeln!(f, "  {}", service.title)?;
            writeln!(f, "      {}", service.description)?;
            for deliverable in &service.deliverables {
                writeln!(f, "      - {}", deliverable)?;
            }
        }
        Ok(())
    }
}

impl Display for ContactView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Let's Collaborate")?;
        writeln!(f, "  Email:    {}", self.contact.email)?;
        writeln!(f, "  Phone:    {}", self.contact.phone)?;
        writeln!(f, "  Location: {}", self.contact.location)?;
        writeln!(f, "  LinkedIn: {}", self.contact.linkedin)?;
        writeln!(f, "  Behance:  {}", self.contact.behance)?;
        writeln!(f)?;
        writeln!(f, "Services: {}", self.service_options.join(", "))?;
        writeln!(f, "Timelines: {}", self.timeline_options.join(", "))?;
        match self.form.status() {
            FormStatus::Submitted { .. } => {
                writeln!(f, "Message sent! I'll get back to you within 24 hours.")?
            }
            FormStatus::Submitting => writeln!(f, "Sending...")?,
            FormStatus::Failed { message } => writeln!(f, "Error: {}", message)?,
            FormStatus::Editing => {}
        }
        Ok(())
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home(state) => state.fmt(f),
            Page::About(state) => state.fmt(f),
            Page::Portfolio(state) => state.fmt(f),
            Page::Research(state) => state.fmt(f),
            Page::Services(state) => state.fmt(f),
            Page::Contact(view) => view.fmt(f),
            Page::ProjectDetail(state) => state.fmt(f),
            Page::Unknown(path) => writeln!(f, "Page not found: {}", path),
        }
    }
}

/// Navigation bar with the current route marked.
pub fn render_navigation(items: &[NavigationItem], current: Option<&Route>) -> String {
    let labels: Vec<String> = items
        .iter()
        .map(|item| {
            if current.is_some_and(|route| route.is_active(item)) {
                format!("*{}*", item.label)
            } else {
                item.label.clone()
            }
        })
        .collect();
    format!("VK   {}", labels.join(" "))
}

pub fn render_page(page: &Page, navigation: &[NavigationItem], current: Option<&Route>) -> String {
    format!("{}\n\n{}", render_navigation(navigation, current), page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_states() {
        assert_eq!(PageState::<ResearchView>::Loading.to_string(), "Loading...\n");
        assert!(PageState::<ResearchView>::NotFound
            .to_string()
            .contains("Project not found"));

        let failed = PageState::<ResearchView>::Failed {
            message: "Network error - please check your connection".to_string(),
            retryable: true,
        };
        let text = failed.to_string();
        assert!(text.contains("Network error"));
        assert!(text.contains("[Try again]"));
    }

    #[test]
    fn test_render_navigation_marks_current_route() {
        let items = vec![
            NavigationItem { label: "Home".to_string(), path: "/".to_string() },
            NavigationItem { label: "About".to_string(), path: "/about".to_string() },
        ];
        assert_eq!(render_navigation(&items, Some(&Route::About)), "VK   Home *About*");
        assert_eq!(render_navigation(&items, None), "VK   Home About");
    }

    #[test]
    fn test_render_loading_page() {
        let page = Page::loading(&Route::Portfolio).unwrap();
        assert_eq!(page.to_string(), "Loading...\n");
    }

    #[test]
    fn test_render_unknown_page() {
        let page = Page::Unknown("/blog".to_string());
        assert_eq!(page.to_string(), "Page not found: /blog\n");
    }
}
