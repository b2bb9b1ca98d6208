//! Category filtering and project lookup over an in-memory project list.
//!
//! Everything here is a pure function of its inputs; callers re-derive results
//! whenever the selected category or project id changes.

use crate::domain::model::{Category, Project};
use crate::utils::error::{PortfolioError, Result};

/// Category id meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

pub const RELATED_LIMIT: usize = 3;
pub const FEATURED_LIMIT: usize = 3;

/// Lower-case the label and join its words with hyphens: "3D Design" -> "3d-design".
pub fn normalize_category(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn is_all(key: &str) -> bool {
    key == ALL_CATEGORIES
}

/// Projects whose normalized category equals `key`, in collection order.
/// The sentinel key returns the whole collection; an unknown key returns nothing.
pub fn filter_by_category<'a>(projects: &'a [Project], key: &str) -> Vec<&'a Project> {
    if is_all(key) {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.category_slug() == key)
        .collect()
}

pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}

/// Like [`find_project`] but reports a missing id as `NotFound`.
pub fn locate_project<'a>(projects: &'a [Project], id: &str) -> Result<&'a Project> {
    find_project(projects, id).ok_or_else(|| PortfolioError::NotFound { id: id.to_string() })
}

/// Up to three other projects, first-N in collection order.
pub fn related_projects<'a>(projects: &'a [Project], id: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| p.id != id)
        .take(RELATED_LIMIT)
        .collect()
}

pub fn featured_projects(projects: &[Project]) -> &[Project] {
    &projects[..projects.len().min(FEATURED_LIMIT)]
}

pub fn category_label<'a>(categories: &'a [Category], key: &str) -> Option<&'a str> {
    categories
        .iter()
        .find(|c| c.id == key)
        .map(|c| c.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn project(id: &str, category: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            category: category.to_string(),
            company: "Studio".to_string(),
            image: format!("https://img.example/{}.jpg", id),
            description: "desc".to_string(),
            tools: vec![],
            impact: "impact".to_string(),
            duration: None,
            role: None,
            challenge: None,
            solution: None,
            results: vec![],
            gallery: vec![],
        }
    }

    fn fixture() -> Vec<Project> {
        vec![
            project("1", "Collections"),
            project("2", "Research"),
            project("3", "3D Design"),
            project("4", "Research"),
            project("5", "Accessories"),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("3D Design"), "3d-design");
        assert_eq!(normalize_category("Surface Development"), "surface-development");
        assert_eq!(normalize_category("Collections"), "collections");
        assert_eq!(normalize_category("  Multi  Word Label "), "multi-word-label");
    }

    #[test]
    fn test_filter_by_research() {
        let projects = fixture();
        assert_eq!(ids(&filter_by_category(&projects, "research")), vec!["2", "4"]);
    }

    #[test]
    fn test_filter_by_all_keeps_order_and_size() {
        let projects = fixture();
        let all = filter_by_category(&projects, ALL_CATEGORIES);
        assert_eq!(all.len(), projects.len());
        assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_by_unknown_key_is_empty() {
        let projects = fixture();
        assert!(filter_by_category(&projects, "styling").is_empty());
        assert!(filter_by_category(&projects, "Research").is_empty());
    }

    #[test]
    fn test_filter_partitions_collection() {
        let mut projects = fixture();
        projects.push(project("6", "Uncatalogued Thing"));
        let keys = ["collections", "3d-design", "research", "styling", "accessories", "surface-development"];

        let mut seen: HashMap<String, usize> = HashMap::new();
        for key in keys {
            for p in filter_by_category(&projects, key) {
                assert_eq!(p.category_slug(), key);
                *seen.entry(p.id.clone()).or_default() += 1;
            }
        }
        let remainder: Vec<&Project> = projects
            .iter()
            .filter(|p| !keys.contains(&p.category_slug().as_str()))
            .collect();
        for p in remainder {
            *seen.entry(p.id.clone()).or_default() += 1;
        }

        assert_eq!(seen.len(), projects.len());
        assert!(seen.values().all(|&n| n == 1));
    }

    #[test]
    fn test_find_and_locate() {
        let projects = fixture();
        assert_eq!(find_project(&projects, "3").unwrap().id, "3");
        assert!(find_project(&projects, "99").is_none());

        let err = locate_project(&projects, "99").unwrap_err();
        assert!(matches!(err, PortfolioError::NotFound { ref id } if id == "99"));
    }

    #[test]
    fn test_related_projects_excludes_target() {
        let projects = fixture();
        let related = related_projects(&projects, "3");
        assert_eq!(ids(&related), vec!["1", "2", "4"]);

        for id in ["1", "2", "3", "4", "5", "missing"] {
            let related = related_projects(&projects, id);
            assert!(related.len() <= RELATED_LIMIT);
            assert!(related.iter().all(|p| p.id != id));
        }
    }

    #[test]
    fn test_related_projects_with_few_records() {
        let projects = vec![project("1", "Research"), project("2", "Research")];
        assert_eq!(ids(&related_projects(&projects, "1")), vec!["2"]);

        let single = vec![project("1", "Research")];
        assert!(related_projects(&single, "1").is_empty());
        assert!(related_projects(&[], "1").is_empty());
    }

    #[test]
    fn test_featured_projects() {
        let projects = fixture();
        let featured: Vec<&str> = featured_projects(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "2", "3"]);
        assert!(featured_projects(&[]).is_empty());
    }

    #[test]
    fn test_category_label() {
        let categories = vec![
            Category { id: "all".to_string(), label: "All Projects".to_string() },
            Category { id: "3d-design".to_string(), label: "3D Design".to_string() },
        ];
        assert_eq!(category_label(&categories, "3d-design"), Some("3D Design"));
        assert_eq!(category_label(&categories, "nope"), None);
    }
}
