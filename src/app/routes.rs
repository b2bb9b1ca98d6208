use crate::domain::model::NavigationItem;
use std::fmt;

pub const ROUTE_PATTERNS: [&str; 7] = [
    "/",
    "/about",
    "/portfolio",
    "/research",
    "/services",
    "/contact",
    "/project/:id",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Portfolio,
    Research,
    Services,
    Contact,
    ProjectDetail(String),
}

impl Route {
    /// Matches a path against the route table. A trailing slash is ignored;
    /// anything unmatched is `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        match path {
            "" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/portfolio" => Some(Route::Portfolio),
            "/research" => Some(Route::Research),
            "/services" => Some(Route::Services),
            "/contact" => Some(Route::Contact),
            _ => path
                .strip_prefix("/project/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::ProjectDetail(id.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Research => "/research".to_string(),
            Route::Services => "/services".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::ProjectDetail(id) => format!("/project/{}", id),
        }
    }

    /// Navigation entries are highlighted on exact path match only.
    pub fn is_active(&self, item: &NavigationItem) -> bool {
        item.path == self.path()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/about"), Some(Route::About));
        assert_eq!(Route::parse("/portfolio/"), Some(Route::Portfolio));
        assert_eq!(Route::parse("/research"), Some(Route::Research));
        assert_eq!(Route::parse("/services"), Some(Route::Services));
        assert_eq!(Route::parse("/contact?ref=nav"), Some(Route::Contact));
    }

    #[test]
    fn test_parse_project_route() {
        assert_eq!(Route::parse("/project/3"), Some(Route::ProjectDetail("3".to_string())));
        assert_eq!(Route::parse("/project/3/"), Some(Route::ProjectDetail("3".to_string())));
        assert_eq!(Route::parse("/project/"), None);
        assert_eq!(Route::parse("/project/3/extra"), None);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/blog"), None);
        assert_eq!(Route::parse("/About"), None);
    }

    #[test]
    fn test_every_route_round_trips_through_its_path() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Portfolio,
            Route::Research,
            Route::Services,
            Route::Contact,
            Route::ProjectDetail("42".to_string()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()));
        }
    }

    #[test]
    fn test_active_navigation_item() {
        let item = NavigationItem {
            label: "Portfolio".to_string(),
            path: "/portfolio".to_string(),
        };
        assert!(Route::Portfolio.is_active(&item));
        assert!(!Route::ProjectDetail("1".to_string()).is_active(&item));
    }
}
