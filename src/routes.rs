//! Client-side route table.
//!
//! Patterns are matched in declaration order; a `:name` segment captures one
//! non-empty path segment. Paths that match nothing resolve to
//! [`Route::NotFound`].

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Portfolio,
    Blog,
    BlogPost { slug: String },
    Contact,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Home,
    About,
    Portfolio,
    Blog,
    BlogPost,
    Contact,
}

const ROUTE_TABLE: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/about", Page::About),
    ("/portfolio", Page::Portfolio),
    ("/blog", Page::Blog),
    ("/blog/:slug", Page::BlogPost),
    ("/contact", Page::Contact),
];

pub const NOT_FOUND_PATH: &str = "/404";

impl Route {
    pub fn recognize(path: &str) -> Self {
        let path = normalize_path(path);

        for (pattern, page) in ROUTE_TABLE {
            if let Some(params) = match_pattern(pattern, &path) {
                return Self::from_page(*page, &params);
            }
        }

        Self::NotFound
    }

    fn from_page(page: Page, params: &[(&str, String)]) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::About => Self::About,
            Page::Portfolio => Self::Portfolio,
            Page::Blog => Self::Blog,
            Page::BlogPost => {
                let slug = params
                    .iter()
                    .find(|(name, _)| *name == "slug")
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default();
                Self::BlogPost { slug }
            }
            Page::Contact => Self::Contact,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Portfolio => "/portfolio".to_string(),
            Self::Blog => "/blog".to_string(),
            Self::BlogPost { slug } => format!("/blog/{slug}"),
            Self::Contact => "/contact".to_string(),
            Self::NotFound => NOT_FOUND_PATH.to_string(),
        }
    }

    pub fn patterns() -> Vec<&'static str> {
        ROUTE_TABLE.iter().map(|(pattern, _)| *pattern).collect()
    }
}

/// Drops the query string, fragment and any trailing slash.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn match_pattern<'p>(pattern: &'p str, path: &str) -> Option<Vec<(&'p str, String)>> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.into_iter().zip(path_segments) {
        match expected.strip_prefix(':') {
            Some(name) => params.push((name, actual.to_string())),
            None if expected == actual => {}
            None => return None,
        }
    }

    Some(params)
}

pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Home", route: Route::Home },
        NavItem { label: "About", route: Route::About },
        NavItem { label: "Portfolio", route: Route::Portfolio },
        NavItem { label: "Blog", route: Route::Blog },
        NavItem { label: "Contact", route: Route::Contact },
    ]
}

/// A nav link is highlighted only on an exact path match.
pub fn is_active(link: &Route, current_path: &str) -> bool {
    link.to_path() == normalize_path(current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_static_route() {
        assert_eq!(Route::recognize("/"), Route::Home);
        assert_eq!(Route::recognize("/about"), Route::About);
        assert_eq!(Route::recognize("/portfolio"), Route::Portfolio);
        assert_eq!(Route::recognize("/blog"), Route::Blog);
        assert_eq!(Route::recognize("/contact"), Route::Contact);
    }

    #[test]
    fn extracts_blog_slug() {
        assert_eq!(
            Route::recognize("/blog/aws-cost-optimization"),
            Route::BlogPost {
                slug: "aws-cost-optimization".to_string()
            }
        );
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(Route::recognize("/about/"), Route::About);
        assert_eq!(Route::recognize("/contact?ref=nav"), Route::Contact);
        assert_eq!(Route::recognize("/blog#latest"), Route::Blog);
        assert_eq!(Route::recognize(""), Route::Home);
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(Route::recognize("/missing"), Route::NotFound);
        assert_eq!(Route::recognize("/blog/a/b"), Route::NotFound);
        assert_eq!(Route::recognize("/about/team"), Route::NotFound);
    }

    #[test]
    fn to_path_round_trips_through_recognize() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Portfolio,
            Route::Blog,
            Route::BlogPost {
                slug: "llm-security-challenges".to_string(),
            },
            Route::Contact,
        ];

        for route in routes {
            assert_eq!(Route::recognize(&route.to_path()), route);
        }
    }

    #[test]
    fn table_is_declared_in_order() {
        assert_eq!(
            Route::patterns(),
            vec!["/", "/about", "/portfolio", "/blog", "/blog/:slug", "/contact"]
        );
    }

    #[test]
    fn active_link_requires_exact_match() {
        assert!(is_active(&Route::Blog, "/blog"));
        assert!(is_active(&Route::Blog, "/blog/"));
        assert!(!is_active(&Route::Blog, "/blog/aws-cost-optimization"));
        assert!(is_active(&Route::Home, "/"));
        assert!(!is_active(&Route::Home, "/about"));
    }

    #[test]
    fn nav_lists_five_pages_ending_with_contact() {
        let items = nav_items();

        assert_eq!(items.len(), 5);
        assert_eq!(items.last().map(|item| item.label), Some("Contact"));
    }
}
