//! CMS content provider and route resolution.
//!
//! The provider serves shaped JSON; [`resolve_route`] turns a route into
//! [`PageAttributes`] by fetching what that page needs and sanitizing its
//! rich text.

use super::error::{FetchError, TransitionError};
use crate::config::cache::CONTENT_PREFIX;
use crate::models::{
    ContactPage, Homepage, PageAttributes, PageContent, PageRegistry, Project, ProjectSummary,
    Route,
};
use crate::utils::{fetch_json_cached, sanitize_html};

/// Source of page content.
#[allow(async_fn_in_trait)]
pub trait ContentProvider {
    async fn homepage(&self) -> Result<Homepage, FetchError>;
    async fn projects(&self) -> Result<Vec<ProjectSummary>, FetchError>;
    async fn project(&self, slug: &str) -> Result<Project, FetchError>;
    async fn contact_page(&self) -> Result<ContactPage, FetchError>;
}

// =============================================================================
// HTTP provider
// =============================================================================

/// Fetches `{base}/*.json`, cached for the browser session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpContentProvider {
    base_url: String,
}

impl HttpContentProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL and cache key for a content path like `projects/foo.json`.
    fn endpoint(&self, path: &str) -> (String, String) {
        (
            format!("{}/{}", self.base_url, path),
            format!("{}{}", CONTENT_PREFIX, path),
        )
    }
}

/// Content path for a project slug.
///
/// Slugs are limited to ASCII letters, digits, `-` and `_` so that a hash
/// like `#/work/a?x=1` can never reach a different URL.
fn project_path(slug: &str) -> Result<String, FetchError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(format!("projects/{}.json", slug))
    } else {
        Err(FetchError::InvalidPath(slug.to_string()))
    }
}

impl ContentProvider for HttpContentProvider {
    async fn homepage(&self) -> Result<Homepage, FetchError> {
        let (url, key) = self.endpoint("homepage.json");
        fetch_json_cached(&url, &key).await
    }

    async fn projects(&self) -> Result<Vec<ProjectSummary>, FetchError> {
        let (url, key) = self.endpoint("projects.json");
        fetch_json_cached(&url, &key).await
    }

    async fn project(&self, slug: &str) -> Result<Project, FetchError> {
        let (url, key) = self.endpoint(&project_path(slug)?);
        fetch_json_cached(&url, &key).await
    }

    async fn contact_page(&self) -> Result<ContactPage, FetchError> {
        let (url, key) = self.endpoint("contact.json");
        fetch_json_cached(&url, &key).await
    }
}

// =============================================================================
// Fixture provider
// =============================================================================

/// In-memory content for tests and offline development (`mock` feature).
#[cfg(any(test, feature = "mock"))]
#[derive(Clone, Debug)]
pub struct MockContentProvider {
    pub homepage: Homepage,
    pub projects: Vec<Project>,
    pub contact: ContactPage,
}

#[cfg(any(test, feature = "mock"))]
impl Default for MockContentProvider {
    fn default() -> Self {
        use crate::models::Link;

        let project = |slug: &str, title: &str| Project {
            slug: slug.to_string(),
            title: title.to_string(),
            body: format!("<p>{} case study.</p>", title),
            images: vec![],
            tags: vec!["design".to_string()],
            links: vec![],
        };

        Self {
            homepage: Homepage {
                title: "Hello".to_string(),
                body: "<p>I build interfaces.</p>".to_string(),
                portrait: None,
                links: vec![Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                }],
            },
            projects: vec![
                project("signal-garden", "Signal Garden"),
                project("quiet-mode", "Quiet Mode"),
            ],
            contact: ContactPage {
                title: "Say hello".to_string(),
                body: "<p>Write me a note.</p>".to_string(),
                links: vec![],
            },
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl ContentProvider for MockContentProvider {
    async fn homepage(&self) -> Result<Homepage, FetchError> {
        Ok(self.homepage.clone())
    }

    async fn projects(&self) -> Result<Vec<ProjectSummary>, FetchError> {
        Ok(self
            .projects
            .iter()
            .map(|p| ProjectSummary {
                slug: p.slug.clone(),
                title: p.title.clone(),
                summary: String::new(),
                thumbnail: p.images.first().cloned(),
                tags: p.tags.clone(),
            })
            .collect())
    }

    async fn project(&self, slug: &str) -> Result<Project, FetchError> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(FetchError::HttpError(404))
    }

    async fn contact_page(&self) -> Result<ContactPage, FetchError> {
        Ok(self.contact.clone())
    }
}

// =============================================================================
// Route resolution
// =============================================================================

/// Fetch the content a route needs and build its page attributes.
pub async fn resolve_route<P: ContentProvider>(
    provider: &P,
    registry: &PageRegistry,
    route: &Route,
) -> Result<PageAttributes, TransitionError> {
    let content = match route {
        Route::Home => {
            let mut page = provider.homepage().await?;
            page.body = sanitize_html(&page.body);
            PageContent::Home(page)
        }
        Route::Work => PageContent::Work(provider.projects().await?),
        Route::Project { slug } => {
            let mut project = provider.project(slug).await?;
            project.body = sanitize_html(&project.body);
            PageContent::Project(project)
        }
        Route::Contact => {
            let mut page = provider.contact_page().await?;
            page.body = sanitize_html(&page.body);
            PageContent::Contact(page)
        }
        Route::NotFound { .. } => PageContent::NotFound,
    };

    registry
        .attributes(route, content)
        .ok_or_else(|| TransitionError::RouteFailed(format!("no page registered for {}", route)))
}

#[cfg(test)]
mod tests {
    use leptos::prelude::{AnyView, IntoAny};

    use super::*;
    use crate::models::{Orientation, PageSpec, PanelView, RouteKind};

    fn stub(_: &PageContent) -> AnyView {
        ().into_any()
    }

    fn registry() -> PageRegistry {
        let mut registry = PageRegistry::new();
        for (kind, orientation) in [
            (RouteKind::Home, Orientation::Right),
            (RouteKind::Work, Orientation::Left),
            (RouteKind::Project, Orientation::Left),
            (RouteKind::Contact, Orientation::Full),
        ] {
            registry
                .register(PageSpec {
                    kind,
                    page_name: "Page",
                    orientation,
                    provides_heading: false,
                    light_view: stub,
                    dark_view: (orientation != Orientation::Full).then_some(stub as PanelView),
                })
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_endpoint_and_cache_key() {
        let provider = HttpContentProvider::new("https://cms.example.com/site/");
        let (url, key) = provider.endpoint("projects/foo.json");
        assert_eq!(url, "https://cms.example.com/site/projects/foo.json");
        assert_eq!(key, "content:projects/foo.json");
    }

    #[test]
    fn test_project_path_rejects_url_syntax() {
        assert_eq!(
            project_path("signal-garden_2").unwrap(),
            "projects/signal-garden_2.json"
        );
        for slug in ["a?x=1", "a#b", "../secrets", "a%2F", ""] {
            assert_eq!(
                project_path(slug),
                Err(FetchError::InvalidPath(slug.to_string())),
                "slug {:?}",
                slug
            );
        }
    }

    #[tokio::test]
    async fn test_http_provider_refuses_bad_slug_before_fetching() {
        let provider = HttpContentProvider::new("https://cms.example.com");
        assert_eq!(
            provider.project("a?x=1").await.unwrap_err(),
            FetchError::InvalidPath("a?x=1".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_project_sanitizes_body() {
        let mut provider = MockContentProvider::default();
        provider.projects[0].body = "<p>ok</p><script>x()</script>".to_string();
        let route = Route::Project {
            slug: "signal-garden".to_string(),
        };

        let attrs = resolve_route(&provider, &registry(), &route).await.unwrap();

        assert_eq!(attrs.page_name, "Signal Garden");
        assert_eq!(attrs.orientation, Orientation::Left);
        match attrs.content {
            PageContent::Project(p) => assert_eq!(p.body, "<p>ok</p>"),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_unknown_project_fails() {
        let provider = MockContentProvider::default();
        let route = Route::Project {
            slug: "missing".to_string(),
        };
        let err = resolve_route(&provider, &registry(), &route)
            .await
            .unwrap_err();
        assert_eq!(err, TransitionError::RouteFailed("HTTP error: 404".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_unregistered_route_fails() {
        let provider = MockContentProvider::default();
        let route = Route::NotFound {
            path: "nope".to_string(),
        };
        assert!(matches!(
            resolve_route(&provider, &registry(), &route).await,
            Err(TransitionError::RouteFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_work_lists_projects() {
        let provider = MockContentProvider::default();
        let attrs = resolve_route(&provider, &registry(), &Route::Work)
            .await
            .unwrap();
        match attrs.content {
            PageContent::Work(list) => assert_eq!(list.len(), 2),
            other => panic!("unexpected content {:?}", other),
        }
    }
}
