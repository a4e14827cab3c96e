//! Hash-based routing for static hosting.

use std::fmt;

/// Logical pages of the site.
///
/// URL format: `#/work/some-project`. An empty hash is the home page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page: `#/`
    Home,
    /// Project listing: `#/work`
    Work,
    /// Single project: `#/work/{slug}`
    Project {
        /// Project identifier from the CMS
        slug: String,
    },
    /// Contact page: `#/contact`
    Contact,
    /// Anything else
    NotFound {
        /// Unmatched path, without leading slash
        path: String,
    },
}

/// Route kind without parameters, used as a registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Home,
    Work,
    Project,
    Contact,
    NotFound,
}

impl Route {
    /// Parse a URL hash (`#/work/foo`, `/work/foo`, or `work/foo`).
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        Self::from_path(path)
    }

    /// Parse a path such as `/work/foo`. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["work"] => Self::Work,
            ["work", slug] => Self::Project {
                slug: (*slug).to_string(),
            },
            ["contact"] => Self::Contact,
            _ => Self::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    /// Path form of the route, always with a leading slash.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Work => "/work".to_string(),
            Self::Project { slug } => format!("/work/{}", slug),
            Self::Contact => "/contact".to_string(),
            Self::NotFound { path } => format!("/{}", path),
        }
    }

    /// Convert to URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Path segments, e.g. `["work", "foo"]`.
    pub fn segments(&self) -> Vec<String> {
        self.path()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Self::Home => RouteKind::Home,
            Self::Work => RouteKind::Work,
            Self::Project { .. } => RouteKind::Project,
            Self::Contact => RouteKind::Contact,
            Self::NotFound { .. } => RouteKind::NotFound,
        }
    }

    /// Human-readable name used for placeholders and menu entries.
    pub fn display_name(&self) -> String {
        match self {
            Self::Home => "Home".to_string(),
            Self::Work => "Work".to_string(),
            Self::Project { slug } => title_from_slug(slug),
            Self::Contact => "Contact".to_string(),
            Self::NotFound { .. } => "Not Found".to_string(),
        }
    }

    /// Get current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route.
    ///
    /// `pushState` does not emit `hashchange`, so one is dispatched by hand
    /// to keep the router listener as the single source of navigation events.
    pub fn push(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&self.to_hash()),
            );
        }
        if let Ok(event) = web_sys::HashChangeEvent::new("hashchange") {
            let _ = window.dispatch_event(&event);
        }
    }

    /// Replace the current history entry without emitting navigation.
    pub fn replace(&self) {
        crate::utils::dom::replace_hash(&self.to_hash());
    }
}

/// Navigation lifecycle, as published by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    Started(Route),
    Completed(Route),
    /// Target route and the error message
    Failed(Route, String),
}

impl NavigationEvent {
    pub fn route(&self) -> &Route {
        match self {
            Self::Started(route) | Self::Completed(route) | Self::Failed(route, _) => route,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// `"my-cool-project"` -> `"My Cool Project"`.
fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/work"), Route::Work);
        assert_eq!(Route::from_hash("#/work/"), Route::Work);
        assert_eq!(
            Route::from_hash("#/work/zk-dungeon"),
            Route::Project {
                slug: "zk-dungeon".to_string()
            }
        );
        assert_eq!(Route::from_hash("#/contact"), Route::Contact);
        assert_eq!(
            Route::from_hash("#/work/a/b"),
            Route::NotFound {
                path: "work/a/b".to_string()
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Home.to_hash(), "#/");
        assert_eq!(Route::Work.to_hash(), "#/work");
        assert_eq!(
            Route::Project {
                slug: "zk-dungeon".to_string()
            }
            .to_hash(),
            "#/work/zk-dungeon"
        );
        assert_eq!(Route::Contact.to_hash(), "#/contact");
    }

    #[test]
    fn test_hash_survives_reparse() {
        for route in [
            Route::Home,
            Route::Work,
            Route::Contact,
            Route::Project {
                slug: "x".to_string(),
            },
        ] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_segments() {
        assert!(Route::Home.segments().is_empty());
        assert_eq!(
            Route::Project {
                slug: "foo".to_string()
            }
            .segments(),
            vec!["work", "foo"]
        );
    }

    #[test]
    fn test_display_name_from_slug() {
        let route = Route::Project {
            slug: "my-cool_project".to_string(),
        };
        assert_eq!(route.display_name(), "My Cool Project");
        assert_eq!(Route::Work.display_name(), "Work");
    }

    #[test]
    fn test_navigation_event_route() {
        let failed = NavigationEvent::Failed(Route::Contact, "timeout".to_string());
        assert_eq!(failed.route(), &Route::Contact);
        assert_eq!(NavigationEvent::Started(Route::Work).route(), &Route::Work);
    }
}
