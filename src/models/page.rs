//! Page registration and resolved page attributes.
//!
//! Every route kind is registered once with a [`PageSpec`] describing what it
//! renders into each panel. Specs are validated on registration so renderers
//! never have to guess whether a dark view exists.

use std::collections::HashMap;

use leptos::prelude::AnyView;

use super::{Orientation, PageContent, Route, RouteKind};
use crate::core::error::RegistryError;

/// Renders one panel of a page from its content.
pub type PanelView = fn(&PageContent) -> AnyView;

/// Static description of a page, registered per route kind.
#[derive(Clone, Debug)]
pub struct PageSpec {
    pub kind: RouteKind,
    /// Short name used in the document title and menu
    pub page_name: &'static str,
    pub orientation: Orientation,
    /// Page renders its own `<h1>`; the layout skips the site heading
    pub provides_heading: bool,
    pub light_view: PanelView,
    /// Required for split orientations, forbidden for `Full`
    pub dark_view: Option<PanelView>,
}

/// Renderable unit produced by route resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct PageAttributes {
    pub route: Route,
    pub page_name: String,
    pub orientation: Orientation,
    pub provides_heading: bool,
    pub content: PageContent,
}

/// Page specs keyed by route kind.
#[derive(Clone, Debug, Default)]
pub struct PageRegistry {
    specs: HashMap<RouteKind, PageSpec>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page, rejecting duplicates and inconsistent panel setups.
    pub fn register(&mut self, spec: PageSpec) -> Result<(), RegistryError> {
        if spec.page_name.trim().is_empty() {
            return Err(RegistryError::EmptyPageName(spec.kind));
        }
        match (spec.orientation, spec.dark_view.is_some()) {
            (Orientation::Full, true) => return Err(RegistryError::DarkViewOnFullPage(spec.kind)),
            (Orientation::Left | Orientation::Right, false) => {
                return Err(RegistryError::MissingDarkView(spec.kind));
            }
            _ => {}
        }
        if self.specs.contains_key(&spec.kind) {
            return Err(RegistryError::DuplicateRoute(spec.kind));
        }
        self.specs.insert(spec.kind, spec);
        Ok(())
    }

    /// Builder-style registration.
    pub fn with(mut self, spec: PageSpec) -> Result<Self, RegistryError> {
        self.register(spec)?;
        Ok(self)
    }

    pub fn get(&self, kind: RouteKind) -> Option<&PageSpec> {
        self.specs.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Combine a route with its fetched content into page attributes.
    ///
    /// Project pages use the project title as their page name.
    pub fn attributes(&self, route: &Route, content: PageContent) -> Option<PageAttributes> {
        let spec = self.get(route.kind())?;
        let page_name = match &content {
            PageContent::Project(project) => project.title.clone(),
            _ => spec.page_name.to_string(),
        };
        Some(PageAttributes {
            route: route.clone(),
            page_name,
            orientation: spec.orientation,
            provides_heading: spec.provides_heading,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::IntoAny;

    use super::*;
    use crate::models::Project;

    fn stub(_: &PageContent) -> AnyView {
        ().into_any()
    }

    fn spec(kind: RouteKind, orientation: Orientation, dark: bool) -> PageSpec {
        PageSpec {
            kind,
            page_name: "Page",
            orientation,
            provides_heading: false,
            light_view: stub,
            dark_view: dark.then_some(stub as PanelView),
        }
    }

    #[test]
    fn test_register_valid_specs() {
        let registry = PageRegistry::new()
            .with(spec(RouteKind::Home, Orientation::Right, true))
            .and_then(|r| r.with(spec(RouteKind::Contact, Orientation::Full, false)))
            .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_rejects_duplicate() {
        let mut registry = PageRegistry::new();
        registry
            .register(spec(RouteKind::Work, Orientation::Left, true))
            .unwrap();
        assert_eq!(
            registry.register(spec(RouteKind::Work, Orientation::Left, true)),
            Err(RegistryError::DuplicateRoute(RouteKind::Work))
        );
    }

    #[test]
    fn test_rejects_dark_view_on_full_page() {
        let mut registry = PageRegistry::new();
        assert_eq!(
            registry.register(spec(RouteKind::Contact, Orientation::Full, true)),
            Err(RegistryError::DarkViewOnFullPage(RouteKind::Contact))
        );
    }

    #[test]
    fn test_rejects_split_page_without_dark_view() {
        let mut registry = PageRegistry::new();
        assert_eq!(
            registry.register(spec(RouteKind::Home, Orientation::Right, false)),
            Err(RegistryError::MissingDarkView(RouteKind::Home))
        );
    }

    #[test]
    fn test_rejects_empty_name() {
        let mut registry = PageRegistry::new();
        let mut s = spec(RouteKind::Home, Orientation::Right, true);
        s.page_name = "  ";
        assert_eq!(
            registry.register(s),
            Err(RegistryError::EmptyPageName(RouteKind::Home))
        );
    }

    #[test]
    fn test_attributes_use_project_title() {
        let registry = PageRegistry::new()
            .with(spec(RouteKind::Project, Orientation::Left, true))
            .unwrap();
        let route = Route::Project {
            slug: "p".to_string(),
        };
        let content = PageContent::Project(Project {
            slug: "p".to_string(),
            title: "Project P".to_string(),
            body: String::new(),
            images: vec![],
            tags: vec![],
            links: vec![],
        });
        let attrs = registry.attributes(&route, content).unwrap();
        assert_eq!(attrs.page_name, "Project P");
        assert_eq!(attrs.orientation, Orientation::Left);
        assert!(registry.attributes(&Route::Home, PageContent::NotFound).is_none());
    }
}
