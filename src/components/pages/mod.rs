//! Page views and the page registry.
//!
//! Each page provides a light view and, unless it is full-bleed, a dark
//! view. [`registry`] registers them all; registration validates that the
//! views match each page's orientation.

mod contact;
mod home;
mod image;
mod not_found;
mod project;
mod work;

use leptos::prelude::AnyView;

use crate::core::error::RegistryError;
use crate::models::{Orientation, PageAttributes, PageRegistry, PageSpec, PanelView, RouteKind};

/// Which half of the split layout to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Light,
    Dark,
}

/// All pages of the site.
pub fn registry() -> Result<PageRegistry, RegistryError> {
    PageRegistry::new()
        .with(PageSpec {
            kind: RouteKind::Home,
            page_name: "Home",
            orientation: Orientation::Right,
            provides_heading: true,
            light_view: home::light,
            dark_view: Some(home::dark as PanelView),
        })?
        .with(PageSpec {
            kind: RouteKind::Work,
            page_name: "Work",
            orientation: Orientation::Left,
            provides_heading: false,
            light_view: work::light,
            dark_view: Some(work::dark as PanelView),
        })?
        .with(PageSpec {
            kind: RouteKind::Project,
            page_name: "Project",
            orientation: Orientation::Left,
            provides_heading: true,
            light_view: project::light,
            dark_view: Some(project::dark as PanelView),
        })?
        .with(PageSpec {
            kind: RouteKind::Contact,
            page_name: "Contact",
            orientation: Orientation::Full,
            provides_heading: true,
            light_view: contact::light,
            dark_view: None,
        })?
        .with(PageSpec {
            kind: RouteKind::NotFound,
            page_name: "Not Found",
            orientation: Orientation::Full,
            provides_heading: false,
            light_view: not_found::light,
            dark_view: None,
        })
}

/// Render one panel of a resolved page. `None` for the dark panel of a
/// full-bleed page.
pub fn render_panel(pages: &PageRegistry, page: &PageAttributes, panel: Panel) -> Option<AnyView> {
    let spec = pages.get(page.route.kind())?;
    match panel {
        Panel::Light => Some((spec.light_view)(&page.content)),
        Panel::Dark => spec.dark_view.map(|view| view(&page.content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageContent;
    use crate::models::Route;

    #[test]
    fn test_registry_covers_every_route() {
        let pages = registry().unwrap();
        assert_eq!(pages.len(), 5);
        for kind in [
            RouteKind::Home,
            RouteKind::Work,
            RouteKind::Project,
            RouteKind::Contact,
            RouteKind::NotFound,
        ] {
            assert!(pages.get(kind).is_some(), "{:?} not registered", kind);
        }
    }

    #[test]
    fn test_home_to_work_swaps_orientation() {
        let pages = registry().unwrap();
        assert_eq!(pages.get(RouteKind::Home).unwrap().orientation, Orientation::Right);
        assert_eq!(pages.get(RouteKind::Work).unwrap().orientation, Orientation::Left);
    }

    #[test]
    fn test_full_pages_have_no_dark_panel() {
        let pages = registry().unwrap();
        let page = pages
            .attributes(&Route::NotFound { path: "x".to_string() }, PageContent::NotFound)
            .unwrap();
        assert!(render_panel(&pages, &page, Panel::Dark).is_none());
    }
}
