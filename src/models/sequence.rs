//! Swipe sequences for the mobile layout.
//!
//! A sequence is an ordered list of routes laid out as horizontal sections.
//! Pages are filled in lazily with their attributes as they are visited;
//! until then the section shows the route's display name only. Visited
//! attributes are kept by route, so a page seen before its sequence exists
//! is still loaded once the sequence is built.

use std::collections::HashMap;

use super::{PageAttributes, ProjectSummary, Route};

/// Name of the sequence holding the top-level pages.
pub const MAIN_SEQUENCE: &str = "main";

/// Name of the sequence built from the project listing.
pub const WORK_SEQUENCE: &str = "work";

/// Name of the one-page sequence for a route no other sequence holds.
pub const SINGLE_SEQUENCE: &str = "single";

/// One section of a sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct SequencePage {
    pub route: Route,
    /// Display title shown before the page has been visited
    pub title: String,
    pub attributes: Option<PageAttributes>,
}

impl SequencePage {
    pub fn new(route: Route) -> Self {
        let title = route.display_name();
        Self {
            route,
            title,
            attributes: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.attributes.is_some()
    }
}

/// Ordered list of pages.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    pub name: String,
    pub pages: Vec<SequencePage>,
}

impl Sequence {
    pub fn new(name: impl Into<String>, routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            name: name.into(),
            pages: routes.into_iter().map(SequencePage::new).collect(),
        }
    }

    pub fn position(&self, route: &Route) -> Option<usize> {
        self.pages.iter().position(|p| &p.route == route)
    }

    pub fn contains(&self, route: &Route) -> bool {
        self.position(route).is_some()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// All sequences known to the mobile layout.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceRegistry {
    sequences: Vec<Sequence>,
    visited: HashMap<Route, PageAttributes>,
}

impl Default for SequenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceRegistry {
    /// Registry with only the main sequence.
    pub fn new() -> Self {
        Self {
            sequences: vec![Sequence::new(
                MAIN_SEQUENCE,
                [Route::Home, Route::Work, Route::Contact],
            )],
            visited: HashMap::new(),
        }
    }

    /// Rebuild the work sequence from a project listing.
    ///
    /// Pages already visited, in any sequence or none, start loaded.
    pub fn set_projects(&mut self, projects: &[ProjectSummary]) {
        self.sequences.retain(|s| s.name != WORK_SEQUENCE);

        let pages = projects
            .iter()
            .map(|summary| {
                let mut page = self.visited_page(Route::Project {
                    slug: summary.slug.clone(),
                });
                if !page.is_loaded() {
                    page.title = summary.title.clone();
                }
                page
            })
            .collect();
        self.sequences.push(Sequence {
            name: WORK_SEQUENCE.to_string(),
            pages,
        });
    }

    pub fn get(&self, name: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.name == name)
    }

    /// First sequence containing the route.
    pub fn active_for(&self, route: &Route) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.contains(route))
    }

    /// Sequence to lay out for `route`: the first one containing it, or a
    /// one-page [`SINGLE_SEQUENCE`] when none does.
    pub fn sequence_for(&self, route: &Route) -> Sequence {
        match self.active_for(route) {
            Some(sequence) => sequence.clone(),
            None => Sequence {
                name: SINGLE_SEQUENCE.to_string(),
                pages: vec![self.visited_page(route.clone())],
            },
        }
    }

    /// Section for `route`, taken from its sequence if it has one.
    pub fn page_for(&self, route: &Route) -> SequencePage {
        self.sequences
            .iter()
            .find_map(|s| s.pages.iter().find(|p| &p.route == route))
            .cloned()
            .unwrap_or_else(|| self.visited_page(route.clone()))
    }

    /// Placeholder page, loaded if the route has been visited.
    fn visited_page(&self, route: Route) -> SequencePage {
        let mut page = SequencePage::new(route);
        if let Some(attributes) = self.visited.get(&page.route) {
            page.title = attributes.page_name.clone();
            page.attributes = Some(attributes.clone());
        }
        page
    }

    /// Remember a visited page and store its attributes on every section
    /// showing its route.
    ///
    /// Returns `true` if at least one sequence page was updated.
    pub fn cache(&mut self, attributes: &PageAttributes) -> bool {
        self.visited
            .insert(attributes.route.clone(), attributes.clone());

        let mut updated = false;
        for sequence in &mut self.sequences {
            if let Some(i) = sequence.position(&attributes.route) {
                let page = &mut sequence.pages[i];
                page.title = attributes.page_name.clone();
                page.attributes = Some(attributes.clone());
                updated = true;
            }
        }
        updated
    }
}
