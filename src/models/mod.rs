//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`], [`RouteKind`] - Hash-based navigation
//! - [`Orientation`], [`PanelPlacement`] - Split-panel geometry
//! - [`LayoutState`], [`LayoutAction`], [`reduce`] - Layout/menu state
//! - [`PageSpec`], [`PageRegistry`], [`PageAttributes`] - Page registration
//! - [`Sequence`], [`SequenceRegistry`] - Mobile swipe order
//! - CMS payloads ([`Homepage`], [`Project`], ...)

mod content;
mod layout;
mod orientation;
mod page;
mod route;
mod sequence;

pub use content::{
    ContactPage, Dimensions, Homepage, Image, Link, PageContent, Project, ProjectSummary,
};
pub use layout::{LayoutAction, LayoutState, reduce};
pub use orientation::{Orientation, PanelPlacement, Side};
pub use page::{PageAttributes, PageRegistry, PageSpec, PanelView};
pub use route::{NavigationEvent, Route, RouteKind};
pub use sequence::{
    MAIN_SEQUENCE, SINGLE_SEQUENCE, Sequence, SequencePage, SequenceRegistry, WORK_SEQUENCE,
};
