//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and navigation lifecycle (main entry point)
//! - [`transition`] - DOM driver and context for page transitions
//! - [`responsive`] - Media query switch (`<Media>`, `<MediaQueryProvider>`)
//! - [`layout`] - Desktop split-panel layout and slide-out menu
//! - [`mobile`] - Mobile swipe-sequence layout
//! - [`pages`] - Page views and the page registry
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod layout;
pub mod mobile;
pub mod pages;
pub mod responsive;
pub mod router;
pub mod transition;
