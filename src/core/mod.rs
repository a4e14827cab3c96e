//! Core logic for the site, independent of the DOM.
//!
//! This module provides:
//! - [`transition`] page transition orchestration ([`Orchestrator`])
//! - [`animation`] and [`easing`] tweens, springs and derived offsets
//! - [`responsive`] media-query switch decisions
//! - [`scroll`] mobile swipe-sequence scroll math
//! - [`content`] CMS provider and route resolution
//! - [`contact`] contact form validation and submission
//! - [`image`] image CDN URLs

pub mod animation;
pub mod contact;
pub mod content;
pub mod easing;
pub mod error;
pub mod image;
pub mod responsive;
pub mod scroll;
pub mod transition;

pub use content::{ContentProvider, HttpContentProvider, resolve_route};
#[cfg(feature = "mock")]
pub use content::MockContentProvider;
pub use transition::{
    CancelSource, CancelToken, Orchestrator, Phase, TransitionDriver, TransitionReport, ran_to_end,
};
