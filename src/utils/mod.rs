//! Utility modules for browser APIs and networking.
//!
//! Provides:
//! - [`cache`] - sessionStorage cache for CMS payloads
//! - [`dom`] - window, storage, title and scroll-lock helpers
//! - [`fetch_json_cached`] - cached JSON fetching with timeout
//! - [`frame`] - frame-paced tween/spring loops
//! - [`sanitize_html`] - rich-text sanitization

pub mod cache;
pub mod dom;
mod fetch;
pub mod frame;
mod html;

pub use fetch::fetch_json_cached;
pub use html::sanitize_html;
