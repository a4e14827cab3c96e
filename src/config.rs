//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site-level settings are read from `assets/site.toml`, embedded at compile
//! time with `include_str!`.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::models::Link;

// =============================================================================
// Site Settings (loaded at compile time)
// =============================================================================

/// Raw site settings file.
const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Site-level settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, used in the document title and menu
    pub title: String,
    pub tagline: String,
    /// Base URL of the shaped CMS JSON
    pub content_base_url: String,
    /// Base URL for relative image sources (image CDN)
    pub image_base_url: String,
    /// Endpoint accepting contact form POSTs
    pub contact_endpoint: String,
    /// Extra links shown in the menu
    pub menu_links: Vec<Link>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            tagline: String::new(),
            content_base_url: "/content".to_string(),
            image_base_url: String::new(),
            contact_endpoint: "/api/contact".to_string(),
            menu_links: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse settings from TOML. Missing keys take their defaults.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Site settings, parsed once.
///
/// Falls back to defaults (with a warning) if the embedded file is invalid.
pub fn site() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(|| {
        SiteConfig::parse(SITE_TOML).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default site config");
            SiteConfig::default()
        })
    })
}

// =============================================================================
// Transition Timing
// =============================================================================

/// Page transition timing (milliseconds).
pub mod transition {
    /// Content fade-out on navigation start.
    pub const FADE_OUT_MS: f64 = 350.0;
    /// Content fade-in once the new page is in place.
    pub const FADE_IN_MS: f64 = 650.0;
    /// Hold before the fade-in starts.
    pub const FADE_IN_DELAY_MS: f64 = 250.0;
    /// Menu slide open/close.
    pub const MENU_SLIDE_MS: f64 = 450.0;
    /// Animation frame interval.
    pub const FRAME_MS: u32 = 16;
}

/// Spring presets.
pub mod springs {
    pub const PANEL_STIFFNESS: f64 = 170.0;
    pub const PANEL_DAMPING: f64 = 1.0;
    pub const SCROLL_STIFFNESS: f64 = 120.0;
    pub const SCROLL_DAMPING: f64 = 1.0;
    /// Largest integration step (seconds).
    pub const MAX_STEP_SECS: f64 = 0.064;
    /// Distance (px) under which a spring counts as at rest.
    pub const REST_DISTANCE: f64 = 0.5;
    /// Velocity (px/s) under which a spring counts as at rest.
    pub const REST_VELOCITY: f64 = 5.0;
}

// =============================================================================
// Layout
// =============================================================================

/// Slide-out menu geometry.
pub mod menu {
    /// Menu panel width in pixels.
    pub const WIDTH_PX: f64 = 320.0;
    /// Overlay opacity when the menu is fully open.
    pub const OVERLAY_MAX_OPACITY: f64 = 0.5;
}

/// Viewport queries.
pub mod breakpoints {
    /// Viewports matching this use the split-panel layout; everything
    /// narrower gets the swipe sequence.
    pub const DESKTOP_QUERY: &str = "(min-width: 769px)";
    /// Desktop viewports with room for the tagline beside the heading.
    pub const WIDE_QUERY: &str = "(min-width: 1280px)";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key prefix for CMS payloads.
    pub const CONTENT_PREFIX: &str = "content:";
}

// =============================================================================
// Contact Form
// =============================================================================

/// Contact form limits.
pub mod contact {
    pub const MAX_MESSAGE_LEN: usize = 5000;
    pub const MAX_NAME_LEN: usize = 200;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_config_parses() {
        let config = SiteConfig::parse(SITE_TOML).unwrap();
        assert!(!config.title.is_empty());
        assert!(!config.content_base_url.is_empty());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = SiteConfig::parse("title = \"Jane Doe\"").unwrap();
        assert_eq!(config.title, "Jane Doe");
        assert_eq!(config.contact_endpoint, "/api/contact");
        assert!(config.menu_links.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(SiteConfig::parse("title = ").is_err());
    }

    #[test]
    fn test_menu_links() {
        let config = SiteConfig::parse(
            r#"
            [[menu_links]]
            label = "GitHub"
            url = "https://github.com/example"
            "#,
        )
        .unwrap();
        assert_eq!(config.menu_links.len(), 1);
        assert_eq!(config.menu_links[0].label, "GitHub");
    }
}
