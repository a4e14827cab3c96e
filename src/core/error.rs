//! Custom error types for the application.
//!
//! One enum per domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`TransitionError`] - Page transition interruptions and failures
//! - [`MediaQueryError`] - Responsive switch misuse
//! - [`RegistryError`] - Invalid page registrations
//! - [`ContactError`] - Contact form validation and submission
//! - [`ConfigError`] - Site configuration parsing

use thiserror::Error;

use super::transition::Phase;
use crate::models::RouteKind;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
    /// Path component that cannot be put in a content URL
    #[error("Invalid content path: {0}")]
    InvalidPath(String),
}

/// Reasons a page transition did not complete normally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    /// A newer navigation took over; this run stopped at its next await.
    #[error("transition superseded by a newer navigation")]
    Superseded,
    /// The target route could not be resolved; the previous page was restored.
    #[error("route resolution failed: {0}")]
    RouteFailed(String),
    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: Phase, to: Phase },
}

impl From<FetchError> for TransitionError {
    fn from(err: FetchError) -> Self {
        Self::RouteFailed(err.to_string())
    }
}

/// Responsive switch errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaQueryError {
    /// Component rendered outside `<MediaQueryProvider>`.
    #[error("<{0}> must be rendered inside <MediaQueryProvider>")]
    MissingProvider(&'static str),
    #[error("unsupported media query: {0}")]
    InvalidQuery(String),
}

/// Page registration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("route {0:?} registered twice")]
    DuplicateRoute(RouteKind),
    #[error("route {0:?} has an empty page name")]
    EmptyPageName(RouteKind),
    #[error("route {0:?} is full-width but declares a dark view")]
    DarkViewOnFullPage(RouteKind),
    #[error("route {0:?} uses a split layout but has no dark view")]
    MissingDarkView(RouteKind),
}

/// Contact form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("could not send message: {0}")]
    Network(String),
    #[error("message rejected by server (HTTP {0})")]
    Rejected(u16),
}

/// Site configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid site configuration: {0}")]
pub struct ConfigError(pub String);

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_converts_to_route_failure() {
        let err: TransitionError = FetchError::HttpError(404).into();
        assert_eq!(err, TransitionError::RouteFailed("HTTP error: 404".to_string()));
    }

    #[test]
    fn test_missing_provider_message_names_component() {
        let msg = MediaQueryError::MissingProvider("Media").to_string();
        assert!(msg.contains("<Media>"));
        assert!(msg.contains("MediaQueryProvider"));
    }
}
