//! Contact form validation and submission.

use std::sync::LazyLock;

use gloo_net::http::Request;
use regex::Regex;
use serde::Serialize;

use super::error::ContactError;
use crate::config::contact::{MAX_MESSAGE_LEN, MAX_NAME_LEN};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Message posted to the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trimmed copy, checked field by field in display order.
    pub fn validate(&self) -> Result<Self, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(invalid("name", "required"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(invalid("name", "too long"));
        }
        if email.is_empty() {
            return Err(invalid("email", "required"));
        }
        if !EMAIL.is_match(email) {
            return Err(invalid("email", "not a valid address"));
        }
        if message.is_empty() {
            return Err(invalid("message", "required"));
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(invalid("message", "too long"));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ContactError {
    ContactError::Invalid { field, reason }
}

/// Form submission state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Validate and POST a message as JSON.
pub async fn submit(endpoint: &str, message: &ContactMessage) -> Result<(), ContactError> {
    let message = message.validate()?;

    let response = Request::post(endpoint)
        .json(&message)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if !response.ok() {
        tracing::warn!(status = response.status(), "contact message rejected");
        return Err(ContactError::Rejected(response.status()));
    }

    tracing::info!("contact message sent");
    Ok(())
}
