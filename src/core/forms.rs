//! Contact form and event tracking payloads.
//!
//! Validation is shared by the browser (pre-submit feedback) and the
//! server (authoritative check in `core::api`). Errors are collected per
//! field instead of stopping at the first one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

pub const CONTACT_SUCCESS: &str = "Contact form submitted successfully!";
pub const CONTACT_FAILURE: &str = "Missing or invalid fields. Failed to submit contact form.";
pub const TRACK_SUCCESS: &str = "Event tracked successfully!";
pub const TRACK_FAILURE: &str = "Missing or invalid fields. Failed to track event.";
pub const TRACK_PROPERTIES_FAILURE: &str = "Invalid properties format. Failed to track event.";
/// Shown when the request never produced a server answer
pub const NETWORK_FAILURE: &str = "Something went wrong. Please try again later.";

/// Contact form field errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name must be less than 100 characters")]
    NameTooLong,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Message must be less than 1000 characters")]
    MessageTooLong,
}

impl ContactError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ContactError::NameTooShort | ContactError::NameTooLong => "name",
            ContactError::InvalidEmail => "email",
            ContactError::MessageTooShort | ContactError::MessageTooLong => "message",
        }
    }
}

/// Tracking payload errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("Event name is required")]
    MissingEvent,
    #[error("Invalid JSON format for properties")]
    InvalidPropertiesJson,
    #[error("Properties must be a JSON object")]
    PropertiesNotObject,
}

impl TrackError {
    pub fn field(&self) -> &'static str {
        match self {
            TrackError::MissingEvent => "event",
            TrackError::InvalidPropertiesJson | TrackError::PropertiesNotObject => "properties",
        }
    }
}

/// Error messages grouped by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages for `field`, empty when the field is fine
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<ContactError> for FieldErrors {
    fn from(error: ContactError) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(error.field(), error.to_string());
        errors
    }
}

impl From<TrackError> for FieldErrors {
    fn from(error: TrackError) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(error.field(), error.to_string());
        errors
    }
}

/// Outcome of a form submission, as returned by the JSON endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

impl FormState {
    pub fn succeeded(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            errors: FieldErrors::new(),
        }
    }

    pub fn failed(message: &str, errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            errors,
        }
    }

    /// Nothing submitted yet
    pub fn is_idle(&self) -> bool {
        !self.success && self.message.is_none() && self.errors.is_empty()
    }
}

/// Body of `POST /api/contact`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub client_slug: Option<String>,
}

/// A contact request that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub client_slug: Option<String>,
}

impl ContactRequest {
    /// Checks every field and returns all problems at once
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut reject = |error: ContactError| errors.add(error.field(), error.to_string());

        let name = self.name.trim();
        let name_len = name.chars().count();
        if name_len < NAME_MIN_CHARS {
            reject(ContactError::NameTooShort);
        } else if name_len > NAME_MAX_CHARS {
            reject(ContactError::NameTooLong);
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            reject(ContactError::InvalidEmail);
        }

        let message = self.message.trim();
        let message_len = message.chars().count();
        if message_len < MESSAGE_MIN_CHARS {
            reject(ContactError::MessageTooShort);
        } else if message_len > MESSAGE_MAX_CHARS {
            reject(ContactError::MessageTooLong);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: non_blank(self.phone.as_deref()),
            message: message.to_string(),
            client_slug: non_blank(self.client_slug.as_deref()),
        })
    }
}

/// Body of `POST /api/track`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackRequest {
    pub event: String,
    /// A JSON object, or a string containing one
    pub properties: Option<Value>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

/// A tracking request that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackEvent {
    pub event: String,
    pub properties: Option<Map<String, Value>>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

/// Rejected tracking request: headline message plus field errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRejection {
    pub message: &'static str,
    pub errors: FieldErrors,
}

impl From<TrackRejection> for FormState {
    fn from(rejection: TrackRejection) -> Self {
        FormState::failed(rejection.message, rejection.errors)
    }
}

impl TrackRequest {
    /// Unparsable property strings are rejected before anything else,
    /// with their own headline message
    pub fn validate(&self) -> Result<TrackEvent, TrackRejection> {
        let properties = match self.parse_properties() {
            Ok(properties) => properties,
            Err(TrackError::InvalidPropertiesJson) => {
                return Err(TrackRejection {
                    message: TRACK_PROPERTIES_FAILURE,
                    errors: TrackError::InvalidPropertiesJson.into(),
                });
            }
            Err(other) => {
                let mut errors = FieldErrors::from(other);
                if self.event.trim().is_empty() {
                    let missing = TrackError::MissingEvent;
                    errors.add(missing.field(), missing.to_string());
                }
                return Err(TrackRejection {
                    message: TRACK_FAILURE,
                    errors,
                });
            }
        };

        let event = self.event.trim();
        if event.is_empty() {
            return Err(TrackRejection {
                message: TRACK_FAILURE,
                errors: TrackError::MissingEvent.into(),
            });
        }

        Ok(TrackEvent {
            event: event.to_string(),
            properties,
            user_id: non_blank(self.user_id.as_deref()),
            session_id: non_blank(self.session_id.as_deref()),
        })
    }

    fn parse_properties(&self) -> Result<Option<Map<String, Value>>, TrackError> {
        match &self.properties {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map.clone())),
            Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
            Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => Ok(Some(map)),
                Ok(_) => Err(TrackError::PropertiesNotObject),
                Err(_) => Err(TrackError::InvalidPropertiesJson),
            },
            Some(_) => Err(TrackError::PropertiesNotObject),
        }
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain
/// without empty labels, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
