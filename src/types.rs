//! Result and request types.

use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome of an API key verification attempt.
///
/// Never an `Err`: an unacceptable key is a normal, structured answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVerification {
    pub valid: bool,
    /// Server-supplied or informational text. Always present when invalid.
    pub message: Option<String>,
}

impl KeyVerification {
    pub fn valid(message: Option<String>) -> Self {
        Self {
            valid: true,
            message,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Outcome of a trial key registration attempt.
///
/// Exactly one of `api_key` / `error` is populated, consistent with
/// `success`. Registration failures (duplicate email, weak password) are
/// routine, so they come back as values rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRequestResponse {
    pub success: bool,
    pub api_key: Option<String>,
    pub error: Option<String>,
}

impl TrialRequestResponse {
    pub fn success(api_key: impl Into<String>) -> Self {
        Self {
            success: true,
            api_key: Some(api_key.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            api_key: None,
            error: Some(error.into()),
        }
    }
}

/// Body of an audio generation request. Serializes to the exact wire JSON
/// expected by both backends' audio endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AudioRequest {
    pub text: String,
    pub service: String,
    pub request_mode: String,
    pub language_code: String,
    pub deck_name: String,
    /// Service-specific voice identifier; shape varies per service.
    pub voice_key: Value,
    /// Free-form service options (speed, pitch, ...).
    pub options: Map<String, Value>,
}

impl AudioRequest {
    pub fn new(
        text: impl Into<String>,
        service: impl Into<String>,
        request_mode: impl Into<String>,
        language_code: impl Into<String>,
        deck_name: impl Into<String>,
        voice_key: Value,
    ) -> Self {
        Self {
            text: text.into(),
            service: service.into(),
            request_mode: request_mode.into(),
            language_code: language_code.into(),
            deck_name: deck_name.into(),
            voice_key,
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: Value) -> Self {
        self.options.insert(name.into(), value);
        self
    }
}
