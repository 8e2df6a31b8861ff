//! The Language Tools client.

use std::fs;
use std::path::Path;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::Error as _;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::trial;
use crate::types::{AudioRequest, KeyVerification, TrialRequestResponse};
use crate::{Error, Result};

/// Client for the Language Tools account/audio API.
///
/// Holds the API key and the verification state. All operations are
/// synchronous and blocking; the struct is not designed for concurrent
/// mutation, so callers invoking it from multiple threads must serialize
/// access themselves.
pub struct LanguageToolsClient {
    http: Client,
    config: ClientConfig,
    api_key: Option<String>,
    /// `Some(backend)` iff the current key verified against that backend.
    /// Replacing the key resets this to `None`.
    verified_backend: Option<Backend>,
}

impl LanguageToolsClient {
    /// Create a client. No timeout is configured; requests inherit the
    /// transport default.
    pub fn new(config: ClientConfig, api_key: Option<String>) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            config,
            api_key,
            verified_backend: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Replace the stored key. Always invalidates prior verification.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
        self.verified_backend = None;
    }

    /// Backend the current key verified against, if any.
    pub fn verified_backend(&self) -> Option<Backend> {
        self.verified_backend
    }

    /// Whether the client operates in plus mode (a non-empty key is set).
    pub fn plus_mode(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Verify a candidate key, vocab backend first, falling back to the
    /// primary backend.
    ///
    /// On success the key is stored and the winning backend recorded; on an
    /// invalid key the prior key and verification state are left untouched.
    /// Transport failures propagate as errors.
    pub fn verify_api_key(&mut self, api_key: &str) -> Result<KeyVerification> {
        let response = Backend::Vocab
            .get(&self.http, &self.config, "/account", api_key)
            .send()?;
        if response.status() == StatusCode::OK {
            info!(backend = "vocab", "API key verified");
            self.api_key = Some(api_key.to_string());
            self.verified_backend = Some(Backend::Vocab);
            return Ok(KeyVerification::valid(None));
        }

        let response = Backend::Primary
            .get(&self.http, &self.config, "/account", api_key)
            .send()?;
        if response.status() == StatusCode::OK {
            let body = response.text()?;
            let data: Value = serde_json::from_str(&body)?;
            // 200 with an error field still means the key was rejected
            if let Some(message) = data.get("error") {
                info!(backend = "primary", "API key rejected");
                return Ok(KeyVerification::invalid(render_value(message)));
            }
            info!(backend = "primary", "API key verified");
            self.api_key = Some(api_key.to_string());
            self.verified_backend = Some(Backend::Primary);
            return Ok(KeyVerification::valid(Some(format!("api key: {}", api_key))));
        }

        info!("API key not valid on either backend");
        Ok(KeyVerification::invalid("api key not valid"))
    }

    /// Precondition for the authenticated operations: a key must be set, and
    /// an unverified key gets one synchronous verification attempt. An
    /// invalid result is not an error here; the subsequent request reports
    /// the rejection. Returns the stored key for the caller's request.
    pub fn ensure_key_verified(&mut self) -> Result<String> {
        let api_key = self.api_key.clone().ok_or(Error::ApiKeyNotSet)?;
        if self.verified_backend.is_none() {
            self.verify_api_key(&api_key)?;
        }
        Ok(api_key)
    }

    /// Fetch account info from the active backend as an opaque JSON object.
    pub fn account_info(&mut self) -> Result<Map<String, Value>> {
        let api_key = self.ensure_key_verified()?;
        let backend = self.verified_backend.unwrap_or(Backend::Primary);

        let response = backend
            .get(&self.http, &self.config, "/account", &api_key)
            .send()?;
        let body = response.text()?;
        let data = serde_json::from_str(&body)?;
        Ok(data)
    }

    /// Request generated audio and write the raw response bytes to `path`,
    /// overwriting any existing file. A non-200 response fails before the
    /// file is touched.
    pub fn generate_audio(&mut self, request: &AudioRequest, path: &Path) -> Result<()> {
        let api_key = self.ensure_key_verified()?;
        let backend = self.verified_backend.unwrap_or(Backend::Primary);

        let url = backend.audio_url(&self.config);
        info!(
            url = url.as_str(),
            service = request.service.as_str(),
            "requesting audio"
        );
        let response = backend
            .post_audio(&self.http, &self.config, request, &api_key)
            .send()?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            error!(
                http_status = status.as_u16(),
                body = body.as_str(),
                "audio request failed"
            );
            return Err(Error::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes()?;
        fs::write(path, &bytes)?;
        info!(bytes = bytes.len(), path = %path.display(), "audio received");
        Ok(())
    }

    /// Register for a trial key with an email and password.
    ///
    /// Does not touch the stored key: apply the returned key through
    /// [`LanguageToolsClient::set_api_key`] if desired. Registration
    /// failures come back as a failure result, not an error.
    pub fn request_trial_key(&self, email: &str, password: &str) -> Result<TrialRequestResponse> {
        info!(email, "requesting trial key");

        let mut payload = trial::build_trial_request_payload(email, &self.config.client_uuid);
        payload.insert("email".into(), Value::String(email.into()));
        payload.insert("password".into(), Value::String(password.into()));

        let url = format!("{}/register_trial", self.config.vocab_base_url);
        let mut builder = self.http.post(url).json(&Value::Object(payload));
        for (name, value) in trial::trial_request_headers(&self.config.client_version) {
            builder = builder.header(name, value);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;
        let data: Map<String, Value> = serde_json::from_str(&body)?;
        info!(http_status = status.as_u16(), "trial registration response");

        if status == StatusCode::CREATED {
            // a 201 without an api_key field is a malformed response, not a
            // silent success
            let api_key = data.get("api_key").and_then(Value::as_str).ok_or_else(|| {
                Error::Serialization(serde_json::Error::custom(
                    "trial response missing api_key field",
                ))
            })?;
            Ok(TrialRequestResponse::success(api_key))
        } else {
            let details: Vec<String> = data
                .iter()
                .map(|(key, value)| format!("{}: {}", key, render_value(value)))
                .collect();
            Ok(TrialRequestResponse::failure(format!(
                "<b>error:</b> {}",
                details.join(", ")
            )))
        }
    }
}

/// Render a JSON value for a human-readable message, without quoting strings.
fn render_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
