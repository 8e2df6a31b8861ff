//! Client configuration.

use std::env;

/// Default URL of the primary (cloudlanguagetools) API.
pub const DEFAULT_BASE_URL: &str = "https://cloudlanguagetools-api.vocab.ai";

/// Default URL of the vocab API.
pub const DEFAULT_VOCAB_BASE_URL: &str = "https://app.vocab.ai/languagetools-api/v3";

/// Environment variable overriding the primary base URL in [`ClientConfig::from_env`].
pub const BASE_URL_ENV_VAR: &str = "LANGUAGETOOLS_BASE_URL";

/// Environment variable overriding the vocab base URL in [`ClientConfig::from_env`].
pub const VOCAB_BASE_URL_ENV_VAR: &str = "LANGUAGETOOLS_VOCAB_BASE_URL";

/// Static configuration for [`crate::LanguageToolsClient`].
///
/// Resolved once at construction; the client never re-reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the primary backend.
    pub base_url: String,
    /// Base URL of the vocab backend. Also hosts trial registration.
    pub vocab_base_url: String,
    /// Version string reported to the backends.
    pub client_version: String,
    /// Stable per-install identifier supplied by the host application.
    pub client_uuid: String,
}

impl ClientConfig {
    /// Configuration with the documented default base URLs.
    pub fn new(client_version: impl Into<String>, client_uuid: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            vocab_base_url: DEFAULT_VOCAB_BASE_URL.to_string(),
            client_version: client_version.into(),
            client_uuid: client_uuid.into(),
        }
    }

    /// Like [`ClientConfig::new`], but applies the two URL override
    /// environment variables when present. The variables are read exactly
    /// once, here.
    pub fn from_env(client_version: impl Into<String>, client_uuid: impl Into<String>) -> Self {
        let mut config = Self::new(client_version, client_uuid);
        if let Ok(url) = env::var(BASE_URL_ENV_VAR) {
            config.base_url = url;
        }
        if let Ok(url) = env::var(VOCAB_BASE_URL_ENV_VAR) {
            config.vocab_base_url = url;
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_vocab_base_url(mut self, url: impl Into<String>) -> Self {
        self.vocab_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("1.0", "uuid-1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.vocab_base_url, DEFAULT_VOCAB_BASE_URL);
        assert_eq!(config.client_version, "1.0");
        assert_eq!(config.client_uuid, "uuid-1");
    }

    #[test]
    fn env_overrides_resolved_once() {
        // the only test touching these variables, so no cross-test races
        env::set_var(BASE_URL_ENV_VAR, "http://primary.override");
        env::set_var(VOCAB_BASE_URL_ENV_VAR, "http://vocab.override");
        let config = ClientConfig::from_env("1.0", "uuid-1");
        env::remove_var(BASE_URL_ENV_VAR);
        env::remove_var(VOCAB_BASE_URL_ENV_VAR);

        assert_eq!(config.base_url, "http://primary.override");
        assert_eq!(config.vocab_base_url, "http://vocab.override");
        // absent variables leave the defaults in place
        let config = ClientConfig::from_env("1.0", "uuid-1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn url_overrides() {
        let config = ClientConfig::new("1.0", "uuid-1")
            .with_base_url("http://localhost:8000")
            .with_vocab_base_url("http://localhost:8001");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.vocab_base_url, "http://localhost:8001");
    }
}
