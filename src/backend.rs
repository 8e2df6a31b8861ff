//! Backend selection strategy.
//!
//! Both backends speak the same JSON over different URLs and header
//! conventions. Every authenticated request goes through one of the two
//! variants here, so the conventions live in exactly one place.

use crate::config::ClientConfig;
use crate::types::AudioRequest;
use reqwest::blocking::{Client, RequestBuilder};

/// Which backend an authenticated request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The original cloudlanguagetools API (`base_url`). Auth via a bare
    /// `api_key` header.
    Primary,
    /// The newer vocab API (`vocab_base_url`). Auth via
    /// `Authorization: Api-Key <key>`. Preferred when it accepts the key.
    Vocab,
}

impl Backend {
    fn base_url<'a>(&self, config: &'a ClientConfig) -> &'a str {
        match self {
            Backend::Primary => &config.base_url,
            Backend::Vocab => &config.vocab_base_url,
        }
    }

    fn audio_path(&self) -> &'static str {
        match self {
            Backend::Primary => "/audio_v2",
            Backend::Vocab => "/audio",
        }
    }

    pub(crate) fn audio_url(&self, config: &ClientConfig) -> String {
        format!("{}{}", self.base_url(config), self.audio_path())
    }

    /// GET with this backend's auth convention applied.
    pub(crate) fn get(
        &self,
        http: &Client,
        config: &ClientConfig,
        path: &str,
        api_key: &str,
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(config), path);
        self.authorize(http.get(url), api_key)
    }

    /// POST to this backend's audio endpoint: auth convention plus the
    /// backend's client identification headers.
    pub(crate) fn post_audio(
        &self,
        http: &Client,
        config: &ClientConfig,
        request: &AudioRequest,
        api_key: &str,
    ) -> RequestBuilder {
        let builder = self
            .authorize(http.post(self.audio_url(config)), api_key)
            .json(request);
        match self {
            Backend::Primary => builder
                .header("client", "awesometts")
                .header("client_version", &config.client_version),
            Backend::Vocab => builder.header("User-Agent", user_agent(&config.client_version)),
        }
    }

    fn authorize(&self, builder: RequestBuilder, api_key: &str) -> RequestBuilder {
        match self {
            Backend::Primary => builder.header("api_key", api_key),
            Backend::Vocab => builder.header("Authorization", format!("Api-Key {api_key}")),
        }
    }
}

/// User-Agent value sent to the vocab backend.
pub(crate) fn user_agent(client_version: &str) -> String {
    format!("anki-awesometts/{client_version}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> ClientConfig {
        ClientConfig::new("6.21", "uuid-1")
            .with_base_url("http://primary.test")
            .with_vocab_base_url("http://vocab.test/v3")
    }

    fn audio_request() -> AudioRequest {
        AudioRequest::new("hello", "Azure", "batch", "en_us", "Deck", json!({}))
    }

    #[test]
    fn primary_get_convention() {
        let http = Client::new();
        let request = Backend::Primary
            .get(&http, &test_config(), "/account", "abc")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://primary.test/account");
        assert_eq!(request.headers().get("api_key").unwrap(), "abc");
        assert!(request.headers().get("Authorization").is_none());
    }

    #[test]
    fn vocab_get_convention() {
        let http = Client::new();
        let request = Backend::Vocab
            .get(&http, &test_config(), "/account", "abc")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://vocab.test/v3/account");
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Api-Key abc"
        );
        assert!(request.headers().get("api_key").is_none());
    }

    #[test]
    fn primary_audio_carries_client_tag() {
        let http = Client::new();
        let request = Backend::Primary
            .post_audio(&http, &test_config(), &audio_request(), "abc")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://primary.test/audio_v2");
        assert_eq!(request.headers().get("client").unwrap(), "awesometts");
        assert_eq!(request.headers().get("client_version").unwrap(), "6.21");
    }

    #[test]
    fn vocab_audio_carries_user_agent() {
        let http = Client::new();
        let request = Backend::Vocab
            .post_audio(&http, &test_config(), &audio_request(), "abc")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://vocab.test/v3/audio");
        assert_eq!(
            request.headers().get("User-Agent").unwrap(),
            "anki-awesometts/6.21"
        );
    }
}
