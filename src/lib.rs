//! # languagetools-client
//!
//! Thin blocking client for the Language Tools account/audio API, as used by
//! the AwesomeTTS add-on. It holds an API key, verifies it against one of two
//! backends, fetches account info, requests generated audio, and registers
//! trial keys.
//!
//! Every operation is a single HTTP round trip (two for verification) with
//! light branching on the response status. There is no retry, caching, or
//! streaming; hosts that need scheduling or persistence build it on top.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use languagetools_client::{ClientConfig, LanguageToolsClient};
//!
//! fn main() -> languagetools_client::Result<()> {
//!     let config = ClientConfig::new("6.21", "0f9b2a6c-install-uuid");
//!     let mut client = LanguageToolsClient::new(config, None)?;
//!
//!     let verification = client.verify_api_key("my-api-key")?;
//!     if verification.valid {
//!         let info = client.account_info()?;
//!         println!("{:?}", info);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Diagnostics are emitted through [`tracing`]; installing a subscriber is
//! the host application's responsibility.

pub mod backend;
pub mod config;
pub mod error;
pub mod types;

mod client;
mod trial;

// Re-export main types for convenience
pub use backend::Backend;
pub use client::LanguageToolsClient;
pub use config::ClientConfig;
pub use error::Error;
pub use types::{AudioRequest, KeyVerification, TrialRequestResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
