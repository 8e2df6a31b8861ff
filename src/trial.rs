//! Trial registration helpers.
//!
//! Pure functions; the HTTP call lives in [`crate::client`].

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::backend;

/// Build the static portion of a trial registration payload.
///
/// Inputs: the registration email and the host-supplied client UUID.
/// Output: a JSON object with two fields — `client_uuid`, echoed verbatim,
/// and `request_signature`, the lowercase hex SHA-256 digest of
/// `"{email}:{client_uuid}"`, binding the request to this install. The caller
/// merges in `email` and `password` before posting.
pub(crate) fn build_trial_request_payload(email: &str, client_uuid: &str) -> Map<String, Value> {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(client_uuid.as_bytes());
    let signature: String = hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();

    let mut payload = Map::new();
    payload.insert("client_uuid".into(), Value::String(client_uuid.into()));
    payload.insert("request_signature".into(), Value::String(signature));
    payload
}

/// Headers for the trial registration POST. The JSON content type is set by
/// the request builder; this adds the client identification.
pub(crate) fn trial_request_headers(client_version: &str) -> Vec<(&'static str, String)> {
    vec![
        ("User-Agent", backend::user_agent(client_version)),
        ("Accept", "application/json".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fields() {
        let payload = build_trial_request_payload("alice@example.com", "uuid-42");
        assert_eq!(payload["client_uuid"], "uuid-42");
        let signature = payload["request_signature"].as_str().unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn payload_is_deterministic() {
        let a = build_trial_request_payload("alice@example.com", "uuid-42");
        let b = build_trial_request_payload("alice@example.com", "uuid-42");
        assert_eq!(a, b);

        let c = build_trial_request_payload("bob@example.com", "uuid-42");
        assert_ne!(a["request_signature"], c["request_signature"]);
    }

    #[test]
    fn headers_carry_user_agent() {
        let headers = trial_request_headers("6.21");
        assert!(headers
            .iter()
            .any(|(name, value)| *name == "User-Agent" && value == "anki-awesometts/6.21"));
    }
}
