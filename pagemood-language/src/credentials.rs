//! Credential loading for the language service.
//!
//! The key file is read exactly once, at client construction, so a missing
//! or unusable file fails the run before any network call is attempted.

use pagemood_common::{PagemoodError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// An API key loaded from the key file named by `KEYDIR_PATH`.
///
/// Two file shapes are accepted: a JSON object with an `api_key` field, or a
/// bare key string. The `Debug` impl never prints the key itself.
pub struct ApiCredentials {
    api_key: String,
}

impl ApiCredentials {
    pub fn from_key_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PagemoodError::Config(format!("cannot read key file {}: {e}", path.display()))
        })?;

        #[derive(Deserialize)]
        struct KeyFile {
            api_key: String,
        }

        let api_key = match serde_json::from_str::<KeyFile>(&raw) {
            Ok(parsed) => parsed.api_key,
            Err(_) => raw.trim().to_string(),
        };

        Self::from_raw_key(&api_key).map_err(|e| {
            PagemoodError::Config(format!("key file {}: {e}", path.display()))
        })
    }

    fn from_raw_key(raw: &str) -> std::result::Result<Self, String> {
        // Trim outer quotes and strip all ASCII whitespace; keys copied from
        // consoles routinely pick up stray newlines.
        let mut key = raw
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();
        key.retain(|ch| !ch.is_ascii_whitespace());

        if key.is_empty() {
            return Err("key is empty".into());
        }
        if !key.is_ascii() {
            return Err("key contains non-ASCII bytes".into());
        }
        if key.bytes().any(|b| b < 0x20 || b == 0x7F) {
            return Err("key contains control characters".into());
        }

        Ok(Self { api_key: key })
    }

    pub fn key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
