//! Mock data fixtures.
//!
//! Read-only lookup tables standing in for a user datastore, plus the fixed
//! PJ1 report returned when no inference output is supplied.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Report returned verbatim when the caller supplies no message.
pub const MOCK_PJ1_REPORT: &str = include_str!("../fixtures/pj1_report.txt");

/// Sample inference output of the PJ1 model (100 node class predictions).
pub const SAMPLE_INFERENCE_MESSAGE: &str = include_str!("../fixtures/sample_inference.txt");

const BUILTIN_USERS: &str = include_str!("../fixtures/users.json");

/// Errors raised while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable user lookup tables.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixtures {
    /// nickname → user-id object, e.g. `"alice" → {"user_id": "u1"}`.
    #[serde(default)]
    user_ids: HashMap<String, Value>,
    /// user id → profile object.
    #[serde(default)]
    user_info: HashMap<String, Value>,
}

impl Fixtures {
    /// Fixtures embedded in the binary.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_json_str(BUILTIN_USERS)
    }

    /// Parse a fixture document of the form
    /// `{"user_ids": {...}, "user_info": {...}}`.
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a fixture document from disk.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Exact-match lookup of a user-id object by nickname.
    pub fn user_id(&self, nickname: &str) -> Option<&Value> {
        self.user_ids.get(nickname)
    }

    /// Exact-match lookup of a profile by user id.
    pub fn user_info(&self, user_id: &str) -> Option<&Value> {
        self.user_info.get(user_id)
    }

    pub fn user_count(&self) -> usize {
        self.user_info.len()
    }
}
