//! Characters HTTP Protocol
//!
//! Endpoint paths and the JSON bodies that are not the record itself.
//! Records travel as plain `Character` objects; see `types`.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: list (GET) and create (POST).
pub const ENDPOINT_CHARACTERS: &str = "/characters";
/// Item endpoint: fetch (GET), replace (PUT) and remove (DELETE).
pub const ENDPOINT_CHARACTER: &str = "/characters/:id";

// --- Data Transfer Objects ---

/// Body returned with every 4xx/5xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub detail: String,
    /// Offending field names, present only for validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}
