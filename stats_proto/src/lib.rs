//! JSON bodies for the click counter service
//!
//! Shared by the Worker that serves them and the page that consumes them.

use serde::{Deserialize, Serialize};

/// Shown in place of the second counter, which is never tracked
pub const PLACEHOLDER: &str = "??";

// ============================================================================
// Requests
// ============================================================================

/// `POST /game/click` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// `POST /game/click` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickResponse {
    pub success: bool,
    pub id: i64,
}

/// A counter that is either known or a display placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tally {
    Count(u64),
    Placeholder(String),
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tally::Count(n) => write!(f, "{}", n),
            Tally::Placeholder(s) => f.write_str(s),
        }
    }
}

/// `GET /game/stats` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub for_pong: u64,
    pub not_for_pong: Tally,
}

impl StatsResponse {
    /// Stats for a stored click count; a missing count reads as zero
    pub fn from_count(count: Option<u64>) -> Self {
        Self {
            for_pong: count.unwrap_or(0),
            not_for_pong: Tally::Placeholder(PLACEHOLDER.to_string()),
        }
    }
}

/// Code carried by unexpected server failures
pub const INTERNAL_ERROR_CODE: u16 = 7000;
/// Code carried by requests whose body does not parse
pub const INVALID_INPUT_CODE: u16 = 7001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

/// Body of a failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub errors: Vec<ApiError>,
}

impl ErrorResponse {
    fn single(code: u16, message: &str) -> Self {
        Self {
            success: false,
            errors: vec![ApiError {
                code,
                message: message.to_string(),
            }],
        }
    }

    pub fn internal() -> Self {
        Self::single(INTERNAL_ERROR_CODE, "Internal Server Error")
    }

    pub fn invalid_input() -> Self {
        Self::single(INVALID_INPUT_CODE, "Input Validation Error")
    }
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn decode<'a, T: Deserialize<'a>>(text: &'a str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}
