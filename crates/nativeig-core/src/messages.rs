//! User-facing messages for failed submissions.
//!
//! HTTP statuses are mapped through a small table that can be overridden in
//! `config.toml` under `[messages]`. Lookup order: exact code in `overrides`,
//! then the class default (400, 404, 5xx), then `unknown`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status classes recognised by the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 400: the API rejected the request.
    BadRequest,
    /// 404: no such post or video.
    NotFound,
    /// 500-599.
    Server(u16),
    /// Any other non-200 status.
    Other,
}

/// Classify a non-200 HTTP status code.
pub fn classify_http_status(code: u32) -> StatusClass {
    match code {
        400 => StatusClass::BadRequest,
        404 => StatusClass::NotFound,
        500..=599 => StatusClass::Server(code as u16),
        _ => StatusClass::Other,
    }
}

/// Shown when a second request is attempted while one is pending.
pub const IN_FLIGHT_MESSAGE: &str = "A request is already in progress.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessages {
    /// No response at all (offline, DNS failure, timeout).
    pub network: String,
    /// HTTP 400.
    pub client_error: String,
    /// HTTP 404.
    pub not_found: String,
    /// HTTP 500-599.
    pub server_error: String,
    /// Any other status, or an unreadable response body.
    pub unknown: String,
    /// Per-status overrides keyed by the numeric code, e.g. `429 = "Slow down."`.
    pub overrides: BTreeMap<String, String>,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            network: "Network error. Please check your connection and try again.".to_string(),
            client_error: "Invalid request. Please check the post link and try again.".to_string(),
            not_found: "Video not found. The post may be private or removed.".to_string(),
            server_error: "Server error. Please try again later.".to_string(),
            unknown: "Something went wrong. Please try again.".to_string(),
            overrides: BTreeMap::new(),
        }
    }
}

impl StatusMessages {
    /// Message for a non-200 status code.
    pub fn for_status(&self, code: u32) -> &str {
        if let Some(msg) = self.overrides.get(&code.to_string()) {
            return msg;
        }
        match classify_http_status(code) {
            StatusClass::BadRequest => &self.client_error,
            StatusClass::NotFound => &self.not_found,
            StatusClass::Server(_) => &self.server_error,
            StatusClass::Other => &self.unknown,
        }
    }
}
