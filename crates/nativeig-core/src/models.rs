//! Request and response types of the `/api/video` endpoint.

use serde::{Deserialize, Serialize};

use crate::validate::{validate_post_url, ValidationError};

/// A validated submission. The only way to build one is through
/// [`DownloadRequest::new`], so the API client never sees an invalid link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    post_url: String,
}

impl DownloadRequest {
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        validate_post_url(input)?;
        Ok(Self {
            post_url: input.trim().to_string(),
        })
    }

    /// The submitted link as typed (minus surrounding whitespace). This exact
    /// string is sent as the `postUrl` query parameter.
    pub fn post_url(&self) -> &str {
        &self.post_url
    }
}

/// Successful extraction result.
///
/// `video_url` points at a time-limited CDN resource; it is treated as opaque
/// and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub filename: String,
    pub width: String,
    pub height: String,
    pub video_url: String,
}

/// Body of a `/api/video` response, discriminated by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    Success { data: VideoInfo },
    Error { message: String },
}
