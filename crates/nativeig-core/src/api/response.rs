//! Interpretation of a raw `/api/video` response.

use crate::error::FetchError;
use crate::models::{ApiResponse, VideoInfo};

/// Turns a status code and body into a `VideoInfo` or a classified error.
///
/// Only HTTP 200 is a candidate for success. Other statuses are classified by
/// code regardless of body; an error-shaped body is kept for logging.
pub fn parse_response(code: u32, body: &[u8]) -> Result<VideoInfo, FetchError> {
    if code != 200 {
        let server_message = match serde_json::from_slice::<ApiResponse>(body) {
            Ok(ApiResponse::Error { message }) => Some(message),
            _ => None,
        };
        tracing::warn!(
            "video info API returned HTTP {} ({})",
            code,
            server_message.as_deref().unwrap_or("no message")
        );
        return Err(FetchError::HttpStatus {
            code,
            server_message,
        });
    }

    match serde_json::from_slice::<ApiResponse>(body)? {
        ApiResponse::Success { data } => Ok(data),
        ApiResponse::Error { message } => {
            tracing::info!("video info API reported: {}", message);
            Err(FetchError::Application { message })
        }
    }
}
