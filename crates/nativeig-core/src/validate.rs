//! Syntactic validation of a submitted post link.
//!
//! Only checks that the input is an absolute URL with a scheme and a host.
//! Whether the link actually points at an Instagram Reel is left to the
//! remote API, which answers with an application error when it does not.

use thiserror::Error;
use url::Url;

/// Message shown next to the input when validation fails.
pub const INVALID_POST_URL_MESSAGE: &str = "Please provide a valid Instagram post link.";

/// The submitted text is not an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please provide a valid Instagram post link.")]
pub struct ValidationError {
    /// The rejected input, as submitted.
    pub input: String,
}

impl ValidationError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Validates `input` as an absolute URL (non-empty scheme and host).
///
/// Surrounding whitespace is ignored. Relative paths, host-less URLs such as
/// `mailto:` or `file:///`, and anything `url` cannot parse are rejected.
pub fn validate_post_url(input: &str) -> Result<Url, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(input));
    }

    let url = Url::parse(trimmed).map_err(|e| {
        tracing::debug!("rejected post url {:?}: {}", trimmed, e);
        ValidationError::new(input)
    })?;

    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    if url.scheme().is_empty() || !has_host {
        tracing::debug!("rejected post url {:?}: missing scheme or host", trimmed);
        return Err(ValidationError::new(input));
    }

    Ok(url)
}
