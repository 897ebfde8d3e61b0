//! Errors of a single video-info request.

use thiserror::Error;

use crate::messages::{StatusMessages, IN_FLIGHT_MESSAGE};

/// Why `fetch_video_info` did not produce a `VideoInfo`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response was received (connect/DNS failure, timeout, reset).
    #[error("network error: {0}")]
    Network(#[from] curl::Error),

    /// The API answered with a status other than 200.
    #[error("HTTP {code}")]
    HttpStatus {
        code: u32,
        /// `message` from an error-shaped body, if the server sent one. Logged only.
        server_message: Option<String>,
    },

    /// HTTP 200 with `"status": "error"`.
    #[error("{message}")]
    Application { message: String },

    /// HTTP 200 whose body is not a valid API response.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body exceeded the size an API answer can have.
    #[error("response body larger than {limit} bytes")]
    BodyTooLarge { limit: usize },
    /// Another request on this client has not settled yet.
    #[error("a request is already in progress")]
    InFlight,
}

impl FetchError {
    /// The single message displayed for this failure.
    ///
    /// Application errors are shown verbatim; everything else comes from
    /// the configured message table.
    pub fn user_message(&self, messages: &StatusMessages) -> String {
        match self {
            FetchError::Network(_) => messages.network.clone(),
            FetchError::HttpStatus { code, .. } => messages.for_status(*code).to_string(),
            FetchError::Application { message } => message.clone(),
            FetchError::Decode(_) | FetchError::BodyTooLarge { .. } => messages.unknown.clone(),
            FetchError::InFlight => IN_FLIGHT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_message_is_verbatim() {
        let e = FetchError::Application {
            message: "Post URL is required".into(),
        };
        assert_eq!(
            e.user_message(&StatusMessages::default()),
            "Post URL is required"
        );
        assert_eq!(e.to_string(), "Post URL is required");
    }

    #[test]
    fn status_errors_use_table() {
        let m = StatusMessages::default();
        let not_found = FetchError::HttpStatus {
            code: 404,
            server_message: Some("ignored".into()),
        };
        let server = FetchError::HttpStatus {
            code: 502,
            server_message: None,
        };
        assert_eq!(not_found.user_message(&m), m.not_found);
        assert_eq!(server.user_message(&m), m.server_error);
    }

    #[test]
    fn network_and_decode_messages() {
        let m = StatusMessages::default();
        let net = FetchError::Network(curl::Error::new(7));
        assert_eq!(net.user_message(&m), m.network);
        let decode = FetchError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(decode.user_message(&m), m.unknown);
        assert_eq!(FetchError::InFlight.user_message(&m), IN_FLIGHT_MESSAGE);
        let big = FetchError::BodyTooLarge { limit: 1024 };
        assert_eq!(big.user_message(&m), m.unknown);
    }
}
