//! Client for the remote video-info API.
//!
//! One call issues exactly one `GET {base}/api/video?postUrl=...` through
//! libcurl: no retries, no caching. Overlapping calls on the same client
//! (or any clone of it) are rejected with [`FetchError::InFlight`].
//! curl is blocking; call from `spawn_blocking` when used from async code.

mod guard;
mod response;

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::NigConfig;
use crate::error::FetchError;
use crate::models::{DownloadRequest, VideoInfo};

use guard::InFlightGuard;
pub use response::parse_response;

/// Path of the video-info endpoint, appended to the base URL.
pub const VIDEO_ENDPOINT_PATH: &str = "/api/video";

/// Name of the query parameter carrying the submitted link.
pub const POST_URL_PARAM: &str = "postUrl";

/// Largest response body read from the API; the transfer is aborted past it.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Connect and total timeouts for one API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub total: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(15),
            total: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    timeouts: Timeouts,
    in_flight: Arc<AtomicBool>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeouts: Timeouts) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid API base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() || base_url.host_str().is_none() {
            anyhow::bail!("API base URL must be absolute http(s): {base_url}");
        }
        Ok(Self {
            base_url,
            timeouts,
            in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn from_config(cfg: &NigConfig) -> Result<Self> {
        Self::new(&cfg.base_url, cfg.timeouts())
    }

    /// True while a request issued through this client (or a clone) is pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Full request URL for `request`. Any path on the base URL is kept as a
    /// prefix; any query on it is dropped.
    pub fn endpoint_url(&self, request: &DownloadRequest) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}{}",
            self.base_url.path().trim_end_matches('/'),
            VIDEO_ENDPOINT_PATH
        );
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        url.query_pairs_mut()
            .append_pair(POST_URL_PARAM, request.post_url());
        url
    }

    /// Resolves `request` into a `VideoInfo` with a single GET.
    pub fn fetch_video_info(&self, request: &DownloadRequest) -> Result<VideoInfo, FetchError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            tracing::warn!("rejected overlapping request for {}", request.post_url());
            FetchError::InFlight
        })?;

        let url = self.endpoint_url(request);
        tracing::info!("requesting video info for {}", request.post_url());
        tracing::debug!("GET {}", url);

        let (code, body) = self
            .get(&url)
            .inspect_err(|e| tracing::warn!("video info request failed: {}", e))?;
        tracing::debug!("video info response: HTTP {} ({} bytes)", code, body.len());

        parse_response(code, &body)
    }

    fn get(&self, url: &Url) -> Result<(u32, Vec<u8>), FetchError> {
        let mut body = Vec::new();
        let mut overflowed = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.timeouts.connect)?;
        easy.timeout(self.timeouts.total)?;
        easy.useragent(concat!("nativeig/", env!("CARGO_PKG_VERSION")))?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                if body.len() + data.len() > MAX_BODY_BYTES {
                    overflowed = true;
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            let performed = transfer.perform();
            drop(transfer);
            if overflowed {
                return Err(FetchError::BodyTooLarge {
                    limit: MAX_BODY_BYTES,
                });
            }
            performed?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Timeouts::default()).unwrap()
    }

    fn post_url_values(url: &Url) -> Vec<String> {
        url.query_pairs()
            .filter(|(k, _)| k == POST_URL_PARAM)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    #[test]
    fn endpoint_url_encodes_post_url() {
        let req = DownloadRequest::new("https://www.instagram.com/reel/xyz123/?igsh=abc&x=1").unwrap();
        let url = client("https://nativeig.vercel.app").endpoint_url(&req);
        assert_eq!(url.path(), "/api/video");
        assert_eq!(
            url.query(),
            Some("postUrl=https%3A%2F%2Fwww.instagram.com%2Freel%2Fxyz123%2F%3Figsh%3Dabc%26x%3D1")
        );
        assert_eq!(post_url_values(&url), vec![req.post_url().to_string()]);
    }

    #[test]
    fn endpoint_url_keeps_base_path_prefix() {
        let req = DownloadRequest::new("https://www.instagram.com/reel/a/").unwrap();
        let url = client("http://127.0.0.1:8080/proxy/?old=1#frag").endpoint_url(&req);
        assert_eq!(url.path(), "/proxy/api/video");
        assert_eq!(post_url_values(&url).len(), 1);
        assert!(url.fragment().is_none());
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(ApiClient::new("not a url", Timeouts::default()).is_err());
        assert!(ApiClient::new("mailto:x@example.com", Timeouts::default()).is_err());
    }

    #[test]
    fn default_timeouts_are_explicit() {
        let t = Timeouts::default();
        assert_eq!(t.total, Duration::from_secs(30));
        assert_eq!(t.connect, Duration::from_secs(15));
    }

    #[test]
    fn clones_share_in_flight_flag() {
        let a = client("https://nativeig.vercel.app");
        let b = a.clone();
        let _g = InFlightGuard::acquire(&a.in_flight).unwrap();
        assert!(b.is_in_flight());
        let req = DownloadRequest::new("https://www.instagram.com/reel/a/").unwrap();
        assert!(matches!(b.fetch_video_info(&req), Err(FetchError::InFlight)));
    }
}
