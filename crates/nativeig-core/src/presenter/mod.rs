//! Presentation of a resolved video and its two actions.
//!
//! A `Presentation` only exists for a successful `VideoInfo`. The download
//! action saves `video_url` under the API's suggested filename; the open
//! action hands `video_url` to the desktop URL handler.

mod launcher;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::downloader::{download_to_file, DownloadOptions};
use crate::models::VideoInfo;
use crate::url_model::derive_video_filename;

pub use launcher::UrlLauncher;

/// Outcome of the download action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedVideo {
    pub path: PathBuf,
    pub bytes: u64,
    /// SHA-256 hex digest, when requested.
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    info: VideoInfo,
}

impl Presentation {
    pub fn new(info: VideoInfo) -> Self {
        Self { info }
    }

    pub fn info(&self) -> &VideoInfo {
        &self.info
    }

    /// URL the preview is bound to.
    pub fn preview_url(&self) -> &str {
        &self.info.video_url
    }

    /// `WIDTHxHEIGHT` as reported by the API.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.info.width, self.info.height)
    }

    /// Filename offered by the download action, safe for the local filesystem.
    pub fn suggested_filename(&self) -> String {
        derive_video_filename(&self.info.filename, &self.info.video_url)
    }

    /// Saves the video into `dir` under [`suggested_filename`](Self::suggested_filename).
    ///
    /// Blocking; call from `spawn_blocking` if used from async code.
    pub fn download(&self, dir: &Path, opts: &DownloadOptions, with_checksum: bool) -> Result<SavedVideo> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.suggested_filename());
        let bytes = download_to_file(&self.info.video_url, &path, opts)?;
        let sha256 = if with_checksum {
            Some(checksum::sha256_path(&path)?)
        } else {
            None
        };
        Ok(SavedVideo {
            path,
            bytes,
            sha256,
        })
    }

    /// Opens the video in a new browsing context.
    pub fn open(&self, launcher: &UrlLauncher) -> Result<()> {
        launcher.launch(&self.info.video_url)
    }
}

impl From<VideoInfo> for Presentation {
    fn from(info: VideoInfo) -> Self {
        Self::new(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Presentation {
        Presentation::new(VideoInfo {
            filename: "a.mp4".into(),
            width: "640".into(),
            height: "1136".into(),
            video_url: "https://example.com/v.mp4".into(),
        })
    }

    #[test]
    fn exposes_preview_and_filename() {
        let p = sample();
        assert_eq!(p.preview_url(), "https://example.com/v.mp4");
        assert_eq!(p.suggested_filename(), "a.mp4");
        assert_eq!(p.dimensions(), "640x1136");
    }

    #[test]
    fn unsafe_filename_is_sanitized() {
        let mut info = sample().info().clone();
        info.filename = "../secret".into();
        assert_eq!(Presentation::from(info).suggested_filename(), "secret.mp4");
    }
}
