//! Single-stream HTTP GET of a resolved video URL into a local file.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use crate::storage::VideoFileWriter;

/// Transfer settings for a video download.
#[derive(Debug, Clone, Copy)]
pub struct DownloadOptions {
    /// Replace an existing file at the destination.
    pub overwrite: bool,
    pub connect_timeout: Duration,
    /// Abort if the transfer stays below 1 KiB/s for this long.
    pub low_speed_time: Duration,
    /// Hard cap on the whole transfer.
    pub timeout: Duration,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            connect_timeout: Duration::from_secs(30),
            low_speed_time: Duration::from_secs(60),
            timeout: Duration::from_secs(3600),
        }
    }
}

/// Downloads `url` with a single GET, writing it to `final_path` via a `.part`
/// temp file. Returns the number of bytes written.
///
/// Fails without touching the network if `final_path` exists and
/// `opts.overwrite` is false. Any failure leaves no temp file behind.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn download_to_file(url: &str, final_path: &Path, opts: &DownloadOptions) -> Result<u64> {
    if final_path.exists() && !opts.overwrite {
        anyhow::bail!(
            "{} already exists (use --overwrite to replace it)",
            final_path.display()
        );
    }

    let mut writer = VideoFileWriter::create(final_path)?;
    match transfer(url, &mut writer, opts) {
        Ok(()) => {
            let written = writer.written();
            writer.finalize(final_path, opts.overwrite)?;
            tracing::info!("saved {} ({} bytes) from {}", final_path.display(), written, url);
            Ok(written)
        }
        Err(e) => {
            tracing::warn!("download of {} failed: {:#}", url, e);
            writer.discard();
            Err(e)
        }
    }
}

fn transfer(url: &str, writer: &mut VideoFileWriter, opts: &DownloadOptions) -> Result<()> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(opts.low_speed_time)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(concat!("nativeig/", env!("CARGO_PKG_VERSION")))?;

    let mut write_error: Option<anyhow::Error> = None;
    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match writer.write_chunk(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(e);
    }
    performed.context("GET request failed")?;

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    Ok(())
}
