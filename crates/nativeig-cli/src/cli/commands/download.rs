//! `nativeig download <url>` – resolve a link and save the video.

use anyhow::Result;
use nativeig_core::config::NigConfig;
use nativeig_core::downloader::DownloadOptions;
use nativeig_core::session::Session;
use std::path::PathBuf;

use super::{download_dir, resolve};
use crate::cli::render;

pub async fn run_download(
    session: &mut Session,
    cfg: &NigConfig,
    url: &str,
    output_dir: Option<PathBuf>,
    overwrite: bool,
    checksum: bool,
) -> Result<()> {
    let shown = resolve(session, url).await?;
    println!("{}", render::format_presentation(&shown));

    let dir = download_dir(cfg, output_dir)?;
    let opts = DownloadOptions {
        overwrite,
        ..DownloadOptions::default()
    };
    eprintln!("Downloading {}...", shown.suggested_filename());
    let saved =
        tokio::task::spawn_blocking(move || shown.download(&dir, &opts, checksum)).await??;
    println!("{}", render::format_saved(&saved));
    Ok(())
}
