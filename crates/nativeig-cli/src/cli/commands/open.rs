//! `nativeig open <url>` – resolve a link and open the video in the browser.

use anyhow::Result;
use nativeig_core::config::NigConfig;
use nativeig_core::presenter::UrlLauncher;
use nativeig_core::session::Session;

use super::resolve;

pub async fn run_open(session: &mut Session, cfg: &NigConfig, url: &str) -> Result<()> {
    let shown = resolve(session, url).await?;
    shown.open(&UrlLauncher::new(cfg.open_command.clone()))?;
    println!("Opened {}", shown.preview_url());
    Ok(())
}
