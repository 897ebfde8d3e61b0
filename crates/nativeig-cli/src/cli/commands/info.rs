//! `nativeig info <url>` – resolve a link and show the video details.

use anyhow::Result;
use nativeig_core::session::Session;

use super::resolve;
use crate::cli::render;

pub async fn run_info(session: &mut Session, url: &str, json: bool) -> Result<()> {
    let shown = resolve(session, url).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(shown.info())?);
    } else {
        println!("{}", render::format_presentation(&shown));
    }
    Ok(())
}
