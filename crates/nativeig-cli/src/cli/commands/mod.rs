//! CLI command handlers, one per file.

mod completions;
mod download;
mod info;
mod interactive;
mod open;

pub use completions::run_completions;
pub use download::run_download;
pub use info::run_info;
pub use interactive::run_interactive;
pub use open::run_open;

use anyhow::Result;
use nativeig_core::config::NigConfig;
use nativeig_core::presenter::Presentation;
use nativeig_core::session::{FormState, Session};
use std::path::PathBuf;

/// Submits `url` and returns the shown result, or the displayed message as an error.
pub(crate) async fn resolve(session: &mut Session, url: &str) -> Result<Presentation> {
    eprintln!("Fetching video info...");
    match session.submit(url).await {
        FormState::Ready(p) => Ok(p.clone()),
        FormState::Failed(message) => anyhow::bail!("{message}"),
        other => anyhow::bail!("request did not settle: {other:?}"),
    }
}

/// `--output-dir`, else config `download_dir`, else the current directory.
pub(crate) fn download_dir(cfg: &NigConfig, output_dir: Option<PathBuf>) -> Result<PathBuf> {
    match output_dir.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_wins_over_config() {
        let cfg = NigConfig {
            download_dir: Some(PathBuf::from("/srv/reels")),
            ..NigConfig::default()
        };
        assert_eq!(
            download_dir(&cfg, Some(PathBuf::from("/tmp/x"))).unwrap(),
            PathBuf::from("/tmp/x")
        );
        assert_eq!(download_dir(&cfg, None).unwrap(), PathBuf::from("/srv/reels"));
    }

    #[test]
    fn falls_back_to_current_dir() {
        let cfg = NigConfig::default();
        assert_eq!(
            download_dir(&cfg, None).unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}
