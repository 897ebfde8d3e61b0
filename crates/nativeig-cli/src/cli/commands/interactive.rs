//! `nativeig interactive` – paste links one per line.
//!
//! Mirrors the web form: each line is a submission, a success shows the
//! video and enables `d` (download) and `o` (open), and no failure ends the
//! session. `q`/`quit`/`exit` or EOF ends it.

use anyhow::Result;
use nativeig_core::config::NigConfig;
use nativeig_core::downloader::DownloadOptions;
use nativeig_core::presenter::{Presentation, SavedVideo, UrlLauncher};
use nativeig_core::session::{FormState, Session};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::download_dir;
use crate::cli::render;

const PROMPT: &str = "Paste an Instagram Reel URL (q to quit):";
const ACTIONS_HINT: &str = "[d] download  [o] open in browser  or paste another URL";

/// What one line of input asks for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input<'a> {
    Skip,
    Quit,
    Download,
    Open,
    Submit(&'a str),
}

/// `d`/`o` only mean an action while a result is shown; otherwise they are
/// submitted like any other text (and rejected by validation).
pub(crate) fn parse_input(line: &str, has_result: bool) -> Input<'_> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Input::Skip,
        "q" | "quit" | "exit" => Input::Quit,
        "d" | "download" if has_result => Input::Download,
        "o" | "open" if has_result => Input::Open,
        _ => Input::Submit(line),
    }
}

pub async fn run_interactive(session: &mut Session, cfg: &NigConfig) -> Result<()> {
    let launcher = UrlLauncher::new(cfg.open_command.clone());
    let dir = download_dir(cfg, None)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{PROMPT}");
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line, session.current().is_some()) {
            Input::Skip => continue,
            Input::Quit => break,
            Input::Download => {
                if let Some(shown) = session.current().cloned() {
                    println!("Downloading {}...", shown.suggested_filename());
                    match save(shown, dir.clone()).await {
                        Ok(saved) => println!("{}", render::format_saved(&saved)),
                        Err(e) => println!("Download failed: {e:#}"),
                    }
                }
            }
            Input::Open => {
                if let Some(shown) = session.current() {
                    match shown.open(&launcher) {
                        Ok(()) => println!("Opened {}", shown.preview_url()),
                        Err(e) => println!("Could not open the video: {e:#}"),
                    }
                }
            }
            Input::Submit(url) => {
                println!("Fetching video info...");
                match session.submit(url).await {
                    FormState::Ready(shown) => {
                        println!("{}", render::format_presentation(shown));
                        println!("{ACTIONS_HINT}");
                        continue;
                    }
                    FormState::Failed(message) => println!("Error: {message}"),
                    FormState::Idle | FormState::Pending => {}
                }
            }
        }
        if session.current().is_some() {
            println!("{ACTIONS_HINT}");
        } else {
            println!("{PROMPT}");
        }
    }
    Ok(())
}

async fn save(shown: Presentation, dir: PathBuf) -> Result<SavedVideo> {
    let opts = DownloadOptions::default();
    tokio::task::spawn_blocking(move || shown.download(&dir, &opts, false)).await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_input("", false), Input::Skip);
        assert_eq!(parse_input("   \t", true), Input::Skip);
    }

    #[test]
    fn quit_words() {
        for w in ["q", "quit", "EXIT", " Quit "] {
            assert_eq!(parse_input(w, false), Input::Quit, "{w}");
        }
    }

    #[test]
    fn actions_need_a_result() {
        assert_eq!(parse_input("d", true), Input::Download);
        assert_eq!(parse_input("Download", true), Input::Download);
        assert_eq!(parse_input("o", true), Input::Open);
        assert_eq!(parse_input("d", false), Input::Submit("d"));
        assert_eq!(parse_input("open", false), Input::Submit("open"));
    }

    #[test]
    fn urls_are_submitted_trimmed() {
        assert_eq!(
            parse_input("  https://www.instagram.com/reel/abc/ \n", true),
            Input::Submit("https://www.instagram.com/reel/abc/")
        );
    }
}
