//! CLI for the Native IG Reel downloader.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use nativeig_core::api::ApiClient;
use nativeig_core::config;
use nativeig_core::session::Session;
use std::path::PathBuf;

use commands::{run_completions, run_download, run_info, run_interactive, run_open};

/// Top-level CLI for Native IG.
#[derive(Debug, Parser)]
#[command(name = "nativeig")]
#[command(about = "Native IG: fetch and download Instagram Reels", long_about = None)]
pub struct Cli {
    /// Use this API base URL instead of the one in config.toml.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a Reel link and show the video details.
    Info {
        /// Instagram Reel URL.
        url: String,

        /// Print the API's video info as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a Reel link and save the video.
    Download {
        /// Instagram Reel URL.
        url: String,

        /// Directory to save into (default: config `download_dir`, else the current directory).
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Replace an existing file with the same name.
        #[arg(long)]
        overwrite: bool,

        /// Print the SHA-256 of the saved file.
        #[arg(long)]
        checksum: bool,
    },

    /// Resolve a Reel link and open the video in the browser.
    Open {
        /// Instagram Reel URL.
        url: String,
    },

    /// Paste links one per line, then download or open each result.
    Interactive,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        // Completions need neither config nor network.
        if let CliCommand::Completions { shell } = &cli.command {
            run_completions(*shell);
            return Ok(());
        }

        let mut cfg = config::load_or_init()?;
        if let Some(base_url) = cli.base_url {
            cfg.base_url = base_url;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let client = ApiClient::from_config(&cfg)?;
        let mut session = Session::new(client, cfg.messages.clone());

        match cli.command {
            CliCommand::Info { url, json } => run_info(&mut session, &url, json).await?,
            CliCommand::Download {
                url,
                output_dir,
                overwrite,
                checksum,
            } => {
                run_download(&mut session, &cfg, &url, output_dir, overwrite, checksum).await?;
            }
            CliCommand::Open { url } => run_open(&mut session, &cfg, &url).await?,
            CliCommand::Interactive => run_interactive(&mut session, &cfg).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
