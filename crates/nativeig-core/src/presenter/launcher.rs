//! Opening a URL with the desktop's default handler.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Runs `<command> <url>`, e.g. `xdg-open https://...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlLauncher {
    command: String,
}

impl UrlLauncher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Starts the opener and returns once it is spawned. Its exit status is
    /// only logged.
    pub fn launch(&self, url: &str) -> Result<()> {
        tracing::info!("opening {} with {}", url, self.command);
        let mut child = Command::new(&self.command)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to run {}", self.command))?;
        let command = self.command.clone();
        // Reap in the background so the opener never lingers as a zombie.
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::warn!("{} exited with {}", command, status)
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("failed to wait for {}: {}", command, e),
        });
        Ok(())
    }
}

impl Default for UrlLauncher {
    fn default() -> Self {
        Self::new("xdg-open")
    }
}
