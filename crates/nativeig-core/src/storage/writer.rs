//! Sequential writer for a video temp file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::temp_path;

pub struct VideoFileWriter {
    file: File,
    temp_path: PathBuf,
    written: u64,
}

impl VideoFileWriter {
    /// Create (or truncate) the `.part` file for `final_path`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(Self {
            file,
            temp_path,
            written: 0,
        })
    }

    pub fn write_chunk(&mut self, data: &[u8]) -> Result<()> {
        self.file
            .write_all(data)
            .with_context(|| format!("write to {} failed", self.temp_path.display()))?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Sync and move the temp file to `final_path`.
    ///
    /// With `replace` false the move is a hard link plus unlink, which fails
    /// if `final_path` exists by then; the temp file is removed either way.
    pub fn finalize(self, final_path: &Path, replace: bool) -> Result<()> {
        self.file.sync_all().context("storage sync failed")?;
        let temp_path = self.temp_path.clone();
        drop(self.file);
        if !replace {
            let linked = std::fs::hard_link(&temp_path, final_path);
            if let Err(e) = std::fs::remove_file(&temp_path) {
                tracing::warn!("failed to remove {}: {}", temp_path.display(), e);
            }
            return linked.with_context(|| {
                if final_path.exists() {
                    format!("{} already exists", final_path.display())
                } else {
                    format!(
                        "failed to move {} to {}",
                        temp_path.display(),
                        final_path.display()
                    )
                }
            });
        }
        std::fs::rename(&temp_path, final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        })
    }

    /// Drop the temp file after a failed transfer.
    pub fn discard(self) {
        let temp_path = self.temp_path.clone();
        drop(self.file);
        if let Err(e) = std::fs::remove_file(&temp_path) {
            tracing::warn!("failed to remove {}: {}", temp_path.display(), e);
        }
    }
}
