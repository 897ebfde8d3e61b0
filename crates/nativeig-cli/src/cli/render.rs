//! Text rendering of results for the terminal.

use nativeig_core::presenter::{Presentation, SavedVideo};

pub fn format_presentation(shown: &Presentation) -> String {
    format!(
        "Video ready\n  File:      {}\n  Size:      {}\n  Video URL: {}",
        shown.suggested_filename(),
        shown.dimensions(),
        shown.preview_url()
    )
}

pub fn format_saved(saved: &SavedVideo) -> String {
    let mib = saved.bytes as f64 / 1_048_576.0;
    let mut out = format!("Saved {} ({:.1} MiB)", saved.path.display(), mib);
    if let Some(digest) = &saved.sha256 {
        out.push_str(&format!("\n{}  {}", digest, saved.path.display()));
    }
    out
}
