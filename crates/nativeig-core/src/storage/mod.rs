//! Video file lifecycle on disk.
//!
//! Bytes are written sequentially to a `.part` temp file next to the
//! destination and atomically renamed once the transfer succeeded, so a
//! half-downloaded video never sits under its final name.

mod writer;

pub use writer::VideoFileWriter;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.mp4` → `a.mp4.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}
