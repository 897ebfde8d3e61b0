//! Local filename derivation for downloaded videos.
//!
//! The API suggests a filename (e.g. `native-ig-1734345296.mp4`). It comes
//! from a remote server, so it is sanitized before touching the filesystem;
//! when nothing usable is left, the video URL's last path segment is tried,
//! then a fixed default.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

/// Used when neither the suggested name nor the video URL yields anything.
pub const DEFAULT_FILENAME: &str = "native-ig-video.mp4";

/// Extension appended when the chosen name has none.
const DEFAULT_EXTENSION: &str = "mp4";

/// Derives a safe local filename for a video.
///
/// # Examples
///
/// - `derive_video_filename("a.mp4", "https://cdn.example.com/x.mp4")` → `"a.mp4"`
/// - `derive_video_filename("../../etc/passwd", "...")` → `"etc_passwd.mp4"`
/// - `derive_video_filename("", "https://cdn.example.com/v/clip.mp4?sig=1")` → `"clip.mp4"`
pub fn derive_video_filename(suggested: &str, video_url: &str) -> String {
    let name = Some(sanitize_filename(suggested))
        .filter(|s| is_usable(s))
        .or_else(|| {
            filename_from_url_path(video_url)
                .map(|s| sanitize_filename(&s))
                .filter(|s| is_usable(s))
        });

    match name {
        Some(n) => with_extension(n),
        None => DEFAULT_FILENAME.to_string(),
    }
}

fn is_usable(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".."
}

fn with_extension(name: String) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => name,
        _ => format!("{name}.{DEFAULT_EXTENSION}"),
    }
}
