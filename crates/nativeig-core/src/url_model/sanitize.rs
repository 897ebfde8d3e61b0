//! Filesystem-safe filenames.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

fn is_forbidden(c: char) -> bool {
    matches!(c, '\0' | '/' | '\\') || c.is_control() || c.is_whitespace()
}

/// Sanitizes a server-supplied filename.
///
/// Path separators, NUL, control characters and whitespace become `_`,
/// runs of `_` collapse, leading/trailing dots and underscores are trimmed,
/// and the result is cut to 255 bytes on a char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut end = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators() {
        assert_eq!(sanitize_filename("a/b\\c.mp4"), "a_b_c.mp4");
    }

    #[test]
    fn whitespace_and_controls() {
        assert_eq!(sanitize_filename("my  reel\t\n.mp4"), "my_reel_.mp4");
        assert_eq!(sanitize_filename("clip\x00.mp4"), "clip_.mp4");
    }

    #[test]
    fn trims_dots_and_underscores() {
        assert_eq!(sanitize_filename("..hidden.mp4.."), "hidden.mp4");
        assert_eq!(sanitize_filename("__x__"), "x");
        assert_eq!(sanitize_filename("../.."), "");
    }

    #[test]
    fn truncates_on_char_boundary() {
        let long = "é".repeat(200);
        let s = sanitize_filename(&long);
        assert!(s.len() <= NAME_MAX);
        assert!(s.chars().all(|c| c == 'é'));
    }
}
