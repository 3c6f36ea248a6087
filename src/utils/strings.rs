//! Small string helpers used when drawing.

use tui::text::Text;
use unicode_ellipsis::truncate_str;

/// Truncates text if it is too long, and adds an ellipsis at the end if
/// needed.
#[inline]
pub fn truncate_to_text<'a, U: Into<usize>>(content: &str, width: U) -> Text<'a> {
    Text::raw(truncate_str(content, width.into()).to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_truncate_to_text() {
        assert_eq!(truncate_to_text("short", 10_usize), Text::raw("short"));
        assert_eq!(truncate_to_text("далеко", 4_usize), Text::raw("дал…"));
    }
}
