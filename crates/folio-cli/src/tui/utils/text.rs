//! Text measurement helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, ending in "…" when cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Left offset that centers `content` columns inside `available`
pub fn centered_offset(available: u16, content: u16) -> u16 {
    available.saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ellipsis() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("a longer message", 8), "a longe…");
        assert_eq!(truncate_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        let cut = truncate_ellipsis("日本語テキスト", 7);
        assert!(cut.width() <= 7);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_centered_offset() {
        assert_eq!(centered_offset(100, 60), 20);
        assert_eq!(centered_offset(40, 60), 0);
    }
}
