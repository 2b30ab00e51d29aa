use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells,
/// appending `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }

    let budget = max_cells - 1; // reserve one cell for '…'
    let mut width = 0;
    let mut out = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(grapheme);
    }
    out.push('\u{2026}');
    out
}

/// Remove the last grapheme cluster from an edit buffer (backspace).
/// No-op on an empty buffer.
pub fn pop_grapheme(buffer: &mut String) {
    if let Some((offset, _)) = buffer.grapheme_indices(true).next_back() {
        buffer.truncate(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn display_width_mixed() {
        assert_eq!(display_width("buy 牛奶"), 8);
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_to_width("hi", 10), "hi");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
    }

    #[test]
    fn truncate_never_splits_wide_chars() {
        // "你好世界" is 8 cells; budget 4 leaves room for "你" (2) + "…" (1)
        let out = truncate_to_width("你好世界", 4);
        assert_eq!(out, "你\u{2026}");
        assert!(display_width(&out) <= 4);
    }

    #[test]
    fn truncate_degenerate_widths() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn pop_grapheme_ascii() {
        let mut s = "abc".to_string();
        pop_grapheme(&mut s);
        assert_eq!(s, "ab");
    }

    #[test]
    fn pop_grapheme_combining() {
        // One backspace removes the whole "é" cluster, not just the accent
        let mut s = "cafe\u{0301}".to_string();
        pop_grapheme(&mut s);
        assert_eq!(s, "caf");
    }

    #[test]
    fn pop_grapheme_emoji_zwj() {
        let mut s = "a👨\u{200D}👩\u{200D}👧".to_string();
        pop_grapheme(&mut s);
        assert_eq!(s, "a");
    }

    #[test]
    fn pop_grapheme_empty_is_noop() {
        let mut s = String::new();
        pop_grapheme(&mut s);
        assert_eq!(s, "");
    }
}
