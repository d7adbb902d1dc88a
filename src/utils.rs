use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad `s` with spaces until it occupies `width` terminal columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Format an odometer reading with comma thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Visual lines of `text` when wrapped at `max_width` columns, as
/// `(start_char, end_char, trimmed_len)` triples. Explicit newlines always
/// break; trailing whitespace on a wrapped line is not displayed.
fn wrapped_line_spans(text: &str, max_width: usize) -> Vec<(usize, usize, usize)> {
    let mut spans = Vec::new();
    let mut line = String::new();
    let mut width = 0;
    let mut start = 0;
    let mut count = 0;

    for (idx, ch) in text.chars().enumerate() {
        count = idx + 1;
        if ch == '\n' {
            spans.push((start, idx, line.trim_end().chars().count()));
            line.clear();
            width = 0;
            start = idx + 1;
            continue;
        }

        let ch_width = ch.width().unwrap_or(1);
        if width + ch_width > max_width && width > 0 {
            spans.push((start, idx, line.trim_end().chars().count()));
            line.clear();
            width = 0;
            start = idx;
        }
        line.push(ch);
        width += ch_width;
    }

    if !line.is_empty() || text.ends_with('\n') {
        spans.push((start, count, line.trim_end().chars().count()));
    }

    spans
}

/// Line and column of a character-indexed cursor inside wrapped text.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor == 0 || max_width == 0 {
        return (0, 0);
    }

    let spans = wrapped_line_spans(text, max_width);
    for (line_idx, (start, end, _)) in spans.iter().enumerate() {
        if cursor >= *start && cursor <= *end {
            return (line_idx, cursor - start);
        }
    }

    match spans.last() {
        Some((_, _, trimmed_len)) => (spans.len() - 1, *trimmed_len),
        None => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(48_500), "48,500");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_pad_to_width_counts_wide_glyphs() {
        assert_eq!(display_width("🔋"), 2);
        assert_eq!(pad_to_width("🔋", 4), "🔋  ");
        assert_eq!(pad_to_width("abc", 2), "abc");
    }

    #[test]
    fn test_cursor_empty_text() {
        assert_eq!(calculate_wrapped_cursor_position("", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_single_line() {
        assert_eq!(calculate_wrapped_cursor_position("Hello", 3, 10), (0, 3));
        assert_eq!(calculate_wrapped_cursor_position("Hello", 5, 10), (0, 5));
    }

    #[test]
    fn test_cursor_after_wrap() {
        let text = "0123456789A";
        assert_eq!(calculate_wrapped_cursor_position(text, 10, 10), (0, 10));
        assert_eq!(calculate_wrapped_cursor_position(text, 11, 10), (1, 1));
    }

    #[test]
    fn test_cursor_after_newline() {
        let text = "Line 1\nLine 2";
        assert_eq!(calculate_wrapped_cursor_position(text, 8, 20), (1, 1));
        assert_eq!(calculate_wrapped_cursor_position("abc\n", 4, 20), (1, 0));
    }

    #[test]
    fn test_cursor_counts_chars_not_bytes() {
        let text = "ééé";
        assert_eq!(calculate_wrapped_cursor_position(text, 3, 10), (0, 3));
    }

    #[test]
    fn test_cursor_beyond_text_clamps() {
        assert_eq!(calculate_wrapped_cursor_position("Hi", 10, 10), (0, 2));
    }

    #[test]
    fn test_line_spans_with_newlines() {
        let spans = wrapped_line_spans("Line 1\nLine 2\nLine 3", 20);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1], (7, 13, 6));
    }
}
