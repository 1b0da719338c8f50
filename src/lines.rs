//! Line splitting and measurement
//!
//! Lines end at `\r\n`, `\n` or a lone `\r`. A trailing terminator does not
//! start an extra empty line, so `"a\nb\n"` has two lines and `""` has none.

/// UTF-8 byte-order mark as a char
const BOM: char = '\u{feff}';

/// Strip a leading byte-order mark, if present
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Split text into lines without their terminators
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Length of a line in UTF-16 code units
///
/// Native callers size their buffers in UTF-16 units, so that is what the
/// line-length operations report.
pub fn utf16_len(line: &str) -> usize {
    line.chars().map(char::len_utf16).sum()
}

/// Longest line in UTF-16 code units, or `None` for no lines
pub fn longest(lines: &[&str]) -> Option<usize> {
    lines.iter().map(|line| utf16_len(line)).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_mixed_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(split_lines("\n\nx\n"), vec!["", "", "x"]);
        assert_eq!(split_lines("\r\n"), vec![""]);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}hello"), "hello");
        assert_eq!(strip_bom("hello"), "hello");
    }

    #[test]
    fn test_utf16_len_counts_surrogate_pairs() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("é"), 1);
        assert_eq!(utf16_len("😀"), 2);
    }

    #[test]
    fn test_longest() {
        assert_eq!(longest(&["abc", "abcdefg", "a"]), Some(7));
        assert_eq!(longest(&[""]), Some(0));
        assert_eq!(longest(&[]), None);
    }
}
