// src/processing/counter.rs

/// Counts lines as the number of segments produced by splitting on `\n`.
///
/// This is the single line-counting convention used for file sizes, block
/// sizes and the merged stream, so budgets stay reproducible:
///
/// - A trailing newline yields one extra (empty) segment.
/// - An empty string counts as one line.
/// - `\r` is not a separator; CRLF content counts the same as LF content.
///
/// # Examples
///
/// ```
/// use exhibit::processing::count_lines;
///
/// assert_eq!(count_lines("a\nb"), 2);
/// assert_eq!(count_lines("a\nb\n"), 3);
/// assert_eq!(count_lines(""), 1);
/// ```
#[inline]
pub fn count_lines(content: &str) -> usize {
    content.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_basic() {
        assert_eq!(count_lines("One two three.\nFour five."), 2);
    }

    #[test]
    fn test_trailing_newline_counts_extra_line() {
        assert_eq!(count_lines("One two three.\nFour five.\n"), 3);
    }

    #[test]
    fn test_counts_empty_string() {
        assert_eq!(count_lines(""), 1);
    }

    #[test]
    fn test_counts_only_newlines() {
        assert_eq!(count_lines("\n\n"), 3);
    }

    #[test]
    fn test_crlf_is_split_on_lf_only() {
        assert_eq!(count_lines("a\r\nb\r\n"), 3);
    }
}
