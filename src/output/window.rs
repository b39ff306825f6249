// src/output/window.rs

use crate::config::PaginationConfig;

/// Splits the merged stream into its front and back windows.
///
/// Lines are the `\n`-separated segments of `merged`, so the number of lines
/// always equals `processing::count_lines(merged)`.
///
/// - If the stream fits `front_budget + back_budget`, every line goes into
///   the front window and the back window is empty.
/// - Otherwise the front window holds the first `front_budget` lines and the
///   back window the last `back_budget` lines. The two never overlap.
///
/// # Examples
///
/// ```
/// use exhibit::config::PaginationConfig;
/// use exhibit::output::split_windows;
///
/// let layout = PaginationConfig { lines_per_page: 2, pages_front: 1, pages_back: 1 };
/// let (front, back) = split_windows("1\n2\n3\n4\n5", &layout);
/// assert_eq!(front, ["1", "2"]);
/// assert_eq!(back, ["4", "5"]);
///
/// let (front, back) = split_windows("1\n2\n3", &layout);
/// assert_eq!(front, ["1", "2", "3"]);
/// assert!(back.is_empty());
/// ```
pub fn split_windows(merged: &str, layout: &PaginationConfig) -> (Vec<String>, Vec<String>) {
    let lines: Vec<&str> = merged.split('\n').collect();
    let total = lines.len();

    if total <= layout.total_budget() {
        let front = lines.into_iter().map(str::to_string).collect();
        return (front, Vec::new());
    }

    let front = lines[..layout.front_budget()]
        .iter()
        .map(|line| line.to_string())
        .collect();
    let back = lines[total - layout.back_budget()..]
        .iter()
        .map(|line| line.to_string())
        .collect();
    (front, back)
}
