// crates/marker_syntax/src/lib.rs

//! Sentinel syntax shared by the snippet scanner and its callers.
//!
//! A section is opened by `#:name` and closed by `#:name end`; a hide range is
//! opened by a line ending in `#~token` and closed by `#~token end`. Both
//! families also accept `//` as the comment leader.

/// Comment leaders recognised in front of a sentinel.
pub const COMMENT_LEADERS: &[&str] = &["#", "//"];

/// Follows the comment leader of a section marker (`#:greet`).
pub const SECTION_SIGIL: char = ':';

/// Follows the comment leader of a hide sentinel (`#~x`).
pub const HIDE_SIGIL: char = '~';

/// Keyword that turns an opening sentinel into a closing one.
pub const END_KEYWORD: &str = "end";

/// Replaces the hide sentinel on the placeholder line, after the comment leader.
pub const ELLIPSIS: &str = "...";

/// Indentation unit prepended to every snippet line unless configured otherwise.
pub const DEFAULT_INDENT: &str = "  ";

/// Builds the placeholder comment for a hidden range, e.g. `# ...`.
pub fn ellipsis_comment(leader: &str) -> String {
    format!("{} {}", leader, ELLIPSIS)
}
