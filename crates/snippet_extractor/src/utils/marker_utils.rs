// crates/snippet_extractor/src/utils/marker_utils.rs

use marker_syntax::{ellipsis_comment, COMMENT_LEADERS, END_KEYWORD, HIDE_SIGIL, SECTION_SIGIL};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ScanError, ScanResult};

/// Any hide sentinel, whatever its token: `#~word` or `//~word`.
static GENERIC_HIDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:^|\s)(?:{}){}\w",
        leader_alternation(),
        regex::escape(&HIDE_SIGIL.to_string())
    ))
    .expect("generic hide pattern is a valid regex")
});

fn leader_alternation() -> String {
    COMMENT_LEADERS
        .iter()
        .map(|leader| regex::escape(leader))
        .collect::<Vec<_>>()
        .join("|")
}

/// Markers and hide tokens are single words: non-empty, no whitespace.
pub fn validate_token(token: &str) -> ScanResult<()> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(ScanError::InvalidMarker(token.to_string()));
    }
    Ok(())
}

/// Builds `(?:^|\s)(?P<leader>#|//)<sigil><token><tail>`.
fn sentinel_regex(sigil: char, token: &str, tail: &str) -> ScanResult<Regex> {
    let pattern = format!(
        r"(?:^|\s)(?P<leader>{}){}{}{}",
        leader_alternation(),
        regex::escape(&sigil.to_string()),
        regex::escape(token),
        tail
    );
    Regex::new(&pattern).map_err(|_| ScanError::InvalidMarker(token.to_string()))
}

fn opening_tail() -> &'static str {
    r"\s*$"
}

fn closing_tail() -> String {
    format!(r"\s+{}\s*$", END_KEYWORD)
}

/// Predicates for the opening and closing lines of one named section.
#[derive(Debug, Clone)]
pub struct SectionPatterns {
    marker: String,
    start: Regex,
    end: Regex,
}

impl SectionPatterns {
    pub fn new(marker: &str) -> ScanResult<Self> {
        validate_token(marker)?;
        Ok(Self {
            marker: marker.to_string(),
            start: sentinel_regex(SECTION_SIGIL, marker, opening_tail())?,
            end: sentinel_regex(SECTION_SIGIL, marker, &closing_tail())?,
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// `#:greet` opens the section; `#:greeting` and `#:greet end` do not.
    pub fn is_start(&self, line: &str) -> bool {
        self.start.is_match(line)
    }

    pub fn is_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }
}

/// Predicates for one hide token, plus the placeholder that stands in for the range.
#[derive(Debug, Clone)]
pub struct HidePatterns {
    token: String,
    start: Regex,
    end: Regex,
}

impl HidePatterns {
    pub fn new(token: &str) -> ScanResult<Self> {
        validate_token(token)?;
        Ok(Self {
            token: token.to_string(),
            start: sentinel_regex(HIDE_SIGIL, token, opening_tail())?,
            end: sentinel_regex(HIDE_SIGIL, token, &closing_tail())?,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The line must *end* in the sentinel: `step :validate #~x`.
    pub fn is_start(&self, line: &str) -> bool {
        self.start.is_match(line)
    }

    pub fn is_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }

    /// Rewrites a hide-start line into its placeholder by swapping the sentinel
    /// for an ellipsis comment in the same comment style. Returns `None` when the
    /// line is not a hide-start line for this token.
    pub fn placeholder(&self, line: &str) -> Option<String> {
        let captures = self.start.captures(line)?;
        let leader = captures.name("leader")?;
        let mut placeholder = line[..leader.start()].to_string();
        placeholder.push_str(&ellipsis_comment(leader.as_str()));
        Some(placeholder)
    }
}

/// True for any line carrying a hide sentinel, regardless of its token.
pub fn has_hide_sentinel(line: &str) -> bool {
    GENERIC_HIDE.is_match(line)
}
