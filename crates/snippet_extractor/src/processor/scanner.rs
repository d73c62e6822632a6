// crates/snippet_extractor/src/processor/scanner.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ScanError, ScanResult};
use crate::utils::marker_utils::{has_hide_sentinel, HidePatterns, SectionPatterns};

/// Where the scanner is relative to the requested section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Before the section's opening marker.
    Searching,
    /// Inside the section, no hide range active.
    Collecting,
    /// Inside the section and inside a hide range for the requested token.
    Hiding,
    /// The closing marker has been consumed.
    Done,
}

/// Lines kept from one section, in file order, without line terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLines(Vec<String>);

impl ExtractedLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ExtractedLines {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl<'a> IntoIterator for &'a ExtractedLines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Line-driven state machine isolating one section, with optional hide-range redaction.
///
/// Transitions:
///
/// ```text
/// Searching  --section start-->  Collecting
/// Collecting --hide start----->  Hiding      (line replaced by placeholder)
/// Hiding     --hide end------->  Collecting  (line dropped)
/// Collecting --section end---->  Done
/// Hiding     --section end---->  Done
/// ```
///
/// Only the first opening marker counts; later ones are ordinary content. Hide
/// ranges are one level deep: a repeated hide start inside a range is swallowed
/// with the rest of the range and the first hide end closes it.
#[derive(Debug)]
pub struct SectionScanner<'a> {
    section: &'a SectionPatterns,
    hide: Option<&'a HidePatterns>,
    state: ScanState,
    lines: ExtractedLines,
}

impl<'a> SectionScanner<'a> {
    pub fn new(section: &'a SectionPatterns, hide: Option<&'a HidePatterns>) -> Self {
        Self {
            section,
            hide,
            state: ScanState::Searching,
            lines: ExtractedLines::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feeds one line (without its terminator) and returns the resulting state.
    pub fn feed(&mut self, line: &str) -> ScanState {
        let next = match self.state {
            ScanState::Searching => {
                if self.section.is_start(line) {
                    ScanState::Collecting
                } else {
                    ScanState::Searching
                }
            }
            ScanState::Collecting => self.collect(line),
            ScanState::Hiding => {
                if self.section.is_end(line) {
                    ScanState::Done
                } else if self.hide.is_some_and(|hide| hide.is_end(line)) {
                    ScanState::Collecting
                } else {
                    ScanState::Hiding
                }
            }
            ScanState::Done => ScanState::Done,
        };

        if next != self.state {
            log::debug!(
                "section '{}': {:?} -> {:?} at {:?}",
                self.section.marker(),
                self.state,
                next,
                line
            );
        }
        self.state = next;
        next
    }

    fn collect(&mut self, line: &str) -> ScanState {
        if self.section.is_end(line) {
            return ScanState::Done;
        }
        if let Some(hide) = self.hide {
            if let Some(placeholder) = hide.placeholder(line) {
                self.lines.push(placeholder);
                return ScanState::Hiding;
            }
        }
        if !has_hide_sentinel(line) {
            self.lines.push(line);
        }
        ScanState::Collecting
    }

    /// Consumes the scanner once input is exhausted (or the section is done).
    pub fn finish(self, source: &Path) -> ScanResult<ExtractedLines> {
        match self.state {
            ScanState::Done => Ok(self.lines),
            ScanState::Searching => Err(ScanError::MarkerNotFound {
                marker: self.section.marker().to_string(),
                path: source.to_path_buf(),
            }),
            ScanState::Collecting | ScanState::Hiding => Err(ScanError::UnterminatedSection {
                marker: self.section.marker().to_string(),
                path: source.to_path_buf(),
            }),
        }
    }
}

/// Runs the scanner over a reader, stopping at the section's closing marker.
/// `source` only labels errors.
pub fn scan_reader<R: BufRead>(
    reader: R,
    source: &Path,
    section: &SectionPatterns,
    hide: Option<&HidePatterns>,
) -> ScanResult<ExtractedLines> {
    let mut scanner = SectionScanner::new(section, hide);
    for line in reader.lines() {
        let line = line.map_err(|source_err| ScanError::Io {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        if scanner.feed(&line) == ScanState::Done {
            break;
        }
    }
    scanner.finish(source)
}

/// Opens `file_path` and extracts the lines of section `marker`, redacting hide
/// ranges for `hide` when given.
///
/// # Errors
///
/// `FileNotFound` when the path is not a readable file, `MarkerNotFound` when the
/// section never opens, `UnterminatedSection` when it never closes.
pub fn scan_file(file_path: &Path, marker: &str, hide: Option<&str>) -> ScanResult<ExtractedLines> {
    let section = SectionPatterns::new(marker)?;
    let hide = hide.map(HidePatterns::new).transpose()?;

    if !file_path.is_file() {
        return Err(ScanError::FileNotFound {
            path: file_path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a regular file"),
        });
    }
    let file = File::open(file_path).map_err(|source| ScanError::FileNotFound {
        path: file_path.to_path_buf(),
        source,
    })?;

    log::debug!("scanning {} for section '{}'", file_path.display(), marker);
    scan_reader(BufReader::new(file), file_path, &section, hide.as_ref())
}

/// Extracts section `marker` from `file_path` without hide processing.
pub fn scan(file_path: &Path, marker: &str) -> ScanResult<ExtractedLines> {
    scan_file(file_path, marker, None)
}
