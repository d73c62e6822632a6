// crates/snippet_extractor/src/lib.rs

//! Isolates a named section of a source file and redacts its hide ranges.
//!
//! ```text
//! #:greet
//! puts "hi"
//! #~x
//! secret_line
//! #~x end
//! #:greet end
//! ```
//!
//! Scanning the file above for `greet` with hide token `x` yields
//! `puts "hi"` followed by the placeholder `# ...`.
//!
//! Pattern predicates live in [`utils::marker_utils`]; the state machine that
//! drives them lives in [`processor::scanner`].

pub mod error;
pub mod processor;
pub mod utils;

pub use error::{ScanError, ScanResult};
pub use processor::{
    read_section_with, scan, scan_file, scan_reader, DefaultSectionReader, ExtractedLines, ScanState,
    SectionReader, SectionScanner,
};
pub use utils::marker_utils::{has_hide_sentinel, HidePatterns, SectionPatterns};
