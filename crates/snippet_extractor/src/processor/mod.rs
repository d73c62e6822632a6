// crates/snippet_extractor/src/processor/mod.rs

pub mod file_processor;
pub mod scanner;

pub use file_processor::{read_section_with, DefaultSectionReader, SectionReader};
pub use scanner::{scan, scan_file, scan_reader, ExtractedLines, ScanState, SectionScanner};
