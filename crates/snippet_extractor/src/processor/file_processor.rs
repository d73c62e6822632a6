// crates/snippet_extractor/src/processor/file_processor.rs

use std::path::Path;

use crate::error::ScanResult;
use crate::processor::scanner::{scan_file, ExtractedLines};

/// Trait that abstracts reading one section out of a file.
pub trait SectionReader {
    /// Reads section `marker` from `file_path`, collapsing hide ranges for `hide` if given.
    fn read_section(&self, file_path: &Path, marker: &str, hide: Option<&str>) -> ScanResult<ExtractedLines>;
}

/// Default implementation of the `SectionReader` trait, backed by the line scanner.
pub struct DefaultSectionReader;

impl SectionReader for DefaultSectionReader {
    fn read_section(&self, file_path: &Path, marker: &str, hide: Option<&str>) -> ScanResult<ExtractedLines> {
        scan_file(file_path, marker, hide)
    }
}

/// Public API function to read a section using a provided `SectionReader` implementation.
pub fn read_section_with<P: AsRef<Path>>(
    reader: &dyn SectionReader,
    file_path: P,
    marker: &str,
    hide: Option<&str>,
) -> ScanResult<ExtractedLines> {
    reader.read_section(file_path.as_ref(), marker, hide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Dummy reader that always fails.
    pub struct FailingReader;

    impl SectionReader for FailingReader {
        fn read_section(&self, file_path: &Path, marker: &str, _hide: Option<&str>) -> ScanResult<ExtractedLines> {
            Err(ScanError::MarkerNotFound {
                marker: marker.to_string(),
                path: file_path.to_path_buf(),
            })
        }
    }

    #[test]
    fn test_default_reader_success() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "#:greet\nputs \"hi\"\n#:greet end\n").unwrap();

        let lines = read_section_with(&DefaultSectionReader, temp_file.path(), "greet", None).unwrap();
        assert_eq!(lines.into_inner(), vec!["puts \"hi\""]);
    }

    #[test]
    fn test_default_reader_with_hide() {
        let content = concat!(
            "#:greet\n",
            "puts \"hi\"\n",
            "#~x\n",
            "secret_line\n",
            "#~x end\n",
            "#:greet end\n",
        );
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        let lines = read_section_with(&DefaultSectionReader, temp_file.path(), "greet", Some("x")).unwrap();
        assert_eq!(lines.into_inner(), vec!["puts \"hi\"", "# ..."]);
    }

    #[test]
    fn test_failing_reader() {
        let temp_file = NamedTempFile::new().unwrap();
        let result = read_section_with(&FailingReader, temp_file.path(), "greet", None);
        assert!(matches!(result, Err(ScanError::MarkerNotFound { .. })));
    }
}
