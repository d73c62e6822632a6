// crates/snippet_extractor/tests/integration_js.rs

#[cfg(test)]
mod integration_js {
    use snippet_extractor::{scan_file, ScanError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_slash_comment_markers() {
        let content = "\
const setup = require('./setup');
//:handler
async function handler(req) {
  const user = await load(req); //~load
  // fetches and caches the user
  //~load end
  return render(user);
}
//:handler end
";
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write temp file");

        let lines = scan_file(file.path(), "handler", Some("load")).expect("scan failed").into_inner();
        assert_eq!(
            lines,
            vec![
                "async function handler(req) {",
                "  const user = await load(req); // ...",
                "  return render(user);",
                "}",
            ]
        );
    }

    #[test]
    fn test_unclosed_section_reports_marker() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "//:handler\nfunction handler() {{}}\n").expect("Failed to write temp file");

        let err = scan_file(file.path(), "handler", None).unwrap_err();
        match err {
            ScanError::UnterminatedSection { marker, path } => {
                assert_eq!(marker, "handler");
                assert_eq!(path, file.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
