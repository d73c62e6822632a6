// crates/assemble_snippet/src/lib.rs

use marker_syntax::DEFAULT_INDENT;
use snippet_extractor::ExtractedLines;

/// Assembles extracted lines into the final snippet using the default two-space indent.
pub fn assemble(lines: &ExtractedLines) -> String {
    assemble_with_indent(lines, DEFAULT_INDENT)
}

/// Prefixes every line with `indent` and terminates each with `\n`.
///
/// Relative indentation is untouched and blank lines receive the prefix too, so
/// every line of the result starts with exactly `indent`. Nothing is appended
/// after the last line, and an empty input yields an empty string.
pub fn assemble_with_indent(lines: &ExtractedLines, indent: &str) -> String {
    let capacity = lines
        .iter()
        .map(|line| indent.len() + line.len() + 1)
        .sum();
    let mut snippet = String::with_capacity(capacity);
    for line in lines {
        snippet.push_str(indent);
        snippet.push_str(line);
        snippet.push('\n');
    }
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> ExtractedLines {
        ExtractedLines::from(raw.iter().map(|line| line.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_single_line() {
        assert_eq!(assemble(&lines(&["puts \"hi\""])), "  puts \"hi\"\n");
    }

    #[test]
    fn test_relative_indentation_preserved() {
        let snippet = assemble(&lines(&["class A", "  def b", "  end", "end"]));
        assert_eq!(snippet, "  class A\n    def b\n    end\n  end\n");
    }

    #[test]
    fn test_blank_lines_keep_prefix_and_no_trailing_blank_is_added() {
        let snippet = assemble(&lines(&["a", "", "b"]));
        assert_eq!(snippet, "  a\n  \n  b\n");
        assert!(!snippet.ends_with("\n\n"));
        assert!(snippet.lines().all(|line| line.starts_with("  ")));
    }

    #[test]
    fn test_trailing_blank_line_from_source_is_kept_once() {
        assert_eq!(assemble(&lines(&["a", ""])), "  a\n  \n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(assemble(&ExtractedLines::new()), "");
    }

    #[test]
    fn test_custom_indent() {
        assert_eq!(assemble_with_indent(&lines(&["x", "y"]), "\t"), "\tx\n\ty\n");
        assert_eq!(assemble_with_indent(&lines(&["x"]), ""), "x\n");
    }
}
