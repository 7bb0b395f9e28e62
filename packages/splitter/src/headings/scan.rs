//! Raw line scan for ATX heading markers.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::HeadingLevel;

/// `#` or `##` at column 0, whitespace, then text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,2})\s+(.+)$").expect("valid regex"));

/// A source line that looks like a level-1 or level-2 heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    /// 0-based line number.
    pub line: usize,
    /// Level implied by the marker.
    pub level: HeadingLevel,
    /// Text after the marker, trimmed.
    pub text: String,
}

/// Split a document into lines exactly as they are written back out.
///
/// Splits on `\n` only, so joining the result with `\n` reproduces the
/// input byte for byte (a trailing newline yields a final empty line).
#[must_use]
pub fn source_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Find every line that could hold a `#` or `##` heading.
///
/// This is purely lexical: lines inside code blocks are reported too and
/// are filtered out later by reconciliation against the parsed headings.
#[must_use]
pub fn scan_candidates(lines: &[&str]) -> Vec<CandidateLine> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line, text)| {
            let caps = ATX_HEADING.captures(text)?;
            let depth = caps.get(1)?.as_str().len();
            let level = HeadingLevel::from_depth(depth)?;
            Some(CandidateLine {
                line,
                level,
                text: text[depth..].trim().to_string(),
            })
        })
        .collect()
}

/// Whether `line_text` from a raw line can stand for a parsed heading.
///
/// Matches when the line contains the heading text, or starts with its
/// first `prefix_chars` characters. Inline markup on the raw line (code
/// spans, emphasis) breaks containment but usually not the prefix.
#[must_use]
pub fn text_matches(line_text: &str, heading_text: &str, prefix_chars: usize) -> bool {
    if line_text.contains(heading_text) {
        return true;
    }
    let prefix: String = heading_text.chars().take(prefix_chars).collect();
    line_text.starts_with(&prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_lines_roundtrip() {
        let content = "# A\nbody\n\n## B\n";
        let lines = source_lines(content);
        assert_eq!(lines, vec!["# A", "body", "", "## B", ""]);
        assert_eq!(lines.join("\n"), content);
    }

    #[test]
    fn test_scan_candidates() {
        let lines =
            source_lines("# One\ntext\n## Two  \n### Three\n#NoSpace\n  # Indented\n##\tTab");
        let candidates = scan_candidates(&lines);
        assert_eq!(
            candidates,
            vec![
                CandidateLine {
                    line: 0,
                    level: HeadingLevel::One,
                    text: "One".to_string()
                },
                CandidateLine {
                    line: 2,
                    level: HeadingLevel::Two,
                    text: "Two".to_string()
                },
                CandidateLine {
                    line: 6,
                    level: HeadingLevel::Two,
                    text: "Tab".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_scan_strips_carriage_return() {
        let lines = source_lines("# Title\r\nbody\r\n");
        let candidates = scan_candidates(&lines);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "Title");
    }

    #[test]
    fn test_text_matches_contains() {
        assert!(text_matches("1A. Theatre Square", "Theatre Square", 20));
        assert!(!text_matches("1B. Other", "Theatre Square", 20));
    }

    #[test]
    fn test_text_matches_prefix() {
        // Raw line keeps backticks the parsed text has lost.
        let line = "01003: Hangover with a long title `code`";
        let heading = "01003: Hangover with a long title code";
        assert!(text_matches(line, heading, 20));
        assert!(!text_matches(line, heading, 40));
    }

    #[test]
    fn test_text_matches_multibyte_prefix() {
        let line = "题目一：数组**求和**与排序问题的扩展";
        let heading = "题目一：数组求和与排序问题的扩展";
        assert!(text_matches(line, heading, 6));
        assert!(!text_matches(line, heading, 8));
    }
}
