//! Heading extraction for problem-set Markdown.
//!
//! The parser knows which headings are real (not inside code) but not
//! reliably on which line they sit; a raw line scan knows the lines but not
//! which of them are real. Extraction parses once, scans once, and then
//! greedily pairs each parsed heading with the earliest matching raw line.

mod ast;
mod scan;

pub use ast::{parse_heading_nodes, HeadingNode};
pub use scan::{scan_candidates, source_lines, text_matches, CandidateLine};

use crate::types::{HeadingLevel, HeadingRecord};

/// Characters of heading text compared when containment fails.
pub const MATCH_PREFIX_CHARS: usize = 20;

/// A parsed heading that could not be tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationMiss {
    /// Heading level.
    pub level: HeadingLevel,
    /// Parsed heading text.
    pub text: String,
}

/// Headings of one document plus the ones that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Headings in document order with their spans.
    pub headings: Vec<HeadingRecord>,
    /// Parsed headings without a matching source line.
    pub misses: Vec<ReconciliationMiss>,
    /// Number of lines in the document.
    pub line_count: usize,
}

/// Extract level-1 and level-2 headings with their line spans.
///
/// # Examples
/// ```
/// use tiku_splitter::headings::extract_headings;
///
/// let extraction = extract_headings("# A\ntext\n## B\nmore\n# C\n");
/// let spans: Vec<_> = extraction
///     .headings
///     .iter()
///     .map(|h| (h.text.as_str(), h.start_line, h.end_line))
///     .collect();
/// assert_eq!(spans, [("A", 0, 4), ("B", 2, 4), ("C", 4, 6)]);
/// ```
pub fn extract_headings(content: &str) -> Extraction {
    let lines = source_lines(content);
    let nodes = parse_heading_nodes(content);
    let candidates = scan_candidates(&lines);

    let (matched, misses) = reconcile(&nodes, &candidates);
    for miss in &misses {
        tracing::warn!(
            level = miss.level.depth(),
            text = %miss.text,
            "Heading has no matching source line, dropping it"
        );
    }

    Extraction {
        headings: assign_spans(matched, lines.len()),
        misses,
        line_count: lines.len(),
    }
}

/// Pair parsed headings with raw candidate lines.
///
/// For every node in order, the earliest unclaimed candidate of the same
/// level whose text matches is claimed. The result is sorted by line, so a
/// node claiming a line far ahead does not hide the headings before it.
fn reconcile(
    nodes: &[HeadingNode],
    candidates: &[CandidateLine],
) -> (Vec<(HeadingLevel, String, usize)>, Vec<ReconciliationMiss>) {
    let mut matched = Vec::with_capacity(nodes.len());
    let mut misses = Vec::new();
    let mut claimed = vec![false; candidates.len()];

    for node in nodes {
        let found = candidates.iter().enumerate().position(|(index, c)| {
            !claimed[index]
                && c.level == node.level
                && text_matches(&c.text, &node.text, MATCH_PREFIX_CHARS)
        });

        match found {
            Some(index) => {
                claimed[index] = true;
                matched.push((node.level, node.text.clone(), candidates[index].line));
            }
            None => misses.push(ReconciliationMiss {
                level: node.level,
                text: node.text.clone(),
            }),
        }
    }

    matched.sort_by_key(|(_, _, line)| *line);
    (matched, misses)
}

/// Close every heading at the next heading of the same or a higher level.
fn assign_spans(
    matched: Vec<(HeadingLevel, String, usize)>,
    line_count: usize,
) -> Vec<HeadingRecord> {
    let mut next_any = line_count;
    let mut next_level_one = line_count;
    let mut records: Vec<HeadingRecord> = matched
        .into_iter()
        .rev()
        .map(|(level, text, start)| {
            let end = match level {
                HeadingLevel::One => next_level_one,
                HeadingLevel::Two => next_any,
            };
            next_any = start;
            if level == HeadingLevel::One {
                next_level_one = start;
            }
            HeadingRecord::new(level, text, start, end)
        })
        .collect();
    records.reverse();
    records
}
