//! Structural heading discovery with a CommonMark parser.

use pulldown_cmark::{Event, HeadingLevel as MarkdownLevel, Parser, Tag, TagEnd};

use crate::types::HeadingLevel;

/// A level-1 or level-2 heading as seen by the Markdown parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    /// Heading level.
    pub level: HeadingLevel,
    /// Rendered heading text.
    pub text: String,
}

impl HeadingNode {
    /// Create a new heading node.
    #[must_use]
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

fn structural_level(level: MarkdownLevel) -> Option<HeadingLevel> {
    match level {
        MarkdownLevel::H1 => Some(HeadingLevel::One),
        MarkdownLevel::H2 => Some(HeadingLevel::Two),
        _ => None,
    }
}

/// Collect top-level `#` and `##` headings in document order.
///
/// Headings nested in block quotes or list items are not section
/// boundaries and are skipped. Anything that looks like a heading inside
/// code blocks, code spans or HTML blocks never reaches this point because
/// the parser does not emit it as a heading.
///
/// # Examples
/// ```
/// use tiku_splitter::headings::parse_heading_nodes;
///
/// let nodes = parse_heading_nodes("# One\n\n```\n# not a heading\n```\n\n## Two *b*\n");
/// let texts: Vec<_> = nodes.iter().map(|n| n.text.as_str()).collect();
/// assert_eq!(texts, ["One", "Two b"]);
/// ```
pub fn parse_heading_nodes(content: &str) -> Vec<HeadingNode> {
    let mut nodes = Vec::new();
    let mut container_depth = 0usize;
    let mut current: Option<HeadingNode> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::BlockQuote(_) | Tag::List(_) | Tag::Item) => container_depth += 1,
            Event::End(TagEnd::BlockQuote(_) | TagEnd::List(_) | TagEnd::Item) => {
                container_depth = container_depth.saturating_sub(1);
            }
            Event::Start(Tag::Heading { level, .. }) if container_depth == 0 => {
                current = structural_level(level).map(|level| HeadingNode::new(level, ""));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(node) = current.take() {
                    nodes.push(node);
                }
            }
            Event::Text(text) | Event::Code(text) | Event::InlineHtml(text) | Event::Html(text) => {
                if let Some(node) = current.as_mut() {
                    node.text.push_str(&text);
                }
            }
            _ => {}
        }
    }

    nodes
}
