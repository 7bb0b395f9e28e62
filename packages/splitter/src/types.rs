//! Core data types for the splitter.
//!
//! These types describe headings found in a source document, the sections
//! they delimit, the files allocated for them, and the navigation entries
//! the sidebar is generated from.

use std::path::PathBuf;

/// Structural heading levels. Deeper headings are body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    /// `#` heading.
    One,
    /// `##` heading.
    Two,
}

impl HeadingLevel {
    /// Number of `#` characters in the ATX marker.
    #[must_use]
    pub fn depth(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Level for a marker of `depth` hashes, if structural.
    #[must_use]
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }
}

/// A heading located in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// Heading level.
    pub level: HeadingLevel,
    /// Heading text as rendered (inline markup removed).
    pub text: String,
    /// Line of the heading itself (0-based).
    pub start_line: usize,
    /// First line after the section (exclusive).
    pub end_line: usize,
}

impl HeadingRecord {
    /// Create a new heading record.
    #[must_use]
    pub fn new(
        level: HeadingLevel,
        text: impl Into<String>,
        start_line: usize,
        end_line: usize,
    ) -> Self {
        Self {
            level,
            text: text.into(),
            start_line,
            end_line,
        }
    }

    /// Number of lines in the span, heading line included.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line
    }
}

/// A heading together with the document lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The heading delimiting this section.
    pub heading: HeadingRecord,
    /// Lines `[start_line, end_line)` joined with `\n`.
    pub content: String,
}

impl Section {
    /// Materialize a section from the document's lines.
    ///
    /// Out-of-range spans are clamped to the available lines.
    #[must_use]
    pub fn from_lines(heading: HeadingRecord, lines: &[&str]) -> Self {
        let end = heading.end_line.min(lines.len());
        let start = heading.start_line.min(end);
        let content = lines[start..end].join("\n");
        Self { heading, content }
    }

    /// Heading level.
    #[must_use]
    pub fn level(&self) -> HeadingLevel {
        self.heading.level
    }

    /// Heading text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.heading.text
    }

    /// Number of lines in the section.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.heading.line_count()
    }
}

/// A unique slug assigned to a heading, and the file it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAllocation {
    /// Slug, unique within one document.
    pub name: String,
    /// File path relative to the document's output directory.
    pub path: PathBuf,
}

impl FileAllocation {
    /// Allocation for a slug, stored as `{slug}.md`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = PathBuf::from(format!("{name}.md"));
        Self { name, path }
    }

    /// Site link to the page, e.g. `/oj/1a`.
    #[must_use]
    pub fn link(&self, document: &str) -> String {
        format!("/{document}/{}", self.name)
    }
}

/// A leaf navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Site link.
    pub link: String,
}

impl NavItem {
    /// Create a new navigation item.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A level-1 navigation entry.
///
/// Short sections carry a link and no items; split sections carry no link
/// and one item per level-2 page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Link to the section's own page, if one was written.
    pub link: Option<String>,
    /// Level-2 pages, in document order.
    pub items: Vec<NavItem>,
}

impl NavEntry {
    /// Entry linking to a single page.
    #[must_use]
    pub fn linked(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: Vec::new(),
        }
    }

    /// Entry without a page of its own.
    #[must_use]
    pub fn group(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items: Vec::new(),
        }
    }

    /// Add level-2 items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<NavItem>) -> Self {
        self.items = items;
        self
    }
}

/// Navigation entries for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentManifest {
    /// Document name (link prefix).
    pub name: String,
    /// Entries in document order.
    pub entries: Vec<NavEntry>,
}

impl DocumentManifest {
    /// Create a new document manifest.
    #[must_use]
    pub fn new(name: impl Into<String>, entries: Vec<NavEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// Navigation for every document of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteManifest {
    /// Per-document manifests.
    pub documents: Vec<DocumentManifest>,
}

impl SiteManifest {
    /// Create an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document's manifest.
    pub fn push(&mut self, document: DocumentManifest) {
        self.documents.push(document);
    }

    /// Whether no document has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
