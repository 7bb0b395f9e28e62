//! Types for the section splitting system.

use crate::types::{FileAllocation, NavEntry};

/// A page the splitter decided to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Name and relative path of the page.
    pub allocation: FileAllocation,
    /// Full page content.
    pub content: String,
}

impl PlannedFile {
    /// Create a new planned file.
    #[must_use]
    pub fn new(allocation: FileAllocation, content: impl Into<String>) -> Self {
        Self {
            allocation,
            content: content.into(),
        }
    }
}

/// The outcome of splitting one document, before anything touches disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPlan {
    /// Pages in document order.
    pub files: Vec<PlannedFile>,
    /// Navigation entries in document order.
    pub entries: Vec<NavEntry>,
}

/// Navigation state for the level-1 group currently being filled.
#[derive(Debug)]
pub(crate) struct OpenGroup {
    pub entry: NavEntry,
    /// Whether level-2 children get pages of their own.
    pub split_children: bool,
}

impl OpenGroup {
    /// Group whose level-1 section was written as one page.
    pub fn linked(text: &str, link: String) -> Self {
        Self {
            entry: NavEntry::linked(text, link),
            split_children: false,
        }
    }

    /// Group without a page; its level-2 children become pages.
    pub fn split(text: &str) -> Self {
        Self {
            entry: NavEntry::group(text),
            split_children: true,
        }
    }
}
