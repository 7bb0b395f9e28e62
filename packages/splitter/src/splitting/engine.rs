//! Split engine that turns a document's headings into pages and navigation.

use super::registry::NameRegistry;
use super::strategy::SplitStrategy;
use super::types::{OpenGroup, PlannedFile, SplitPlan};
use crate::headings::source_lines;
use crate::types::{HeadingLevel, HeadingRecord, NavEntry, NavItem, Section};

/// Navigation text for level-2 sections that appear before any level-1
/// heading, and for documents without headings.
pub const IMPLICIT_GROUP_TEXT: &str = "Content";

/// Engine for splitting one document into pages.
///
/// Walks the sections in document order, keeping one open level-1 group at
/// a time. The strategy decides per level-1 section whether it becomes a
/// single page or one page per level-2 child.
pub struct SplitEngine<S: SplitStrategy> {
    strategy: S,
}

impl<S: SplitStrategy> SplitEngine<S> {
    /// Create a new split engine.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Plan the pages and navigation for a document.
    ///
    /// Pure: nothing is written. `document` is the link prefix, `content` the
    /// full source text and `headings` its extracted heading records.
    pub fn plan(&self, document: &str, content: &str, headings: &[HeadingRecord]) -> SplitPlan {
        let lines = source_lines(content);
        let mut names = NameRegistry::new();

        if headings.is_empty() {
            return Self::plan_headless(document, content, &mut names);
        }

        let mut plan = SplitPlan::default();
        let mut group: Option<OpenGroup> = None;

        for heading in headings {
            let section = Section::from_lines(heading.clone(), &lines);

            match section.level() {
                HeadingLevel::One => {
                    if let Some(done) = group.take() {
                        plan.entries.push(done.entry);
                    }

                    if self.strategy.should_split(&section) {
                        tracing::debug!(
                            heading = %section.text(),
                            lines = section.line_count(),
                            "Section too long, splitting level-2 children"
                        );
                        group = Some(OpenGroup::split(section.text()));
                    } else {
                        let allocation = names.allocate(section.text());
                        let link = allocation.link(document);
                        tracing::debug!(
                            heading = %section.text(),
                            lines = section.line_count(),
                            page = %allocation.name,
                            "Keeping section on one page"
                        );
                        plan.files.push(PlannedFile::new(allocation, section.content));
                        group = Some(OpenGroup::linked(heading.text.as_str(), link));
                    }
                }
                HeadingLevel::Two => {
                    let open = group.get_or_insert_with(|| OpenGroup::split(IMPLICIT_GROUP_TEXT));
                    if !open.split_children {
                        continue;
                    }

                    let allocation = names.allocate(section.text());
                    let link = allocation.link(document);
                    open.entry.items.push(NavItem::new(section.text(), link));
                    plan.files
                        .push(PlannedFile::new(allocation, promote_heading(&section.content)));
                }
            }
        }

        if let Some(done) = group.take() {
            plan.entries.push(done.entry);
        }

        plan
    }

    /// A document without headings becomes a single page.
    fn plan_headless(document: &str, content: &str, names: &mut NameRegistry) -> SplitPlan {
        if content.trim().is_empty() {
            return SplitPlan::default();
        }

        let allocation = names.allocate(IMPLICIT_GROUP_TEXT);
        let entry = NavEntry::linked(IMPLICIT_GROUP_TEXT, allocation.link(document));
        SplitPlan {
            files: vec![PlannedFile::new(allocation, content)],
            entries: vec![entry],
        }
    }
}

/// Rewrite the first `##` heading marker in `content` to `#`.
///
/// Only the first occurrence changes, so `##` lines further down (for
/// example inside code blocks) are kept literally.
///
/// # Examples
/// ```
/// use tiku_splitter::splitting::promote_heading;
///
/// assert_eq!(promote_heading("## 1A. Theatre Square\n## x"), "# 1A. Theatre Square\n## x");
/// ```
#[must_use]
pub fn promote_heading(content: &str) -> String {
    let mut lines = source_lines(content);
    if let Some(line) = lines.iter_mut().find(|line| is_level_two_marker(line)) {
        let marker_line: &str = *line;
        *line = &marker_line[1..];
    }
    lines.join("\n")
}

fn is_level_two_marker(line: &str) -> bool {
    line.strip_prefix("##")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}
