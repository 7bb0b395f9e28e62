//! Splitting strategies for level-1 sections.

use crate::config::TOO_LONG_THRESHOLD;
use crate::types::Section;

/// Trait for configurable splitting strategies.
///
/// Implementations decide whether a level-1 section is written as one page
/// or broken up into one page per level-2 child.
pub trait SplitStrategy {
    /// Determine if this level-1 section should be split.
    fn should_split(&self, section: &Section) -> bool;
}

/// Strategy that splits level-1 sections longer than a line threshold.
///
/// The section's own line count is used, heading line included, so a
/// section of exactly `threshold` lines stays whole.
#[derive(Debug, Clone, Copy)]
pub struct LengthSplitStrategy {
    threshold: usize,
}

impl LengthSplitStrategy {
    /// Create a strategy with a custom threshold.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for LengthSplitStrategy {
    fn default() -> Self {
        Self::new(TOO_LONG_THRESHOLD)
    }
}

impl SplitStrategy for LengthSplitStrategy {
    fn should_split(&self, section: &Section) -> bool {
        section.line_count() > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeadingLevel, HeadingRecord};

    fn section_of(lines: usize) -> Section {
        Section {
            heading: HeadingRecord::new(HeadingLevel::One, "S", 0, lines),
            content: String::new(),
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let strategy = LengthSplitStrategy::default();
        assert!(!strategy.should_split(&section_of(1)));
        assert!(!strategy.should_split(&section_of(500)));
        assert!(strategy.should_split(&section_of(501)));
    }

    #[test]
    fn test_custom_threshold() {
        let strategy = LengthSplitStrategy::new(3);
        assert!(!strategy.should_split(&section_of(3)));
        assert!(strategy.should_split(&section_of(4)));
    }
}
