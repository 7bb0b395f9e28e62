//! Page name registry for one document.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::FileAllocation;

/// Name used when a heading slugifies to nothing.
pub const FALLBACK_NAME: &str = "unnamed";

/// Problem identifier at the start of a heading: optional word prefix,
/// then digits and word characters, then a separator.
///
/// "1A. Theatre Square" yields "1A", "01003: Hangover" yields "01003".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PROBLEM_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w*?(\d+\w*)\W").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Derive the base page name for a heading, before deduplication.
///
/// # Examples
/// ```
/// use tiku_splitter::splitting::base_name;
///
/// assert_eq!(base_name("1A. Theatre Square"), "1a");
/// assert_eq!(base_name("01003: Hangover"), "01003");
/// assert_eq!(base_name("Basic Problems"), "basic-problems");
/// assert_eq!(base_name("???"), "unnamed");
/// ```
pub fn base_name(heading_text: &str) -> String {
    if let Some(id) = PROBLEM_ID_PATTERN
        .captures(heading_text)
        .and_then(|caps| caps.get(1))
    {
        return id.as_str().to_lowercase();
    }

    let slug = NON_SLUG_CHARS.replace_all(heading_text, "");
    let slug = SLUG_SEPARATORS.replace_all(&slug, "-");
    let slug = slug.trim_matches('-').to_lowercase();
    if slug.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        slug
    }
}

/// Registry of page names already handed out within one document.
///
/// A fresh registry is created for every document, so identical headings in
/// different documents get identical names.
#[derive(Debug, Default)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique page for a heading.
    ///
    /// Taken names get `-1`, `-2`, ... appended until one is free.
    pub fn allocate(&mut self, heading_text: &str) -> FileAllocation {
        let base = base_name(heading_text);
        let name = if self.used.contains(&base) {
            let mut counter = 1usize;
            while self.used.contains(&format!("{base}-{counter}")) {
                counter += 1;
            }
            format!("{base}-{counter}")
        } else {
            base
        };

        self.used.insert(name.clone());
        FileAllocation::new(name)
    }
}
