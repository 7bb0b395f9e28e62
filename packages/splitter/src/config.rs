//! Configuration constants, path layout and validation functions.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitterError};

/// Level-1 sections with more lines than this are split into level-2 files.
pub const TOO_LONG_THRESHOLD: usize = 500;

/// HTTP timeout in seconds for source downloads.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Marker in the template that is replaced with the generated sidebar.
pub const SIDEBAR_MARKER: &str = "// template: sidebar";

/// Directory (relative to root) holding downloaded source documents.
pub const SOURCE_DIR: &str = "original";

/// Directory (relative to root) holding stored ETags.
pub const ETAG_DIR: &str = "etag";

/// Directory (relative to root) receiving the generated pages.
pub const DOCS_DIR: &str = "docs";

/// Template file (relative to root) for the VitePress config.
pub const TEMPLATE_FILE: &str = "config.templ.mjs";

/// Generated VitePress config (relative to root).
pub const CONFIG_OUTPUT_FILE: &str = "docs/.vitepress/config.mjs";

/// Document name pattern: letters, digits, underscore and hyphen.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid regex"));

/// Validate a document name before it is used to build any path.
///
/// # Examples
/// ```
/// use tiku_splitter::config::validate_name;
///
/// assert!(validate_name("oj").is_ok());
/// assert!(validate_name("cf_2020-fall").is_ok());
/// assert!(validate_name("../oj").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(SplitterError::InvalidName(name.to_string()))
    }
}

/// Title shown on a document's landing page.
///
/// # Examples
/// ```
/// use tiku_splitter::config::landing_title;
///
/// assert_eq!(landing_title("oj"), "OpenJudge题库");
/// assert_eq!(landing_title("lc"), "LC题库");
/// ```
pub fn landing_title(name: &str) -> String {
    match name {
        "oj" => "OpenJudge题库".to_string(),
        "cf" => "Codeforces题库".to_string(),
        other => format!("{}题库", other.to_uppercase()),
    }
}

/// A remote Markdown document to mirror and split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Document name, also the output directory and link prefix.
    pub name: String,
    /// Raw Markdown URL.
    pub url: String,
}

impl Source {
    /// Create a new source.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The problem sets mirrored by default.
#[must_use]
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            "oj",
            "https://raw.githubusercontent.com/GMyhf/2020fall-cs101/refs/heads/main/2020fall_cs101.openjudge.cn_problems.md",
        ),
        Source::new(
            "cf",
            "https://raw.githubusercontent.com/GMyhf/2020fall-cs101/refs/heads/main/2020fall_Codeforces_problems.md",
        ),
    ]
}

/// Load a list of sources from a YAML file.
///
/// The file holds a sequence of `{name, url}` mappings. Every name is
/// validated and must be unique.
pub fn load_sources(path: &Path) -> Result<Vec<Source>> {
    let content = fs::read_to_string(path)?;
    let sources: Vec<Source> = serde_yaml_ng::from_str(&content)?;

    if sources.is_empty() {
        return Err(SplitterError::InvalidSources(format!(
            "{} lists no sources",
            path.display()
        )));
    }

    let mut seen = std::collections::HashSet::new();
    for source in &sources {
        validate_name(&source.name)?;
        if !seen.insert(source.name.as_str()) {
            return Err(SplitterError::InvalidSources(format!(
                "duplicate source name '{}'",
                source.name
            )));
        }
    }

    Ok(sources)
}

/// Filesystem locations used by a run, all relative to one root directory.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Create a layout rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Downloaded source Markdown for a document.
    #[must_use]
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.root.join(SOURCE_DIR).join(format!("{name}.md"))
    }

    /// Stored ETag for a document.
    #[must_use]
    pub fn etag_path(&self, name: &str) -> PathBuf {
        self.root.join(ETAG_DIR).join(name)
    }

    /// Output directory for a document's pages.
    #[must_use]
    pub fn docs_dir(&self, name: &str) -> PathBuf {
        self.root.join(DOCS_DIR).join(name)
    }

    /// VitePress config template.
    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE)
    }

    /// Generated VitePress config.
    #[must_use]
    pub fn config_output_path(&self) -> PathBuf {
        self.root.join(CONFIG_OUTPUT_FILE)
    }
}
