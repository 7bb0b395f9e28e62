//! Tiku Splitter - Split problem-set Markdown into a static documentation site.
//!
//! This crate mirrors large Markdown problem sets, cuts each one into
//! per-topic pages along its level-1/level-2 headings, and renders the
//! VitePress sidebar that links them.
//!
//! # Example
//!
//! ```
//! use tiku_splitter::headings::extract_headings;
//! use tiku_splitter::splitting::{LengthSplitStrategy, SplitEngine};
//!
//! let content = "# Basics\nHello\n";
//! let extraction = extract_headings(content);
//! let engine = SplitEngine::new(LengthSplitStrategy::default());
//! let plan = engine.plan("oj", content, &extraction.headings);
//!
//! assert_eq!(plan.files[0].allocation.name, "basics");
//! assert_eq!(plan.entries[0].link.as_deref(), Some("/oj/basics"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, name validation, sources and path layout
//! - [`types`]: Core data types (headings, sections, navigation)
//! - [`error`]: Error types and Result alias
//! - [`headings`]: Structural heading extraction with line spans
//! - [`splitting`]: Name allocation and the section splitter
//! - [`nav`]: Sidebar rendering and config templating
//! - [`http`]: HTTP client with conditional requests
//! - [`fetch`]: ETag-based source mirroring
//! - [`pipeline`]: Per-document orchestration
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod headings;
pub mod http;
pub mod nav;
pub mod pipeline;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use pipeline::{split_document, split_documents, SplitReport};

// Re-export commonly used items
pub use config::{validate_name, Layout, Source};
pub use error::{Result, SplitterError};
pub use types::{DocumentManifest, HeadingLevel, HeadingRecord, NavEntry, NavItem, SiteManifest};
