//! Main splitting service that ties all components together.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::config::{landing_title, validate_name, Layout};
use crate::error::{Result, SplitterError};
use crate::headings::{extract_headings, ReconciliationMiss};
use crate::nav::{render_sidebar, write_config};
use crate::splitting::{write_plan, SplitEngine, SplitStrategy};
use crate::types::{DocumentManifest, SiteManifest};

/// Name of the landing page written into every document directory.
pub const LANDING_FILE: &str = "index.md";

/// Outcome of splitting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Document name.
    pub name: String,
    /// Structural headings found.
    pub headings: usize,
    /// Pages written, landing page excluded.
    pub files_written: usize,
    /// Headings dropped because no source line matched them.
    pub misses: Vec<ReconciliationMiss>,
}

/// A document that was not processed.
#[derive(Debug)]
pub struct SkippedDocument {
    /// Requested name.
    pub name: String,
    /// Why it was skipped.
    pub reason: SplitterError,
}

/// Outcome of a split run.
#[derive(Debug, Default)]
pub struct SplitReport {
    /// Processed documents in request order.
    pub documents: Vec<DocumentReport>,
    /// Skipped documents in request order.
    pub skipped: Vec<SkippedDocument>,
    /// Config written at the end of the run, if any document succeeded.
    pub config_path: Option<PathBuf>,
}

/// Landing page for a document. Not linked from the sidebar.
#[must_use]
pub fn landing_page(name: &str) -> String {
    let title = landing_title(name);
    format!("# {title}\n\n欢迎来到{title}，点击左边目录选择题目。\n")
}

/// Split one stored document into pages.
///
/// Validates the name, reads `original/{name}.md`, rebuilds `docs/{name}/`
/// from scratch and writes its landing page.
///
/// # Returns
/// The document's navigation and a report of what was written
pub fn split_document<S: SplitStrategy>(
    engine: &SplitEngine<S>,
    layout: &Layout,
    name: &str,
) -> Result<(DocumentManifest, DocumentReport)> {
    validate_name(name)?;

    let source_path = layout.source_path(name);
    if !source_path.is_file() {
        return Err(SplitterError::MissingSource(source_path));
    }

    tracing::info!(name, path = %source_path.display(), "Processing document");
    let content = fs::read_to_string(&source_path)?;

    let extraction = extract_headings(&content);
    tracing::info!(
        name,
        headings = extraction.headings.len(),
        lines = extraction.line_count,
        "Found headings"
    );

    let plan = engine.plan(name, &content, &extraction.headings);

    let output_dir = layout.docs_dir(name);
    let files_written = write_plan(&output_dir, &plan)?;
    fs::write(output_dir.join(LANDING_FILE), landing_page(name))?;
    tracing::info!(name, files = files_written, dir = %output_dir.display(), "Wrote pages");

    let report = DocumentReport {
        name: name.to_string(),
        headings: extraction.headings.len(),
        files_written,
        misses: extraction.misses,
    };
    Ok((DocumentManifest::new(name, plan.entries), report))
}

/// Split every named document and regenerate the site config.
///
/// A failure on one document is recorded in the report and the run moves
/// on to the next. Repeated names are processed once, at their first
/// position. The config is written once, after all documents, and only if
/// at least one of them was processed; only that write can fail the run.
pub fn split_documents<S, I>(
    engine: &SplitEngine<S>,
    layout: &Layout,
    names: I,
) -> Result<SplitReport>
where
    S: SplitStrategy,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = SplitReport::default();
    let mut manifest = SiteManifest::new();
    let mut seen = HashSet::new();

    for name in names {
        let name = name.as_ref();
        if !seen.insert(name.to_string()) {
            tracing::debug!(name, "Document already processed in this run");
            continue;
        }

        match split_document(engine, layout, name) {
            Ok((document, document_report)) => {
                manifest.push(document);
                report.documents.push(document_report);
            }
            Err(reason) => {
                tracing::warn!(name, error = %reason, "Skipping document");
                report.skipped.push(SkippedDocument {
                    name: name.to_string(),
                    reason,
                });
            }
        }
    }

    if !manifest.is_empty() {
        let fragment = render_sidebar(&manifest);
        let path = write_config(&layout.template_path(), &layout.config_output_path(), &fragment)?;
        tracing::info!(path = %path.display(), "Updated sidebar config");
        report.config_path = Some(path);
    }

    Ok(report)
}
