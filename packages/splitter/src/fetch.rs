//! Mirroring remote problem-set documents.
//!
//! Each source is fetched with its stored ETag; unchanged documents are not
//! downloaded again. The splitter only ever sees the stored files.

use std::fs;
use std::io::ErrorKind;

use reqwest::blocking::Client;

use crate::config::{validate_name, Layout, Source};
use crate::error::Result;
use crate::http::{conditional_get, ConditionalResponse};

/// Result of syncing one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The stored copy is current.
    Unchanged,
    /// New content was written.
    Updated,
}

/// Per-source outcomes of an update run, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// `(name, outcome)` pairs.
    pub outcomes: Vec<(String, FetchOutcome)>,
}

impl UpdateReport {
    /// Whether any document changed.
    #[must_use]
    pub fn any_changed(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, outcome)| *outcome == FetchOutcome::Updated)
    }

    /// Names of the documents that changed.
    #[must_use]
    pub fn changed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == FetchOutcome::Updated)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Read the stored ETag for a document, if any.
fn read_etag(layout: &Layout, name: &str) -> Result<Option<String>> {
    match fs::read_to_string(layout.etag_path(name)) {
        Ok(etag) => {
            let etag = etag.trim();
            Ok((!etag.is_empty()).then(|| etag.to_string()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch one source if it changed since the last sync.
///
/// On new content the document is written to the source directory first and
/// the ETag stored afterwards, so an interrupted sync re-downloads next time.
pub fn sync_source(client: &Client, source: &Source, layout: &Layout) -> Result<FetchOutcome> {
    validate_name(&source.name)?;
    let etag = read_etag(layout, &source.name)?;

    match conditional_get(client, &source.url, etag.as_deref())? {
        ConditionalResponse::NotModified => {
            tracing::info!(name = %source.name, "Source unchanged");
            Ok(FetchOutcome::Unchanged)
        }
        ConditionalResponse::Modified { body, etag } => {
            let source_path = layout.source_path(&source.name);
            if let Some(parent) = source_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&source_path, body)?;

            if let Some(etag) = etag {
                let etag_path = layout.etag_path(&source.name);
                if let Some(parent) = etag_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(etag_path, etag)?;
            }

            tracing::info!(name = %source.name, path = %source_path.display(), "Source updated");
            Ok(FetchOutcome::Updated)
        }
    }
}

/// Sync every source in order. The first failure aborts the update.
pub fn update_sources(
    client: &Client,
    sources: &[Source],
    layout: &Layout,
) -> Result<UpdateReport> {
    let mut report = UpdateReport::default();
    for source in sources {
        let outcome = sync_source(client, source, layout)?;
        report.outcomes.push((source.name.clone(), outcome));
    }
    Ok(report)
}
