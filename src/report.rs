// src/report.rs
//! Per-unit outcomes of a load.
//!
//! Records that fail extraction or conversion are dropped with a
//! [`SkipReason`]; these never reach the user. Each input document ends in one
//! [`DocumentStatus`], and only `Rejected`/`Failed` count as warnings. The
//! batch as a whole is a [`BatchResult`].

use std::path::PathBuf;

use thiserror::Error;

use crate::data::CanonicalTable;
use crate::error::DocumentError;
use crate::specs::Vendor;

/// Why a single candidate record was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Block boundary at this 1-based line lacked a name, capacity or price.
    #[error("incomplete product block at line {line}")]
    IncompleteBlock { line: usize },

    #[error("{name}: no number in capacity")]
    MissingCapacity { name: String },

    #[error("{name}: no number in price")]
    MissingPrice { name: String },

    #[error("{name}: capacity {capacity} is not positive")]
    NonPositiveCapacity { name: String, capacity: String },
}

/// A whole document refused for structural reasons.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("list lengths differ (prices {prices}, names {names}, sources {sources})")]
    ListLengthMismatch { prices: usize, names: usize, sources: usize },
}

#[derive(Debug)]
pub enum DocumentStatus {
    /// Recognized; `products` records survived normalization.
    Parsed { vendor: Vendor, products: usize },
    /// No vendor fingerprint. Not a warning.
    Unrecognized,
    Rejected { vendor: Vendor, reason: Rejection },
    Failed(DocumentError),
}

#[derive(Debug)]
pub struct DocumentReport {
    /// Path, or a caller-supplied label for in-memory input.
    pub source: PathBuf,
    pub status: DocumentStatus,
    pub skipped: Vec<SkipReason>,
}

impl DocumentReport {
    /// Human-readable warning, if this document deserves one.
    pub fn warning(&self) -> Option<String> {
        match &self.status {
            DocumentStatus::Rejected { vendor, reason } => {
                Some(format!("{} ({vendor}): {reason}", self.source.display()))
            }
            DocumentStatus::Failed(e) => Some(e.to_string()),
            DocumentStatus::Parsed { .. } | DocumentStatus::Unrecognized => None,
        }
    }
}

/// Batch-level condition, reported apart from per-document warnings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadNotice {
    NothingFound,
}

#[derive(Debug)]
pub struct BatchResult {
    pub table: CanonicalTable,
    pub documents: Vec<DocumentReport>,
    /// Raw records produced by the extractors, before normalization.
    pub raw_found: usize,
}

impl BatchResult {
    pub fn warnings(&self) -> Vec<String> {
        self.documents.iter().filter_map(DocumentReport::warning).collect()
    }

    pub fn notice(&self) -> Option<LoadNotice> {
        self.table.is_empty().then_some(LoadNotice::NothingFound)
    }

    /// Documents that contributed at least one product.
    pub fn parsed_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.status, DocumentStatus::Parsed { products, .. } if products > 0))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.documents.iter().map(|d| d.skipped.len()).sum()
    }

    /// e.g. "Parsed 2/3 documents, 41 of 43 records accepted"
    pub fn summary(&self) -> String {
        format!(
            "Parsed {}/{} documents, {} of {} records accepted",
            self.parsed_count(),
            self.documents.len(),
            self.table.len(),
            self.raw_found,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(status: DocumentStatus) -> DocumentReport {
        DocumentReport { source: PathBuf::from("a.html"), status, skipped: Vec::new() }
    }

    #[test]
    fn only_rejected_and_failed_warn() {
        assert!(doc(DocumentStatus::Unrecognized).warning().is_none());
        assert!(doc(DocumentStatus::Parsed { vendor: Vendor::Okuraya, products: 0 }).warning().is_none());

        let rejected = doc(DocumentStatus::Rejected {
            vendor: Vendor::Hachiyoh,
            reason: Rejection::ListLengthMismatch { prices: 3, names: 2, sources: 2 },
        });
        let msg = rejected.warning().unwrap_or_default();
        assert!(msg.starts_with("a.html (Hachiyoh)"));
        assert!(msg.contains("prices 3, names 2, sources 2"));
    }

    #[test]
    fn empty_batch_reports_nothing_found() {
        let batch = BatchResult {
            table: CanonicalTable::empty(),
            documents: vec![doc(DocumentStatus::Unrecognized)],
            raw_found: 0,
        };
        assert_eq!(batch.notice(), Some(LoadNotice::NothingFound));
        assert!(batch.warnings().is_empty());
        assert_eq!(batch.summary(), "Parsed 0/1 documents, 0 of 0 records accepted");
    }

    #[test]
    fn documents_without_products_are_not_counted_as_parsed() {
        let batch = BatchResult {
            table: CanonicalTable::empty(),
            documents: vec![
                doc(DocumentStatus::Parsed { vendor: Vendor::Okuraya, products: 0 }),
                doc(DocumentStatus::Parsed { vendor: Vendor::Hachiyoh, products: 2 }),
                doc(DocumentStatus::Unrecognized),
            ],
            raw_found: 3,
        };
        assert_eq!(batch.parsed_count(), 1);
        assert!(batch.summary().starts_with("Parsed 1/3 documents"));
    }
}
