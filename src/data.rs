// src/data.rs
//
// Canonical and view-layer product data.
//
// - CanonicalTable: read-only, canonically ordered records of one load.
//                   Built only by the pipeline; replaced wholesale by the next load.
// - ViewTable:      zero-copy filtered projection for display and export.
//                   Holds positions into the canonical table and re-derives a
//                   dense 1..M index over them.

use crate::engine;
use crate::model::{Category, NormalizedProduct};

/// Authoritative result of one load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanonicalTable {
    products: Vec<NormalizedProduct>,
}

impl CanonicalTable {
    /// Sort into canonical order and assign sequence indices.
    pub fn from_products(mut products: Vec<NormalizedProduct>) -> Self {
        engine::sort_and_index(&mut products);
        Self { products }
    }

    pub fn empty() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    pub fn products(&self) -> &[NormalizedProduct] { &self.products }

    /// Record by canonical 1-based index.
    pub fn get(&self, sequence_index: usize) -> Option<&NormalizedProduct> {
        sequence_index.checked_sub(1).and_then(|i| self.products.get(i))
    }

    /// Distinct categories present, in label order.
    pub fn categories(&self) -> Vec<Category> {
        // already sorted by label, so duplicates are adjacent
        let mut out: Vec<Category> = self.products.iter().map(|p| p.category).collect();
        out.dedup();
        out
    }

    /// Unfiltered view.
    pub fn view(&self) -> ViewTable<'_> {
        ViewTable::from_indices(self, (0..self.products.len()).collect())
    }
}

/// Display predicates. Both must hold for a record to be kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// `None` keeps every category.
    pub category: Option<Category>,
    /// Case-insensitive substring; blank means no constraint.
    pub name: String,
}

impl Filter {
    pub fn new(category: Option<Category>, name: impl Into<String>) -> Self {
        Self { category, name: name.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.name.trim().is_empty()
    }

    fn needle(&self) -> String {
        self.name.trim().to_lowercase()
    }

    fn matches_with(category: Option<Category>, needle: &str, p: &NormalizedProduct) -> bool {
        category.is_none_or(|c| p.category == c)
            && (needle.is_empty() || p.name.to_lowercase().contains(needle))
    }

    pub fn apply<'a>(&self, table: &'a CanonicalTable) -> ViewTable<'a> {
        let needle = self.needle();
        let row_ix = table
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| Self::matches_with(self.category, &needle, p))
            .map(|(i, _)| i)
            .collect();
        ViewTable::from_indices(table, row_ix)
    }
}

/// Filtered projection. Row `k` (0-based) has view index `k + 1`.
#[derive(Clone, Debug)]
pub struct ViewTable<'a> {
    /// Positions of kept records in the canonical table
    pub row_ix: Vec<usize>,
    table: &'a CanonicalTable,
}

impl<'a> ViewTable<'a> {
    /// Build a view from precomputed canonical positions. Positions past the
    /// end of the table are dropped.
    pub fn from_indices(table: &'a CanonicalTable, mut row_ix: Vec<usize>) -> Self {
        row_ix.retain(|&i| i < table.len());
        Self { row_ix, table }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn table(&self) -> &'a CanonicalTable { self.table }

    /// `(view index, record)` pairs in view order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a NormalizedProduct)> + '_ {
        let table = self.table;
        self.row_ix
            .iter()
            .enumerate()
            .map(move |(k, &ix)| (k + 1, &table.products[ix]))
    }

    /// Record by view index (1-based).
    pub fn get(&self, view_index: usize) -> Option<&'a NormalizedProduct> {
        let k = view_index.checked_sub(1)?;
        self.row_ix.get(k).map(|&ix| &self.table.products[ix])
    }

    /// Audit snippet for the record at `view_index`.
    pub fn snippet(&self, view_index: usize) -> Option<&'a str> {
        self.get(view_index).map(|p| p.source_snippet.as_str())
    }

    /// Rendered report rows, indices re-derived for this view.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows().map(|(k, p)| p.display_row(k)).collect()
    }
}
