// src/engine/order.rs
use std::cmp::Ordering;

use crate::model::NormalizedProduct;

/// Canonical order: category label, then name, both by byte order.
fn canonical(a: &NormalizedProduct, b: &NormalizedProduct) -> Ordering {
    a.category
        .label()
        .cmp(b.category.label())
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort stably into canonical order and number the records 1..=N.
/// Running it again on its own output changes nothing.
pub fn sort_and_index(products: &mut [NormalizedProduct]) {
    products.sort_by(canonical);
    for (i, p) in products.iter_mut().enumerate() {
        p.sequence_index = i + 1;
    }
}
