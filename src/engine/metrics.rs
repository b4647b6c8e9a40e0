// src/engine/metrics.rs
use crate::model::{Category, NormalizedProduct, ParsedProduct};

/// Derive all metrics for one record. `sequence_index` is left at 0 until
/// [`sort_and_index`](super::sort_and_index) assigns it.
///
/// `capacity_ml` must be positive; the normalizer guarantees it.
pub fn compute(parsed: ParsedProduct, category: Category, rate: f64) -> NormalizedProduct {
    let price_per_ml = parsed.price_jpy / parsed.capacity_ml;
    NormalizedProduct {
        sequence_index: 0,
        category,
        name: parsed.name,
        capacity_ml: parsed.capacity_ml,
        price_jpy: parsed.price_jpy,
        price_per_ml,
        price_per_100ml: price_per_ml * 100.0,
        price_twd: parsed.price_jpy * rate,
        source_snippet: parsed.source_snippet,
    }
}
