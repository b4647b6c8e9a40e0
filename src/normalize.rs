// src/normalize.rs
//
// Raw text fields → numbers. The first decimal run in a field is its value;
// units ("ml", "g缶") and currency ("¥", "円") around it are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ParsedProduct, RawProduct};
use crate::report::SkipReason;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.?[0-9]*)").expect("number pattern"));

/// First number in `text`, if any. Only ASCII digits count.
pub fn first_number(text: &str) -> Option<f64> {
    NUMBER_RE
        .captures(text)
        .and_then(|c| c[1].parse::<f64>().ok())
}

pub fn normalize(raw: RawProduct) -> Result<ParsedProduct, SkipReason> {
    let Some(capacity_ml) = first_number(&raw.capacity_text) else {
        return Err(SkipReason::MissingCapacity { name: raw.name });
    };
    let Some(price_jpy) = first_number(&raw.price_text) else {
        return Err(SkipReason::MissingPrice { name: raw.name });
    };
    if capacity_ml <= 0.0 {
        return Err(SkipReason::NonPositiveCapacity { name: raw.name, capacity: raw.capacity_text });
    }

    Ok(ParsedProduct {
        name: raw.name,
        capacity_ml,
        price_jpy,
        source_snippet: raw.source_snippet,
    })
}
