// src/specs/hachiyoh.rs
//
// Format B (hachiyoh.co.jp). The page lists products as separate runs of
// price lines and name lines:
//
//   <p class="productslist__price">¥120</p>
//   <p class="productslist__name">天然水<br>550ml</p>
//
// Three document-wide lists are gathered (prices, "name|capacity" entries and
// the name line's pretty markup) and paired by position. Pairing only happens
// when all three have the same length; otherwise nothing from the document is
// trusted.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::dom::LineNode;
use crate::model::RawProduct;
use crate::report::Rejection;

use super::Extraction;

const PRICE_MARKER: &str = r#"class="productslist__price""#;
const NAME_MARKER: &str = r#"class="productslist__name""#;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<]+)<").expect("price pattern"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<]+<br>[^<]+)").expect("name pattern"));

/// Parallel lists gathered from one document.
#[derive(Default)]
struct Lists {
    prices: Vec<String>,
    names: Vec<String>,
    sources: Vec<String>,
}

impl Lists {
    fn scan(lines: &[LineNode<'_>]) -> Self {
        let mut out = Self::default();
        for line in lines {
            let text = line.text();
            if text.contains(PRICE_MARKER) {
                if let Some(c) = PRICE_RE.captures(text) {
                    out.prices.push(s!(c[1].trim()));
                }
            } else if text.contains(NAME_MARKER) {
                if let Some(c) = NAME_RE.captures(text) {
                    out.names.push(c[1].replace("<br>", "|"));
                    out.sources.push(line.pretty());
                }
            }
        }
        out
    }

    fn is_aligned(&self) -> bool {
        self.prices.len() == self.names.len() && self.names.len() == self.sources.len()
    }
}

/// Split a `name|capacity` entry. A missing capacity is the empty string.
fn split_entry(entry: &str) -> (String, String) {
    let mut parts = entry.split('|');
    let name = parts.next().unwrap_or_default().trim();
    let capacity = parts.next().unwrap_or_default().trim();
    (s!(name), s!(capacity))
}

pub fn extract(lines: &[LineNode<'_>]) -> Extraction {
    let lists = Lists::scan(lines);

    if !lists.is_aligned() {
        let rejection = Rejection::ListLengthMismatch {
            prices: lists.prices.len(),
            names: lists.names.len(),
            sources: lists.sources.len(),
        };
        logd!("Hachiyoh: {rejection}");
        return Extraction { rejection: Some(rejection), ..Extraction::default() };
    }

    let products = lists
        .prices
        .into_iter()
        .zip(lists.names)
        .zip(lists.sources)
        .map(|((price_text, entry), source_snippet)| {
            let (name, capacity_text) = split_entry(&entry);
            RawProduct { name, capacity_text, price_text, source_snippet }
        })
        .collect();

    Extraction { products, ..Extraction::default() }
}
