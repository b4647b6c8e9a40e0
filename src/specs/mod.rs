// src/specs/mod.rs
//! # Vendor formats
//!
//! Each supported vendor page lives in its own module and knows *where the
//! product fields sit* in that vendor's saved view-source page. A spec takes the
//! document's ordered [`LineNode`]s and returns raw text fields; turning those
//! into numbers is the normalizer's job.
//!
//! ## Detection
//! A document is matched by a plain substring of its raw text, checked in
//! [`Vendor::ALL`] order. The first fingerprint found wins; a document with no
//! fingerprint is left alone (no products, no error).
//!
//! ## Current specs
//! - `okuraya` – block scan from each `drink_content` boundary.
//! - `hachiyoh` – three document-wide lists, paired by position.
//!
//! Adding a vendor means one module, one variant, one fingerprint.

use std::fmt;

use crate::config::consts::{HACHIYOH_FINGERPRINT, OKURAYA_FINGERPRINT};
use crate::core::dom::LineNode;
use crate::model::RawProduct;
use crate::report::{Rejection, SkipReason};

pub mod hachiyoh;
pub mod okuraya;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vendor {
    Okuraya,
    Hachiyoh,
}

impl Vendor {
    /// Detection order.
    pub const ALL: [Vendor; 2] = [Vendor::Okuraya, Vendor::Hachiyoh];

    pub fn fingerprint(self) -> &'static str {
        match self {
            Vendor::Okuraya => OKURAYA_FINGERPRINT,
            Vendor::Hachiyoh => HACHIYOH_FINGERPRINT,
        }
    }

    pub fn detect(raw: &str) -> Option<Vendor> {
        Self::ALL.into_iter().find(|v| raw.contains(v.fingerprint()))
    }

    pub fn extract(self, lines: &[LineNode<'_>]) -> Extraction {
        match self {
            Vendor::Okuraya => okuraya::extract(lines),
            Vendor::Hachiyoh => hachiyoh::extract(lines),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Vendor::Okuraya => "Okuraya",
            Vendor::Hachiyoh => "Hachiyoh",
        })
    }
}

/// What one document yielded.
///
/// `rejection` is set when the document as a whole could not be trusted;
/// `products` is then empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub products: Vec<RawProduct>,
    pub skipped: Vec<SkipReason>,
    pub rejection: Option<Rejection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_substring() {
        assert_eq!(Vendor::detect("<a href=\"https://okuraya-kanekiya.com/\">"), Some(Vendor::Okuraya));
        assert_eq!(Vendor::detect("www.hachiyoh.co.jp/products"), Some(Vendor::Hachiyoh));
        assert_eq!(Vendor::detect("<html>unrelated</html>"), None);
    }

    #[test]
    fn first_fingerprint_in_order_wins() {
        let both = "hachiyoh.co.jp okuraya-kanekiya.com";
        assert_eq!(Vendor::detect(both), Some(Vendor::Okuraya));
    }
}
