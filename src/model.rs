// src/model.rs
//
// Typed records flowing through the pipeline:
//   RawProduct (extractor output) → ParsedProduct (numeric fields)
//   → NormalizedProduct (classified, with derived metrics + index).

use std::fmt;
use std::str::FromStr;

/// Beverage category. Labels are the report's display strings, and the
/// canonical sort uses them, so their byte order is the table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Coffee,
    Tea,
    Carbonated,
    Juice,
    Functional,
    Energy,
    Water,
    Dairy,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Coffee,
        Category::Tea,
        Category::Carbonated,
        Category::Juice,
        Category::Functional,
        Category::Energy,
        Category::Water,
        Category::Dairy,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Coffee => "咖啡",
            Category::Tea => "茶類",
            Category::Carbonated => "碳酸飲料",
            Category::Juice => "果汁飲料",
            Category::Functional => "運動/機能飲料",
            Category::Energy => "能量飲料",
            Category::Water => "水",
            Category::Dairy => "乳製品/其他",
            Category::Other => "其他",
        }
    }

    /// ASCII key for command lines.
    pub fn key(self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Tea => "tea",
            Category::Carbonated => "carbonated",
            Category::Juice => "juice",
            Category::Functional => "functional",
            Category::Energy => "energy",
            Category::Water => "water",
            Category::Dairy => "dairy",
            Category::Other => "other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts either the display label or the ASCII key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_label(s)
            .or_else(|| Self::ALL.into_iter().find(|c| c.key().eq_ignore_ascii_case(s)))
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// One product block as found in a document; all fields still text.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RawProduct {
    pub name: String,
    pub capacity_text: String,
    pub price_text: String,
    pub source_snippet: String,
}

/// Fields converted to numbers; capacity is known to be positive.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedProduct {
    pub name: String,
    pub capacity_ml: f64,
    pub price_jpy: f64,
    pub source_snippet: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedProduct {
    /// 1-based position in the canonical order
    pub sequence_index: usize,
    pub category: Category,
    pub name: String,
    pub capacity_ml: f64,
    pub price_jpy: f64,
    pub price_per_ml: f64,
    pub price_per_100ml: f64,
    pub price_twd: f64,
    pub source_snippet: String,
}

/// Report columns, in display/export order. The snippet is never exported.
pub const COLUMNS: [&str; 8] = [
    "目次",
    "種類",
    "商品名稱",
    "總容量",
    "100ml平均價格",
    "1ml平均價格",
    "日幣售價",
    "新台幣售價",
];

impl NormalizedProduct {
    /// Render one report row. `index` is the caller's sequence index
    /// (canonical or view), not necessarily `self.sequence_index`.
    pub fn display_row(&self, index: usize) -> Vec<String> {
        vec![
            index.to_string(),
            s!(self.category.label()),
            self.name.clone(),
            format!("{:.0}", self.capacity_ml),
            format!("{:.2}", self.price_per_100ml),
            format!("{:.4}", self.price_per_ml),
            format!("{:.0}", self.price_jpy),
            format!("{:.0}", self.price_twd),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_label_or_key() {
        assert_eq!("茶類".parse::<Category>(), Ok(Category::Tea));
        assert_eq!("Energy".parse::<Category>(), Ok(Category::Energy));
        assert!("soup".parse::<Category>().is_err());
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn display_row_rounds_per_column() {
        let p = NormalizedProduct {
            sequence_index: 3,
            category: Category::Coffee,
            name: s!("BOSS ブラック"),
            capacity_ml: 185.0,
            price_jpy: 130.0,
            price_per_ml: 130.0 / 185.0,
            price_per_100ml: 130.0 / 185.0 * 100.0,
            price_twd: 26.0,
            source_snippet: s!("<div>"),
        };
        assert_eq!(
            p.display_row(1),
            vec!["1", "咖啡", "BOSS ブラック", "185", "70.27", "0.7027", "130", "26"]
        );
    }
}
