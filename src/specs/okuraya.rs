// src/specs/okuraya.rs
//
// Format A (okuraya-kanekiya.com). Each product begins at a line carrying
// `class="drink_content"`. The product's fields sit at fixed offsets after
// two sub-markers found inside a LOOKAHEAD-line window from that boundary:
//
//   drink_title  +2 → name
//   cost         +2 → capacity, +4 → price
//
// Offsets may reach past the window; only the marker itself must be inside.
// Every marker hit overwrites its fields, so the last marker in the window
// wins, even when its offset line is blank.

use crate::config::consts::LOOKAHEAD;
use crate::core::dom::LineNode;
use crate::model::RawProduct;
use crate::report::SkipReason;

use super::Extraction;

const BOUNDARY: &str = r#"class="drink_content""#;
const TITLE: &str = r#"class="drink_title""#;
const COST: &str = r#"class="cost""#;

const NAME_OFFSET: usize = 2;
const CAPACITY_OFFSET: usize = 2;
const PRICE_OFFSET: usize = 4;

/// Fields collected for one candidate while scanning its window.
#[derive(Default)]
struct Candidate {
    name: String,
    capacity: String,
    price: String,
}

impl Candidate {
    fn fill(slot: &mut String, lines: &[LineNode<'_>], at: usize) {
        if let Some(line) = lines.get(at) {
            *slot = line.leading_text();
        }
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.capacity.is_empty() && !self.price.is_empty()
    }
}

pub fn extract(lines: &[LineNode<'_>]) -> Extraction {
    let mut out = Extraction::default();

    for (start, line) in lines.iter().enumerate() {
        if !line.text().contains(BOUNDARY) { continue; }

        let end = (start + LOOKAHEAD).min(lines.len());
        let window = &lines[start..end];

        let mut cand = Candidate::default();
        for (off, node) in window.iter().enumerate() {
            let j = start + off;
            let text = node.text();
            if text.contains(TITLE) {
                Candidate::fill(&mut cand.name, lines, j + NAME_OFFSET);
            } else if text.contains(COST) {
                Candidate::fill(&mut cand.capacity, lines, j + CAPACITY_OFFSET);
                Candidate::fill(&mut cand.price, lines, j + PRICE_OFFSET);
            }
        }

        if !cand.is_complete() {
            logd!(
                "Okuraya: incomplete block at line {start} (name={:?}, capacity={:?}, price={:?})",
                cand.name, cand.capacity, cand.price
            );
            out.skipped.push(SkipReason::IncompleteBlock { line: start + 1 });
            continue;
        }

        let source_snippet = window
            .iter()
            .map(LineNode::trimmed)
            .collect::<Vec<_>>()
            .join("\n");

        out.products.push(RawProduct {
            name: cand.name,
            capacity_text: cand.capacity,
            price_text: cand.price,
            source_snippet,
        });
    }

    out
}
