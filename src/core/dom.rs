// src/core/dom.rs
//
// Saved "view-source" pages: every source line of the original page lives in
// a <td class="line-content"> cell whose *text* is that line's raw markup.
// Extractors work on this flat, ordered list of line nodes.

use std::fmt::Write as _;

use scraper::{ElementRef, Html, Node, Selector};

const LINE_CONTENT: &str = "td.line-content";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

/// Parsed document; owns the DOM the line nodes borrow from.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// All line nodes, in document order.
    pub fn lines(&self) -> Vec<LineNode<'_>> {
        match Selector::parse(LINE_CONTENT) {
            Ok(sel) => self.html.select(&sel).map(LineNode::new).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// One source line of the saved page.
#[derive(Clone, Debug)]
pub struct LineNode<'a> {
    el: ElementRef<'a>,
    text: String,
}

impl<'a> LineNode<'a> {
    fn new(el: ElementRef<'a>) -> Self {
        let text = el.text().collect();
        Self { el, text }
    }

    /// Text content, i.e. the original line's markup.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whole line text trimmed once at both ends; inner spacing kept.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Text fragments trimmed and concatenated; blank fragments dropped.
    pub fn stripped(&self) -> String {
        self.el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
    }

    /// Stripped text cut at the first `<`, so trailing inline markup
    /// (`<br>`, an unclosed `<span`) never leaks into a field.
    pub fn leading_text(&self) -> String {
        let stripped = self.stripped();
        match stripped.split_once('<') {
            Some((head, _)) => head.trim().to_string(),
            None => stripped.trim().to_string(),
        }
    }

    /// The cell's own markup, one element or text run per line, indented
    /// one space per depth.
    pub fn pretty(&self) -> String {
        let mut out = s!();
        pretty_into(self.el, 0, &mut out);
        out
    }
}

fn pretty_into(el: ElementRef<'_>, depth: usize, out: &mut String) {
    let pad = " ".repeat(depth);
    let name = el.value().name();

    let _ = write!(out, "{pad}<{name}");
    for (key, value) in el.value().attrs() {
        let _ = write!(out, " {key}=\"{}\"", escape_attr(value));
    }
    out.push_str(">\n");

    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            pretty_into(child_el, depth + 1, out);
        } else if let Node::Text(text) = child.value() {
            let t = text.trim();
            if !t.is_empty() {
                let _ = writeln!(out, "{pad} {}", escape_text(t));
            }
        }
    }

    if !VOID_ELEMENTS.contains(&name) {
        let _ = writeln!(out, "{pad}</{name}>");
    }
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// Render source lines the way a browser's saved view-source page does:
/// one table row per line, markup escaped into the line-content cell.
/// Handy for fixtures and benchmarks.
pub fn view_source_page<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = s!(concat!(
        "<!DOCTYPE html><html><head><meta name=\"color-scheme\" content=\"light dark\"></head>",
        "<body><div class=\"line-gutter-backdrop\"></div><table><tbody>\n",
    ));
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(
            out,
            "<tr><td class=\"line-number\" value=\"{}\"></td><td class=\"line-content\">{}</td></tr>",
            i + 1,
            escape_text(line.as_ref())
        );
    }
    out.push_str("</tbody></table></body></html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_raw_markup_as_text() {
        let page = view_source_page(&[r#"<div class="drink_content">"#, "  BOSS <br>"]);
        let doc = Document::parse(&page);
        let lines = doc.lines();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), r#"<div class="drink_content">"#);
        assert_eq!(lines[1].stripped(), "BOSS <br>");
        assert_eq!(lines[1].leading_text(), "BOSS");
    }

    #[test]
    fn trimmed_keeps_spacing_between_chrome_spans() {
        let page = concat!(
            "<table><tbody><tr><td class=\"line-content\">  <span class=\"html-tag\">&lt;div ",
            "<span class=\"html-attribute-name\">class</span>=\"",
            "<span class=\"html-attribute-value\">drink_content</span>\"&gt;</span></td></tr>",
            "</tbody></table>",
        );
        let doc = Document::parse(page);
        let lines = doc.lines();

        assert_eq!(lines[0].trimmed(), r#"<div class="drink_content">"#);
        assert_eq!(lines[0].stripped(), r#"<divclass="drink_content">"#);
    }

    #[test]
    fn line_number_cells_are_not_lines() {
        let page = view_source_page(&["a", "b", "c"]);
        assert_eq!(Document::parse(&page).lines().len(), 3);
    }

    #[test]
    fn pretty_prints_cell_markup() {
        let page = view_source_page(&["<p>x & y</p>"]);
        let doc = Document::parse(&page);
        let pretty = doc.lines()[0].pretty();

        assert_eq!(
            pretty,
            "<td class=\"line-content\">\n &lt;p&gt;x &amp; y&lt;/p&gt;\n</td>\n"
        );
    }

    #[test]
    fn leading_text_without_markup_is_whole_line() {
        let page = view_source_page(&["  ¥120  "]);
        let doc = Document::parse(&page);
        assert_eq!(doc.lines()[0].leading_text(), "¥120");
    }
}
