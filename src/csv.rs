// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::data::ViewTable;
use crate::model::COLUMNS;

/// UTF-8 byte-order mark; spreadsheet apps need it to read CJK text.
pub const BOM: &str = "\u{feff}";

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). A leading BOM is skipped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // trailing row without newline, even if quotes were unterminated
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}

/// Write one CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { w.write_all(b",")?; }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\r\n")
}

/// Full CSV export of a view: BOM, header row, one row per record.
pub fn to_csv_bytes(view: &ViewTable<'_>) -> io::Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::with_capacity(64 * (view.len() + 1));
    buf.extend_from_slice(BOM.as_bytes());
    write_row(&mut buf, &COLUMNS)?;
    for row in view.display_rows() {
        write_row(&mut buf, &row[..])?;
    }
    Ok(buf)
}
