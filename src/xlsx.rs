// src/xlsx.rs
//
// Spreadsheet export. Numeric columns hold the full-precision values; the
// number formats round them on screen the same way the table and CSV do.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::data::ViewTable;
use crate::model::{COLUMNS, NormalizedProduct};

const SHEET_NAME: &str = "products";

const WIDTHS: [f64; 8] = [6.0, 14.0, 36.0, 8.0, 14.0, 12.0, 10.0, 10.0];

struct Formats {
    whole: Format,
    cents: Format,
    fine: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            whole: Format::new().set_num_format("0"),
            cents: Format::new().set_num_format("0.00"),
            fine: Format::new().set_num_format("0.0000"),
        }
    }
}

fn write_product(
    sheet: &mut Worksheet,
    row: u32,
    index: usize,
    p: &NormalizedProduct,
    f: &Formats,
) -> Result<(), XlsxError> {
    sheet.write_number_with_format(row, 0, index as f64, &f.whole)?;
    sheet.write_string(row, 1, p.category.label())?;
    sheet.write_string(row, 2, &p.name)?;
    sheet.write_number_with_format(row, 3, p.capacity_ml, &f.whole)?;
    sheet.write_number_with_format(row, 4, p.price_per_100ml, &f.cents)?;
    sheet.write_number_with_format(row, 5, p.price_per_ml, &f.fine)?;
    sheet.write_number_with_format(row, 6, p.price_jpy, &f.whole)?;
    sheet.write_number_with_format(row, 7, p.price_twd, &f.whole)?;
    Ok(())
}

pub fn to_xlsx_bytes(view: &ViewTable<'_>) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let formats = Formats::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &header)?;
        sheet.set_column_width(col, WIDTHS[col as usize])?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (r, (k, p)) in view.rows().enumerate() {
        write_product(sheet, (r + 1) as u32, k, p, &formats)?;
    }

    workbook.save_to_buffer()
}
