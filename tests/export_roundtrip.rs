// tests/export_roundtrip.rs
//
// Export a filtered view, read it back, compare with what the table shows.
//
use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, DataType, Reader, Xlsx};

use vm_analyzer::config::options::{AppOptions, ExportFormat, PipelineOptions};
use vm_analyzer::data::{CanonicalTable, Filter};
use vm_analyzer::error::ExportError;
use vm_analyzer::file::{self, export, read_csv};
use vm_analyzer::model::{Category, COLUMNS};
use vm_analyzer::scrape::load_documents;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn loaded() -> CanonicalTable {
    load_documents(
        &[fixture("hachiyoh_three.html"), fixture("okuraya_one.html")],
        &PipelineOptions::default(),
    )
    .table
}

fn expected(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut out = vec![COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>()];
    out.extend(rows);
    out
}

#[test]
fn csv_roundtrip_matches_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.csv");
    let table = loaded();
    let view = Filter::new(None, "").apply(&table);

    let written = export(&view, ExportFormat::Csv, &path).unwrap();
    assert_eq!(written, path);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with("\u{feff}".as_bytes()));
    assert_eq!(read_csv(&path).unwrap(), expected(view.display_rows()));
}

#[test]
fn csv_export_applies_filter_and_reindexes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tea.csv");
    let table = loaded();
    let view = Filter::new(Some(Category::Tea), "").apply(&table);

    export(&view, ExportFormat::Csv, &path).unwrap();
    let rows = read_csv(&path).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "1");
    assert_eq!(rows[1][1], "茶類");
    assert_eq!(rows[1][2], "午後の紅茶 ストレートティー");
    assert_eq!(rows[1][3..], ["500", "32.00", "0.3200", "160", "32"]);
}

#[test]
fn xlsx_roundtrip_matches_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.xlsx");
    let table = loaded();
    let view = Filter::new(None, "").apply(&table);

    export(&view, ExportFormat::Xlsx, &path).unwrap();

    let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
    let range = wb.worksheet_range("products").unwrap();
    let got: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().enumerate().map(|(c, cell)| render(c, cell)).collect())
        .collect();

    assert_eq!(got, expected(view.display_rows()));
}

// Number cells rendered at their column's display precision.
fn render(col: usize, cell: &Data) -> String {
    const DECIMALS: [usize; 8] = [0, 0, 0, 0, 2, 4, 0, 0];
    match cell {
        Data::Float(f) => format!("{:.*}", DECIMALS[col], f),
        Data::Int(i) => format!("{:.*}", DECIMALS[col], *i as f64),
        other => other.to_string(),
    }
}

#[test]
fn xlsx_keeps_full_precision() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("precise.xlsx");
    let table = loaded();
    let view = Filter::new(Some(Category::Coffee), "").apply(&table);

    export(&view, ExportFormat::Xlsx, &path).unwrap();

    let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
    let range = wb.worksheet_range("products").unwrap();
    let p = view.get(1).unwrap();
    let per_ml = range.get_value((1, 5)).and_then(|c| c.as_f64()).unwrap();
    let per_100 = range.get_value((1, 4)).and_then(|c| c.as_f64()).unwrap();

    assert!((per_ml - 130.0 / 185.0).abs() < 1e-12);
    assert!((per_ml - p.price_per_ml).abs() < 1e-12);
    assert!((per_100 - p.price_per_100ml).abs() < 1e-9);
}

#[test]
fn export_options_drive_path_and_format() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.set_path(&dir.path().join("sub").join("report.xlsx").to_string_lossy());

    let table = loaded();
    let written = file::export_with(&opts.export, &table.view()).unwrap();

    assert_eq!(written, dir.path().join("sub").join("report.xlsx"));
    assert!(written.exists());
}

#[test]
fn empty_view_is_refused_and_prior_export_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let table = loaded();

    export(&table.view(), ExportFormat::Csv, &path).unwrap();
    let before = fs::read(&path).unwrap();

    let empty = Filter::new(Some(Category::Energy), "").apply(&table);
    let err = export(&empty, ExportFormat::Csv, &path).unwrap_err();

    assert!(matches!(err, ExportError::Empty));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn failed_persist_leaves_no_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    // destination is an existing, non-empty directory: the final rename fails
    let target = dir.path().join("taken.csv");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), b"keep").unwrap();

    let table = loaded();
    let err = export(&table.view(), ExportFormat::Csv, &target).unwrap_err();

    assert!(matches!(err, ExportError::Persist { .. }));
    assert_eq!(fs::read(target.join("keep.txt")).unwrap(), b"keep");
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
