// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result};

use crate::{
    config::{
        consts::DEFAULT_JPY_TO_TWD_RATE,
        options::{AppOptions, ExportFormat, PipelineOptions},
    },
    data::{Filter, ViewTable},
    file,
    model::{Category, COLUMNS},
    progress::Progress,
    report::LoadNotice,
    scrape,
};

/// Unit-price report for saved vending-machine product pages.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Saved view-source HTML pages
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Keep one category (label such as 茶類, or key such as tea)
    #[arg(long, short = 'c')]
    pub category: Option<Category>,

    /// Keep names containing this text (case-insensitive)
    #[arg(long, short = 'n', default_value = "")]
    pub name: String,

    /// JPY → TWD exchange rate
    #[arg(long, env = "VM_RATE", default_value_t = DEFAULT_JPY_TO_TWD_RATE)]
    pub rate: f64,

    /// Export the filtered view here (.csv or .xlsx)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Export format; overrides the --out extension
    #[arg(long, short = 'f')]
    pub format: Option<ExportFormat>,

    /// Print the source snippet of view row N instead of the table
    #[arg(long, value_name = "N")]
    pub snippet: Option<usize>,

    /// Mirror log output to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    fn app_options(&self) -> Result<AppOptions> {
        if !self.rate.is_finite() || self.rate < 0.0 {
            bail!("Exchange rate must be a non-negative number, got {}", self.rate);
        }
        let mut opts = AppOptions {
            pipeline: PipelineOptions::with_rate(self.rate),
            ..AppOptions::default()
        };
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        if let Some(fmt) = self.format {
            opts.export.format = fmt;
        }
        Ok(opts)
    }

    fn wants_export(&self) -> bool {
        self.out.is_some() || self.format.is_some()
    }
}

/// Prints per-document warnings to stderr as they happen.
struct CliProgress;

impl Progress for CliProgress {
    fn item_failed(&mut self, _source: &str, msg: &str) {
        eprintln!("Warning: {msg}");
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    crate::log::init(args.verbose);
    let opts = args.app_options()?;

    let batch = scrape::load_documents_with_progress(&args.paths, &opts.pipeline, Some(&mut CliProgress));
    eprintln!("{}", batch.summary());

    if batch.notice() == Some(LoadNotice::NothingFound) {
        eprintln!("No products found.");
        return Ok(());
    }

    let view = Filter::new(args.category, args.name.as_str()).apply(&batch.table);

    if let Some(n) = args.snippet {
        let snippet = view
            .snippet(n)
            .ok_or_else(|| eyre!("No row {n} in the current view ({} rows)", view.len()))?;
        println!("{snippet}");
        return Ok(());
    }

    print_table(&view);

    if args.wants_export() {
        let path = file::export_with(&opts.export, &view)?;
        eprintln!("Exported {} rows to {}", view.len(), path.display());
    }
    Ok(())
}

/// Plain aligned table on stdout. Widths count chars, so wide CJK glyphs
/// may still drift in some terminals.
fn print_table(view: &ViewTable<'_>) {
    let rows = view.display_rows();
    let mut widths: Vec<usize> = COLUMNS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}", w = *w))
            .collect();
        println!("{}", padded.join("  ").trim_end());
    };

    line(&COLUMNS);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        line(&cells);
    }
}
