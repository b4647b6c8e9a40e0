// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use crate::classify::{CategoryRules, DEFAULT_RULES};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub pipeline: PipelineOptions,
    pub export: ExportOptions,
}

/// Knobs for one load operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineOptions {
    /// JPY → TWD
    pub exchange_rate: f64,
    pub rules: CategoryRules<'static>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            exchange_rate: DEFAULT_JPY_TO_TWD_RATE,
            rules: DEFAULT_RULES,
        }
    }
}

impl PipelineOptions {
    pub fn with_rate(rate: f64) -> Self {
        Self { exchange_rate: rate, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Xlsx => "xlsx" }
    }

    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ext(s.trim()).ok_or_else(|| format!("Unknown format: {s} (expected csv or xlsx)"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, with the extension following the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(&*stem, ".", self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. A recognised extension
    /// (`.csv`, `.xlsx`) also switches the format; anything else is ignored.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());

        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        if let Some(fmt) = p.extension().and_then(|e| e.to_str()).and_then(ExportFormat::from_ext) {
            self.format = fmt;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format() {
        let mut export = ExportOptions::default();
        assert!(export.out_path().ends_with("report.csv"));

        export.format = ExportFormat::Xlsx;
        assert!(export.out_path().ends_with("report.xlsx"));
    }

    #[test]
    fn set_path_switches_format_on_known_extension() {
        let mut export = ExportOptions::default();
        export.set_path("reports/march.xlsx");

        assert_eq!(export.format, ExportFormat::Xlsx);
        assert_eq!(export.out_path(), Path::new("reports").join("march.xlsx"));
    }

    #[test]
    fn set_path_ignores_unknown_extension() {
        let mut export = ExportOptions::default();
        export.set_path("reports/march.data");

        assert_eq!(export.format, ExportFormat::Csv);
        assert_eq!(export.out_path(), Path::new("reports").join("march.csv"));
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("XLSX".parse::<ExportFormat>(), Ok(ExportFormat::Xlsx));
        assert!("tsv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn pipeline_defaults_to_fixed_rate() {
        let opts = PipelineOptions::default();
        assert_eq!(opts.exchange_rate, 0.20);
        assert_eq!(PipelineOptions::with_rate(0.21).exchange_rate, 0.21);
    }
}
