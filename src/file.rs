// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::{parse_rows, to_csv_bytes};
use crate::data::ViewTable;
use crate::error::ExportError;
use crate::xlsx::to_xlsx_bytes;

/// Export the view at `path` in `format`. The file is written to a sibling
/// temp file first and renamed into place, so a failure leaves any earlier
/// export untouched. Returns the path written to.
pub fn export(view: &ViewTable<'_>, format: ExportFormat, path: &Path) -> Result<PathBuf, ExportError> {
    if view.is_empty() {
        return Err(ExportError::Empty);
    }

    let bytes = match format {
        ExportFormat::Csv => to_csv_bytes(view).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        ExportFormat::Xlsx => to_xlsx_bytes(view)?,
    };

    write_atomic(path, &bytes)?;
    logf!("Exported {} rows to {}", view.len(), path.display());
    Ok(path.to_path_buf())
}

/// Export using the format and path carried in `ExportOptions`.
pub fn export_with(opts: &ExportOptions, view: &ViewTable<'_>) -> Result<PathBuf, ExportError> {
    export(view, opts.format, &opts.out_path())
}

/// Replace `path` with `bytes` in one rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_err = |source: io::Error| ExportError::Io { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    tmp.persist(path).map_err(|e| ExportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Read a CSV export back (BOM tolerated).
pub fn read_csv(path: &Path) -> io::Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_rows(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CanonicalTable;

    #[test]
    fn empty_view_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let table = CanonicalTable::empty();
        let path = dir.path().join("x.csv");

        let err = export(&table.view(), ExportFormat::Csv, &path).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert!(!path.exists());
    }

    #[test]
    fn atomic_write_creates_parent_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        // no stray temp files left next to it
        assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn parent_that_is_a_file_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let err = write_atomic(&blocker.join("out.csv"), b"data").unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
