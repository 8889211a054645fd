use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{csv_string, write_rows};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

pub const NOTHING_TO_EXPORT: &str = "No hay filas para exportar con los filtros actuales.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Zero rows: nothing was written.
    Empty,
}

/// High-level export of the rows a list screen currently shows.
pub struct ExportLogic;

impl ExportLogic {
    /// - `rows`: the visible (filtered) rows, already flattened
    /// - `format`: csv | json
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    pub fn export<T: Serialize>(
        rows: &[T],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<ExportOutcome> {
        let path = expand_tilde(file);

        if rows.is_empty() {
            debug!(path = %path.display(), "no visible rows, export skipped");
            warning(NOTHING_TO_EXPORT);
            return Ok(ExportOutcome::Empty);
        }

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "la ruta de salida debe ser absoluta: {file}"
            )));
        }

        ensure_writable(&path, force)?;
        write_rows(rows, format, &path)?;

        Ok(ExportOutcome::Written {
            path,
            rows: rows.len(),
        })
    }
}

/// In-memory CSV of `rows`; `None` when there is nothing to export.
pub fn csv_blob<T: Serialize>(rows: &[T]) -> AppResult<Option<String>> {
    if rows.is_empty() {
        return Ok(None);
    }
    csv_string(rows).map(Some)
}
