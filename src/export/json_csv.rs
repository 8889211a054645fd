use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// CSV text with the header row taken from the struct's field order.
pub(crate) fn csv_string<T: Serialize>(rows: &[T]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("no se pudo escribir el CSV: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("no se pudo cerrar el CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV con codificación inválida: {e}")))
}

fn render<T: Serialize>(rows: &[T], format: ExportFormat) -> AppResult<String> {
    match format {
        ExportFormat::Csv => csv_string(rows),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Serialize `rows` and replace whatever is at `path`.
pub(crate) fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    let data = render(rows, format)?;
    fs::write(path, data)?;
    debug!(path = %path.display(), %format, "export file written");

    notify_export_success(format, rows.len(), path);
    Ok(())
}
