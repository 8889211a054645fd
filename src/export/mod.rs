//! CSV/JSON export of the rows a list screen is showing.

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::{ExportLogic, ExportOutcome, csv_blob};
pub use model::{AttendanceExport, AuditExport, RequestExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

pub(crate) fn notify_export_success(format: ExportFormat, rows: usize, path: &Path) {
    success(format!(
        "Exportación {format} lista: {rows} fila(s) en {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        })
    }
}
