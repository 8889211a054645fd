use crate::cli::commands::{AppContext, filter_set, maybe_export};
use crate::cli::parser::{ExportArgs, FilterArgs};
use crate::core::ListView;
use crate::errors::AppResult;
use crate::export::AttendanceExport;
use crate::models::{AttendanceRecord, Capability, MarkType};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_mark, colorize_optional};
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};

pub(crate) fn render(rows: &[&AttendanceRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::capped("Trabajador", 30),
        Column::new("Fecha"),
        Column::new("Hora"),
        Column::new("Tipo"),
        Column::capped("Ubicación", 24),
        Column::capped("Modificada por", 20),
    ]);
    for r in rows {
        table.add_row(vec![
            r.id.to_string(),
            r.worker_name.clone(),
            r.date_str(),
            r.time_str(),
            colorize_mark(r.kind),
            colorize_optional(&or_dash(r.location.as_deref())),
            colorize_optional(&or_dash(r.modified_by.as_deref())),
        ]);
    }
    table.render()
}

pub async fn handle(
    ctx: &AppContext,
    filters: &FilterArgs,
    kind: Option<MarkType>,
    export: &ExportArgs,
) -> AppResult<()> {
    ctx.require(Capability::ViewAttendance)?;

    let records = ctx.api().attendance().await?;
    let mut view = ListView::new(records);
    view.set_filters(filter_set(filters, kind.map(|k| k.code()))?);

    let visible = view.visible();
    let rows: Vec<AttendanceExport> = visible.iter().map(|r| AttendanceExport::from(*r)).collect();
    if maybe_export(&rows, export)? {
        return Ok(());
    }

    header(format!(
        "Asistencias ({} de {})",
        visible.len(),
        view.rows().len()
    ));
    if visible.is_empty() {
        info("No hay marcas que coincidan con los filtros.");
    } else {
        print!("{}", render(&visible));
    }
    Ok(())
}
