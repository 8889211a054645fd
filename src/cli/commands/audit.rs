use crate::cli::commands::{AppContext, filter_set, maybe_export};
use crate::cli::parser::{ExportArgs, FilterArgs};
use crate::core::ListView;
use crate::errors::AppResult;
use crate::export::AuditExport;
use crate::models::{AuditEntry, Capability};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_action, colorize_optional};
use crate::utils::formatting::{or_dash, truncate};
use crate::utils::table::{Column, Table};

const MAX_ACTION_WIDTH: usize = 40;

/// "accion (Modelo #id)" with only the action word coloured.
fn painted_action(entry: &AuditEntry) -> String {
    let visible = truncate(&entry.action_target(), MAX_ACTION_WIDTH);
    let color = color_for_action(&entry.accion);
    match visible.split_once(' ') {
        Some((word, rest)) => format!("{} {}", color.paint(word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub(crate) fn render(rows: &[&AuditEntry]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Fecha"),
        Column::capped("Usuario", 24),
        Column::capped("Acción", MAX_ACTION_WIDTH),
        Column::capped("Motivo", 40),
        Column::capped("Empresa", 24),
    ]);
    for e in rows {
        table.add_row(vec![
            e.id.to_string(),
            e.fecha_str(),
            e.usuario.clone(),
            painted_action(e),
            colorize_optional(&or_dash(e.motivo.as_deref())),
            colorize_optional(&or_dash(e.empresa.as_deref())),
        ]);
    }
    table.render()
}

pub async fn handle(
    ctx: &AppContext,
    company: Option<u64>,
    filters: &FilterArgs,
    action: Option<&str>,
    export: &ExportArgs,
) -> AppResult<()> {
    ctx.require(Capability::ViewAudit)?;

    let company = ctx.company(company);
    let entries = ctx.api().audit(company).await?;
    let mut view = ListView::new(entries);
    view.set_filters(filter_set(filters, action)?);

    let visible = view.visible();
    let rows: Vec<AuditExport> = visible.iter().map(|e| AuditExport::from(*e)).collect();
    if maybe_export(&rows, export)? {
        return Ok(());
    }

    let scope = company.map_or_else(|| "todas las empresas".to_string(), |c| format!("empresa {c}"));
    header(format!(
        "Auditoría, {scope} ({} de {})",
        visible.len(),
        view.rows().len()
    ));
    if visible.is_empty() {
        info("No hay registros de auditoría que coincidan con los filtros.");
    } else {
        print!("{}", render(&visible));
    }
    Ok(())
}
