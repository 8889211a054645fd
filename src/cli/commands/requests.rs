//! Leave (licencias) and vacation screens.

use crate::cli::commands::{AppContext, filter_set, maybe_export};
use crate::cli::parser::{ExportArgs, LicenseCmd, VacationCmd};
use crate::core::forms::{LeaveForm, VacationForm};
use crate::core::{Filterable, FormState, ListView};
use crate::errors::AppResult;
use crate::export::RequestExport;
use crate::models::requests::RequestRow;
use crate::models::{Capability, ResolveAction, ResolveOutcome};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::colorize_state;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use std::future::Future;

pub(crate) fn render<R: RequestRow>(rows: &[&R]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::capped("Trabajador", 30),
        Column::capped("Tipo", 28),
        Column::new("Desde"),
        Column::new("Hasta"),
        Column::new("Días"),
        Column::new("Estado"),
    ]);
    for r in rows {
        table.add_row(vec![
            r.id().to_string(),
            r.worker().to_string(),
            r.type_label().to_string(),
            r.starts_on().format("%Y-%m-%d").to_string(),
            r.ends_on().format("%Y-%m-%d").to_string(),
            r.days().to_string(),
            colorize_state(r.state()),
        ]);
    }
    table.render()
}

fn list<R: RequestRow + Filterable>(
    title: &str,
    view: &ListView<R>,
    export: &ExportArgs,
) -> AppResult<()> {
    let visible = view.visible();
    let rows: Vec<RequestExport> = visible.iter().map(|r| RequestExport::from_row(*r)).collect();
    if maybe_export(&rows, export)? {
        return Ok(());
    }

    header(format!("{title} ({} de {})", visible.len(), view.rows().len()));
    if visible.is_empty() {
        info("No hay solicitudes que coincidan con los filtros.");
    } else {
        print!("{}", render(&visible));
    }
    Ok(())
}

/// Send the resolve action, then patch the listed row with the returned state.
async fn resolve<R, C, Fut>(
    mut view: ListView<R>,
    id: u64,
    action: ResolveAction,
    call: C,
) -> AppResult<()>
where
    R: RequestRow + Filterable,
    C: FnOnce(u64, ResolveAction) -> Fut,
    Fut: Future<Output = AppResult<ResolveOutcome>>,
{
    let outcome = call(id, action).await?;
    let state = outcome.state;
    let resolved_by = outcome.resolved_by.clone();
    let found = view.update_where(id, |row| row.set_state(state, resolved_by));

    success(if outcome.detail.is_empty() {
        format!("Solicitud #{id} {}", state.code())
    } else {
        outcome.detail.clone()
    });
    if found {
        let row: Vec<&R> = view.rows().iter().filter(|r| RequestRow::id(*r) == id).collect();
        print!("{}", render(&row));
    }
    Ok(())
}

pub async fn licenses(ctx: &AppContext, cmd: &LicenseCmd) -> AppResult<()> {
    match cmd {
        LicenseCmd::List {
            filters,
            kind,
            export,
        } => {
            ctx.require(Capability::ViewAttendance)?;
            let mut view = ListView::new(ctx.api().licenses().await?);
            view.set_filters(filter_set(filters, kind.map(|k| k.code()))?);
            list("Licencias", &view, export)
        }
        LicenseCmd::Create {
            kind,
            from,
            to,
            reason,
        } => {
            ctx.require(Capability::RequestLeave)?;
            let mut form = FormState::new(LeaveForm::default());
            {
                let v = form.values_mut();
                v.tipo = *kind;
                v.fecha_inicio = Some(date::require_date(from)?);
                v.fecha_fin = Some(date::require_date(to)?);
                v.motivo_detallado = reason.clone().unwrap_or_default();
            }
            let api = ctx.api();
            let created = form
                .submit(|body| async move { api.create_license(&body).await })
                .await?;
            success(format!(
                "Solicitud #{} creada: {} ({} días)",
                created.id,
                created.kind.label(),
                created.days
            ));
            Ok(())
        }
        LicenseCmd::Resolve { id, action } => {
            ctx.require(Capability::ResolveRequests)?;
            let api = ctx.api();
            let view = ListView::new(api.licenses().await?);
            resolve(view, *id, *action, |id, action| async move {
                api.resolve_license(id, action).await
            })
            .await
        }
    }
}

pub async fn vacations(ctx: &AppContext, cmd: &VacationCmd) -> AppResult<()> {
    match cmd {
        VacationCmd::List {
            filters,
            state,
            export,
        } => {
            ctx.require(Capability::ViewAttendance)?;
            let mut view = ListView::new(ctx.api().vacations().await?);
            view.set_filters(filter_set(filters, state.as_deref())?);
            list("Vacaciones", &view, export)
        }
        VacationCmd::Create { from, to } => {
            ctx.require(Capability::RequestLeave)?;
            let mut form = FormState::new(VacationForm::default());
            {
                let v = form.values_mut();
                v.fecha_inicio = Some(date::require_date(from)?);
                v.fecha_fin = Some(date::require_date(to)?);
            }
            let api = ctx.api();
            let created = form
                .submit(|body| async move { api.create_vacation(&body).await })
                .await?;
            success(format!(
                "Solicitud de vacaciones #{} creada ({} días)",
                created.id, created.days
            ));
            Ok(())
        }
        VacationCmd::Resolve { id, action } => {
            ctx.require(Capability::ResolveRequests)?;
            let api = ctx.api();
            let view = ListView::new(api.vacations().await?);
            resolve(view, *id, *action, |id, action| async move {
                api.resolve_vacation(id, action).await
            })
            .await
        }
    }
}
