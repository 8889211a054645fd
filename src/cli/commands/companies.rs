use crate::cli::commands::AppContext;
use crate::errors::AppResult;
use crate::models::{Capability, Company, Shift};
use crate::ui::messages::{header, info};
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};

fn render_companies(rows: &[Company]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::capped("Razón social", 36),
        Column::new("RUT"),
        Column::capped("Dirección", 30),
        Column::capped("Comuna", 18),
        Column::capped("Región", 18),
    ]);
    for c in rows {
        table.add_row(vec![
            c.id.to_string(),
            c.razon_social.clone(),
            or_dash(c.rut_empresa.as_deref()),
            or_dash(c.direccion.as_deref()),
            or_dash(c.comuna.as_deref()),
            or_dash(c.region.as_deref()),
        ]);
    }
    table.render()
}

pub(crate) fn render_shifts(rows: &[Shift]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::capped("Turno", 24),
        Column::new("Horario"),
        Column::new("Tolerancia"),
    ]);
    for s in rows {
        table.add_row(vec![
            s.id.to_string(),
            s.nombre.clone(),
            s.window(),
            format!("{} min", s.tolerancia_minutos),
        ]);
    }
    table.render()
}

pub async fn companies(ctx: &AppContext, assigned: bool) -> AppResult<()> {
    ctx.require(Capability::ViewCompanies)?;

    let api = ctx.api();
    let list = if assigned {
        api.assigned_companies().await?
    } else {
        api.companies().await?
    };

    header(if assigned { "Empresas asignadas" } else { "Empresas" });
    if list.is_empty() {
        info("No hay empresas para mostrar.");
    } else {
        print!("{}", render_companies(&list));
    }
    Ok(())
}

pub async fn shifts(ctx: &AppContext, company: u64) -> AppResult<()> {
    ctx.require(Capability::ViewCompanies)?;

    let list = ctx.api().shifts(company).await?;
    header(format!("Turnos de la empresa {company}"));
    if list.is_empty() {
        info("La empresa no tiene turnos configurados.");
    } else {
        print!("{}", render_shifts(&list));
    }
    Ok(())
}
