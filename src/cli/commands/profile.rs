use crate::cli::commands::AppContext;
use crate::cli::parser::ProfileCmd;
use crate::core::FormState;
use crate::core::forms::ProfileEditForm;
use crate::errors::{AppError, AppResult};
use crate::models::{Capability, WorkerProfile};
use crate::ui::messages::{field, header, success};
use crate::utils::formatting::or_dash;

fn print_profile(p: &WorkerProfile) {
    header(p.full_name());
    field("RUT", or_dash(p.rut.as_deref()));
    field("Cargo", or_dash(p.cargo.as_deref()));
    field("Área", or_dash(p.area_trabajador.as_deref()));
    field(
        "Contrato",
        p.tipo_contrato.map_or("-", |c| c.label()),
    );
    field("Correo", or_dash(p.correo.as_deref()));
    field(
        "Empresa",
        p.empresa_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
    );
    field(
        "Turno",
        p.turno_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
    );
    field("Estado", or_dash(p.estado.as_deref()));
    field(
        "Ingreso",
        p.fecha_ingreso
            .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
    );
}

pub async fn handle(ctx: &AppContext, worker: u64, action: Option<&ProfileCmd>) -> AppResult<()> {
    ctx.require(Capability::ViewUsers)?;
    let api = ctx.api();
    let profile = api.worker_profile(worker).await?;

    let Some(ProfileCmd::Edit {
        nombres,
        apellidos,
        cargo,
        area,
        contract,
        correo,
        company,
        motivo,
    }) = action
    else {
        print_profile(&profile);
        return Ok(());
    };

    ctx.require(Capability::ManageUsers)?;
    let user_id = profile.usuario_id.ok_or_else(|| {
        AppError::NotPermitted("el trabajador no tiene un usuario asociado".to_string())
    })?;

    let mut form = FormState::new(ProfileEditForm::from_profile(&profile));
    {
        let v = form.values_mut();
        if let Some(x) = nombres {
            v.nombres = x.clone();
        }
        if let Some(x) = apellidos {
            v.apellidos = x.clone();
        }
        if let Some(x) = cargo {
            v.cargo = x.clone();
        }
        if let Some(x) = area {
            v.area_trabajador = x.clone();
        }
        if contract.is_some() {
            v.tipo_contrato = *contract;
        }
        if let Some(x) = correo {
            v.correo = x.clone();
        }
        if company.is_some() {
            v.empresa_id = *company;
        }
        v.motivo = motivo.clone();
    }

    let submit_api = api.clone();
    form.submit(|body| async move { submit_api.update_user(user_id, &body).await })
        .await?;
    success("Datos actualizados correctamente");

    print_profile(&api.worker_profile(worker).await?);
    Ok(())
}
