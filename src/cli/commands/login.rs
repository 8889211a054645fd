use crate::api::ApiClient;
use crate::cli::commands::{AppContext, status};
use crate::errors::AppResult;
use crate::models::Role;
use crate::ui::messages::{field, header, info, success, warning};
use std::io::{self, Write};
use std::sync::Arc;

fn prompt_password() -> AppResult<String> {
    print!("Contraseña: ");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// `kivo login`: authenticate, then land on the marking screen.
pub async fn login(ctx: &mut AppContext, rut: &str, password: Option<&str>) -> AppResult<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => prompt_password()?,
    };

    let api = ApiClient::anonymous(Arc::clone(&ctx.transport));
    let session = ctx.session.login(&api, rut, &password).await?;
    success(format!(
        "Bienvenido, {} ({})",
        session.user.display_name(),
        session.user.rol.label()
    ));

    let has_worker = session.user.trabajador_id.is_some() || session.user.rol == Role::Trabajador;
    if has_worker && let Err(e) = status::show(ctx).await {
        warning(format!("No se pudo cargar el estado de asistencia: {e}"));
    }
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> AppResult<()> {
    let had_session = ctx.session.current().is_some();
    ctx.session.logout()?;
    if had_session {
        success("Sesión cerrada.");
    } else {
        info("No había una sesión activa.");
    }
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> AppResult<()> {
    let session = ctx.session.require()?;
    let user = &session.user;

    header(user.display_name());
    field("RUT", &user.rut);
    field("Email", &user.email);
    field("Rol", user.rol.label());
    if let Some(cargo) = &user.cargo {
        field("Cargo", cargo);
    }
    if let Some(id) = user.trabajador_id {
        field("Trabajador", id);
    }
    if !user.empresas.is_empty() {
        let ids: Vec<String> = user.empresas.iter().map(u64::to_string).collect();
        field("Empresas", ids.join(", "));
    }
    field("Sesión", ctx.session.storage().path().display());
    Ok(())
}
