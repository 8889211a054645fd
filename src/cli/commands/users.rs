use crate::cli::commands::AppContext;
use crate::cli::parser::{CreateUserArgs, UserCmd};
use crate::core::forms::CreateUserForm;
use crate::core::{CompanyShiftPicker, FilterSet, FormState, ListView};
use crate::errors::{AppError, AppResult};
use crate::models::{Capability, Role, UserSummary};
use crate::ui::messages::{header, info, success};
use crate::utils::table::{Column, Table};

pub(crate) fn render(rows: &[&UserSummary]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("RUT"),
        Column::capped("Nombre", 30),
        Column::capped("Email", 30),
        Column::new("Rol"),
        Column::new("Estado"),
    ]);
    for u in rows {
        table.add_row(vec![
            u.id.to_string(),
            u.rut.clone(),
            u.display_name(),
            u.email.clone(),
            u.rol.label().to_string(),
            u.estado.clone(),
        ]);
    }
    table.render()
}

fn parse_role(code: &str) -> AppResult<Role> {
    Role::from_code(code).ok_or_else(|| AppError::field("rol", format!("Rol desconocido: {code}")))
}

async fn list(ctx: &AppContext, company: Option<u64>, filters: FilterSet) -> AppResult<()> {
    let users = ctx.api().users(company).await?;
    let mut view = ListView::new(users);
    view.set_filters(filters);

    let visible = view.visible();
    header(format!(
        "Usuarios{} ({} de {})",
        company.map(|c| format!(" de la empresa {c}")).unwrap_or_default(),
        visible.len(),
        view.rows().len()
    ));
    if visible.is_empty() {
        info("No hay usuarios que coincidan con los filtros.");
    } else {
        print!("{}", render(&visible));
    }
    Ok(())
}

async fn create(ctx: &AppContext, args: &CreateUserArgs) -> AppResult<()> {
    ctx.require(Capability::ManageUsers)?;
    let api = ctx.api();

    let company = ctx.company(args.company);
    let mut form = FormState::new(CreateUserForm::for_company(company));
    {
        let v = form.values_mut();
        v.rut = args.rut.clone();
        v.email = args.email.clone();
        v.password = args.password.clone();
        v.rol = parse_role(&args.role)?;
        v.nombres = args.nombres.clone();
        v.apellidos = args.apellidos.clone();
        v.cargo = args.cargo.clone();
        v.area_trabajador = args.area.clone();
        v.correo = args.correo.clone();
        if let Some(contract) = args.contract {
            v.tipo_contrato = contract;
        }
    }

    if let Some(company) = company {
        let mut picker = CompanyShiftPicker::new(api.companies().await?);
        picker.select_company(&api, company).await?;
        if let Some(shift) = args.shift {
            picker.select_shift(shift)?;
        }
        picker.apply_to(form.values_mut());
    }

    let submit_api = api.clone();
    form.submit(|body| async move { submit_api.create_user(&body).await })
        .await?;
    success("Usuario creado exitosamente.");

    // The company's user list depends on what was just created.
    if company.is_some() && ctx.session.require()?.can(Capability::ViewUsers) {
        list(ctx, company, FilterSet::new()).await?;
    }
    Ok(())
}

pub async fn handle(ctx: &AppContext, cmd: &UserCmd) -> AppResult<()> {
    match cmd {
        UserCmd::List {
            company,
            name,
            role,
        } => {
            ctx.require(Capability::ViewUsers)?;
            let mut filters = FilterSet::new();
            if let Some(n) = name {
                filters = filters.with_text(n.clone());
            }
            if let Some(r) = role {
                filters = filters.with_category(parse_role(r)?.code());
            }
            list(ctx, ctx.company(*company), filters).await
        }
        UserCmd::Create(args) => create(ctx, args).await,
    }
}
