//! Every REST route the client consumes, relative to the API base.

use reqwest::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No credentials attached (login only).
    Anonymous,
    /// `Authorization: Bearer <access token>` required.
    Bearer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub auth: Auth,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>, auth: Auth) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            auth,
        }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, Auth::Bearer)
    }

    fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path, Auth::Bearer)
    }

    fn with_query(mut self, key: &str, value: Option<u64>) -> Self {
        if let Some(v) = value {
            self.query.push((key.to_string(), v.to_string()));
        }
        self
    }

    pub fn login() -> Self {
        Self::new(Method::POST, "token/", Auth::Anonymous)
    }

    pub fn attendance_status() -> Self {
        Self::get("asistencias/marcar/")
    }

    pub fn mark() -> Self {
        Self::post("asistencias/marcar/")
    }

    pub fn attendance_list() -> Self {
        Self::get("asistencias/")
    }

    pub fn audit(company: Option<u64>) -> Self {
        Self::get("auditoria/").with_query("empresa_id", company)
    }

    pub fn licenses() -> Self {
        Self::get("licencias/")
    }

    pub fn create_license() -> Self {
        Self::post("licencias/")
    }

    pub fn resolve_license(id: u64) -> Self {
        Self::post(format!("licencias/{id}/resolver/"))
    }

    pub fn vacations() -> Self {
        Self::get("vacaciones/")
    }

    pub fn create_vacation() -> Self {
        Self::post("vacaciones/")
    }

    pub fn resolve_vacation(id: u64) -> Self {
        Self::post(format!("vacaciones/{id}/resolver/"))
    }

    pub fn companies() -> Self {
        Self::get("empresas/")
    }

    pub fn assigned_companies() -> Self {
        Self::get("empresas/asignadas/")
    }

    pub fn shifts(company: u64) -> Self {
        Self::get(format!("empresas/{company}/turnos/"))
    }

    pub fn users(company: Option<u64>) -> Self {
        Self::get("usuarios/").with_query("empresa_id", company)
    }

    pub fn create_user() -> Self {
        Self::post("rrhh/usuarios/crear/")
    }

    pub fn update_user(user: u64) -> Self {
        Self::new(
            Method::PATCH,
            format!("rrhh/usuarios/{user}/actualizar/"),
            Auth::Bearer,
        )
    }

    pub fn worker_profile(worker: u64) -> Self {
        Self::get(format!("trabajadores/{worker}/perfil/"))
    }
}
