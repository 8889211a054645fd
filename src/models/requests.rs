//! Leave (licencia) and vacation requests.
//!
//! State transitions are performed by the backend; the client only sends
//! a [`ResolveAction`] and adopts whatever `estado` comes back.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "aceptado")]
    Accepted,
    #[serde(rename = "rechazado")]
    Rejected,
}

impl RequestState {
    pub fn code(&self) -> &'static str {
        match self {
            RequestState::Pending => "pendiente",
            RequestState::Accepted => "aceptado",
            RequestState::Rejected => "rechazado",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    LicenciaMedica,
    PermisoAdministrativo,
    PermisoSinGoce,
}

impl LeaveKind {
    pub fn code(&self) -> &'static str {
        match self {
            LeaveKind::LicenciaMedica => "licencia_medica",
            LeaveKind::PermisoAdministrativo => "permiso_administrativo",
            LeaveKind::PermisoSinGoce => "permiso_sin_goce",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveKind::LicenciaMedica => "Licencia médica",
            LeaveKind::PermisoAdministrativo => "Permiso administrativo",
            LeaveKind::PermisoSinGoce => "Permiso sin goce de sueldo",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: u64,
    #[serde(rename = "trabajador_nombre", default)]
    pub worker_name: String,
    #[serde(rename = "tipo")]
    pub kind: LeaveKind,
    #[serde(rename = "fecha_inicio")]
    pub starts_on: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub ends_on: NaiveDate,
    #[serde(rename = "dias", default)]
    pub days: u32,
    #[serde(rename = "motivo_detallado", default)]
    pub reason: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: RequestState,
    #[serde(rename = "adjunto", default)]
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VacationRequest {
    pub id: u64,
    #[serde(rename = "trabajador_nombre", default)]
    pub worker_name: String,
    #[serde(rename = "fecha_inicio")]
    pub starts_on: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub ends_on: NaiveDate,
    #[serde(rename = "dias", default)]
    pub days: u32,
    #[serde(rename = "estado", default)]
    pub state: RequestState,
    #[serde(rename = "resuelto_por", default)]
    pub resolved_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolveAction {
    #[value(aliases = ["aceptar", "approve"])]
    Accept,
    #[value(aliases = ["rechazar"])]
    Reject,
}

impl ResolveAction {
    /// Wire value of the `accion` field.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveAction::Accept => "aceptar",
            ResolveAction::Reject => "rechazar",
        }
    }
}

/// Body returned by the `resolver/` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolveOutcome {
    #[serde(default)]
    pub detail: String,
    #[serde(rename = "estado")]
    pub state: RequestState,
    #[serde(rename = "resuelto_por", default)]
    pub resolved_by: Option<String>,
    #[serde(rename = "resuelto_en", default)]
    pub resolved_at: Option<String>,
}

/// Common view over both request kinds so one table can list either.
pub trait RequestRow {
    fn id(&self) -> u64;
    fn worker(&self) -> &str;
    fn type_label(&self) -> &str;
    fn starts_on(&self) -> NaiveDate;
    fn ends_on(&self) -> NaiveDate;
    fn days(&self) -> u32;
    fn state(&self) -> RequestState;
    fn set_state(&mut self, state: RequestState, resolved_by: Option<String>);
}

impl RequestRow for LeaveRequest {
    fn id(&self) -> u64 {
        self.id
    }
    fn worker(&self) -> &str {
        &self.worker_name
    }
    fn type_label(&self) -> &str {
        self.kind.label()
    }
    fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }
    fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }
    fn days(&self) -> u32 {
        self.days
    }
    fn state(&self) -> RequestState {
        self.state
    }
    fn set_state(&mut self, state: RequestState, _resolved_by: Option<String>) {
        self.state = state;
    }
}

impl RequestRow for VacationRequest {
    fn id(&self) -> u64 {
        self.id
    }
    fn worker(&self) -> &str {
        &self.worker_name
    }
    fn type_label(&self) -> &str {
        "Vacaciones"
    }
    fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }
    fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }
    fn days(&self) -> u32 {
        self.days
    }
    fn state(&self) -> RequestState {
        self.state
    }
    fn set_state(&mut self, state: RequestState, resolved_by: Option<String>) {
        self.state = state;
        if resolved_by.is_some() {
            self.resolved_by = resolved_by;
        }
    }
}
