use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of account roles issued by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Trabajador,
    AsistenteRrhh,
    AdminRrhh,
    Fiscalizador,
}

/// Actions a screen may offer; consulted through [`Role::can`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    MarkAttendance,
    ViewAttendance,
    RequestLeave,
    ResolveRequests,
    ViewAudit,
    ManageUsers,
    ViewUsers,
    ViewCompanies,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Trabajador => "trabajador",
            Role::AsistenteRrhh => "asistente_rrhh",
            Role::AdminRrhh => "admin_rrhh",
            Role::Fiscalizador => "fiscalizador",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trabajador" => Some(Role::Trabajador),
            "asistente_rrhh" => Some(Role::AsistenteRrhh),
            "admin_rrhh" => Some(Role::AdminRrhh),
            "fiscalizador" => Some(Role::Fiscalizador),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Trabajador => "Trabajador",
            Role::AsistenteRrhh => "Asistente RRHH",
            Role::AdminRrhh => "Admin RRHH",
            Role::Fiscalizador => "Fiscalizador",
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        use Capability::*;
        match capability {
            // rows are scoped to the caller's companies by the backend
            MarkAttendance | ViewAttendance | ViewUsers | ViewCompanies => true,
            RequestLeave => matches!(self, Role::Trabajador),
            ResolveRequests => matches!(self, Role::AdminRrhh | Role::AsistenteRrhh),
            ViewAudit => matches!(self, Role::AdminRrhh | Role::Fiscalizador),
            ManageUsers => matches!(self, Role::AdminRrhh),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Capability::MarkAttendance => "registrar marcas",
            Capability::ViewAttendance => "ver asistencias",
            Capability::RequestLeave => "solicitar licencias o vacaciones",
            Capability::ResolveRequests => "resolver solicitudes",
            Capability::ViewAudit => "ver auditoría",
            Capability::ManageUsers => "administrar usuarios",
            Capability::ViewUsers => "ver usuarios",
            Capability::ViewCompanies => "ver empresas",
        };
        f.write_str(s)
    }
}
