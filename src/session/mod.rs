//! Authenticated session: token pair plus the user descriptor returned at login.

mod storage;
mod store;

pub use storage::SessionStorage;
pub use store::SessionStore;

use crate::errors::{AppError, AppResult};
use crate::models::{Capability, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub rut: String,
    #[serde(default)]
    pub email: String,
    pub rol: Role,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub trabajador_id: Option<u64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub cargo: Option<String>,
    /// Companies the account is associated with.
    #[serde(default)]
    pub empresas: Vec<u64>,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.nombre.as_deref().unwrap_or(""),
            self.apellido.as_deref().unwrap_or("")
        );
        let full = full.trim();
        if full.is_empty() {
            self.rut.clone()
        } else {
            full.to_string()
        }
    }
}

/// Persisted under the fixed keys `accessToken`, `refreshToken`, `user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.rol
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.user.rol.can(capability)
    }

    /// Fail with `NotPermitted` unless the role grants `capability`.
    pub fn require(&self, capability: Capability) -> AppResult<()> {
        if self.can(capability) {
            Ok(())
        } else {
            Err(AppError::NotPermitted(format!(
                "el rol {} no puede {}",
                self.user.rol, capability
            )))
        }
    }

    /// First associated company, used when a view needs one and none was given.
    pub fn primary_company(&self) -> Option<u64> {
        self.user.empresas.first().copied()
    }
}

/// Body of a successful `POST token/`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: SessionUser,
}

impl From<LoginResponse> for Session {
    fn from(r: LoginResponse) -> Self {
        Session {
            access_token: r.access,
            refresh_token: r.refresh,
            user: r.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(rol: Role) -> SessionUser {
        SessionUser {
            rut: "12345678-9".into(),
            email: "a@kivo.cl".into(),
            rol,
            estado: Some("activo".into()),
            trabajador_id: None,
            nombre: None,
            apellido: None,
            cargo: None,
            empresas: vec![],
        }
    }

    #[test]
    fn display_name_falls_back_to_rut() {
        let mut u = user(Role::AdminRrhh);
        assert_eq!(u.display_name(), "12345678-9");
        u.nombre = Some("Ana".into());
        u.apellido = Some("Rojas".into());
        assert_eq!(u.display_name(), "Ana Rojas");
    }

    #[test]
    fn persisted_keys_are_fixed() {
        let s = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            user: user(Role::Trabajador),
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["accessToken"], json!("a"));
        assert_eq!(v["refreshToken"], json!("r"));
        assert_eq!(v["user"]["rol"], json!("trabajador"));
    }

    #[test]
    fn require_rejects_missing_capability() {
        let s = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            user: user(Role::Trabajador),
        };
        assert!(s.require(Capability::MarkAttendance).is_ok());
        assert!(matches!(
            s.require(Capability::ViewAudit),
            Err(AppError::NotPermitted(_))
        ));
    }
}
