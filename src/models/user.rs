use super::role::Role;
use serde::{Deserialize, Serialize};

/// Row of `GET usuarios/?empresa_id=`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: u64,
    pub rut: String,
    #[serde(default)]
    pub email: String,
    pub rol: Role,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub trabajador_id: Option<u64>,
    #[serde(default)]
    pub trabajador_nombre: Option<String>,
    #[serde(default)]
    pub trabajador_apellidos: Option<String>,
}

impl UserSummary {
    pub fn display_name(&self) -> String {
        match &self.trabajador_nombre {
            Some(n) => format!("{} {}", n, self.trabajador_apellidos.as_deref().unwrap_or(""))
                .trim()
                .to_string(),
            None => "-".to_string(),
        }
    }
}
