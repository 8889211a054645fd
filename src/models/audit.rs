use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Read-only audit trail row (`GET auditoria/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditEntry {
    pub id: u64,
    #[serde(alias = "usuario_nombre", default)]
    pub usuario: String,
    pub accion: String,
    #[serde(default)]
    pub modelo_afectado: String,
    #[serde(default)]
    pub registro_id: Option<u64>,
    #[serde(default)]
    pub motivo: Option<String>,
    pub fecha: DateTime<FixedOffset>,
    #[serde(alias = "empresa_nombre", default)]
    pub empresa: Option<String>,
}

impl AuditEntry {
    pub fn date(&self) -> NaiveDate {
        self.fecha.date_naive()
    }

    pub fn fecha_str(&self) -> String {
        self.fecha.format("%Y-%m-%d %H:%M").to_string()
    }

    /// "accion (Modelo #id)" as shown in the log column.
    pub fn action_target(&self) -> String {
        match (self.modelo_afectado.is_empty(), self.registro_id) {
            (true, _) => self.accion.clone(),
            (false, Some(id)) => format!("{} ({} #{})", self.accion, self.modelo_afectado, id),
            (false, None) => format!("{} ({})", self.accion, self.modelo_afectado),
        }
    }
}
