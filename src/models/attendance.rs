use super::mark_type::MarkType;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

const DEFAULT_WORKER_NAME: &str = "Usuario";
const DEFAULT_COMPANY_NAME: &str = "TU EMPRESA";

/// Snapshot returned by `GET asistencias/marcar/`.
///
/// `segundos_restantes` is only authoritative at fetch time; anything the
/// client derives from it afterwards is a display approximation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttendanceStatus {
    #[serde(rename = "tiene_entrada_activa", default)]
    pub has_open_entry: bool,
    #[serde(rename = "segundos_restantes", default)]
    pub seconds_remaining: i64,
    #[serde(rename = "hora_servidor", default)]
    pub server_time: Option<String>,
    #[serde(rename = "hora_fin_jornada", default)]
    pub shift_end: Option<String>,
    #[serde(rename = "trabajador", default)]
    pub worker: Option<StatusWorker>,
    #[serde(rename = "turno", default)]
    pub shift: Option<StatusShift>,
    #[serde(rename = "empresa", default)]
    pub company: Option<StatusCompany>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatusWorker {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "nombre", default)]
    pub first_name: Option<String>,
    #[serde(rename = "apellidos", default)]
    pub last_name: Option<String>,
    #[serde(rename = "cargo", default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatusShift {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "hora_entrada", default)]
    pub starts_at: Option<String>,
    #[serde(rename = "hora_salida", default)]
    pub ends_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatusCompany {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
}

impl AttendanceStatus {
    pub fn worker_name(&self) -> String {
        let full = self
            .worker
            .as_ref()
            .map(|w| {
                format!(
                    "{} {}",
                    w.first_name.as_deref().unwrap_or(""),
                    w.last_name.as_deref().unwrap_or("")
                )
                .trim()
                .to_string()
            })
            .unwrap_or_default();

        if full.is_empty() {
            DEFAULT_WORKER_NAME.to_string()
        } else {
            full
        }
    }

    pub fn company_name(&self) -> String {
        self.company
            .as_ref()
            .and_then(|c| c.name.clone())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string())
    }

    /// "HH:MM:SS - HH:MM:SS" when both shift bounds are known.
    pub fn shift_window(&self) -> Option<String> {
        let shift = self.shift.as_ref()?;
        match (&shift.starts_at, &shift.ends_at) {
            (Some(start), Some(end)) => Some(format!("{start} - {end}")),
            _ => None,
        }
    }
}

/// One row of `GET asistencias/`. Created only by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: u64,
    #[serde(rename = "trabajador", default)]
    pub worker_id: Option<u64>,
    #[serde(rename = "trabajador_nombre", alias = "nombre_trabajador", default)]
    pub worker_name: String,
    #[serde(rename = "tipo_marca")]
    pub kind: MarkType,
    pub timestamp: DateTime<FixedOffset>,
    #[serde(rename = "ubicacion", default)]
    pub location: Option<String>,
    #[serde(rename = "modificada_por", default)]
    pub modified_by: Option<String>,
}

impl AttendanceRecord {
    /// Calendar date in the offset the backend reported.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
