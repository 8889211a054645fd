// src/export/model.rs

use crate::models::requests::RequestRow;
use crate::models::{AttendanceRecord, AuditEntry};
use serde::Serialize;

// Field order is the column order of the CSV header.

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AttendanceExport {
    pub id: u64,
    pub trabajador: String,
    pub fecha: String,
    pub hora: String,
    pub tipo: String,
    pub ubicacion: String,
    pub modificada_por: String,
}

impl From<&AttendanceRecord> for AttendanceExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: r.id,
            trabajador: r.worker_name.clone(),
            fecha: r.date_str(),
            hora: r.time_str(),
            tipo: r.kind.code().to_string(),
            ubicacion: r.location.clone().unwrap_or_default(),
            modificada_por: r.modified_by.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RequestExport {
    pub id: u64,
    pub trabajador: String,
    pub tipo: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub dias: u32,
    pub estado: String,
}

impl RequestExport {
    pub fn from_row<R: RequestRow + ?Sized>(r: &R) -> Self {
        Self {
            id: r.id(),
            trabajador: r.worker().to_string(),
            tipo: r.type_label().to_string(),
            fecha_inicio: r.starts_on().format("%Y-%m-%d").to_string(),
            fecha_fin: r.ends_on().format("%Y-%m-%d").to_string(),
            dias: r.days(),
            estado: r.state().code().to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AuditExport {
    pub id: u64,
    pub fecha: String,
    pub usuario: String,
    pub accion: String,
    pub modelo: String,
    pub registro_id: String,
    pub motivo: String,
    pub empresa: String,
}

impl From<&AuditEntry> for AuditExport {
    fn from(e: &AuditEntry) -> Self {
        Self {
            id: e.id,
            fecha: e.fecha_str(),
            usuario: e.usuario.clone(),
            accion: e.accion.clone(),
            modelo: e.modelo_afectado.clone(),
            registro_id: e.registro_id.map(|id| id.to_string()).unwrap_or_default(),
            motivo: e.motivo.clone().unwrap_or_default(),
            empresa: e.empresa.clone().unwrap_or_default(),
        }
    }
}
