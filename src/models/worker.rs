use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    ContratoPorObra,
    ContratoPlazoFijo,
    ContratoPartTime,
    #[default]
    ContratoIndefinido,
    ContratoParaExtranjeros,
}

impl ContractType {
    pub fn code(&self) -> &'static str {
        match self {
            ContractType::ContratoPorObra => "contrato_por_obra",
            ContractType::ContratoPlazoFijo => "contrato_plazo_fijo",
            ContractType::ContratoPartTime => "contrato_part_time",
            ContractType::ContratoIndefinido => "contrato_indefinido",
            ContractType::ContratoParaExtranjeros => "contrato_para_extranjeros",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractType::ContratoPorObra => "Contrato por obra o faena",
            ContractType::ContratoPlazoFijo => "Contrato a plazo fijo",
            ContractType::ContratoPartTime => "Contrato part time",
            ContractType::ContratoIndefinido => "Contrato indefinido",
            ContractType::ContratoParaExtranjeros => "Contrato para extranjeros",
        }
    }
}

/// `GET trabajadores/{id}/perfil/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerProfile {
    pub id: u64,
    /// Account linked to the worker; required to save edits.
    #[serde(default)]
    pub usuario_id: Option<u64>,
    #[serde(default)]
    pub rut: Option<String>,
    #[serde(default)]
    pub nombres: String,
    #[serde(default)]
    pub apellidos: String,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub area_trabajador: Option<String>,
    #[serde(default)]
    pub tipo_contrato: Option<ContractType>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub empresa_id: Option<u64>,
    #[serde(default)]
    pub turno_id: Option<u64>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub fecha_ingreso: Option<NaiveDate>,
}

impl WorkerProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos).trim().to_string()
    }
}
