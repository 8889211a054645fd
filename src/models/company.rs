use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: u64,
    #[serde(default, alias = "nombre")]
    pub razon_social: String,
    #[serde(default)]
    pub rut_empresa: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub comuna: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// A company's scheduled working window (turno).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub id: u64,
    pub nombre: String,
    pub hora_entrada: String,
    pub hora_salida: String,
    #[serde(default)]
    pub tolerancia_minutos: u32,
}

impl Shift {
    pub fn window(&self) -> String {
        format!("{} - {}", self.hora_entrada, self.hora_salida)
    }
}
