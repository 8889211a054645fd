use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a mark (clock-in / clock-out) as the backend names it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    #[value(aliases = ["entry", "in"])]
    Entrada,
    #[value(aliases = ["exit", "out"])]
    Salida,
}

impl MarkType {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "entrada" | "entry" | "in" | "e" => Some(Self::Entrada),
            "salida" | "exit" | "out" | "s" => Some(Self::Salida),
            _ => None,
        }
    }

    /// Convert enum → wire string
    pub fn code(&self) -> &'static str {
        match self {
            MarkType::Entrada => "entrada",
            MarkType::Salida => "salida",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarkType::Entrada => "Entrada",
            MarkType::Salida => "Salida",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, MarkType::Entrada)
    }
}

impl fmt::Display for MarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
