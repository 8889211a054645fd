//! Unified application error type.
//! Every layer (session, api, core, cli) returns AppError so that the
//! command boundary can render a single inline message.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use thiserror::Error;

/// Field name → user-facing message, as produced by form validation.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Generic message used when the backend gives no `detail`.
pub const GENERIC_REQUEST_ERROR: &str = "Error al procesar la solicitud";

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Sesión inválida: inicia sesión nuevamente")]
    InvalidSession,

    #[error("Usuario o contraseña incorrectos")]
    InvalidCredentials,

    // ---------------------------
    // Client-side validation
    // ---------------------------
    #[error("Datos inválidos:\n{}", render_field_errors(.0))]
    Validation(FieldErrors),

    #[error("Acción no permitida: {0}")]
    NotPermitted(String),

    #[error("Formato de fecha inválido (use AAAA-MM-DD): {0}")]
    InvalidDate(String),

    // ---------------------------
    // Backend responses
    // ---------------------------
    /// `detail` is shown as-is; the status only reaches the logs.
    #[error("{detail}")]
    Request { status: u16, detail: String },

    #[error("Respuesta inesperada de {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("No se pudo contactar al servidor: {0}")]
    Network(String),

    // ---------------------------
    // Local failures
    // ---------------------------
    #[error("Error de entrada/salida: {0}")]
    Io(#[from] io::Error),

    #[error("Error JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("No se pudo leer la configuración")]
    ConfigLoad,

    #[error("No se pudo guardar la configuración")]
    ConfigSave,

    #[error("Error de exportación: {0}")]
    Export(String),

    #[error("Error interno: {0}")]
    Other(String),
}

/// Coarse classification used by screens to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Validation,
    Request,
    Network,
    Local,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidSession | AppError::InvalidCredentials => ErrorKind::Auth,
            AppError::Validation(_) | AppError::NotPermitted(_) | AppError::InvalidDate(_) => {
                ErrorKind::Validation
            }
            AppError::Request { .. } | AppError::Decode { .. } => ErrorKind::Request,
            AppError::Network(_) => ErrorKind::Network,
            _ => ErrorKind::Local,
        }
    }

    /// Single-field validation error.
    pub fn field(name: &'static str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(name, message.into());
        AppError::Validation(errors)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::Config(format!("URL de API inválida: {e}"))
    }
}

fn render_field_errors(errors: &FieldErrors) -> String {
    FieldList(errors).to_string()
}

struct FieldList<'a>(&'a FieldErrors);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.0 {
            if !first {
                writeln!(f)?;
            }
            write!(f, "  - {field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

pub type AppResult<T> = Result<T, AppError>;
