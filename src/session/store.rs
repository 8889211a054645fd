use super::{LoginResponse, Session, SessionStorage};
use crate::api::{ApiClient, Endpoint, Transport};
use crate::errors::{AppError, AppResult, FieldErrors};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Session context handed to every screen: durable storage plus the
/// in-memory mirror of the active session.
#[derive(Debug)]
pub struct SessionStore {
    storage: SessionStorage,
    current: Option<Session>,
}

impl SessionStore {
    /// Load whatever session survived the last run.
    pub fn hydrate(storage: SessionStorage) -> AppResult<Self> {
        let current = storage.load()?;
        Ok(Self { storage, current })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Current session or `InvalidSession` when nobody is logged in.
    pub fn require(&self) -> AppResult<&Session> {
        self.current.as_ref().ok_or(AppError::InvalidSession)
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    /// Gateway carrying the current access token (if any).
    pub fn client(&self, transport: Arc<dyn Transport>) -> ApiClient {
        ApiClient::new(
            transport,
            self.current.as_ref().map(|s| s.access_token.clone()),
        )
    }

    /// Authenticate with RUT + password. Only an HTTP 200 carrying the token
    /// pair is accepted; anything else leaves storage untouched.
    pub async fn login(&mut self, api: &ApiClient, rut: &str, password: &str) -> AppResult<&Session> {
        let mut errors = FieldErrors::new();
        if rut.trim().is_empty() {
            errors.insert("rut", "Ingrese su Rut".to_string());
        }
        if password.is_empty() {
            errors.insert("password", "Ingrese su contraseña".to_string());
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let body = json!({ "rut": rut.trim(), "password": password });
        let response = api.execute(&Endpoint::login(), Some(&body)).await?;

        if response.status != 200 {
            warn!(status = response.status, "login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let parsed: LoginResponse =
            serde_json::from_value(response.body).map_err(|e| AppError::Decode {
                endpoint: "token/".to_string(),
                message: e.to_string(),
            })?;

        let session = Session::from(parsed);
        self.storage.save(&session)?;
        info!(rut = %session.user.rut, role = session.user.rol.code(), "logged in");

        Ok(self.current.insert(session))
    }

    /// Drop persisted keys and the in-memory mirror.
    pub fn logout(&mut self) -> AppResult<()> {
        self.storage.clear()?;
        self.current = None;
        info!("logged out");
        Ok(())
    }
}
