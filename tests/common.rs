#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use kivo::api::{ApiClient, ApiRequest, RawResponse, Transport};
use kivo::errors::{AppError, AppResult};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn kivo() -> Command {
    cargo_bin_cmd!("kivo")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kivo.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// In-memory transport answering with scripted responses, in order.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<AppResult<RawResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
    gate: Option<Arc<Notify>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every call waits for `gate.notify_one()` before answering.
    pub fn gated(gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            gate: Some(gate),
            ..Self::default()
        })
    }

    pub fn reply(&self, status: u16, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail_network(&self) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(AppError::Network("connection refused".into())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Other("no scripted response".into())))
    }
}

pub fn client(fake: &Arc<FakeTransport>, token: Option<&str>) -> ApiClient {
    let transport: Arc<dyn Transport> = fake.clone();
    ApiClient::new(transport, token.map(str::to_string))
}

pub fn status_json(open: bool, secs: i64) -> Value {
    json!({
        "tiene_entrada_activa": open,
        "segundos_restantes": secs,
        "trabajador": {"id": 4, "nombre": "Juan", "apellidos": "Pérez", "cargo": "Operario"},
        "turno": {"nombre": "Diurno", "hora_entrada": "09:00:00", "hora_salida": "17:00:00"},
        "empresa": {"nombre": "Kivo SpA"}
    })
}

pub fn login_json(rol: &str) -> Value {
    json!({
        "access": "acc-123",
        "refresh": "ref-456",
        "user": {
            "rut": "12345678-5",
            "email": "juan@kivo.cl",
            "rol": rol,
            "estado": "activo",
            "trabajador_id": 4,
            "nombre": "Juan",
            "apellido": "Pérez",
            "empresas": [1]
        }
    })
}
