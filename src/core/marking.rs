//! The mobile marking screen: status header, live countdown and the
//! entry/exit buttons.

use crate::api::ApiClient;
use crate::core::lifetime::ScreenLifetime;
use crate::core::reconciler::{CountdownState, Reconciler};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceStatus, MarkType};
use crate::utils::{date, format_hms};
use chrono::NaiveDate;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const NO_SHIFT: &str = "Sin turno asignado";

/// Text shown above the buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenHeader {
    pub company: String,
    pub greeting: String,
    pub shift: String,
    pub date: String,
    pub countdown: String,
}

pub struct MarkingScreen {
    api: ApiClient,
    lifetime: ScreenLifetime,
    reconciler: Reconciler,
    status: Option<AttendanceStatus>,
}

impl MarkingScreen {
    pub fn new(api: ApiClient, tick: Duration) -> Self {
        let lifetime = ScreenLifetime::new();
        let reconciler = Reconciler::new(tick, lifetime.clone());
        Self {
            api,
            lifetime,
            reconciler,
            status: None,
        }
    }

    /// Handle that can unmount the screen from another task.
    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn state(&self) -> CountdownState {
        self.reconciler.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.reconciler.subscribe()
    }

    pub fn status(&self) -> Option<&AttendanceStatus> {
        self.status.as_ref()
    }

    pub fn timer_running(&self) -> bool {
        self.reconciler.timer_running()
    }

    pub fn entry_enabled(&self) -> bool {
        self.state().entry_enabled()
    }

    pub fn exit_enabled(&self) -> bool {
        self.state().exit_enabled()
    }

    pub async fn mount(&mut self) -> AppResult<CountdownState> {
        self.lifetime.mount();
        self.refresh().await
    }

    /// Fetch the status and reconcile. On failure the last known state stays.
    pub async fn refresh(&mut self) -> AppResult<CountdownState> {
        let ticket = self.lifetime.ticket();
        let result = self.api.attendance_status().await;

        if !self.lifetime.is_current(ticket) {
            debug!("status arrived after unmount, discarded");
            return Ok(self.state());
        }

        match result {
            Ok(status) => {
                let state = self.reconciler.apply(&status);
                self.status = Some(status);
                Ok(state)
            }
            Err(e) => {
                warn!(error = %e, "status refresh failed, keeping last state");
                Err(e)
            }
        }
    }

    /// Register a mark and re-read the status once the backend confirms it.
    pub async fn mark(&mut self, kind: MarkType) -> AppResult<String> {
        if !self.state().allows(kind) {
            return Err(AppError::NotPermitted(format!(
                "la marca de {} no está disponible en este momento",
                kind.label().to_lowercase()
            )));
        }

        let ticket = self.lifetime.ticket();
        self.api.mark(kind).await?;
        info!(kind = kind.code(), "mark registered");

        if self.lifetime.is_current(ticket)
            && let Err(e) = self.refresh().await
        {
            warn!(error = %e, "mark saved but status could not be reloaded");
        }

        Ok(format!("Marca de {} registrada", kind.code()))
    }

    pub fn unmount(&mut self) {
        self.lifetime.unmount();
        self.reconciler.stop();
    }

    pub fn header(&self, today: NaiveDate) -> ScreenHeader {
        let (company, greeting, shift) = match &self.status {
            Some(s) => (
                s.company_name(),
                format!("Hola, {}", s.worker_name()),
                s.shift_window().unwrap_or_else(|| NO_SHIFT.to_string()),
            ),
            None => (
                AttendanceStatus::default().company_name(),
                format!("Hola, {}", AttendanceStatus::default().worker_name()),
                NO_SHIFT.to_string(),
            ),
        };

        ScreenHeader {
            company,
            greeting,
            shift,
            date: date::long_date(today),
            countdown: format_hms(self.state().seconds()),
        }
    }
}

impl Drop for MarkingScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}
