//! One handler per screen. Each receives the parsed command and the shared
//! [`AppContext`].

pub mod attendance;
pub mod audit;
pub mod clock;
pub mod companies;
pub mod config;
pub mod init;
pub mod login;
pub mod profile;
pub mod requests;
pub mod status;
pub mod users;

use crate::api::{ApiClient, Transport};
use crate::cli::parser::{ExportArgs, FilterArgs};
use crate::config::Config;
use crate::core::FilterSet;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOutcome};
use crate::models::Capability;
use crate::session::{Session, SessionStore};
use crate::utils::date;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Everything a screen needs: configuration, the transport and the session.
pub struct AppContext {
    pub cfg: Config,
    pub transport: Arc<dyn Transport>,
    pub session: SessionStore,
}

impl AppContext {
    pub fn new(cfg: Config, transport: Arc<dyn Transport>, session: SessionStore) -> Self {
        Self {
            cfg,
            transport,
            session,
        }
    }

    /// Gateway bound to the current session's token.
    pub fn api(&self) -> ApiClient {
        self.session.client(Arc::clone(&self.transport))
    }

    /// Logged-in session allowed to use `capability`.
    pub fn require(&self, capability: Capability) -> AppResult<&Session> {
        let session = self.session.require()?;
        session.require(capability)?;
        Ok(session)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.cfg.tick_millis.max(1))
    }

    /// Explicit `--company`, else the configured default, else the user's first.
    pub fn company(&self, given: Option<u64>) -> Option<u64> {
        given
            .or(self.cfg.default_company)
            .or_else(|| self.session.current().and_then(Session::primary_company))
    }
}

/// Build the filter set from the shared flags plus a screen-specific category.
pub(crate) fn filter_set(args: &FilterArgs, category: Option<&str>) -> AppResult<FilterSet> {
    let mut filters = FilterSet::new();
    if let Some(name) = &args.name {
        filters = filters.with_text(name.clone());
    }
    if let Some(d) = &args.date {
        filters = filters.with_date(date::require_date(d)?);
    }
    if let Some(c) = category {
        filters = filters.with_category(c);
    }
    Ok(filters)
}

/// Export the visible rows when `--export` was given. Returns true if it handled output.
pub(crate) fn maybe_export<T: Serialize>(rows: &[T], args: &ExportArgs) -> AppResult<bool> {
    let Some(file) = &args.file else {
        return Ok(false);
    };
    if let ExportOutcome::Written { rows, .. } = ExportLogic::export(rows, args.format, file, args.force)? {
        debug!(rows, "visible rows exported");
    }
    Ok(true)
}
