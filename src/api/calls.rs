//! Per-screen fetch wrappers built on [`ApiClient::send`].

use super::client::ApiClient;
use super::endpoints::Endpoint;
use crate::errors::AppResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, AuditEntry, Company, LeaveRequest, MarkType,
    ResolveAction, ResolveOutcome, Shift, UserSummary, VacationRequest, WorkerProfile,
};
use serde::Serialize;
use serde_json::{Value, json};

impl ApiClient {
    pub async fn attendance_status(&self) -> AppResult<AttendanceStatus> {
        self.fetch(&Endpoint::attendance_status()).await
    }

    /// Register a mark. The created record is returned as raw JSON because
    /// screens only need to know it succeeded.
    pub async fn mark(&self, kind: MarkType) -> AppResult<Value> {
        let body = json!({ "tipo_marca": kind.code() });
        self.send(&Endpoint::mark(), Some(&body)).await
    }

    pub async fn attendance(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.fetch(&Endpoint::attendance_list()).await
    }

    pub async fn audit(&self, company: Option<u64>) -> AppResult<Vec<AuditEntry>> {
        self.fetch(&Endpoint::audit(company)).await
    }

    pub async fn licenses(&self) -> AppResult<Vec<LeaveRequest>> {
        self.fetch(&Endpoint::licenses()).await
    }

    pub async fn create_license<B: Serialize>(&self, payload: &B) -> AppResult<LeaveRequest> {
        self.send(&Endpoint::create_license(), Some(payload)).await
    }

    pub async fn resolve_license(&self, id: u64, action: ResolveAction) -> AppResult<ResolveOutcome> {
        let body = json!({ "accion": action.code() });
        self.send(&Endpoint::resolve_license(id), Some(&body)).await
    }

    pub async fn vacations(&self) -> AppResult<Vec<VacationRequest>> {
        self.fetch(&Endpoint::vacations()).await
    }

    pub async fn create_vacation<B: Serialize>(&self, payload: &B) -> AppResult<VacationRequest> {
        self.send(&Endpoint::create_vacation(), Some(payload)).await
    }

    pub async fn resolve_vacation(
        &self,
        id: u64,
        action: ResolveAction,
    ) -> AppResult<ResolveOutcome> {
        let body = json!({ "accion": action.code() });
        self.send(&Endpoint::resolve_vacation(id), Some(&body)).await
    }

    pub async fn companies(&self) -> AppResult<Vec<Company>> {
        self.fetch(&Endpoint::companies()).await
    }

    pub async fn assigned_companies(&self) -> AppResult<Vec<Company>> {
        self.fetch(&Endpoint::assigned_companies()).await
    }

    pub async fn shifts(&self, company: u64) -> AppResult<Vec<Shift>> {
        self.fetch(&Endpoint::shifts(company)).await
    }

    pub async fn users(&self, company: Option<u64>) -> AppResult<Vec<UserSummary>> {
        self.fetch(&Endpoint::users(company)).await
    }

    pub async fn create_user<B: Serialize>(&self, payload: &B) -> AppResult<Value> {
        self.send(&Endpoint::create_user(), Some(payload)).await
    }

    pub async fn update_user<B: Serialize>(&self, user: u64, payload: &B) -> AppResult<Value> {
        self.send(&Endpoint::update_user(user), Some(payload)).await
    }

    pub async fn worker_profile(&self, worker: u64) -> AppResult<WorkerProfile> {
        self.fetch(&Endpoint::worker_profile(worker)).await
    }
}
