//! Typed form state with field-level validation.
//!
//! A [`FormState`] validates locally before any request leaves the client,
//! resets to its initial values after a successful submit, and keeps every
//! entered value when the submit fails so the user can retry.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::models::{Company, ContractType, LeaveKind, Role, Shift, WorkerProfile};
use crate::utils::{date, rut};
use chrono::NaiveDate;
use serde::Serialize;
use std::future::Future;
use tracing::debug;

const REQUIRED: &str = "Campo obligatorio";
const AUDIT_REASON_REQUIRED: &str = "Debes ingresar un motivo para auditoría";

pub trait Form: Clone {
    type Payload: Serialize;

    fn validate(&self) -> FieldErrors;

    /// Request body. Only built once [`Form::validate`] came back empty.
    fn payload(&self) -> Self::Payload;
}

#[derive(Debug, Clone)]
pub struct FormState<F: Form> {
    initial: F,
    values: F,
    errors: FieldErrors,
}

impl<F: Form> FormState<F> {
    pub fn new(initial: F) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut F {
        &mut self.values
    }

    /// Errors from the last validation attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn validate(&mut self) -> AppResult<()> {
        self.errors = self.values.validate();
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors.clone()))
        }
    }

    /// Validate, then hand the payload to `call`.
    pub async fn submit<T, C, Fut>(&mut self, call: C) -> AppResult<T>
    where
        C: FnOnce(F::Payload) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        self.validate()?;

        let result = call(self.values.payload()).await;
        if result.is_ok() {
            self.reset();
        } else {
            debug!("submit failed, keeping entered values");
        }
        result
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED.to_string());
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

fn check_range(errors: &mut FieldErrors, start: Option<NaiveDate>, end: Option<NaiveDate>) {
    match (start, end) {
        (None, _) => {
            errors.insert("fecha_inicio", REQUIRED.to_string());
        }
        (_, None) => {
            errors.insert("fecha_fin", REQUIRED.to_string());
        }
        (Some(s), Some(e)) if e < s => {
            errors.insert(
                "fecha_fin",
                "La fecha de término debe ser posterior a la de inicio".to_string(),
            );
        }
        _ => {}
    }
}

// ---------------------------
// Create user (HR console)
// ---------------------------

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateUserForm {
    pub rut: String,
    pub email: String,
    pub password: String,
    pub rol: Role,
    pub nombres: String,
    pub apellidos: String,
    pub cargo: String,
    pub area_trabajador: String,
    pub tipo_contrato: ContractType,
    pub correo: String,
    pub empresa_id: Option<u64>,
    pub turno_id: Option<u64>,
}

impl Default for CreateUserForm {
    fn default() -> Self {
        Self {
            rut: String::new(),
            email: String::new(),
            password: String::new(),
            rol: Role::Trabajador,
            nombres: String::new(),
            apellidos: String::new(),
            cargo: String::new(),
            area_trabajador: String::new(),
            tipo_contrato: ContractType::default(),
            correo: String::new(),
            empresa_id: None,
            turno_id: None,
        }
    }
}

impl CreateUserForm {
    /// Initial values with the HR user's company preselected.
    pub fn for_company(company: Option<u64>) -> Self {
        Self {
            empresa_id: company,
            ..Self::default()
        }
    }
}

impl Form for CreateUserForm {
    type Payload = CreateUserForm;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        require(&mut errors, "rut", &self.rut);
        if !self.rut.trim().is_empty() && !rut::is_valid_format(&self.rut) {
            errors.insert("rut", "Formato de RUT inválido".to_string());
        }
        require(&mut errors, "email", &self.email);
        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            errors.insert("email", "Correo electrónico inválido".to_string());
        }
        require(&mut errors, "password", &self.password);

        if self.rol == Role::Trabajador {
            require(&mut errors, "nombres", &self.nombres);
            require(&mut errors, "apellidos", &self.apellidos);
            if self.empresa_id.is_none() {
                errors.insert("empresa_id", REQUIRED.to_string());
            }
        }
        errors
    }

    fn payload(&self) -> Self::Payload {
        CreateUserForm {
            rut: rut::normalize(&self.rut),
            ..self.clone()
        }
    }
}

// ---------------------------
// Worker profile edit
// ---------------------------

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProfileEditForm {
    pub nombres: String,
    pub apellidos: String,
    pub cargo: String,
    pub area_trabajador: String,
    pub tipo_contrato: Option<ContractType>,
    pub correo: String,
    pub empresa_id: Option<u64>,
    /// Justification stored in the audit trail.
    pub motivo: String,
}

impl ProfileEditForm {
    pub fn from_profile(profile: &WorkerProfile) -> Self {
        Self {
            nombres: profile.nombres.clone(),
            apellidos: profile.apellidos.clone(),
            cargo: profile.cargo.clone().unwrap_or_default(),
            area_trabajador: profile.area_trabajador.clone().unwrap_or_default(),
            tipo_contrato: profile.tipo_contrato,
            correo: profile.correo.clone().unwrap_or_default(),
            empresa_id: profile.empresa_id,
            motivo: String::new(),
        }
    }
}

impl Form for ProfileEditForm {
    type Payload = ProfileEditForm;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.motivo.trim().is_empty() {
            errors.insert("motivo", AUDIT_REASON_REQUIRED.to_string());
        }
        require(&mut errors, "nombres", &self.nombres);
        require(&mut errors, "apellidos", &self.apellidos);
        if !self.correo.trim().is_empty() && !looks_like_email(&self.correo) {
            errors.insert("correo", "Correo electrónico inválido".to_string());
        }
        errors
    }

    fn payload(&self) -> Self::Payload {
        self.clone()
    }
}

// ---------------------------
// Leave / vacation requests
// ---------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveForm {
    pub tipo: LeaveKind,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub motivo_detallado: String,
}

impl Default for LeaveForm {
    fn default() -> Self {
        Self {
            tipo: LeaveKind::LicenciaMedica,
            fecha_inicio: None,
            fecha_fin: None,
            motivo_detallado: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeavePayload {
    pub tipo: LeaveKind,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub dias: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo_detallado: Option<String>,
}

impl LeaveForm {
    /// Calendar days covered, 0 until both dates are valid.
    pub fn dias(&self) -> u32 {
        match (self.fecha_inicio, self.fecha_fin) {
            (Some(s), Some(e)) => date::days_inclusive(s, e),
            _ => 0,
        }
    }
}

impl Form for LeaveForm {
    type Payload = LeavePayload;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_range(&mut errors, self.fecha_inicio, self.fecha_fin);
        errors
    }

    fn payload(&self) -> Self::Payload {
        let reason = self.motivo_detallado.trim();
        LeavePayload {
            tipo: self.tipo,
            fecha_inicio: self.fecha_inicio.unwrap_or_default(),
            fecha_fin: self.fecha_fin.unwrap_or_default(),
            dias: self.dias(),
            motivo_detallado: (!reason.is_empty()).then(|| reason.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacationForm {
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VacationPayload {
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub dias: u32,
}

impl VacationForm {
    pub fn dias(&self) -> u32 {
        match (self.fecha_inicio, self.fecha_fin) {
            (Some(s), Some(e)) => date::days_inclusive(s, e),
            _ => 0,
        }
    }
}

impl Form for VacationForm {
    type Payload = VacationPayload;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_range(&mut errors, self.fecha_inicio, self.fecha_fin);
        errors
    }

    fn payload(&self) -> Self::Payload {
        VacationPayload {
            fecha_inicio: self.fecha_inicio.unwrap_or_default(),
            fecha_fin: self.fecha_fin.unwrap_or_default(),
            dias: self.dias(),
        }
    }
}

// ---------------------------
// Dependent company → shift selection
// ---------------------------

/// Company dropdown whose choice drives the shift options.
#[derive(Debug, Clone, Default)]
pub struct CompanyShiftPicker {
    companies: Vec<Company>,
    company: Option<u64>,
    shifts: Vec<Shift>,
    shift: Option<u64>,
}

impl CompanyShiftPicker {
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies,
            ..Self::default()
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn company(&self) -> Option<u64> {
        self.company
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn shift(&self) -> Option<u64> {
        self.shift
    }

    /// Choose a company and load its shifts. A different company drops any
    /// shift chosen for the previous one.
    pub async fn select_company(&mut self, api: &ApiClient, company: u64) -> AppResult<&[Shift]> {
        if !self.companies.is_empty() && !self.companies.iter().any(|c| c.id == company) {
            return Err(AppError::field("empresa_id", "Empresa no disponible"));
        }

        if self.company != Some(company) {
            self.shift = None;
            self.shifts.clear();
        }
        self.company = Some(company);

        self.shifts = api.shifts(company).await?;
        debug!(company, shifts = self.shifts.len(), "shift options loaded");
        Ok(&self.shifts)
    }

    pub fn select_shift(&mut self, shift: u64) -> AppResult<()> {
        if self.shifts.iter().any(|s| s.id == shift) {
            self.shift = Some(shift);
            Ok(())
        } else {
            Err(AppError::field(
                "turno_id",
                "El turno no pertenece a la empresa seleccionada",
            ))
        }
    }

    /// Copy the current selection into the create-user form.
    pub fn apply_to(&self, form: &mut CreateUserForm) {
        form.empresa_id = self.company;
        form.turno_id = self.shift;
    }
}
