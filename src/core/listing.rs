//! In-memory filtering over a list fetched once per screen.
//!
//! Nothing here touches the network: filters narrow the rows already held
//! by the [`ListView`], and resolve actions patch single rows with the
//! state the backend returned.

use crate::models::{AttendanceRecord, AuditEntry, LeaveRequest, UserSummary, VacationRequest};
use chrono::NaiveDate;
use std::borrow::Cow;

/// Row that can be matched by the three standard list filters.
pub trait Filterable {
    fn id(&self) -> u64;
    /// Text matched by the free-text filter.
    fn display_name(&self) -> Cow<'_, str>;
    fn record_date(&self) -> Option<NaiveDate>;
    fn category(&self) -> Cow<'_, str>;
}

/// Independent predicates; unset ones match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub text: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.active_text().is_none() && self.date.is_none() && self.active_category().is_none()
    }

    fn active_text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    fn active_category(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn matches<T: Filterable + ?Sized>(&self, row: &T) -> bool {
        let text_ok = self.active_text().is_none_or(|needle| {
            row.display_name()
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let date_ok = self.date.is_none_or(|d| row.record_date() == Some(d));
        let category_ok = self
            .active_category()
            .is_none_or(|c| row.category().eq_ignore_ascii_case(c));

        text_ok && date_ok && category_ok
    }
}

/// Fetched rows plus the filters currently applied to them.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    rows: Vec<T>,
    filters: FilterSet,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filters: FilterSet::default(),
        }
    }
}

impl<T: Filterable> ListView<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            filters: FilterSet::default(),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Replace the data after a re-fetch; filters are kept.
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSet::default();
    }

    /// Rows passing every active filter, in fetch order.
    pub fn visible(&self) -> Vec<&T> {
        self.rows.iter().filter(|r| self.filters.matches(*r)).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| self.filters.matches(*r)).count()
    }

    /// Apply `f` to the row with `id`. Returns false when no such row exists.
    pub fn update_where<F: FnOnce(&mut T)>(&mut self, id: u64, f: F) -> bool {
        match self.rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }
}

impl Filterable for AttendanceRecord {
    fn id(&self) -> u64 {
        self.id
    }
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.worker_name)
    }
    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind.code())
    }
}

impl Filterable for LeaveRequest {
    fn id(&self) -> u64 {
        self.id
    }
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.worker_name)
    }
    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.starts_on)
    }
    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind.code())
    }
}

impl Filterable for VacationRequest {
    fn id(&self) -> u64 {
        self.id
    }
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.worker_name)
    }
    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.starts_on)
    }
    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.state.code())
    }
}

impl Filterable for AuditEntry {
    fn id(&self) -> u64 {
        self.id
    }
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.usuario)
    }
    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.accion)
    }
}

impl Filterable for UserSummary {
    fn id(&self) -> u64 {
        self.id
    }
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Owned(UserSummary::display_name(self))
    }
    fn record_date(&self) -> Option<NaiveDate> {
        None
    }
    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.rol.code())
    }
}
