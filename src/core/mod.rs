//! Client-side view state: countdown reconciliation, lists and forms.

pub mod forms;
pub mod lifetime;
pub mod listing;
pub mod marking;
pub mod reconciler;

pub use forms::{CompanyShiftPicker, Form, FormState};
pub use lifetime::ScreenLifetime;
pub use listing::{FilterSet, Filterable, ListView};
pub use marking::{MarkingScreen, ScreenHeader};
pub use reconciler::{CountdownState, Reconciler, TimerHandle};
