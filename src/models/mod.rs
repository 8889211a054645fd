pub mod attendance;
pub mod audit;
pub mod company;
pub mod mark_type;
pub mod requests;
pub mod role;
pub mod user;
pub mod worker;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use audit::AuditEntry;
pub use company::{Company, Shift};
pub use mark_type::MarkType;
pub use requests::{LeaveKind, LeaveRequest, RequestState, ResolveAction, ResolveOutcome, VacationRequest};
pub use role::{Capability, Role};
pub use user::UserSummary;
pub use worker::{ContractType, WorkerProfile};
