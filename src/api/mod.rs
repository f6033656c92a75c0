//! HTTP API for the payroll engine.
//!
//! Stateless JSON endpoints: `POST /payroll` runs one semi-monthly payroll
//! and `POST /attendance` reports per-day breakdowns for a date range.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, PayrollRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
