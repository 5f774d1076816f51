//! HTTP API module for the payroll calculation engine.
//!
//! This module provides the REST API endpoint for previewing a payroll
//! batch: seeding, attendance reconciliation, edits, exclusions, totals,
//! warnings, and validation in one call.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FieldEdit, PeriodRequest, PreviewRequest};
pub use response::{ApiError, PreviewResponse};
pub use state::AppState;
