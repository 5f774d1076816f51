//! Attendance summary models.
//!
//! The attendance service is an external collaborator: it supplies a
//! point-in-time, per-employee summary for a date range. The report carries
//! its own period so a stale in-flight fetch can be rejected if the draft
//! period has changed since the fetch started.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated attendance for one employee over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The employee this summary belongs to.
    pub employee_id: String,
    /// Actual regular hours recorded.
    pub regular_hours: Decimal,
    /// Actual overtime hours recorded.
    pub overtime_hours: Decimal,
    /// Total late-arrival minutes recorded.
    pub late_minutes: Decimal,
}

/// A point-in-time attendance report for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// The start date the report covers (inclusive).
    pub period_start: NaiveDate,
    /// The end date the report covers (inclusive).
    pub period_end: NaiveDate,
    /// One summary per employee with attendance records in the range.
    pub entries: Vec<AttendanceSummary>,
}

impl AttendanceReport {
    /// Finds the summary for the given employee, if any.
    pub fn entry_for(&self, employee_id: &str) -> Option<&AttendanceSummary> {
        self.entries.iter().find(|e| e.employee_id == employee_id)
    }
}
