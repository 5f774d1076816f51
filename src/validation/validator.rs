//! Pre-submission validation.
//!
//! Validation runs over the included rows of a draft and produces
//! human-readable blocking messages. An empty result means the batch is
//! eligible for submission; compliance warnings are advisory and live in
//! the sibling warnings module.

use crate::draft::DraftManager;
use crate::models::MAX_HOURS;
use rust_decimal::Decimal;

/// Validates every included row of the draft for submission.
///
/// Each message is prefixed with the employee's display name. Excluded rows
/// are skipped entirely. Returns an empty vector when the batch is valid.
pub fn validate_batch(manager: &DraftManager) -> Vec<String> {
    let period_end = manager.context().end_date;
    let mut messages = Vec::new();

    for row in manager.included_rows() {
        let name = &row.employee.display_name;

        if row.employee.monthly_salary <= Decimal::ZERO {
            messages.push(format!("{}: monthly salary must be greater than zero", name));
        }

        if row.employee.hire_date > period_end {
            messages.push(format!(
                "{}: hire date {} falls after the period end {}",
                name, row.employee.hire_date, period_end
            ));
        }

        if row.current.total_worked_hours() > MAX_HOURS {
            messages.push(format!(
                "{}: total worked hours {} exceed the maximum of {}",
                name,
                row.current.total_worked_hours(),
                MAX_HOURS
            ));
        }

        if row.current.absence_hours > row.original.regular_hours {
            messages.push(format!(
                "{}: absence hours {} exceed the scheduled regular hours {}",
                name, row.current.absence_hours, row.original.regular_hours
            ));
        }
    }

    messages
}
