//! Attendance reconciliation.
//!
//! Merges an externally fetched attendance report into the draft rows:
//! actual regular/overtime hours and late minutes overwrite the row's
//! current values, and absence hours are derived against the pro-rated
//! baseline. The report carries its own period so a stale in-flight fetch
//! can never overwrite rows after the period has changed.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceReport;

use super::manager::DraftManager;

impl DraftManager {
    /// Applies an attendance report to the batch.
    ///
    /// The report's period must match the current draft period exactly;
    /// otherwise `PeriodMismatch` is returned and no row is mutated. For
    /// each row with a matching report entry: regular hours, overtime
    /// hours, and late minutes are overwritten, and absence hours are
    /// derived as max(0, baseline regular hours − reported regular hours).
    /// The baseline is the row's `original` value so manual edits are never
    /// compounded into the absence derivation. Rows without a matching
    /// entry are left untouched.
    ///
    /// Returns the number of rows updated. Each touched row's edit flag and
    /// calculation are refreshed before returning.
    pub fn apply_attendance(&mut self, report: &AttendanceReport) -> EngineResult<usize> {
        if report.period_start != self.context.start_date
            || report.period_end != self.context.end_date
        {
            return Err(EngineError::PeriodMismatch {
                report_start: report.period_start,
                report_end: report.period_end,
                period_start: self.context.start_date,
                period_end: self.context.end_date,
            });
        }

        let context = self.context.clone();
        let rules = self.rules.clone();
        let mut touched = 0;

        for row in &mut self.rows {
            let Some(entry) = report.entry_for(&row.employee.id) else {
                continue;
            };

            row.current.regular_hours = entry.regular_hours;
            row.current.overtime_hours = entry.overtime_hours;
            row.current.late_minutes = entry.late_minutes;
            row.current.absence_hours =
                (row.original.regular_hours - entry.regular_hours).max(Decimal::ZERO);

            row.refresh_edit_flag();
            Self::recompute_row(row, &context, &rules);
            touched += 1;
        }

        Ok(touched)
    }
}
