//! Data models for the payroll calculation engine.
//!
//! This module contains the employee snapshot, period context, editable pay
//! inputs, attendance summaries, calculation results, and the persisted
//! batch shapes.

mod attendance;
mod batch;
mod calculation_result;
mod employee;
mod pay_input;
mod period;

pub use attendance::{AttendanceReport, AttendanceSummary};
pub use batch::{
    BatchHeader, BatchStatus, BatchTotals, PayrollRecord, RecordDeductionCategory,
    RecordDeductionLine, RecordEarningCategory, RecordEarningLine,
};
pub use calculation_result::{
    CalculationResult, DeductionCategory, DeductionLine, EarningCategory, EarningLine,
};
pub use employee::EmployeeSnapshot;
pub use pay_input::{
    MAX_HOURS, MAX_LATE_MINUTES, MAX_MONEY, MAX_SICK_DAYS, PayField, PayInput,
};
pub use period::{PayFrequency, PeriodContext};
