//! Employee snapshot model.
//!
//! This module defines the [`EmployeeSnapshot`] type: the immutable-for-the-run
//! view of an employee consumed by the calculation pipeline. The employee
//! directory that owns these records is an external collaborator; the engine
//! only reads them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable view of an employee for one payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name, used to prefix validation messages.
    pub display_name: String,
    /// The contracted monthly salary.
    pub monthly_salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Whether the employee is a tax resident of the jurisdiction.
    pub tax_resident: bool,
    /// Whether the employee is exempt from income-tax withholding.
    #[serde(default)]
    pub tax_exempt: bool,
    /// Department name, denormalized for the persisted record.
    #[serde(default)]
    pub department: String,
    /// Position title, denormalized for the persisted record.
    #[serde(default)]
    pub position: String,
}

impl EmployeeSnapshot {
    /// Returns true if the employee was hired after the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeSnapshot;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeSnapshot {
    ///     id: "emp_001".to_string(),
    ///     display_name: "Sok Dara".to_string(),
    ///     monthly_salary: Decimal::new(50000, 2),
    ///     hire_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
    ///     tax_resident: true,
    ///     tax_exempt: false,
    ///     department: "Operations".to_string(),
    ///     position: "Technician".to_string(),
    /// };
    /// assert!(employee.hired_after(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
    /// assert!(!employee.hired_after(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
    /// ```
    pub fn hired_after(&self, date: NaiveDate) -> bool {
        self.hire_date > date
    }
}
