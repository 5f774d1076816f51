//! The tracked, editable pay inputs for one draft row.
//!
//! [`PayInput`] is a small value object: the edit flag on a draft row is
//! derived by structural comparison of the row's current input against the
//! snapshot captured at row creation, independent of any UI state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The maximum value accepted for an hour field (hours in a 31-day month).
pub const MAX_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// The maximum value accepted for a money field.
pub const MAX_MONEY: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// The maximum value accepted for late-arrival minutes (744 hours).
pub const MAX_LATE_MINUTES: Decimal = Decimal::from_parts(44_640, 0, 0, false, 0);

/// The maximum value accepted for sick days.
pub const MAX_SICK_DAYS: Decimal = Decimal::from_parts(31, 0, 0, false, 0);

/// Identifies one editable field of a [`PayInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayField {
    /// Regular hours worked.
    RegularHours,
    /// Overtime hours worked.
    OvertimeHours,
    /// Night-shift hours worked.
    NightShiftHours,
    /// Public-holiday hours worked.
    HolidayHours,
    /// Unworked absence hours.
    AbsenceHours,
    /// Late-arrival minutes.
    LateMinutes,
    /// Sick days taken.
    SickDays,
    /// Flat bonus amount.
    Bonus,
    /// Flat per-diem amount.
    PerDiem,
    /// Flat other-allowance amount.
    Allowances,
    /// Loan repayment withheld from pay.
    LoanRepayment,
    /// Court-ordered withholding.
    CourtOrder,
    /// Any other deduction.
    OtherDeduction,
}

impl PayField {
    /// Returns the inclusive upper bound accepted for this field.
    ///
    /// All fields share a lower bound of zero.
    pub fn max_value(self) -> Decimal {
        match self {
            PayField::RegularHours
            | PayField::OvertimeHours
            | PayField::NightShiftHours
            | PayField::HolidayHours
            | PayField::AbsenceHours => MAX_HOURS,
            PayField::LateMinutes => MAX_LATE_MINUTES,
            PayField::SickDays => MAX_SICK_DAYS,
            PayField::Bonus
            | PayField::PerDiem
            | PayField::Allowances
            | PayField::LoanRepayment
            | PayField::CourtOrder
            | PayField::OtherDeduction => MAX_MONEY,
        }
    }

    /// Returns true if the value is within this field's domain bounds.
    pub fn accepts(self, value: Decimal) -> bool {
        value >= Decimal::ZERO && value <= self.max_value()
    }
}

/// The complete set of tracked pay inputs for one employee in one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInput {
    /// Regular hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Night-shift hours worked.
    pub night_shift_hours: Decimal,
    /// Public-holiday hours worked.
    pub holiday_hours: Decimal,
    /// Unworked absence hours, deducted at the base hourly rate.
    pub absence_hours: Decimal,
    /// Late-arrival minutes, deducted at the base hourly rate.
    pub late_minutes: Decimal,
    /// Sick days taken (informational; no deduction).
    pub sick_days: Decimal,
    /// Flat bonus amount.
    pub bonus: Decimal,
    /// Flat per-diem amount.
    pub per_diem: Decimal,
    /// Flat other-allowance amount.
    pub allowances: Decimal,
    /// Loan repayment withheld from pay.
    pub loan_repayment: Decimal,
    /// Court-ordered withholding.
    pub court_order: Decimal,
    /// Any other deduction.
    pub other_deduction: Decimal,
}

impl PayInput {
    /// Returns the value of the given field.
    pub fn get(&self, field: PayField) -> Decimal {
        match field {
            PayField::RegularHours => self.regular_hours,
            PayField::OvertimeHours => self.overtime_hours,
            PayField::NightShiftHours => self.night_shift_hours,
            PayField::HolidayHours => self.holiday_hours,
            PayField::AbsenceHours => self.absence_hours,
            PayField::LateMinutes => self.late_minutes,
            PayField::SickDays => self.sick_days,
            PayField::Bonus => self.bonus,
            PayField::PerDiem => self.per_diem,
            PayField::Allowances => self.allowances,
            PayField::LoanRepayment => self.loan_repayment,
            PayField::CourtOrder => self.court_order,
            PayField::OtherDeduction => self.other_deduction,
        }
    }

    /// Sets the value of the given field. The caller is responsible for
    /// bounds checking via [`PayField::accepts`].
    pub fn set(&mut self, field: PayField, value: Decimal) {
        match field {
            PayField::RegularHours => self.regular_hours = value,
            PayField::OvertimeHours => self.overtime_hours = value,
            PayField::NightShiftHours => self.night_shift_hours = value,
            PayField::HolidayHours => self.holiday_hours = value,
            PayField::AbsenceHours => self.absence_hours = value,
            PayField::LateMinutes => self.late_minutes = value,
            PayField::SickDays => self.sick_days = value,
            PayField::Bonus => self.bonus = value,
            PayField::PerDiem => self.per_diem = value,
            PayField::Allowances => self.allowances = value,
            PayField::LoanRepayment => self.loan_repayment = value,
            PayField::CourtOrder => self.court_order = value,
            PayField::OtherDeduction => self.other_deduction = value,
        }
    }

    /// Total worked hours across regular, overtime, night-shift, and
    /// holiday fields.
    pub fn total_worked_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours + self.night_shift_hours + self.holiday_hours
    }
}
