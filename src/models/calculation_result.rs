//! Calculation result models.
//!
//! This module contains the [`CalculationResult`] type and the itemized
//! earning and deduction line types produced by the statutory calculator.
//! All money amounts are rounded to currency precision (2 decimals) at the
//! point of computation, not at display time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The source category of an earning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarningCategory {
    /// Regular hours at the base hourly rate.
    Regular,
    /// Overtime hours at the configured multiplier.
    Overtime,
    /// Night-shift hours at the configured multiplier.
    NightShift,
    /// Public-holiday hours at the configured multiplier.
    Holiday,
    /// Flat bonus.
    Bonus,
    /// Per-diem payment.
    PerDiem,
    /// Transport allowance.
    TransportAllowance,
    /// Food allowance.
    FoodAllowance,
    /// Housing allowance.
    HousingAllowance,
    /// Any other allowance.
    OtherAllowance,
    /// Prorated annual supplement (13th-month-style payment).
    AnnualSupplement,
    /// Any earning not covered by the categories above.
    Other,
}

/// The source category of a deduction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    /// Income-tax withholding.
    IncomeTax,
    /// Employee share of social-insurance contributions.
    SocialInsurance,
    /// Absence hours deducted at the base hourly rate.
    Absence,
    /// Late-arrival minutes deducted at the base hourly rate.
    LateArrival,
    /// Loan repayment withheld from pay.
    LoanRepayment,
    /// Salary advance repayment.
    Advance,
    /// Court-ordered withholding.
    CourtOrder,
    /// Any other deduction.
    Other,
}

/// A single itemized earning line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningLine {
    /// The earning category.
    pub category: EarningCategory,
    /// A human-readable description of the line.
    pub description: String,
    /// The hours this line covers, for hours × rate lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// The effective hourly rate, for hours × rate lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// The line amount, rounded to currency precision.
    pub amount: Decimal,
}

/// A single itemized deduction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction category.
    pub category: DeductionCategory,
    /// A human-readable description of the line.
    pub description: String,
    /// The line amount, rounded to currency precision.
    pub amount: Decimal,
}

/// The complete result of one statutory payroll calculation.
///
/// All money fields are non-negative and rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Itemized earnings making up gross pay.
    pub earnings: Vec<EarningLine>,
    /// Itemized deductions withheld from pay.
    pub deductions: Vec<DeductionLine>,
    /// Sum of all earning lines.
    pub gross_pay: Decimal,
    /// The base income-tax withholding is computed on.
    pub taxable_income: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// Employee share of social-insurance contributions (deducted).
    pub employee_social_insurance: Decimal,
    /// Employer share of social-insurance contributions (not deducted).
    pub employer_social_insurance: Decimal,
    /// Sum of all deduction lines.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions, floored at zero.
    pub net_pay: Decimal,
    /// Gross pay plus the employer social-insurance share.
    pub employer_cost: Decimal,
}

impl CalculationResult {
    /// Finds the first earning line in the given category, if any.
    pub fn earning(&self, category: EarningCategory) -> Option<&EarningLine> {
        self.earnings.iter().find(|l| l.category == category)
    }

    /// Finds the first deduction line in the given category, if any.
    pub fn deduction(&self, category: DeductionCategory) -> Option<&DeductionLine> {
        self.deductions.iter().find(|l| l.category == category)
    }
}
