//! Persisted batch shapes.
//!
//! The batch aggregator constructs these values; writing them is the
//! persistence layer's job. The category enums here are closed: downstream
//! reporting depends on every source category collapsing into one of them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::period::PayFrequency;

/// The closed earning category enum used by persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordEarningCategory {
    /// Regular hours.
    Regular,
    /// Overtime hours.
    Overtime,
    /// Night-shift hours.
    NightShift,
    /// Public-holiday hours.
    Holiday,
    /// Bonus payments.
    Bonus,
    /// Annual supplement payments.
    AnnualSupplement,
    /// All allowance-type earnings (per-diem, transport, food, housing, other).
    Allowance,
    /// Everything else.
    Other,
}

/// The closed deduction category enum used by persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordDeductionCategory {
    /// Income-tax withholding.
    IncomeTax,
    /// Employee social-insurance share.
    SocialInsurance,
    /// Absence deductions.
    Absence,
    /// Late-arrival deductions.
    LateArrival,
    /// Loan and advance repayments.
    Repayment,
    /// Court-ordered withholdings.
    CourtOrder,
    /// Everything else.
    Other,
}

/// One persisted earning line within a payroll record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEarningLine {
    /// The normalized earning category.
    pub category: RecordEarningCategory,
    /// A human-readable description carried from the calculation.
    pub description: String,
    /// The line amount.
    pub amount: Decimal,
}

/// One persisted deduction line within a payroll record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDeductionLine {
    /// The normalized deduction category.
    pub category: RecordDeductionCategory,
    /// A human-readable description carried from the calculation.
    pub description: String,
    /// The line amount.
    pub amount: Decimal,
}

/// The full itemized payroll snapshot persisted for one included employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The employee's display name at calculation time.
    pub display_name: String,
    /// Department, denormalized from the employee snapshot.
    pub department: String,
    /// Position, denormalized from the employee snapshot.
    pub position: String,
    /// Normalized earning lines.
    pub earnings: Vec<RecordEarningLine>,
    /// Normalized deduction lines.
    pub deductions: Vec<RecordDeductionLine>,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Taxable income for the period.
    pub taxable_income: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// Employee social-insurance contribution.
    pub employee_social_insurance: Decimal,
    /// Employer social-insurance contribution.
    pub employer_social_insurance: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Net pay.
    pub net_pay: Decimal,
    /// Total employer cost.
    pub employer_cost: Decimal,
}

/// The lifecycle status of a payroll batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// The batch has been previewed but not committed.
    Draft,
    /// The batch has been submitted for payment.
    Submitted,
}

/// Decimal-safe sums of money fields across included rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTotals {
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
    /// Sum of income tax withheld.
    pub income_tax: Decimal,
    /// Sum of employee social-insurance contributions.
    pub employee_social_insurance: Decimal,
    /// Sum of employer social-insurance contributions.
    pub employer_social_insurance: Decimal,
    /// Sum of total employer cost.
    pub employer_cost: Decimal,
}

/// The batch header persisted alongside the per-employee records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchHeader {
    /// Unique identifier for the batch.
    pub id: Uuid,
    /// The pay frequency of the period.
    pub frequency: PayFrequency,
    /// The start date of the pay period.
    pub period_start: NaiveDate,
    /// The end date of the pay period.
    pub period_end: NaiveDate,
    /// The pay date.
    pub pay_date: NaiveDate,
    /// Aggregated totals over included rows.
    pub totals: BatchTotals,
    /// The batch status; always `Draft` at construction.
    pub status: BatchStatus,
    /// The number of included employees with a valid calculation.
    pub employee_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BatchStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&BatchStatus::Submitted).unwrap(),
            "\"submitted\""
        );
    }

    #[test]
    fn test_record_category_serialization() {
        assert_eq!(
            serde_json::to_string(&RecordEarningCategory::AnnualSupplement).unwrap(),
            "\"annual_supplement\""
        );
        assert_eq!(
            serde_json::to_string(&RecordDeductionCategory::Repayment).unwrap(),
            "\"repayment\""
        );
    }

    #[test]
    fn test_batch_totals_default_is_zero() {
        let totals = BatchTotals::default();
        assert_eq!(totals.gross_pay, Decimal::ZERO);
        assert_eq!(totals.net_pay, Decimal::ZERO);
        assert_eq!(totals.employer_cost, Decimal::ZERO);
    }

    #[test]
    fn test_batch_header_round_trip() {
        let header = BatchHeader {
            id: Uuid::nil(),
            frequency: PayFrequency::Monthly,
            period_start: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            pay_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            totals: BatchTotals::default(),
            status: BatchStatus::Draft,
            employee_count: 12,
        };

        let json = serde_json::to_string(&header).unwrap();
        assert!(json.contains("\"status\":\"draft\""));
        let deserialized: BatchHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(header, deserialized);
    }
}
