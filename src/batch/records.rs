//! Batch record construction.
//!
//! Converts a draft into the persisted batch shapes: a header with
//! aggregated totals and one itemized record per included employee. The
//! calculation-side category enums are open to growth; the record-side
//! enums are closed, so every source category is normalized here.

use uuid::Uuid;

use crate::draft::DraftManager;
use crate::models::{
    BatchHeader, BatchStatus, DeductionCategory, EarningCategory, PayrollRecord,
    RecordDeductionCategory, RecordDeductionLine, RecordEarningCategory, RecordEarningLine,
};

use super::aggregator::batch_totals;

/// Normalizes a calculation earning category into the closed record enum.
///
/// All allowance-type categories collapse into `Allowance`; anything not
/// explicitly mapped lands in `Other` so new calculation categories can
/// never leak an unknown value into persisted records.
pub fn map_earning_category(category: EarningCategory) -> RecordEarningCategory {
    match category {
        EarningCategory::Regular => RecordEarningCategory::Regular,
        EarningCategory::Overtime => RecordEarningCategory::Overtime,
        EarningCategory::NightShift => RecordEarningCategory::NightShift,
        EarningCategory::Holiday => RecordEarningCategory::Holiday,
        EarningCategory::Bonus => RecordEarningCategory::Bonus,
        EarningCategory::AnnualSupplement => RecordEarningCategory::AnnualSupplement,
        EarningCategory::PerDiem
        | EarningCategory::TransportAllowance
        | EarningCategory::FoodAllowance
        | EarningCategory::HousingAllowance
        | EarningCategory::OtherAllowance => RecordEarningCategory::Allowance,
        EarningCategory::Other => RecordEarningCategory::Other,
    }
}

/// Normalizes a calculation deduction category into the closed record enum.
///
/// Loan repayments and salary advances both collapse into `Repayment`.
pub fn map_deduction_category(category: DeductionCategory) -> RecordDeductionCategory {
    match category {
        DeductionCategory::IncomeTax => RecordDeductionCategory::IncomeTax,
        DeductionCategory::SocialInsurance => RecordDeductionCategory::SocialInsurance,
        DeductionCategory::Absence => RecordDeductionCategory::Absence,
        DeductionCategory::LateArrival => RecordDeductionCategory::LateArrival,
        DeductionCategory::LoanRepayment | DeductionCategory::Advance => {
            RecordDeductionCategory::Repayment
        }
        DeductionCategory::CourtOrder => RecordDeductionCategory::CourtOrder,
        DeductionCategory::Other => RecordDeductionCategory::Other,
    }
}

/// Builds the persisted batch from a draft.
///
/// Only included rows with a valid calculation produce a record; the header
/// carries the same count and the aggregated totals. The batch is always
/// constructed in `Draft` status with a freshly generated id.
pub fn build_batch(manager: &DraftManager) -> (BatchHeader, Vec<PayrollRecord>) {
    let mut records = Vec::new();

    for row in manager.included_rows() {
        let Some(calc) = &row.calculation else {
            continue;
        };

        let earnings = calc
            .earnings
            .iter()
            .map(|line| RecordEarningLine {
                category: map_earning_category(line.category),
                description: line.description.clone(),
                amount: line.amount,
            })
            .collect();
        let deductions = calc
            .deductions
            .iter()
            .map(|line| RecordDeductionLine {
                category: map_deduction_category(line.category),
                description: line.description.clone(),
                amount: line.amount,
            })
            .collect();

        records.push(PayrollRecord {
            employee_id: row.employee.id.clone(),
            display_name: row.employee.display_name.clone(),
            department: row.employee.department.clone(),
            position: row.employee.position.clone(),
            earnings,
            deductions,
            gross_pay: calc.gross_pay,
            taxable_income: calc.taxable_income,
            income_tax: calc.income_tax,
            employee_social_insurance: calc.employee_social_insurance,
            employer_social_insurance: calc.employer_social_insurance,
            total_deductions: calc.total_deductions,
            net_pay: calc.net_pay,
            employer_cost: calc.employer_cost,
        });
    }

    let context = manager.context();
    let header = BatchHeader {
        id: Uuid::new_v4(),
        frequency: context.frequency,
        period_start: context.start_date,
        period_end: context.end_date,
        pay_date: context.pay_date,
        totals: batch_totals(manager),
        status: BatchStatus::Draft,
        employee_count: records.len(),
    };

    (header, records)
}
