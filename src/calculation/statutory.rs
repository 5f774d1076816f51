//! The statutory payroll calculator.
//!
//! A pure function from (employee snapshot, resolved rates, pay inputs,
//! period context, statutory rules) to a complete [`CalculationResult`].
//! Any internal failure is returned as an error so the draft layer can mark
//! the row's calculation as stale instead of aborting the whole batch.

use rust_decimal::Decimal;

use crate::config::StatutoryRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationResult, DeductionCategory, DeductionLine, EmployeeSnapshot, PayInput, PeriodContext,
};

use super::{
    build_earnings, calculate_annual_supplement, calculate_contributions, calculate_withholding,
    round_money, taxable_income, PeriodRates,
};

/// Minutes per hour, for the late-arrival deduction.
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Appends a deduction line when the amount is positive.
fn push_if_positive(
    lines: &mut Vec<DeductionLine>,
    category: DeductionCategory,
    description: &str,
    amount: Decimal,
) {
    if amount > Decimal::ZERO {
        lines.push(DeductionLine {
            category,
            description: description.to_string(),
            amount,
        });
    }
}

/// Rejects pay inputs containing a negative field.
///
/// The draft layer's bounds checks make this unreachable for edited rows,
/// but inputs can also arrive directly through the API.
fn check_input(employee_id: &str, input: &PayInput) -> EngineResult<()> {
    let fields = [
        input.regular_hours,
        input.overtime_hours,
        input.night_shift_hours,
        input.holiday_hours,
        input.absence_hours,
        input.late_minutes,
        input.sick_days,
        input.bonus,
        input.per_diem,
        input.allowances,
        input.loan_repayment,
        input.court_order,
        input.other_deduction,
    ];
    if fields.iter().any(|f| *f < Decimal::ZERO) {
        return Err(EngineError::InvalidEmployee {
            employee_id: employee_id.to_string(),
            message: "pay input contains a negative field".to_string(),
        });
    }
    Ok(())
}

/// Calculates the complete statutory payroll result for one employee.
///
/// The pipeline is: itemized earnings → gross pay → taxable income →
/// income-tax withholding → social-insurance contributions → itemized
/// deductions → net pay and employer cost. Income-tax and social-insurance
/// deduction lines are always present, even when zero. All money fields in
/// the result are non-negative and rounded to currency precision.
///
/// # Errors
///
/// Returns `InvalidEmployee` for a negative salary or negative pay-input
/// field. Never panics on malformed input.
pub fn calculate_payroll(
    employee: &EmployeeSnapshot,
    rates: &PeriodRates,
    input: &PayInput,
    context: &PeriodContext,
    rules: &StatutoryRules,
) -> EngineResult<CalculationResult> {
    if employee.monthly_salary < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            employee_id: employee.id.clone(),
            message: "monthly salary must not be negative".to_string(),
        });
    }
    check_input(&employee.id, input)?;

    let annual_supplement = if context.include_annual_supplement {
        Some(calculate_annual_supplement(
            employee.monthly_salary,
            employee.hire_date,
            context.pay_date,
        ))
    } else {
        None
    };

    let earnings = build_earnings(input, rates.hourly_rate, &rules.schedule, annual_supplement);
    let gross_pay: Decimal = earnings.iter().map(|l| l.amount).sum();

    let taxable = taxable_income(
        gross_pay,
        employee.tax_resident,
        employee.tax_exempt,
        &rules.tax,
    );
    let income_tax = calculate_withholding(taxable, employee.tax_resident, &rules.tax);
    let contributions = calculate_contributions(gross_pay, taxable, &rules.social_insurance);

    let mut deductions = vec![
        DeductionLine {
            category: DeductionCategory::IncomeTax,
            description: "Income tax".to_string(),
            amount: income_tax,
        },
        DeductionLine {
            category: DeductionCategory::SocialInsurance,
            description: "Social insurance (employee)".to_string(),
            amount: contributions.employee,
        },
    ];
    push_if_positive(
        &mut deductions,
        DeductionCategory::Absence,
        "Absence hours",
        round_money(input.absence_hours * rates.hourly_rate),
    );
    push_if_positive(
        &mut deductions,
        DeductionCategory::LateArrival,
        "Late arrival",
        round_money(input.late_minutes / MINUTES_PER_HOUR * rates.hourly_rate),
    );
    push_if_positive(
        &mut deductions,
        DeductionCategory::LoanRepayment,
        "Loan repayment",
        round_money(input.loan_repayment),
    );
    push_if_positive(
        &mut deductions,
        DeductionCategory::CourtOrder,
        "Court order",
        round_money(input.court_order),
    );
    push_if_positive(
        &mut deductions,
        DeductionCategory::Other,
        "Other deduction",
        round_money(input.other_deduction),
    );

    let total_deductions: Decimal = deductions.iter().map(|l| l.amount).sum();
    let net_pay = (gross_pay - total_deductions).max(Decimal::ZERO);
    let employer_cost = gross_pay + contributions.employer;

    Ok(CalculationResult {
        earnings,
        deductions,
        gross_pay,
        taxable_income: taxable,
        income_tax,
        employee_social_insurance: contributions.employee,
        employer_social_insurance: contributions.employer,
        total_deductions,
        net_pay,
        employer_cost,
    })
}
