//! Social-insurance contribution calculation.
//!
//! Contributions are fixed percentages of a configured wage base (gross pay
//! or taxable income), optionally capped. The employee share is deducted from
//! pay; the employer share is an additional cost that is not deducted.

use rust_decimal::Decimal;

use crate::config::{ContributionBase, SocialInsuranceRules};

use super::round_money;

/// The employee and employer social-insurance shares for one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributions {
    /// The wage base the shares were assessed on, after any cap.
    pub assessed_base: Decimal,
    /// The employee share, deducted from pay.
    pub employee: Decimal,
    /// The employer share, added to employer cost.
    pub employer: Decimal,
}

/// Calculates both social-insurance shares.
///
/// The assessed base is selected by configuration (gross pay or taxable
/// income) and capped when a cap is configured; each share is the base times
/// the configured rate, rounded to currency precision.
pub fn calculate_contributions(
    gross_pay: Decimal,
    taxable_income: Decimal,
    rules: &SocialInsuranceRules,
) -> Contributions {
    let base = match rules.base {
        ContributionBase::GrossPay => gross_pay,
        ContributionBase::TaxableIncome => taxable_income,
    };
    let assessed_base = match rules.cap {
        Some(cap) => base.min(cap),
        None => base,
    }
    .max(Decimal::ZERO);

    Contributions {
        assessed_base,
        employee: round_money(assessed_base * rules.employee_rate),
        employer: round_money(assessed_base * rules.employer_rate),
    }
}
