//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: period/rate
//! resolution with hire-date pro-ration, itemized earnings construction,
//! income-tax withholding, social-insurance contributions, annual supplement
//! proration, and the statutory calculator that composes them into a
//! complete per-employee result.
//!
//! Every function here is deterministic and side-effect-free: repeated
//! invocation with the same inputs yields bit-identical output.

mod annual_supplement;
mod earnings;
mod income_tax;
mod period_rates;
mod social_insurance;
mod statutory;

pub use annual_supplement::{calculate_annual_supplement, months_worked_this_year};
pub use earnings::build_earnings;
pub use income_tax::{calculate_withholding, taxable_income};
pub use period_rates::{PeriodRates, resolve_period_rates};
pub use social_insurance::{Contributions, calculate_contributions};
pub use statutory::calculate_payroll;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to currency precision (2 decimals).
///
/// Applied at the point of computation for every money value the engine
/// produces, so totals are sums of already-rounded lines.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
