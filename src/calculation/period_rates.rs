//! Rate and period resolution.
//!
//! This module derives the hourly rate, monthly standard hours, and the
//! pro-rated default hours for one employee in one pay period. Output is
//! deterministic given only its inputs: no hidden state, no I/O.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::ScheduleRules;
use crate::error::{EngineError, EngineResult};
use crate::models::PeriodContext;

use super::round_money;

/// Weeks per year used to derive monthly standard hours.
const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Months per year.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The resolved rates and default hours for one employee in one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRates {
    /// Standard hours in a month: (standard weekly hours × 52) / 12.
    pub monthly_hours: Decimal,
    /// How many pay periods fall in the calendar month of the pay date.
    pub periods_per_month: u32,
    /// Monthly salary divided by monthly standard hours.
    pub hourly_rate: Decimal,
    /// Standard hours for one full pay period.
    pub default_period_hours: Decimal,
    /// Default period hours reduced for a hire date inside the period.
    pub prorated_default_hours: Decimal,
}

/// Resolves rates and pro-rated default hours for an employee.
///
/// If the hire date falls inside the period, default hours are reduced
/// proportionally to the fraction of the period actually worked
/// (days worked / days in period). An employee hired exactly on the period
/// start receives full default hours; hired after the period end receives
/// zero.
///
/// # Errors
///
/// Returns `CalculationError` if the monthly salary is negative or the
/// configured standard weekly hours are not positive.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_period_rates;
/// use payroll_engine::config::ScheduleRules;
/// use payroll_engine::models::{PayFrequency, PeriodContext};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = ScheduleRules {
///     standard_weekly_hours: Decimal::from(44),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
///     night_shift_multiplier: Decimal::from_str("1.3").unwrap(),
///     holiday_multiplier: Decimal::from_str("2.0").unwrap(),
/// };
/// let context = PeriodContext::new(
///     PayFrequency::Monthly,
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     false,
/// );
///
/// let rates = resolve_period_rates(
///     Decimal::from(500),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     &context,
///     &schedule,
/// ).unwrap();
///
/// assert_eq!(rates.monthly_hours, Decimal::from_str("190.67").unwrap());
/// assert_eq!(rates.hourly_rate, Decimal::from_str("2.62").unwrap());
/// assert_eq!(rates.default_period_hours, Decimal::from_str("190.67").unwrap());
/// ```
pub fn resolve_period_rates(
    monthly_salary: Decimal,
    hire_date: NaiveDate,
    context: &PeriodContext,
    schedule: &ScheduleRules,
) -> EngineResult<PeriodRates> {
    if schedule.standard_weekly_hours <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: "standard weekly hours must be positive".to_string(),
        });
    }
    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: "monthly salary must not be negative".to_string(),
        });
    }

    let monthly_hours =
        round_money(schedule.standard_weekly_hours * WEEKS_PER_YEAR / MONTHS_PER_YEAR);
    let periods_per_month = context.periods_in_month.max(1);
    let hourly_rate = round_money(monthly_salary / monthly_hours);
    let default_period_hours = round_money(monthly_hours / Decimal::from(periods_per_month));
    let prorated_default_hours =
        prorate_hours(default_period_hours, hire_date, context.start_date, context.end_date);

    Ok(PeriodRates {
        monthly_hours,
        periods_per_month,
        hourly_rate,
        default_period_hours,
        prorated_default_hours,
    })
}

/// Reduces default hours for a hire date inside the period.
fn prorate_hours(
    default_hours: Decimal,
    hire_date: NaiveDate,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Decimal {
    if hire_date > period_end {
        return Decimal::ZERO;
    }
    if hire_date <= period_start {
        return default_hours;
    }

    let days_in_period = (period_end - period_start).num_days() + 1;
    let days_worked = (period_end - hire_date).num_days() + 1;
    round_money(default_hours * Decimal::from(days_worked) / Decimal::from(days_in_period))
}
