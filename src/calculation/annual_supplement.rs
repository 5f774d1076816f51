//! Annual supplement calculation.
//!
//! Computes the prorated 13th-month-style annual subsidy from months worked
//! in the current calendar year. Invoked by the statutory calculator only
//! when the period context's annual-supplement flag is set; the output
//! becomes one more earnings line.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::round_money;

/// Months per year used for proration.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Counts the months worked in the pay date's calendar year, as of the pay
/// date. Employees hired mid-year earn no credit for months before hire; a
/// hire month counts as a full month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::months_worked_this_year;
/// use chrono::NaiveDate;
///
/// let pay_date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
///
/// // Hired in a prior year: six months worked by the end of June.
/// let hired_2023 = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
/// assert_eq!(months_worked_this_year(hired_2023, pay_date), 6);
///
/// // Hired in April of the pay year: April through June.
/// let hired_april = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
/// assert_eq!(months_worked_this_year(hired_april, pay_date), 3);
///
/// // Hired after the pay date: nothing accrued yet.
/// let hired_later = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// assert_eq!(months_worked_this_year(hired_later, pay_date), 0);
/// ```
pub fn months_worked_this_year(hire_date: NaiveDate, pay_date: NaiveDate) -> u32 {
    if hire_date > pay_date {
        return 0;
    }
    if hire_date.year() == pay_date.year() {
        pay_date.month() - hire_date.month() + 1
    } else {
        pay_date.month()
    }
}

/// Computes the prorated annual supplement amount.
///
/// Proration factor = months worked this year / 12, applied to the monthly
/// salary and rounded to currency precision.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_annual_supplement;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = calculate_annual_supplement(
///     Decimal::from(500),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// );
/// // 500 * 6/12
/// assert_eq!(amount, Decimal::from_str("250.00").unwrap());
/// ```
pub fn calculate_annual_supplement(
    monthly_salary: Decimal,
    hire_date: NaiveDate,
    pay_date: NaiveDate,
) -> Decimal {
    let months = months_worked_this_year(hire_date, pay_date);
    round_money(monthly_salary * Decimal::from(months) / MONTHS_PER_YEAR)
}
