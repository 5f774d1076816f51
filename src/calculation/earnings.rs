//! Itemized earnings construction.
//!
//! Builds the earnings list the statutory calculator sums to gross pay:
//! hours × rate lines for regular, overtime, night-shift, and holiday hours
//! (with configured multipliers), flat lines for bonus, per-diem, and other
//! allowances, and the annual supplement line when enabled.

use rust_decimal::Decimal;

use crate::config::ScheduleRules;
use crate::models::{EarningCategory, EarningLine, PayInput};

use super::round_money;

/// Builds an hours × rate earning line, or `None` when the hours are zero.
fn hourly_line(
    category: EarningCategory,
    description: &str,
    hours: Decimal,
    hourly_rate: Decimal,
    multiplier: Decimal,
) -> Option<EarningLine> {
    if hours <= Decimal::ZERO {
        return None;
    }
    let rate = round_money(hourly_rate * multiplier);
    Some(EarningLine {
        category,
        description: description.to_string(),
        hours: Some(hours),
        rate: Some(rate),
        amount: round_money(hours * hourly_rate * multiplier),
    })
}

/// Builds a flat earning line, or `None` when the amount is zero.
fn flat_line(category: EarningCategory, description: &str, amount: Decimal) -> Option<EarningLine> {
    if amount <= Decimal::ZERO {
        return None;
    }
    Some(EarningLine {
        category,
        description: description.to_string(),
        hours: None,
        rate: None,
        amount: round_money(amount),
    })
}

/// Builds the itemized earnings list for one row.
///
/// Lines with zero hours or zero amount are omitted; every emitted amount is
/// rounded to currency precision at the point of computation.
pub fn build_earnings(
    input: &PayInput,
    hourly_rate: Decimal,
    schedule: &ScheduleRules,
    annual_supplement: Option<Decimal>,
) -> Vec<EarningLine> {
    let mut lines = Vec::new();

    lines.extend(hourly_line(
        EarningCategory::Regular,
        "Regular hours",
        input.regular_hours,
        hourly_rate,
        Decimal::ONE,
    ));
    lines.extend(hourly_line(
        EarningCategory::Overtime,
        "Overtime hours",
        input.overtime_hours,
        hourly_rate,
        schedule.overtime_multiplier,
    ));
    lines.extend(hourly_line(
        EarningCategory::NightShift,
        "Night-shift hours",
        input.night_shift_hours,
        hourly_rate,
        schedule.night_shift_multiplier,
    ));
    lines.extend(hourly_line(
        EarningCategory::Holiday,
        "Holiday hours",
        input.holiday_hours,
        hourly_rate,
        schedule.holiday_multiplier,
    ));
    lines.extend(flat_line(EarningCategory::Bonus, "Bonus", input.bonus));
    lines.extend(flat_line(EarningCategory::PerDiem, "Per diem", input.per_diem));
    lines.extend(flat_line(
        EarningCategory::OtherAllowance,
        "Allowances",
        input.allowances,
    ));
    if let Some(amount) = annual_supplement {
        lines.extend(flat_line(
            EarningCategory::AnnualSupplement,
            "Annual supplement",
            amount,
        ));
    }

    lines
}
