//! Pay period models.
//!
//! This module contains the [`PayFrequency`] and [`PeriodContext`] types
//! that define the shared calculation context for every row in a draft
//! batch. Mutating the context invalidates every row's cached result.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How often employees are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// One pay period per week.
    Weekly,
    /// One pay period every two weeks.
    Biweekly,
    /// Two pay periods per month.
    Semimonthly,
    /// One pay period per month.
    Monthly,
}

/// Returns the number of days in the calendar month containing `date`.
fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // First of next month minus first of this month.
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid");
    let first_of_this =
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is always valid");
    (first_of_next - first_of_this).num_days() as u32
}

impl PayFrequency {
    /// Returns how many pay periods of this frequency fall in the calendar
    /// month containing the given pay date.
    ///
    /// Monthly frequencies always have exactly one period per month and
    /// semimonthly two; weekly and biweekly derive the count from how many
    /// full periods fit in the month.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PayFrequency;
    /// use chrono::NaiveDate;
    ///
    /// let pay_date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    /// assert_eq!(PayFrequency::Monthly.periods_in_month(pay_date), 1);
    /// assert_eq!(PayFrequency::Semimonthly.periods_in_month(pay_date), 2);
    /// assert_eq!(PayFrequency::Biweekly.periods_in_month(pay_date), 2);
    /// assert_eq!(PayFrequency::Weekly.periods_in_month(pay_date), 4);
    /// ```
    pub fn periods_in_month(self, pay_date: NaiveDate) -> u32 {
        match self {
            PayFrequency::Monthly => 1,
            PayFrequency::Semimonthly => 2,
            PayFrequency::Biweekly => days_in_month(pay_date) / 14,
            PayFrequency::Weekly => days_in_month(pay_date) / 7,
        }
    }
}

/// The shared calculation context for a draft batch.
///
/// One context is shared by every row in a batch; any mutation of the
/// context must trigger recomputation of every row's calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodContext {
    /// The pay frequency.
    pub frequency: PayFrequency,
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// The date pay is disbursed.
    pub pay_date: NaiveDate,
    /// The number of pay periods in the calendar month containing the pay date.
    pub periods_in_month: u32,
    /// Whether the prorated annual supplement is included in this period.
    pub include_annual_supplement: bool,
}

impl PeriodContext {
    /// Creates a new period context, deriving the periods-per-month count
    /// from the frequency and pay date.
    pub fn new(
        frequency: PayFrequency,
        start_date: NaiveDate,
        end_date: NaiveDate,
        pay_date: NaiveDate,
        include_annual_supplement: bool,
    ) -> Self {
        Self {
            frequency,
            start_date,
            end_date,
            pay_date,
            periods_in_month: frequency.periods_in_month(pay_date),
            include_annual_supplement,
        }
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the period (inclusive).
    pub fn days_in_period(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly_june() -> PeriodContext {
        PeriodContext::new(
            PayFrequency::Monthly,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            false,
        )
    }

    #[test]
    fn test_monthly_has_one_period() {
        assert_eq!(monthly_june().periods_in_month, 1);
    }

    #[test]
    fn test_semimonthly_has_two_periods() {
        let pay_date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(PayFrequency::Semimonthly.periods_in_month(pay_date), 2);
    }

    #[test]
    fn test_weekly_periods_by_calendar() {
        // February 2025 has 28 days: exactly four weekly periods.
        let feb = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        assert_eq!(PayFrequency::Weekly.periods_in_month(feb), 4);

        // July has 31 days: still four full weekly periods.
        let jul = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        assert_eq!(PayFrequency::Weekly.periods_in_month(jul), 4);
    }

    #[test]
    fn test_biweekly_periods_by_calendar() {
        let jun = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        assert_eq!(PayFrequency::Biweekly.periods_in_month(jun), 2);
    }

    #[test]
    fn test_december_rollover_in_days_in_month() {
        let dec = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(PayFrequency::Weekly.periods_in_month(dec), 4);
    }

    #[test]
    fn test_contains_date_inclusive() {
        let period = monthly_june();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    }

    #[test]
    fn test_days_in_period() {
        assert_eq!(monthly_june().days_in_period(), 30);
    }

    #[test]
    fn test_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&PayFrequency::Biweekly).unwrap(),
            "\"biweekly\""
        );
        let freq: PayFrequency = serde_json::from_str("\"semimonthly\"").unwrap();
        assert_eq!(freq, PayFrequency::Semimonthly);
    }
}
