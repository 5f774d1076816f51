//! Batch totals aggregation.
//!
//! Totals are recomputed from scratch on every call rather than maintained
//! incrementally, so they can never drift from the per-row calculations.

use crate::draft::DraftManager;
use crate::models::BatchTotals;

/// Sums the money fields of every included row with a valid calculation.
///
/// Excluded rows and rows whose last calculation failed contribute nothing.
/// The per-row amounts are already rounded to currency precision, so the
/// sums need no further rounding.
pub fn batch_totals(manager: &DraftManager) -> BatchTotals {
    let mut totals = BatchTotals::default();

    for row in manager.included_rows() {
        let Some(calc) = &row.calculation else {
            continue;
        };
        totals.gross_pay += calc.gross_pay;
        totals.total_deductions += calc.total_deductions;
        totals.net_pay += calc.net_pay;
        totals.income_tax += calc.income_tax;
        totals.employee_social_insurance += calc.employee_social_insurance;
        totals.employer_social_insurance += calc.employer_social_insurance;
        totals.employer_cost += calc.employer_cost;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ComplianceRules, ContributionBase, ScheduleRules, SocialInsuranceRules, StatutoryRules,
        TaxBracket, TaxRules,
    };
    use crate::models::{EmployeeSnapshot, PayField, PayFrequency, PeriodContext};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> StatutoryRules {
        StatutoryRules {
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            schedule: ScheduleRules {
                standard_weekly_hours: dec("44"),
                overtime_multiplier: dec("1.5"),
                night_shift_multiplier: dec("1.3"),
                holiday_multiplier: dec("2.0"),
            },
            tax: TaxRules {
                exemption_threshold: dec("300.00"),
                resident_brackets: vec![TaxBracket {
                    up_to: None,
                    rate: dec("0.05"),
                }],
                non_resident_rate: dec("0.20"),
                non_resident_exemption_applies: false,
            },
            social_insurance: SocialInsuranceRules {
                employee_rate: dec("0.02"),
                employer_rate: dec("0.034"),
                base: ContributionBase::GrossPay,
                cap: None,
            },
            compliance: ComplianceRules {
                minimum_monthly_wage: dec("115.00"),
                weekly_overtime_ceiling_hours: dec("12"),
                daily_hour_equivalent_limit: dec("12"),
                working_days_per_month: dec("22"),
            },
        }
    }

    fn employee(id: &str, salary: &str) -> EmployeeSnapshot {
        EmployeeSnapshot {
            id: id.to_string(),
            display_name: format!("Employee {}", id),
            monthly_salary: dec(salary),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            tax_resident: true,
            tax_exempt: false,
            department: String::new(),
            position: String::new(),
        }
    }

    fn june_context() -> PeriodContext {
        PeriodContext::new(
            PayFrequency::Monthly,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            false,
        )
    }

    #[test]
    fn test_totals_sum_both_rows() {
        let manager = DraftManager::new(
            vec![employee("emp_001", "500"), employee("emp_002", "500")],
            june_context(),
            rules(),
        );

        let single = manager.row("emp_001").unwrap().calculation.clone().unwrap();
        let totals = batch_totals(&manager);
        assert_eq!(totals.gross_pay, single.gross_pay * Decimal::from(2));
        assert_eq!(totals.net_pay, single.net_pay * Decimal::from(2));
        assert_eq!(
            totals.employer_cost,
            single.employer_cost * Decimal::from(2)
        );
    }

    #[test]
    fn test_excluding_a_row_removes_its_contribution() {
        let mut manager = DraftManager::new(
            vec![employee("emp_001", "500"), employee("emp_002", "750")],
            june_context(),
            rules(),
        );

        let all = batch_totals(&manager);
        manager.exclude("emp_002");
        let one = batch_totals(&manager);
        let second = manager.row("emp_002").unwrap().calculation.clone().unwrap();

        assert_eq!(one.gross_pay, all.gross_pay - second.gross_pay);
        assert_eq!(one.net_pay, all.net_pay - second.net_pay);

        manager.include("emp_002");
        assert_eq!(batch_totals(&manager), all);
    }

    #[test]
    fn test_failed_row_contributes_nothing() {
        let mut bad = employee("emp_bad", "500");
        bad.monthly_salary = dec("-500");
        let manager = DraftManager::new(
            vec![bad, employee("emp_ok", "500")],
            june_context(),
            rules(),
        );

        let ok = manager.row("emp_ok").unwrap().calculation.clone().unwrap();
        let totals = batch_totals(&manager);
        assert_eq!(totals.gross_pay, ok.gross_pay);
        assert_eq!(totals.net_pay, ok.net_pay);
    }

    #[test]
    fn test_empty_batch_totals_are_zero() {
        let manager = DraftManager::new(vec![], june_context(), rules());
        assert_eq!(batch_totals(&manager), BatchTotals::default());
    }

    #[test]
    fn test_totals_track_edits() {
        let mut manager =
            DraftManager::new(vec![employee("emp_001", "500")], june_context(), rules());
        let before = batch_totals(&manager);

        manager.set_field("emp_001", PayField::Bonus, dec("100"));
        let after = batch_totals(&manager);
        assert!(after.gross_pay > before.gross_pay);
    }
}
