//! Advisory compliance warnings.
//!
//! Warnings flag rows that look non-compliant with the configured labor
//! rules but never block submission. They are recomputed on demand from
//! the draft's current inputs, so they always reflect the latest edits.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::draft::DraftManager;

/// The kind of compliance issue a warning reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCategory {
    /// Monthly salary falls below the configured minimum wage.
    BelowMinimumWage,
    /// Overtime hours exceed the configured monthly ceiling.
    OvertimeCeiling,
    /// Average daily worked hours exceed the configured daily limit.
    ExcessiveDailyHours,
}

/// One advisory compliance warning for one row.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceWarning {
    /// The employee the warning is about.
    pub employee_id: String,
    /// The employee's display name, for presentation.
    pub display_name: String,
    /// The kind of issue detected.
    pub category: WarningCategory,
    /// A human-readable description of the issue.
    pub message: String,
}

/// Scans the included rows of a draft for compliance issues.
///
/// The overtime ceiling is configured per week and compared against a
/// month's worth of overtime (four weeks). Daily hours are averaged over
/// the configured working days per month across regular, overtime, and
/// night-shift hours.
pub fn scan_warnings(manager: &DraftManager) -> Vec<ComplianceWarning> {
    let compliance = &manager.rules().compliance;
    let monthly_overtime_ceiling = compliance.weekly_overtime_ceiling_hours * Decimal::from(4);
    let mut warnings = Vec::new();

    for row in manager.included_rows() {
        if row.employee.monthly_salary < compliance.minimum_monthly_wage {
            warnings.push(ComplianceWarning {
                employee_id: row.employee.id.clone(),
                display_name: row.employee.display_name.clone(),
                category: WarningCategory::BelowMinimumWage,
                message: format!(
                    "monthly salary {} is below the minimum wage {}",
                    row.employee.monthly_salary, compliance.minimum_monthly_wage
                ),
            });
        }

        if row.current.overtime_hours > monthly_overtime_ceiling {
            warnings.push(ComplianceWarning {
                employee_id: row.employee.id.clone(),
                display_name: row.employee.display_name.clone(),
                category: WarningCategory::OvertimeCeiling,
                message: format!(
                    "overtime hours {} exceed the monthly ceiling {}",
                    row.current.overtime_hours, monthly_overtime_ceiling
                ),
            });
        }

        if compliance.working_days_per_month > Decimal::ZERO {
            let worked = row.current.regular_hours
                + row.current.overtime_hours
                + row.current.night_shift_hours;
            let daily = worked / compliance.working_days_per_month;
            if daily > compliance.daily_hour_equivalent_limit {
                warnings.push(ComplianceWarning {
                    employee_id: row.employee.id.clone(),
                    display_name: row.employee.display_name.clone(),
                    category: WarningCategory::ExcessiveDailyHours,
                    message: format!(
                        "average daily hours exceed the limit of {}",
                        compliance.daily_hour_equivalent_limit
                    ),
                });
            }
        }
    }

    warnings
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
    fn test_compliant_batch_has_no_warnings() {
        let manager = DraftManager::new(vec![employee("emp_001", "500")], june_context(), rules());
        assert!(scan_warnings(&manager).is_empty());
    }

    #[test]
    fn test_below_minimum_wage_warned_but_not_blocking() {
        let manager = DraftManager::new(vec![employee("emp_001", "100")], june_context(), rules());

        let warnings = scan_warnings(&manager);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, WarningCategory::BelowMinimumWage);
        // Advisory only: validation still passes.
        assert!(crate::validation::validate_batch(&manager).is_empty());
    }

    #[test]
    fn test_overtime_ceiling_warning() {
        let mut manager =
            DraftManager::new(vec![employee("emp_001", "500")], june_context(), rules());
        // Ceiling is 12 h/week, so 48 h/month; 49 trips it.
        manager.set_field("emp_001", PayField::OvertimeHours, dec("49"));

        let warnings = scan_warnings(&manager);
        assert!(
            warnings
                .iter()
                .any(|w| w.category == WarningCategory::OvertimeCeiling)
        );
    }

    #[test]
    fn test_overtime_at_ceiling_not_warned() {
        let mut manager =
            DraftManager::new(vec![employee("emp_001", "500")], june_context(), rules());
        manager.set_field("emp_001", PayField::OvertimeHours, dec("48"));

        let warnings = scan_warnings(&manager);
        assert!(
            warnings
                .iter()
                .all(|w| w.category != WarningCategory::OvertimeCeiling)
        );
    }

    #[test]
    fn test_excessive_daily_hours_warning() {
        let mut manager =
            DraftManager::new(vec![employee("emp_001", "500")], june_context(), rules());
        // 22 working days * 12 h limit = 264 h; baseline 190.67 + 80 = 270.67.
        manager.set_field("emp_001", PayField::NightShiftHours, dec("80"));

        let warnings = scan_warnings(&manager);
        assert!(
            warnings
                .iter()
                .any(|w| w.category == WarningCategory::ExcessiveDailyHours)
        );
    }

    #[test]
    fn test_excluded_rows_not_scanned() {
        let mut manager =
            DraftManager::new(vec![employee("emp_001", "100")], june_context(), rules());
        manager.exclude("emp_001");
        assert!(scan_warnings(&manager).is_empty());
    }
}
