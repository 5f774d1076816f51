//! Configuration types for statutory payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. All statutory rates and
//! thresholds live here so a jurisdiction change never requires recompiling
//! calculation logic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the jurisdiction whose rules are loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// A short code identifying the jurisdiction (e.g., "demo").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The version or effective date of this configuration set.
    pub version: String,
    /// The ISO currency code for all money amounts.
    pub currency: String,
}

/// Work-schedule constants and statutory pay multipliers.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRules {
    /// Standard contracted hours per week (e.g., 44).
    pub standard_weekly_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Multiplier applied to the hourly rate for night-shift hours.
    pub night_shift_multiplier: Decimal,
    /// Multiplier applied to the hourly rate for public-holiday hours.
    pub holiday_multiplier: Decimal,
}

/// One marginal income-tax bracket.
///
/// A bracket with no `up_to` value is open-ended and must be the last
/// bracket in the table.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// The upper bound of taxable income covered by this bracket (inclusive).
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// The marginal rate applied within this bracket (e.g., 0.05 for 5%).
    pub rate: Decimal,
}

/// Income-tax rules for a jurisdiction.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxRules {
    /// Statutory exemption threshold subtracted from gross pay before
    /// withholding is computed for tax residents.
    pub exemption_threshold: Decimal,
    /// Progressive marginal brackets applied to residents' taxable income,
    /// ordered by ascending `up_to`.
    pub resident_brackets: Vec<TaxBracket>,
    /// Flat withholding rate applied to non-residents' taxable income.
    pub non_resident_rate: Decimal,
    /// Whether the exemption threshold also applies to non-residents.
    pub non_resident_exemption_applies: bool,
}

/// The wage base on which social-insurance contributions are assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionBase {
    /// Contributions are a percentage of gross pay.
    GrossPay,
    /// Contributions are a percentage of taxable income.
    TaxableIncome,
}

/// Social-insurance contribution rules.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialInsuranceRules {
    /// The employee's contribution rate, deducted from pay.
    pub employee_rate: Decimal,
    /// The employer's contribution rate, an additional cost not deducted.
    pub employer_rate: Decimal,
    /// The wage base contributions are assessed on.
    pub base: ContributionBase,
    /// Optional cap on the assessed base per period.
    #[serde(default)]
    pub cap: Option<Decimal>,
}

/// Thresholds used by the compliance warning detector.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceRules {
    /// The statutory minimum monthly wage.
    pub minimum_monthly_wage: Decimal,
    /// The maximum overtime hours permitted per week; the monthly ceiling
    /// is this value times four.
    pub weekly_overtime_ceiling_hours: Decimal,
    /// The maximum safe daily-hour-equivalent (worked hours divided by
    /// working days per month).
    pub daily_hour_equivalent_limit: Decimal,
    /// The number of working days used to derive the daily-hour-equivalent.
    pub working_days_per_month: Decimal,
}

/// A complete, dated set of statutory rules.
///
/// Rule files are effective-dated; the loader selects the newest set that
/// is effective on or before the pay date.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRules {
    /// The date from which these rules apply.
    pub effective_date: NaiveDate,
    /// Work-schedule constants and pay multipliers.
    pub schedule: ScheduleRules,
    /// Income-tax rules.
    pub tax: TaxRules,
    /// Social-insurance contribution rules.
    pub social_insurance: SocialInsuranceRules,
    /// Compliance warning thresholds.
    pub compliance: ComplianceRules,
}

/// The complete statutory configuration loaded from YAML files.
///
/// Aggregates the jurisdiction metadata and all dated rule sets found in a
/// configuration directory.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// Rule sets by effective date (sorted oldest first).
    rules: Vec<StatutoryRules>,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, rules: Vec<StatutoryRules>) -> Self {
        let mut sorted_rules = rules;
        sorted_rules.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rules: sorted_rules,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns all rule sets, sorted by effective date ascending.
    pub fn rules(&self) -> &[StatutoryRules] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_rules(effective: NaiveDate) -> StatutoryRules {
        StatutoryRules {
            effective_date: effective,
            schedule: ScheduleRules {
                standard_weekly_hours: dec("44"),
                overtime_multiplier: dec("1.5"),
                night_shift_multiplier: dec("1.3"),
                holiday_multiplier: dec("2.0"),
            },
            tax: TaxRules {
                exemption_threshold: dec("300.00"),
                resident_brackets: vec![
                    TaxBracket {
                        up_to: Some(dec("500.00")),
                        rate: dec("0.05"),
                    },
                    TaxBracket {
                        up_to: None,
                        rate: dec("0.10"),
                    },
                ],
                non_resident_rate: dec("0.20"),
                non_resident_exemption_applies: false,
            },
            social_insurance: SocialInsuranceRules {
                employee_rate: dec("0.02"),
                employer_rate: dec("0.034"),
                base: ContributionBase::GrossPay,
                cap: Some(dec("1200.00")),
            },
            compliance: ComplianceRules {
                minimum_monthly_wage: dec("115.00"),
                weekly_overtime_ceiling_hours: dec("12"),
                daily_hour_equivalent_limit: dec("12"),
                working_days_per_month: dec("22"),
            },
        }
    }

    #[test]
    fn test_rules_sorted_by_effective_date() {
        let newer = sample_rules(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        let older = sample_rules(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let config = StatutoryConfig::new(
            JurisdictionMetadata {
                code: "demo".to_string(),
                name: "Demo Jurisdiction".to_string(),
                version: "2025".to_string(),
                currency: "USD".to_string(),
            },
            vec![newer, older],
        );

        let dates: Vec<NaiveDate> = config.rules().iter().map(|r| r.effective_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_contribution_base_deserializes_snake_case() {
        let base: ContributionBase = serde_yaml::from_str("gross_pay").unwrap();
        assert_eq!(base, ContributionBase::GrossPay);

        let base: ContributionBase = serde_yaml::from_str("taxable_income").unwrap();
        assert_eq!(base, ContributionBase::TaxableIncome);
    }

    #[test]
    fn test_tax_bracket_up_to_defaults_to_none() {
        let bracket: TaxBracket = serde_yaml::from_str("rate: \"0.15\"").unwrap();
        assert!(bracket.up_to.is_none());
        assert_eq!(bracket.rate, dec("0.15"));
    }
}
