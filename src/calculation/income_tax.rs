//! Taxable income and income-tax withholding.
//!
//! The exemption threshold, bracket table, and non-resident treatment all
//! come from the injected statutory configuration; this module only applies
//! them.

use rust_decimal::Decimal;

use crate::config::TaxRules;

use super::round_money;

/// Derives taxable income from gross pay.
///
/// Tax-exempt employees have no taxable income. Residents subtract the
/// statutory exemption threshold (floored at zero); non-residents subtract
/// it only when the configuration says the exemption applies to them.
pub fn taxable_income(
    gross_pay: Decimal,
    tax_resident: bool,
    tax_exempt: bool,
    tax: &TaxRules,
) -> Decimal {
    if tax_exempt {
        return Decimal::ZERO;
    }

    let exemption_applies = tax_resident || tax.non_resident_exemption_applies;
    if exemption_applies {
        (gross_pay - tax.exemption_threshold).max(Decimal::ZERO)
    } else {
        gross_pay.max(Decimal::ZERO)
    }
}

/// Computes income-tax withholding on taxable income.
///
/// Residents are taxed with progressive marginal brackets: each bracket's
/// rate applies only to the slice of taxable income that falls inside it.
/// Non-residents are withheld at the configured flat rate. The result is
/// rounded to currency precision.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding;
/// use payroll_engine::config::{TaxBracket, TaxRules};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let tax = TaxRules {
///     exemption_threshold: dec("300.00"),
///     resident_brackets: vec![
///         TaxBracket { up_to: Some(dec("500.00")), rate: dec("0.05") },
///         TaxBracket { up_to: None, rate: dec("0.10") },
///     ],
///     non_resident_rate: dec("0.20"),
///     non_resident_exemption_applies: false,
/// };
///
/// // 500 at 5% + 100 at 10%
/// assert_eq!(calculate_withholding(dec("600"), true, &tax), dec("35.00"));
/// // Flat 20% for non-residents.
/// assert_eq!(calculate_withholding(dec("600"), false, &tax), dec("120.00"));
/// ```
pub fn calculate_withholding(taxable: Decimal, tax_resident: bool, tax: &TaxRules) -> Decimal {
    if taxable <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    if !tax_resident {
        return round_money(taxable * tax.non_resident_rate);
    }

    let mut withheld = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for bracket in &tax.resident_brackets {
        let upper = bracket.up_to.unwrap_or(taxable);
        let slice = taxable.min(upper) - lower;
        if slice > Decimal::ZERO {
            withheld += slice * bracket.rate;
        }
        if taxable <= upper {
            break;
        }
        lower = upper;
    }

    round_money(withheld)
}
