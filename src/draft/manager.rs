//! The draft row manager.
//!
//! Owns the editable row collection and the shared period context for one
//! payroll batch. Every mutation recomputes the affected rows synchronously
//! before returning, so consumers never observe a stale calculation.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::{calculate_payroll, resolve_period_rates};
use crate::config::StatutoryRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeSnapshot, PayField, PayFrequency, PayInput, PeriodContext};

use super::row::DraftRow;

/// Holds one editable row per employee plus the shared period context.
///
/// Recomputation is row-local: editing one employee never alters another
/// row's fields or flags. Mutating the period context recomputes every
/// row's calculation without touching inputs or edit flags.
#[derive(Debug, Clone)]
pub struct DraftManager {
    pub(crate) context: PeriodContext,
    pub(crate) rules: StatutoryRules,
    pub(crate) rows: Vec<DraftRow>,
    pub(crate) excluded: BTreeSet<String>,
}

impl DraftManager {
    /// Creates a draft batch from an employee roster.
    ///
    /// Each row is seeded with the employee's pro-rated default regular
    /// hours (by hire date) and calculated immediately. A per-row
    /// calculation failure leaves that row's calculation `None` and is
    /// logged; the rest of the batch is unaffected.
    pub fn new(
        roster: Vec<EmployeeSnapshot>,
        context: PeriodContext,
        rules: StatutoryRules,
    ) -> Self {
        let mut manager = Self {
            context,
            rules,
            rows: Vec::with_capacity(roster.len()),
            excluded: BTreeSet::new(),
        };

        for employee in roster {
            let seed = match resolve_period_rates(
                employee.monthly_salary,
                employee.hire_date,
                &manager.context,
                &manager.rules.schedule,
            ) {
                Ok(rates) => PayInput {
                    regular_hours: rates.prorated_default_hours,
                    ..PayInput::default()
                },
                Err(error) => {
                    warn!(employee_id = %employee.id, %error, "rate resolution failed at seeding");
                    PayInput::default()
                }
            };
            manager.rows.push(DraftRow::new(employee, seed));
        }

        manager.recompute_all();
        manager
    }

    /// Returns the shared period context.
    pub fn context(&self) -> &PeriodContext {
        &self.context
    }

    /// Returns the statutory rules the batch is calculated under.
    pub fn rules(&self) -> &StatutoryRules {
        &self.rules
    }

    /// Returns all rows in roster order, including excluded ones.
    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    /// Finds the row for the given employee, if any.
    pub fn row(&self, employee_id: &str) -> Option<&DraftRow> {
        self.rows.iter().find(|r| r.employee.id == employee_id)
    }

    /// Returns true if the employee is not in the exclusion set.
    pub fn is_included(&self, employee_id: &str) -> bool {
        !self.excluded.contains(employee_id)
    }

    /// Iterates over rows that are not excluded, in roster order.
    pub fn included_rows(&self) -> impl Iterator<Item = &DraftRow> {
        self.rows
            .iter()
            .filter(|r| !self.excluded.contains(&r.employee.id))
    }

    /// Applies one field edit to one row.
    ///
    /// Returns `false` without touching the row when the value is outside
    /// the field's domain bounds or no row exists for the employee; no
    /// error surfaces for a rejected edit. Setting a field to its current
    /// value is accepted without recomputing. On any other accepted edit
    /// the row's edit flag and calculation are refreshed before returning.
    pub fn set_field(&mut self, employee_id: &str, field: PayField, value: Decimal) -> bool {
        if !field.accepts(value) {
            return false;
        }
        let context = self.context.clone();
        let rules = self.rules.clone();
        let Some(row) = self.rows.iter_mut().find(|r| r.employee.id == employee_id) else {
            return false;
        };
        if row.current.get(field) == value {
            return true;
        }

        row.current.set(field, value);
        row.refresh_edit_flag();
        Self::recompute_row(row, &context, &rules);
        true
    }

    /// Changes the pay frequency and recomputes every row.
    pub fn set_frequency(&mut self, frequency: PayFrequency) {
        self.context.frequency = frequency;
        self.context.periods_in_month = frequency.periods_in_month(self.context.pay_date);
        self.recompute_all();
    }

    /// Changes the pay date and recomputes every row.
    pub fn set_pay_date(&mut self, pay_date: NaiveDate) {
        self.context.pay_date = pay_date;
        self.context.periods_in_month = self.context.frequency.periods_in_month(pay_date);
        self.recompute_all();
    }

    /// Toggles the annual supplement and recomputes every row.
    pub fn set_include_annual_supplement(&mut self, include: bool) {
        self.context.include_annual_supplement = include;
        self.recompute_all();
    }

    /// Restores a row's inputs to its baseline and recomputes it.
    pub fn reset_row(&mut self, employee_id: &str) -> EngineResult<()> {
        let context = self.context.clone();
        let rules = self.rules.clone();
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.employee.id == employee_id)
            .ok_or_else(|| EngineError::RowNotFound {
                employee_id: employee_id.to_string(),
            })?;

        row.reset();
        Self::recompute_row(row, &context, &rules);
        Ok(())
    }

    /// Adds an employee to the exclusion set. Excluded rows stay visible
    /// and editable but contribute nothing to totals or persisted records.
    pub fn exclude(&mut self, employee_id: &str) {
        self.excluded.insert(employee_id.to_string());
    }

    /// Removes an employee from the exclusion set.
    pub fn include(&mut self, employee_id: &str) {
        self.excluded.remove(employee_id);
    }

    /// Recomputes every row's calculation. Inputs and edit flags are left
    /// untouched.
    pub(crate) fn recompute_all(&mut self) {
        let context = self.context.clone();
        let rules = self.rules.clone();
        for row in &mut self.rows {
            Self::recompute_row(row, &context, &rules);
        }
    }

    /// Recomputes one row's calculation from its current inputs.
    pub(crate) fn recompute_row(row: &mut DraftRow, context: &PeriodContext, rules: &StatutoryRules) {
        let result = resolve_period_rates(
            row.employee.monthly_salary,
            row.employee.hire_date,
            context,
            &rules.schedule,
        )
        .and_then(|rates| {
            calculate_payroll(&row.employee, &rates, &row.current, context, rules)
        });

        row.calculation = match result {
            Ok(calculation) => Some(calculation),
            Err(error) => {
                warn!(employee_id = %row.employee.id, %error, "row calculation failed");
                None
            }
        };
    }
}
