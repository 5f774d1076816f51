//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/preview` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceReport, EmployeeSnapshot, PayField, PayFrequency, PeriodContext};

/// Request body for the `/payroll/preview` endpoint.
///
/// Carries everything needed to seed, adjust, and preview one payroll
/// batch in a single call: the roster, the period, and optionally an
/// attendance report, manual edits, and exclusions applied in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// The employee roster for the batch.
    pub employees: Vec<EmployeeSnapshot>,
    /// The pay period the batch covers.
    pub period: PeriodRequest,
    /// An attendance report to reconcile into the rows, if available.
    #[serde(default)]
    pub attendance: Option<AttendanceReport>,
    /// Manual field edits applied after attendance reconciliation.
    #[serde(default)]
    pub edits: Vec<FieldEdit>,
    /// Employee ids to exclude from totals and records.
    #[serde(default)]
    pub excluded: Vec<String>,
}

/// The pay period portion of a preview request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The pay frequency.
    pub frequency: PayFrequency,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
    /// The pay date, used for rule selection and period derivation.
    pub pay_date: NaiveDate,
    /// Whether to include the prorated annual supplement.
    #[serde(default)]
    pub include_annual_supplement: bool,
}

impl From<PeriodRequest> for PeriodContext {
    fn from(request: PeriodRequest) -> Self {
        PeriodContext::new(
            request.frequency,
            request.start_date,
            request.end_date,
            request.pay_date,
            request.include_annual_supplement,
        )
    }
}

/// One manual field edit within a preview request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEdit {
    /// The employee whose row to edit.
    pub employee_id: String,
    /// The field to set.
    pub field: PayField,
    /// The new value.
    pub value: Decimal,
}
