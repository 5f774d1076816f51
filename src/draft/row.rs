//! The per-employee draft row.
//!
//! A row holds the employee snapshot, the current editable inputs, the
//! baseline captured at creation (or last reset), the derived edit flag,
//! and the last calculation result. Rows live only inside an active draft
//! session; persistence happens through the batch record builder.

use serde::Serialize;

use crate::models::{CalculationResult, EmployeeSnapshot, PayInput};

/// One editable draft row in a payroll batch.
///
/// Invariant (maintained by the draft manager): `calculation` always
/// reflects the row's `current` inputs and the batch's period context, or is
/// `None` when the last recomputation failed.
#[derive(Debug, Clone, Serialize)]
pub struct DraftRow {
    /// The employee this row belongs to.
    pub employee: EmployeeSnapshot,
    /// The current editable pay inputs.
    pub current: PayInput,
    /// The baseline captured at row creation (after pro-ration) or at the
    /// last explicit reset. Never mutated by recomputation.
    pub original: PayInput,
    /// True iff any tracked field of `current` differs from `original`.
    pub is_edited: bool,
    /// The last calculation result, or `None` after a calculation failure.
    pub calculation: Option<CalculationResult>,
}

impl DraftRow {
    /// Creates a new row with `current` and `original` both set to the
    /// given seed input. The calculation is filled in by the manager.
    pub(crate) fn new(employee: EmployeeSnapshot, seed: PayInput) -> Self {
        Self {
            employee,
            current: seed.clone(),
            original: seed,
            is_edited: false,
            calculation: None,
        }
    }

    /// Re-derives the edit flag by structural comparison of the tracked
    /// fields against the baseline.
    pub(crate) fn refresh_edit_flag(&mut self) {
        self.is_edited = self.current != self.original;
    }

    /// Copies the baseline back into `current` and clears the edit flag.
    /// The caller recomputes the calculation afterwards.
    pub(crate) fn reset(&mut self) {
        self.current = self.original.clone();
        self.is_edited = false;
    }
}
