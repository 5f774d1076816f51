//! The editable draft batch.
//!
//! A draft is the in-session, pre-submission view of one payroll run: one
//! row per employee, each carrying its current inputs, its seeded baseline,
//! and a live calculation result. The [`DraftManager`] owns the rows and
//! the shared period context; the reconciler merges external attendance
//! data into the rows.

pub mod manager;
pub mod reconciler;
pub mod row;

pub use manager::DraftManager;
pub use row::DraftRow;
