//! Batch aggregation and record construction.
//!
//! Turns a draft into the persisted shapes: [`batch_totals`] sums money
//! fields across included rows, and [`build_batch`] produces the header
//! plus one normalized record per included employee.

pub mod aggregator;
pub mod records;

pub use aggregator::batch_totals;
pub use records::{build_batch, map_deduction_category, map_earning_category};
