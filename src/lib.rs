//! Statutory Payroll Calculation Engine
//!
//! This crate provides the per-employee payroll calculation pipeline for a
//! single pay period (pro-rated hours, itemized earnings, income-tax
//! withholding, social-insurance contributions, and net pay) together with
//! the draft-batch layer that supports interactive editing, attendance
//! reconciliation, validation, compliance-warning detection, and mapping of
//! results into persistable batch records.
//!
//! All statutory rates and thresholds are injected configuration, never
//! hard-coded; the calculation itself is deterministic, idempotent, and
//! side-effect-free.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod draft;
pub mod error;
pub mod models;
pub mod validation;
