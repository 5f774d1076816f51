//! Batch validation and compliance scanning.
//!
//! Two distinct severities: [`validate_batch`] produces blocking messages
//! that make a batch ineligible for submission, while [`scan_warnings`]
//! produces advisory compliance warnings that never block.

pub mod validator;
pub mod warnings;

pub use validator::validate_batch;
pub use warnings::{ComplianceWarning, WarningCategory, scan_warnings};
