//! Statutory configuration for the payroll calculation engine.
//!
//! All jurisdiction-specific rates and thresholds (tax brackets, exemption
//! thresholds, social-insurance rates, minimum wage, overtime ceilings, and
//! pay multipliers) are loaded from versioned YAML files rather than
//! hard-coded, so jurisdiction changes never require recompiling the
//! calculation logic.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ComplianceRules, ContributionBase, JurisdictionMetadata, ScheduleRules, SocialInsuranceRules,
    StatutoryConfig, StatutoryRules, TaxBracket, TaxRules,
};
