//! Shared state for the payroll preview API.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::{ConfigLoader, StatutoryRules};
use crate::error::EngineResult;

/// Shared application state.
///
/// The preview endpoint is stateless per request; the only shared resource
/// is the jurisdiction's statutory rule sets, loaded once at startup and
/// selected by pay date for each request.
#[derive(Clone)]
pub struct AppState {
    statutory: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates the application state from loaded statutory configuration.
    pub fn new(statutory: ConfigLoader) -> Self {
        Self {
            statutory: Arc::new(statutory),
        }
    }

    /// Returns the statutory rule set effective for the given pay date.
    pub fn rules_for(&self, pay_date: NaiveDate) -> EngineResult<&StatutoryRules> {
        self.statutory.rules_for(pay_date)
    }
}
