use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::InsightError;

/// Tunable constants for the assistant. The defaults mirror the reference
/// behavior; the materiality threshold and loan bands carry no derivation,
/// so they stay configuration rather than hard-coded policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    /// Three-letter code appended to every rendered amount.
    pub currency: String,
    /// Minimum absolute delta for a peer difference to be reported.
    pub materiality_threshold: f64,
    /// Loan utilization at or above which repayment counts as complete.
    pub loan_complete_ratio: f64,
    /// Loan utilization above which repayment counts as nearly complete.
    pub loan_progress_ratio: f64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            currency: "KES".into(),
            materiality_threshold: 2000.0,
            loan_complete_ratio: 1.0,
            loan_progress_ratio: 0.75,
        }
    }
}

impl AssistantConfig {
    pub fn load(path: &Path) -> Result<Self, InsightError> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), InsightError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = AssistantConfig::default();
        assert_eq!(config.currency, "KES");
        assert!((config.materiality_threshold - 2000.0).abs() < f64::EPSILON);
        assert!((config.loan_complete_ratio - 1.0).abs() < f64::EPSILON);
        assert!((config.loan_progress_ratio - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("assistant.json");
        let mut config = AssistantConfig::default();
        config.currency = "USD".into();
        config.materiality_threshold = 500.0;
        config.save(&path).expect("save");
        let loaded = AssistantConfig::load(&path).expect("load");
        assert_eq!(loaded, config);
    }
}
