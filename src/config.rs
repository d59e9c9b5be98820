//! Engine configuration
//!
//! Out-of-range values are clamped to documented minimums/defaults rather
//! than rejected, so a sloppy caller still gets a run.

use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_MAX_PATHS: i64 = 20;
const DEFAULT_MAX_PATH_LENGTH: i64 = 6;
const DEFAULT_COMPROMISE_SEED: u64 = 42;

/// Options recognized by `generate_threat_paths`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum risk score a scenario must reach to be kept
    pub risk_threshold: f64,

    /// Cap on the final, aggregated result count
    pub max_paths: i64,

    /// Hop bound for breadth-first path enumeration
    pub max_path_length: i64,

    /// Also allow workstation/user-account entry points
    pub include_external_threats: bool,

    /// Also allow any user-privileged node as an entry point
    pub include_insider_threats: bool,

    /// Force-include these uids as high-value targets
    pub target_specific_assets: Vec<String>,

    /// Inject the synthetic infrastructure catalogs during enhancement
    pub synthesize_infrastructure: bool,

    /// Mark a random sample of nodes as suspected compromised (cosmetic)
    pub simulate_compromise: bool,

    /// Seed for the compromise-simulation RNG
    pub compromise_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            risk_threshold: 0.0,
            max_paths: DEFAULT_MAX_PATHS,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            include_external_threats: false,
            include_insider_threats: false,
            target_specific_assets: Vec::new(),
            synthesize_infrastructure: false,
            simulate_compromise: false,
            compromise_seed: DEFAULT_COMPROMISE_SEED,
        }
    }
}

impl EngineConfig {
    /// Clamp out-of-range values to documented minimums/defaults.
    pub fn normalized(mut self) -> Self {
        if self.risk_threshold < 0.0 {
            warn!(value = self.risk_threshold, "negative risk_threshold clamped to 0");
            self.risk_threshold = 0.0;
        }
        if self.max_paths < 0 {
            warn!(value = self.max_paths, "negative max_paths reset to default");
            self.max_paths = DEFAULT_MAX_PATHS;
        }
        if self.max_path_length < 1 {
            warn!(
                value = self.max_path_length,
                "max_path_length below 1 reset to default"
            );
            self.max_path_length = DEFAULT_MAX_PATH_LENGTH;
        }
        self
    }

    /// Final result cap as a usize
    pub fn max_paths(&self) -> usize {
        self.max_paths.max(0) as usize
    }

    /// Enumeration hop bound as a usize
    pub fn max_path_length(&self) -> usize {
        self.max_path_length.max(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.risk_threshold, 0.0);
        assert_eq!(config.max_paths(), 20);
        assert_eq!(config.max_path_length(), 6);
        assert!(!config.include_external_threats);
        assert!(!config.synthesize_infrastructure);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = EngineConfig {
            risk_threshold: -3.0,
            max_paths: -1,
            max_path_length: -5,
            ..EngineConfig::default()
        }
        .normalized();
        assert_eq!(config.risk_threshold, 0.0);
        assert_eq!(config.max_paths(), 20);
        assert_eq!(config.max_path_length(), 6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"risk_threshold": 6.5, "max_paths": 5}"#).unwrap();
        assert_eq!(config.risk_threshold, 6.5);
        assert_eq!(config.max_paths(), 5);
        assert_eq!(config.max_path_length(), 6);
    }
}
