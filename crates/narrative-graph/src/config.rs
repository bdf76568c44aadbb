//! Configuration for narrative generation

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// Controls which drivers the reasoner reports and how narratives read
///
/// # Examples
///
/// ```
/// use narrative_graph::NarrativeConfig;
///
/// let config = NarrativeConfig::from_toml("sort_by_strength = true").unwrap();
/// assert!(config.sort_by_strength);
/// assert!(config.include_strength);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Append ` (Strength: ..)` to narrative lines
    /// Default: true
    #[serde(default = "default_true")]
    pub include_strength: bool,

    /// Append ` (Potential Impact: ..)` to narrative lines
    /// Default: true
    #[serde(default = "default_true")]
    pub include_impact_potential: bool,

    /// Order drivers strongest first instead of snapshot order
    /// Default: false
    #[serde(default)]
    pub sort_by_strength: bool,

    /// Drop edges weaker than this; edges without a strength are kept
    /// Default: none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_strength: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            include_strength: true,
            include_impact_potential: true,
            sort_by_strength: false,
            min_strength: None,
        }
    }
}

impl NarrativeConfig {
    /// Names and explanations only
    pub fn terse() -> Self {
        Self {
            include_strength: false,
            include_impact_potential: false,
            sort_by_strength: false,
            min_strength: None,
        }
    }

    /// Every annotation, strongest drivers first
    pub fn detailed() -> Self {
        Self {
            include_strength: true,
            include_impact_potential: true,
            sort_by_strength: true,
            min_strength: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GraphError> {
        if let Some(min) = self.min_strength {
            if !min.is_finite() {
                return Err(GraphError::Config(format!(
                    "min_strength must be finite, got {}",
                    min
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GraphError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| GraphError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GraphError> {
        toml::to_string_pretty(self)
            .map_err(|e| GraphError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
