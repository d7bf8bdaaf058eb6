//! Configuration loaded from `.riskrating.toml`.
//!
//! Only presentation is configurable. Factor weights and level thresholds
//! are fixed by the methodology and have no configuration surface.
//!
//! ```toml
//! [output]
//! default_format = "terminal"   # terminal | json | yaml | markdown
//! color = "auto"                # auto | always | never
//! show_factors = true
//! precision = 3
//! ```

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use serde::{Deserialize, Serialize};

/// Largest accepted `precision`.
pub const MAX_PRECISION: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRatingConfig {
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub default_format: OutputFormat,
    pub color: ColorMode,
    pub show_factors: bool,
    /// Digits after the decimal point for sub-scores
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            color: ColorMode::default(),
            show_factors: default_show_factors(),
            precision: default_precision(),
        }
    }
}

impl OutputConfig {
    // Pure function: Validate a single precision value
    fn validate_precision(precision: usize) -> Result<(), String> {
        if precision <= MAX_PRECISION {
            Ok(())
        } else {
            Err(format!(
                "precision must be between 0 and {}, got {}",
                MAX_PRECISION, precision
            ))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_precision(self.precision)
    }
}

fn default_show_factors() -> bool {
    true
}

fn default_precision() -> usize {
    3
}

/// Default configuration file written by `riskrating init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# OWASP Risk Rating configuration

[output]
# terminal | json | yaml | markdown
default_format = "terminal"
# auto | always | never
color = "auto"
# list the selected factor for every category
show_factors = true
# digits after the decimal point for sub-scores (0-6)
precision = 3
"#;
