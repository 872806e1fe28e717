//! Stylesheet options and their loading from YAML or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::media::Breakpoints;

/// Base unit used when none is configured.
pub const DEFAULT_BASE_UNIT: f64 = 16.0;

/// Options a [`StyleSheet`](crate::StyleSheet) is built from.
///
/// Every field is optional in configuration files; missing fields take their
/// defaults. The base unit may also be written as `rem`.
///
/// ```yaml
/// rem: 8
/// breakpoints:
///   sm: 480
///   md: 768
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Pixel multiplier every scaled token derives from.
    #[serde(alias = "rem", alias = "baseUnit")]
    pub base_unit: f64,
    /// Named minimum-width thresholds for media styles.
    pub breakpoints: Breakpoints,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base unit, returning the updated options for chaining.
    pub fn base_unit(mut self, base_unit: f64) -> Self {
        self.base_unit = base_unit;
        self
    }

    /// Replaces the breakpoint thresholds.
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Parses and validates options from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, OptionsError> {
        let options: Options = serde_yaml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Parses and validates options from JSON text.
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        let options: Options = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnsupportedFormat`] for extensions other than
    /// `yaml`, `yml` and `json`, and an I/O or parse error otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, OptionsError> = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(OptionsError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&text)
    }

    /// Checks that the base unit is a positive finite number.
    ///
    /// Breakpoint thresholds are validated when they are deserialized.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.base_unit.is_finite() || self.base_unit <= 0.0 {
            return Err(OptionsError::InvalidBaseUnit(self.base_unit));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_unit: DEFAULT_BASE_UNIT,
            breakpoints: Breakpoints::default(),
        }
    }
}
