//! Form inputs as the user enters them
//!
//! The form works in whole dollars, whole years and a percent interest rate.
//! Every field has a minimum of zero and years is capped at [`MAX_YEARS`].
//! Validated inputs convert to [`CompoundingParameters`] for the calculator.

use crate::error::{CompoundingError, Result};
use crate::projection::CompoundingParameters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper limit on the years field
pub const MAX_YEARS: u32 = 100;

/// Values collected by the calculator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInputs {
    /// Starting principal in whole dollars
    #[serde(default = "default_principal")]
    pub principal: u64,

    /// Amount added at the start of each year
    #[serde(default)]
    pub annual_contribution: u64,

    /// Years to compound for (0 to MAX_YEARS)
    #[serde(default = "default_years")]
    pub years: u32,

    /// Annual interest rate in percent (8.0 = 8%)
    #[serde(default = "default_interest_rate_pct")]
    pub interest_rate_pct: f64,
}

fn default_principal() -> u64 { 1_000 }
fn default_years() -> u32 { 10 }
fn default_interest_rate_pct() -> f64 { 8.0 }

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            principal: 1_000,
            annual_contribution: 0,
            years: 10,
            interest_rate_pct: 8.0,
        }
    }
}

impl FormInputs {
    /// Load inputs from a JSON file; missing fields take the form defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CompoundingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Enforce the widget constraints
    pub fn validate(&self) -> Result<()> {
        if self.years > MAX_YEARS {
            return Err(CompoundingError::OutOfRange {
                field: "years",
                value: u64::from(self.years),
                max: u64::from(MAX_YEARS),
            });
        }
        if !self.interest_rate_pct.is_finite() || self.interest_rate_pct < 0.0 {
            return Err(CompoundingError::invalid(
                "interest_rate_pct",
                self.interest_rate_pct,
                "must be a non-negative percentage",
            ));
        }
        Ok(())
    }

    /// Validate and convert to calculator parameters (percent becomes a fraction)
    pub fn to_parameters(&self) -> Result<CompoundingParameters> {
        self.validate()?;
        let params = CompoundingParameters::new(
            self.principal as f64,
            self.annual_contribution as f64,
            self.interest_rate_pct / 100.0,
            self.years,
        );
        params.validate()?;
        Ok(params)
    }
}
