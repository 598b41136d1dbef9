//! Calculator inputs and outputs

use super::{DEFAULT_CONTRIBUTION, DEFAULT_PERIODS, DEFAULT_PRINCIPAL, DEFAULT_RATE};
use super::trajectory::TrajectoryPoint;
use crate::error::{CompoundingError, Result};
use serde::{Deserialize, Serialize};

/// Inputs to a compounding run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundingParameters {
    /// Initial amount before any growth
    pub principal: f64,

    /// Amount added at the start of each period
    pub contribution: f64,

    /// Interest per period as a fraction (0.08 = 8%)
    pub rate: f64,

    /// Number of compounding periods
    pub periods: u32,
}

impl Default for CompoundingParameters {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            contribution: DEFAULT_CONTRIBUTION,
            rate: DEFAULT_RATE,
            periods: DEFAULT_PERIODS,
        }
    }
}

impl CompoundingParameters {
    pub fn new(principal: f64, contribution: f64, rate: f64, periods: u32) -> Self {
        Self { principal, contribution, rate, periods }
    }

    /// Check every real-valued input is finite and non-negative.
    /// `periods` is unsigned so it cannot go negative.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("principal", self.principal)?;
        check_non_negative("contribution", self.contribution)?;
        check_non_negative("rate", self.rate)?;
        Ok(())
    }

    /// Growth factor for a single period
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.rate
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CompoundingError::invalid(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CompoundingError::invalid(field, value, "must not be negative"));
    }
    Ok(())
}

/// Both views of a run: the closed-form final value and the rounded
/// per-period trajectory. The last trajectory value is rounded to cents and
/// may differ from `final_value` by a fraction of a cent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundingResult {
    pub parameters: CompoundingParameters,
    pub final_value: f64,
    pub trajectory: Vec<TrajectoryPoint>,
}

impl CompoundingResult {
    /// Value of the last charted period, or the principal when there are no periods
    pub fn last_charted_value(&self) -> f64 {
        self.trajectory
            .last()
            .map(|p| p.value)
            .unwrap_or(self.parameters.principal)
    }

    /// Difference between the closed-form value and the last charted value
    pub fn rounding_gap(&self) -> f64 {
        self.final_value - self.last_charted_value()
    }
}
