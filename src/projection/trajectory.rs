//! Period-by-period growth trajectory for charting

use super::params::CompoundingParameters;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Balance at the end of one period, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// 1-based period index
    pub period: u32,
    pub value: f64,
}

/// Round to two decimal places (half away from zero)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lazy, restartable trajectory over validated inputs.
///
/// Each call to [`Trajectory::iter`] replays the recurrence from the principal:
/// b_0 = P, b_n = (b_{n-1} + C)·(1+r)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    params: CompoundingParameters,
}

/// Build the trajectory for `params`. Nothing is computed until iterated.
pub fn compute_trajectory(params: &CompoundingParameters) -> Result<Trajectory> {
    params.validate()?;
    Ok(Trajectory { params: *params })
}

impl Trajectory {
    pub fn parameters(&self) -> &CompoundingParameters {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.periods as usize
    }

    pub fn is_empty(&self) -> bool {
        self.params.periods == 0
    }

    pub fn iter(&self) -> TrajectoryIter {
        TrajectoryIter {
            balance: self.params.principal,
            contribution: self.params.contribution,
            growth: self.params.growth_factor(),
            next_period: 1,
            periods: self.params.periods,
        }
    }
}

impl IntoIterator for Trajectory {
    type Item = TrajectoryPoint;
    type IntoIter = TrajectoryIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Trajectory {
    type Item = TrajectoryPoint;
    type IntoIter = TrajectoryIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator state. The running balance is carried unrounded; only the
/// yielded values are rounded.
#[derive(Debug, Clone)]
pub struct TrajectoryIter {
    balance: f64,
    contribution: f64,
    growth: f64,
    next_period: u32,
    periods: u32,
}

impl Iterator for TrajectoryIter {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_period > self.periods {
            return None;
        }

        self.balance = (self.balance + self.contribution) * self.growth;
        let point = TrajectoryPoint {
            period: self.next_period,
            value: round_cents(self.balance),
        };
        self.next_period += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.periods + 1).saturating_sub(self.next_period) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrajectoryIter {}

impl std::iter::FusedIterator for TrajectoryIter {}
