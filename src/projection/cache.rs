//! Read-through memoization of trajectories

use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, trace};

use super::params::CompoundingParameters;
use super::trajectory::{compute_trajectory, TrajectoryPoint};
use crate::error::Result;

/// Cache key built from the bit patterns of the inputs.
/// Adding 0.0 folds -0.0 into 0.0 so both map to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ParamsKey {
    principal: u64,
    contribution: u64,
    rate: u64,
    periods: u32,
}

impl From<&CompoundingParameters> for ParamsKey {
    fn from(params: &CompoundingParameters) -> Self {
        Self {
            principal: (params.principal + 0.0).to_bits(),
            contribution: (params.contribution + 0.0).to_bits(),
            rate: (params.rate + 0.0).to_bits(),
            periods: params.periods,
        }
    }
}

/// Materialized trajectories keyed by input tuple.
///
/// Entries are immutable once inserted and never evicted. A key is computed
/// at most once: concurrent callers for the same key wait on the shard lock
/// held while the first caller fills the entry.
#[derive(Debug, Default)]
pub struct TrajectoryCache {
    entries: DashMap<ParamsKey, Arc<[TrajectoryPoint]>>,
}

impl TrajectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached trajectory for `params`, computing it on first request.
    /// Invalid inputs are rejected before touching the map.
    pub fn get_or_compute(&self, params: &CompoundingParameters) -> Result<Arc<[TrajectoryPoint]>> {
        let trajectory = compute_trajectory(params)?;
        let key = ParamsKey::from(params);

        if let Some(hit) = self.entries.get(&key) {
            trace!("trajectory cache hit for {:?}", params);
            return Ok(Arc::clone(hit.value()));
        }

        let entry = self.entries.entry(key).or_insert_with(|| {
            debug!("trajectory cache miss, computing {} periods for {:?}", params.periods, params);
            trajectory.iter().collect()
        });
        Ok(Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
