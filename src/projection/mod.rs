//! Compounding calculator: closed-form future value and period-by-period trajectory

mod params;
mod future_value;
mod trajectory;
mod cache;

pub use params::{CompoundingParameters, CompoundingResult};
pub use future_value::{compound, compute_final_value};
pub use trajectory::{compute_trajectory, round_cents, Trajectory, TrajectoryIter, TrajectoryPoint};
pub use cache::TrajectoryCache;

// ============================================================================
// Default Calculator Inputs
// ============================================================================
// These match the values pre-filled in the calculator form.
// - Rate is a fraction per period (one period = one year in the form)
// - Contributions are applied at the start of each period (annuity-due)

/// Default starting principal ($1,000)
pub const DEFAULT_PRINCIPAL: f64 = 1_000.0;

/// Default contribution per period ($0)
pub const DEFAULT_CONTRIBUTION: f64 = 0.0;

/// Default interest rate per period (8%)
pub const DEFAULT_RATE: f64 = 0.08;

/// Default number of periods (10 years)
pub const DEFAULT_PERIODS: u32 = 10;
