//! Compounding Machine - compound interest calculator with financial-literacy chapters
//!
//! This library provides:
//! - Closed-form annuity-due future value
//! - Period-by-period growth trajectory for charting, with an optional memoizing cache
//! - Input form validation for the calculator's boundary
//! - Chapter dispatch and instructional text loading
//! - Currency formatting, text charts and CSV/JSON export

pub mod error;
pub mod projection;
pub mod inputs;
pub mod chapters;
pub mod display;

// Re-export commonly used types
pub use error::{CompoundingError, Result};
pub use projection::{
    compound, compute_final_value, compute_trajectory, CompoundingParameters, CompoundingResult,
    Trajectory, TrajectoryCache, TrajectoryPoint,
};
pub use inputs::FormInputs;
pub use chapters::Chapter;
