//! Closed-form future value of an annuity-due

use super::params::{CompoundingParameters, CompoundingResult};
use super::trajectory::compute_trajectory;
use crate::error::Result;

/// Future value after `periods` periods with contributions at the start of each period.
///
/// FV = P·(1+r)^N + C·((1+r)^N - 1)/r·(1+r)
///
/// With r = 0 this reduces to P + C·N. The result is the accumulated balance
/// as a positive amount; principal and contribution are not treated as
/// signed outflows.
pub fn compute_final_value(params: &CompoundingParameters) -> Result<f64> {
    params.validate()?;

    let CompoundingParameters { principal, contribution, rate, periods } = *params;

    if periods == 0 {
        return Ok(principal);
    }

    let n = f64::from(periods);
    if rate == 0.0 {
        return Ok(principal + contribution * n);
    }

    // (1+r)^N - 1 via exp_m1 so small rates don't cancel to zero
    // A zero amount contributes nothing even when the growth factor overflows
    let growth_minus_one = (n * rate.ln_1p()).exp_m1();
    let grown_principal = if principal == 0.0 {
        0.0
    } else {
        principal * (1.0 + growth_minus_one)
    };
    let grown_contributions = if contribution == 0.0 {
        0.0
    } else {
        contribution * growth_minus_one / rate * (1.0 + rate)
    };

    Ok(grown_principal + grown_contributions)
}

/// Run both calculation paths for one set of inputs.
/// The trajectory is computed independently of the closed form.
pub fn compound(params: &CompoundingParameters) -> Result<CompoundingResult> {
    let final_value = compute_final_value(params)?;
    let trajectory = compute_trajectory(params)?.into_iter().collect();

    Ok(CompoundingResult {
        parameters: *params,
        final_value,
        trajectory,
    })
}
