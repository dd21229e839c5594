//! Return model
//!
//! Projections run in real (inflation-stripped) terms. The expected real rate
//! is derived from the profile's nominal return with the Fisher relation and
//! each year's realized return is that center plus uniform noise whose total
//! width equals the profile volatility.

use rand::Rng;

use crate::model::AllocationProfile;

/// Expected real return in percent:
/// `((1 + nominal/100) / (1 + inflation/100) - 1) * 100`
#[must_use]
#[inline]
pub fn real_return_pct(profile: &AllocationProfile, inflation_rate_pct: f64) -> f64 {
    ((1.0 + profile.expected_nominal_return_pct / 100.0) / (1.0 + inflation_rate_pct / 100.0)
        - 1.0)
        * 100.0
}

/// Draw one year's realized real return as a fraction (0.05 = 5%).
///
/// The noise is uniform on `[-vol/2, vol/2)`, not Gaussian. Consumes exactly
/// one `f64` from `rng`, even when volatility is zero.
#[inline]
pub fn sample_annual_return<R: Rng + ?Sized>(
    profile: &AllocationProfile,
    real_return_pct: f64,
    rng: &mut R,
) -> f64 {
    let u: f64 = rng.random();
    real_return_pct / 100.0 + (u - 0.5) * (profile.volatility_pct / 100.0)
}

/// Cumulative inflation multiplier `years_from_now` years out
#[must_use]
#[inline]
pub fn inflation_factor(inflation_rate_pct: f64, years_from_now: u32) -> f64 {
    (1.0 + inflation_rate_pct / 100.0).powi(years_from_now as i32)
}
