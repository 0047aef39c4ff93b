//! Scalar type and numeric constants shared by the whole crate.
//!
//! Exactly one of the `f64` (default) and `f32` features selects [`Real`].

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Half-width of the dead band in which the `square` wave reads as zero.
///
/// Resolved on first use: a [`set_tolerance`] call wins, then the
/// `TONEWHEEL_TOLERANCE` variable captured at build time, then the precision
/// default (`1e-6` for `f64`, `1e-4` for `f32`).
static SQUARE_DEAD_BAND: OnceLock<Real> = OnceLock::new();

#[cfg(feature = "f32")]
const DEFAULT_TOLERANCE: Real = 1e-4;
#[cfg(feature = "f64")]
const DEFAULT_TOLERANCE: Real = 1e-6;

/// Current tolerance; never below `Real::EPSILON`.
pub fn tolerance() -> Real {
    *SQUARE_DEAD_BAND.get_or_init(|| {
        option_env!("TONEWHEEL_TOLERANCE")
            .and_then(|raw| Real::from_str(raw).ok())
            .map_or(DEFAULT_TOLERANCE, |value| value.max(Real::EPSILON))
    })
}

/// Fix the tolerance before the first profile is generated. Later calls,
/// or calls after [`tolerance`] has been read, have no effect.
pub fn set_tolerance(value: Real) {
    let _ = SQUARE_DEAD_BAND.set(value.max(Real::EPSILON));
}

#[cfg(feature = "f32")]
pub use core::f32::consts::{FRAC_PI_2, PI, TAU};
#[cfg(feature = "f64")]
pub use core::f64::consts::{FRAC_PI_2, PI, TAU};
