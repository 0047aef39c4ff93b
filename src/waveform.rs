//! Periodic wave shapes used to perturb the nominal radius.
//!
//! Every shape maps an unbounded angle (radians) to a dimensionless signal.
//! All of them stay inside `[-1, 1]` except [`WaveShape::Triangle`], which is
//! `asin(sin θ)` and therefore spans `[-π/2, π/2]`. See [`WaveShape::bounds`].

use crate::errors::TonewheelError;
use crate::float_types::{FRAC_PI_2, PI, Real, TAU, tolerance};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of wave shapes a tonewheel surface can follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WaveShape {
    /// `sin θ`
    Sine,
    /// `(θ mod 2π)/π − 1`, a ramp from -1 to 1 with a hard wrap every `2π`
    Sawtooth,
    /// `sign(sin θ)`, zero inside the crate tolerance of a crossing
    #[default]
    Square,
    /// `|sin(θ/2)|·2 − 1`, a rectified sine rescaled to `[-1, 1]`
    Hill,
    /// `|sin θ|`, the rectified sine left in `[0, 1]`
    HillUnsigned,
    /// `asin(sin θ)`, piecewise linear in `[-π/2, π/2]`
    Triangle,
    /// constant `1`
    Flat,
}

impl WaveShape {
    /// Every supported wave shape, in the order they are listed to users.
    pub const ALL: [WaveShape; 7] = [
        WaveShape::Sine,
        WaveShape::Sawtooth,
        WaveShape::Square,
        WaveShape::Hill,
        WaveShape::HillUnsigned,
        WaveShape::Triangle,
        WaveShape::Flat,
    ];

    /// Canonical tag, as accepted by [`FromStr`] and written into file names.
    pub const fn tag(self) -> &'static str {
        match self {
            WaveShape::Sine => "sine",
            WaveShape::Sawtooth => "sawtooth",
            WaveShape::Square => "square",
            WaveShape::Hill => "hill",
            WaveShape::HillUnsigned => "hill-unsigned",
            WaveShape::Triangle => "triangle",
            WaveShape::Flat => "flat",
        }
    }

    /// Comma separated list of the canonical tags.
    pub fn tags() -> String {
        Self::ALL
            .iter()
            .map(|shape| shape.tag())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Closed interval `(min, max)` the signal is guaranteed to stay in.
    pub const fn bounds(self) -> (Real, Real) {
        match self {
            WaveShape::Triangle => (-FRAC_PI_2, FRAC_PI_2),
            WaveShape::HillUnsigned => (0.0, 1.0),
            WaveShape::Flat => (1.0, 1.0),
            WaveShape::Sine | WaveShape::Sawtooth | WaveShape::Square | WaveShape::Hill => {
                (-1.0, 1.0)
            },
        }
    }

    /// Largest absolute value the signal can take.
    pub fn peak_magnitude(self) -> Real {
        let (lo, hi) = self.bounds();
        lo.abs().max(hi.abs())
    }

    /// Evaluate the wave at a single angle.
    pub fn sample(self, theta: Real) -> Real {
        match self {
            WaveShape::Sine => theta.sin(),
            WaveShape::Sawtooth => theta.rem_euclid(TAU) / PI - 1.0,
            WaveShape::Square => {
                let s = theta.sin();
                if s.abs() <= tolerance() { 0.0 } else { s.signum() }
            },
            WaveShape::Hill => (theta / 2.0).sin().abs() * 2.0 - 1.0,
            WaveShape::HillUnsigned => theta.sin().abs(),
            WaveShape::Triangle => theta.sin().asin(),
            WaveShape::Flat => 1.0,
        }
    }

    /// Evaluate the wave element-wise; the output has the same length as `angles`.
    pub fn evaluate(self, angles: &[Real]) -> Vec<Real> {
        angles.iter().map(|&theta| self.sample(theta)).collect()
    }
}

/// Evaluate the wave named by `tag` over `angles`.
///
/// Unknown tags fail with [`TonewheelError::InvalidWaveformKind`]; there is
/// no fallback shape.
pub fn evaluate_tag(tag: &str, angles: &[Real]) -> Result<Vec<Real>, TonewheelError> {
    let shape: WaveShape = tag.parse()?;
    Ok(shape.evaluate(angles))
}

impl FromStr for WaveShape {
    type Err = TonewheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveShape::Sine),
            "sawtooth" | "saw" => Ok(WaveShape::Sawtooth),
            "square" | "sqr" => Ok(WaveShape::Square),
            "hill" => Ok(WaveShape::Hill),
            "hill-unsigned" | "hill_unsigned" => Ok(WaveShape::HillUnsigned),
            "triangle" | "tri" => Ok(WaveShape::Triangle),
            "flat" => Ok(WaveShape::Flat),
            _ => Err(TonewheelError::InvalidWaveformKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for WaveShape {
    type Error = TonewheelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WaveShape> for String {
    fn from(shape: WaveShape) -> Self {
        shape.tag().to_string()
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
