//! Tonewheel profiles: a nominal circle whose radius follows a wave shape.
//!
//! For each angular sample `θ` the radius is
//!
//! ```text
//! r(θ) = R + a·R·wave(cycles·θ)
//! ```
//!
//! where `R` is the nominal radius and `a` the amplitude fraction. Scaling the
//! wave's argument by the cycle count makes the surface repeat `cycles` times
//! per revolution. The polar samples are then projected with
//! `x = r·cos θ`, `y = r·sin θ`.

use crate::domain::{AngularDomain, SamplingPolicy};
use crate::errors::TonewheelError;
use crate::float_types::Real;
use crate::waveform::WaveShape;
use geo::{Area, BoundingRect, Coord, LineString, Polygon as GeoPolygon, Rect};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory the default output paths live in.
pub const DEFAULT_OUTPUT_DIR: &str = "DXFS";

/// Parameters of a single tonewheel.
///
/// Build it with [`ProfileConfig::new`] or start from [`Default`] and call
/// [`ProfileConfig::validate`]; the builders validate again before sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Samples per surface cycle.
    pub resolution_per_cycle: usize,
    /// Surface cycles per revolution of the wheel.
    pub cycles_per_revolution: usize,
    /// Nominal wheel radius, in drawing units (mm).
    pub nominal_radius: Real,
    /// Wave amplitude as a fraction of the nominal radius.
    pub amplitude_fraction: Real,
    pub wave_shape: WaveShape,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            resolution_per_cycle: 100,
            cycles_per_revolution: 50,
            nominal_radius: 20.0,
            amplitude_fraction: 0.05,
            wave_shape: WaveShape::Square,
        }
    }
}

impl ProfileConfig {
    /// Validated constructor.
    pub fn new(
        resolution_per_cycle: usize,
        cycles_per_revolution: usize,
        nominal_radius: Real,
        amplitude_fraction: Real,
        wave_shape: WaveShape,
    ) -> Result<Self, TonewheelError> {
        let config = ProfileConfig {
            resolution_per_cycle,
            cycles_per_revolution,
            nominal_radius,
            amplitude_fraction,
            wave_shape,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys take their default value.
    pub fn from_toml_str(source: &str) -> Result<Self, TonewheelError> {
        let config: ProfileConfig = toml::from_str(source)
            .map_err(|e| TonewheelError::InvalidConfiguration(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TonewheelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            TonewheelError::InvalidConfiguration(format!(
                "could not read {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&source)
    }

    /// Check every parameter, including that no sample radius can reach zero.
    ///
    /// The smallest possible radius is `R·(1 − |a|·peak)` where `peak` is the
    /// largest magnitude the wave shape produces (π/2 for the triangle wave).
    pub fn validate(&self) -> Result<(), TonewheelError> {
        if self.resolution_per_cycle == 0 {
            return Err(TonewheelError::InvalidConfiguration(
                "resolution_per_cycle must be at least 1".to_string(),
            ));
        }
        if self.cycles_per_revolution == 0 {
            return Err(TonewheelError::InvalidConfiguration(
                "cycles_per_revolution must be at least 1".to_string(),
            ));
        }
        // the full revolution is the larger of the two sampling policies
        SamplingPolicy::FullRevolution
            .divisions(self.resolution_per_cycle, self.cycles_per_revolution)?;
        if !self.nominal_radius.is_finite() || self.nominal_radius <= 0.0 {
            return Err(TonewheelError::InvalidConfiguration(format!(
                "nominal_radius must be positive and finite, got {}",
                self.nominal_radius
            )));
        }
        if !self.amplitude_fraction.is_finite() {
            return Err(TonewheelError::InvalidConfiguration(format!(
                "amplitude_fraction must be finite, got {}",
                self.amplitude_fraction
            )));
        }
        let excursion = self.amplitude_fraction.abs() * self.wave_shape.peak_magnitude();
        if excursion >= 1.0 {
            return Err(TonewheelError::InvalidConfiguration(format!(
                "amplitude_fraction {} with a {} wave lets the radius reach {} or less",
                self.amplitude_fraction,
                self.wave_shape,
                self.nominal_radius * (1.0 - excursion)
            )));
        }
        Ok(())
    }

    /// Absolute wave amplitude, `a·R`.
    pub fn amplitude(&self) -> Real {
        self.amplitude_fraction * self.nominal_radius
    }

    /// Number of points in the full profile. Saturates for configurations
    /// that [`ProfileConfig::validate`] rejects as too large.
    pub const fn sample_count(&self) -> usize {
        self.resolution_per_cycle.saturating_mul(self.cycles_per_revolution)
    }

    /// `DXFS/tonewheel_{wave}_r{radius}_{cycles}T.dxf`
    pub fn default_output_path(&self) -> PathBuf {
        Path::new(DEFAULT_OUTPUT_DIR).join(format!(
            "tonewheel_{}_r{}_{}T.dxf",
            self.wave_shape, self.nominal_radius, self.cycles_per_revolution
        ))
    }

    /// `DXFS/tonewheel_tooth_{wave}_r{radius}_{cycles}T.dxf`
    pub fn default_tooth_output_path(&self) -> PathBuf {
        Path::new(DEFAULT_OUTPUT_DIR).join(format!(
            "tonewheel_tooth_{}_r{}_{}T.dxf",
            self.wave_shape, self.nominal_radius, self.cycles_per_revolution
        ))
    }
}

/// An ordered outline, one point per angular sample.
///
/// The first and last points are neighbours in the loop but are not
/// duplicated; whether the outline is closed is decided at export time.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point2<Real>>,
}

impl Contour {
    pub const fn from_points(points: Vec<Point2<Real>>) -> Self {
        Contour { points }
    }

    /// Pair polar samples into cartesian points, preserving their order.
    pub fn from_polar(angles: &[Real], radii: &[Real]) -> Self {
        debug_assert_eq!(angles.len(), radii.len());
        let points = angles
            .iter()
            .zip(radii)
            .map(|(&theta, &r)| Point2::new(r * theta.cos(), r * theta.sin()))
            .collect();
        Contour { points }
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance of every point from the origin.
    pub fn radii(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.coords.norm()).collect()
    }

    /// The points as an open `geo` line string.
    pub fn to_line_string(&self) -> LineString<Real> {
        LineString::new(
            self.points
                .iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect(),
        )
    }

    /// The points as a closed `geo` polygon without holes.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        // Polygon::new closes the exterior ring
        GeoPolygon::new(self.to_line_string(), vec![])
    }

    /// Shoelace area of the closed outline; positive for counter-clockwise order.
    pub fn signed_area(&self) -> Real {
        self.to_polygon().signed_area()
    }

    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.to_line_string().bounding_rect()
    }
}

/// Radius at every sample of `domain`.
pub fn radius_samples(config: &ProfileConfig, domain: &AngularDomain) -> Vec<Real> {
    let phases = domain.scaled(config.cycles_per_revolution as Real);
    let amplitude = config.amplitude();
    config
        .wave_shape
        .evaluate(&phases)
        .into_iter()
        .map(|signal| config.nominal_radius + amplitude * signal)
        .collect()
}

/// Sample `config` with `policy` and project the result to cartesian points.
pub fn build_with_policy(
    config: &ProfileConfig,
    policy: SamplingPolicy,
) -> Result<Contour, TonewheelError> {
    config.validate()?;
    let domain = policy.sample(config.resolution_per_cycle, config.cycles_per_revolution)?;
    let radii = radius_samples(config, &domain);

    debug_assert!(radii.iter().all(|&r| r > 0.0));
    if log::log_enabled!(log::Level::Debug) {
        let min = radii.iter().copied().fold(Real::INFINITY, Real::min);
        let max = radii.iter().copied().fold(Real::NEG_INFINITY, Real::max);
        log::debug!(
            "{policy:?} {} profile: {} points, radius in [{min}, {max}]",
            config.wave_shape,
            radii.len()
        );
    }

    Ok(Contour::from_polar(domain.angles(), &radii))
}

/// The full wheel outline: `resolution · cycles` points, counter-clockwise from angle 0.
pub fn build_profile(config: &ProfileConfig) -> Result<Contour, TonewheelError> {
    build_with_policy(config, SamplingPolicy::FullRevolution)
}

/// The coarser tooth outline, sampled with [`SamplingPolicy::Tooth`].
pub fn build_tooth(config: &ProfileConfig) -> Result<Contour, TonewheelError> {
    build_with_policy(config, SamplingPolicy::Tooth)
}
