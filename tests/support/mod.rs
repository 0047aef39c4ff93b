//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use tonewheel::float_types::{Real, TAU};
use tonewheel::{Contour, ProfileConfig, WaveShape};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A small wheel that is cheap to build in every test.
pub fn small_config(wave_shape: WaveShape) -> ProfileConfig {
    ProfileConfig::new(12, 9, 15.0, 0.04, wave_shape).expect("valid test configuration")
}

/// Radius predicted by `r = R + a·R·wave(cycles·θ)` at sample `i` of the full revolution.
pub fn expected_radius(config: &ProfileConfig, i: usize) -> Real {
    let n = config.sample_count() as Real;
    let theta = i as Real * (TAU / n);
    let signal = config
        .wave_shape
        .sample(config.cycles_per_revolution as Real * theta);
    config.nominal_radius + config.amplitude() * signal
}

/// Polar angle of every point, wrapped into `[0, 2π)`.
pub fn polar_angles(contour: &Contour) -> Vec<Real> {
    contour
        .points()
        .iter()
        .map(|p| p.y.atan2(p.x).rem_euclid(TAU))
        .collect()
}
