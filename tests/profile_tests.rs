mod support;

use approx::assert_relative_eq;
use tonewheel::{
    SamplingPolicy, WaveShape, build_profile, build_tooth,
    errors::TonewheelError,
    float_types::{FRAC_PI_2, Real},
    profile::{ProfileConfig, radius_samples},
    waveform::evaluate_tag,
};

#[test]
fn profile_length_is_resolution_times_cycles() {
    for (res, cycles) in [(1, 1), (4, 2), (100, 50), (7, 13), (33, 3)] {
        let config = ProfileConfig::new(res, cycles, 20.0, 0.05, WaveShape::Sine).unwrap();
        let contour = build_profile(&config).unwrap();
        assert_eq!(contour.len(), res * cycles, "res={res} cycles={cycles}");
    }
}

#[test]
fn point_distance_matches_sample_radius() {
    for shape in WaveShape::ALL {
        let config = support::small_config(shape);
        let contour = build_profile(&config).unwrap();
        for (i, r) in contour.radii().into_iter().enumerate() {
            let expected = support::expected_radius(&config, i);
            assert!(
                support::approx_eq(r, expected, 1e-9),
                "{shape} sample {i}: {r} != {expected}"
            );
        }
    }
}

#[test]
fn zero_amplitude_gives_a_circle() {
    let config = ProfileConfig::new(10, 10, 20.0, 0.0, WaveShape::Sawtooth).unwrap();
    for r in build_profile(&config).unwrap().radii() {
        assert_relative_eq!(r, 20.0, epsilon = 1e-9);
    }
}

#[test]
fn flat_wave_gives_a_circle_offset_by_the_amplitude() {
    // flat is the constant 1, so every radius is R + a·R
    let config = ProfileConfig::new(10, 10, 20.0, 0.05, WaveShape::Flat).unwrap();
    for r in build_profile(&config).unwrap().radii() {
        assert_relative_eq!(r, 21.0, epsilon = 1e-9);
    }
}

#[test]
fn building_twice_is_identical() {
    let config = support::small_config(WaveShape::Hill);
    assert_eq!(build_profile(&config).unwrap(), build_profile(&config).unwrap());
}

#[test]
fn traversal_is_counter_clockwise_from_angle_zero() {
    let config = support::small_config(WaveShape::Sine);
    let contour = build_profile(&config).unwrap();

    let first = contour.points()[0];
    assert!(first.x > 0.0);
    assert_relative_eq!(first.y, 0.0);

    let angles = support::polar_angles(&contour);
    for pair in angles.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(contour.signed_area() > 0.0);
}

#[test]
fn square_wave_concrete_scenario() {
    let config = ProfileConfig::new(4, 2, 10.0, 0.1, WaveShape::Square).unwrap();
    let domain = SamplingPolicy::FullRevolution.sample(4, 2).unwrap();
    assert_eq!(domain.len(), 8);

    let signal = WaveShape::Square.evaluate(&domain.scaled(2.0));
    assert_eq!(signal, vec![0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0]);

    let expected = [10.0, 11.0, 10.0, 9.0, 10.0, 11.0, 10.0, 9.0];
    let radii = radius_samples(&config, &domain);
    let contour = build_profile(&config).unwrap();
    for ((r, measured), want) in radii.iter().zip(contour.radii()).zip(expected) {
        assert_relative_eq!(*r, want, epsilon = 1e-12);
        assert_relative_eq!(measured, want, epsilon = 1e-9);
    }

    // θ = π/4 sits on a crest at radius 11
    let p = contour.points()[1];
    assert_relative_eq!(p.x, 11.0 * (FRAC_PI_2 / 2.0).cos(), epsilon = 1e-12);
    assert_relative_eq!(p.y, 11.0 * (FRAC_PI_2 / 2.0).sin(), epsilon = 1e-12);
}

#[test]
fn triangle_swings_beyond_amplitude() {
    let config = ProfileConfig::new(40, 5, 10.0, 0.1, WaveShape::Triangle).unwrap();
    let radii = build_profile(&config).unwrap().radii();
    let max = radii.iter().copied().fold(Real::MIN, Real::max);
    // asin(sin θ) peaks at π/2, so the crest is R·(1 + 0.1·π/2)
    assert_relative_eq!(max, 10.0 * (1.0 + 0.1 * FRAC_PI_2), epsilon = 1e-9);
}

#[test]
fn tooth_uses_coarser_sampling() {
    let config = ProfileConfig::default();
    let tooth = build_tooth(&config).unwrap();
    assert_eq!(tooth.len(), config.resolution_per_cycle);
    assert!(tooth.len() < build_profile(&config).unwrap().len());
}

#[test]
fn unknown_wave_tag_produces_no_contour() {
    let result = evaluate_tag("spiral", &[0.0]);
    assert!(matches!(result, Err(TonewheelError::InvalidWaveformKind(_))));

    let parsed = "spiral".parse::<WaveShape>();
    assert!(matches!(parsed, Err(TonewheelError::InvalidWaveformKind(_))));
}

#[test]
fn self_intersecting_amplitude_is_rejected_before_sampling() {
    let config = ProfileConfig {
        amplitude_fraction: 1.5,
        ..ProfileConfig::default()
    };
    assert!(matches!(
        build_profile(&config),
        Err(TonewheelError::InvalidConfiguration(_))
    ));
}
