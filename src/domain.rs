//! Angular sampling of a wheel revolution.

use crate::errors::TonewheelError;
use crate::float_types::{Real, TAU};

/// Upper bound on the samples in one domain.
pub const MAX_SAMPLES: usize = 1_000_000;

/// How a revolution is divided into angular samples.
///
/// The two policies are kept apart on purpose: they produce different
/// sample counts and the tooth policy deliberately under-samples the wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPolicy {
    /// `resolution_per_cycle * cycles_per_revolution` samples over `[0, 2π)`,
    /// step `2π / N`. Used for the full wheel outline.
    FullRevolution,
    /// `resolution_per_cycle` samples over `[0, 2π)`, step
    /// `2π / resolution_per_cycle`. Used for the open tooth outline.
    Tooth,
}

impl SamplingPolicy {
    /// Number of samples this policy takes per revolution.
    pub fn divisions(
        self,
        resolution_per_cycle: usize,
        cycles_per_revolution: usize,
    ) -> Result<usize, TonewheelError> {
        let divisions = match self {
            SamplingPolicy::FullRevolution => {
                resolution_per_cycle.checked_mul(cycles_per_revolution)
            },
            SamplingPolicy::Tooth => Some(resolution_per_cycle),
        };
        match divisions {
            Some(n) if (1..=MAX_SAMPLES).contains(&n) => Ok(n),
            _ => Err(TonewheelError::InvalidConfiguration(format!(
                "{self:?} sampling of {resolution_per_cycle} x {cycles_per_revolution} \
                 needs between 1 and {MAX_SAMPLES} samples"
            ))),
        }
    }

    /// Build the angular domain for the given profile resolution.
    ///
    /// The sample count is known exactly here, so angles are generated from
    /// the count rather than from `span / step`.
    pub fn sample(
        self,
        resolution_per_cycle: usize,
        cycles_per_revolution: usize,
    ) -> Result<AngularDomain, TonewheelError> {
        let count = self.divisions(resolution_per_cycle, cycles_per_revolution)?;
        let step = TAU / count as Real;
        Ok(AngularDomain::uniform(count, step))
    }
}

/// Strictly increasing angle samples `[0, step, 2·step, …]`, all `< span`.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularDomain {
    angles: Vec<Real>,
    step: Real,
}

impl AngularDomain {
    fn uniform(count: usize, step: Real) -> Self {
        let angles: Vec<Real> = (0..count).map(|i| i as Real * step).collect();
        log::debug!("sampled {count} angles with step {step}");
        AngularDomain { angles, step }
    }

    pub fn angles(&self) -> &[Real] {
        &self.angles
    }

    pub const fn step(&self) -> Real {
        self.step
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The same angles multiplied by `factor`, e.g. the cycle count.
    pub fn scaled(&self, factor: Real) -> Vec<Real> {
        self.angles.iter().map(|&theta| theta * factor).collect()
    }
}

/// Sample `[0, span)` with a uniform `step`: every `i * step` below `span`.
///
/// Each angle is computed as `i * step` rather than accumulated, so rounding
/// does not drift along the revolution.
pub fn sample_domain(span: Real, step: Real) -> Result<AngularDomain, TonewheelError> {
    if !span.is_finite() || span <= 0.0 {
        return Err(TonewheelError::InvalidConfiguration(format!(
            "sampling span must be positive and finite, got {span}"
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(TonewheelError::InvalidConfiguration(format!(
            "sampling step must be positive and finite, got {step}"
        )));
    }

    let estimate = (span / step).ceil();
    if estimate > MAX_SAMPLES as Real {
        return Err(TonewheelError::InvalidConfiguration(format!(
            "sampling [0, {span}) with step {step} needs more than {MAX_SAMPLES} samples"
        )));
    }

    // the division can round either way; settle the count on the products themselves
    let mut count = (estimate as usize).max(1);
    while count > 1 && (count - 1) as Real * step >= span {
        count -= 1;
    }
    while count as Real * step < span {
        count += 1;
    }

    Ok(AngularDomain::uniform(count, step))
}
