//! Pitch shifting and time stretching via signalsmith-stretch.

use crate::augment::Augmentation;
use crate::constants::limits;
use crate::error::{Error, Result};
use signalsmith_stretch::Stretch;

/// Number of channels processed (mono pipeline).
const CHANNELS: u32 = 1;

/// Shift the pitch of a signal by half-steps without changing its duration.
#[derive(Debug, Clone, Copy)]
pub struct PitchShift {
    semitones: f32,
}

impl PitchShift {
    /// Create a pitch-shift augmentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `semitones` is not finite or
    /// exceeds two octaves in either direction.
    pub fn new(semitones: f32) -> Result<Self> {
        if !semitones.is_finite() || semitones.abs() > limits::MAX_PITCH_SEMITONES {
            return Err(Error::InvalidParameter {
                augmentation: "pitch_shift",
                message: format!(
                    "semitones must be finite and within +/-{}, got {semitones}",
                    limits::MAX_PITCH_SEMITONES
                ),
            });
        }
        Ok(Self { semitones })
    }
}

impl Augmentation for PitchShift {
    fn name(&self) -> &'static str {
        "pitch_shift"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        let mut stretcher = Stretch::preset_default(CHANNELS, sample_rate);
        // None means no tonality limit on formant preservation
        stretcher.set_transpose_factor_semitones(self.semitones, None);

        let mut output = vec![0.0f32; samples.len()];
        stretcher.process(samples, &mut output);
        Ok(vec![output])
    }
}

/// Change the duration of a signal without changing its pitch.
///
/// A rate above 1 speeds the signal up (shorter output), below 1 slows it
/// down. Rate 1 leaves the duration unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TimeStretch {
    rate: f32,
}

impl TimeStretch {
    /// Create a time-stretch augmentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `rate` is outside the
    /// supported range.
    pub fn new(rate: f32) -> Result<Self> {
        if !rate.is_finite()
            || rate <= limits::MIN_STRETCH_RATE
            || rate > limits::MAX_STRETCH_RATE
        {
            return Err(Error::InvalidParameter {
                augmentation: "time_stretch",
                message: format!(
                    "rate must be above {} and at most {}, got {rate}",
                    limits::MIN_STRETCH_RATE,
                    limits::MAX_STRETCH_RATE
                ),
            });
        }
        Ok(Self { rate })
    }
}

impl Augmentation for TimeStretch {
    fn name(&self) -> &'static str {
        "time_stretch"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        let mut stretcher = Stretch::preset_default(CHANNELS, sample_rate);

        // The stretch ratio is implied by the input/output size difference
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let output_len = ((samples.len() as f32 / self.rate).round() as usize).max(1);
        let mut output = vec![0.0f32; output_len];
        stretcher.process(samples, &mut output);
        Ok(vec![output])
    }
}
