//! Additive background noise augmentation.

use crate::augment::Augmentation;
use crate::error::{Error, Result};
use rand::Rng;
use std::f32::consts::TAU;

/// Add background noise sampled from a zero-centered normal distribution.
///
/// The amplitude is the standard deviation of the distribution. The original
/// signal survives alongside the noisy variant in combinatoric chains
/// (`replaces = false`).
#[derive(Debug, Clone, Copy)]
pub struct BackgroundNoise {
    amplitude: f32,
}

impl BackgroundNoise {
    /// Create a noise augmentation with the given amplitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the amplitude is negative or
    /// not finite.
    pub fn new(amplitude: f32) -> Result<Self> {
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(Error::InvalidParameter {
                augmentation: "noise",
                message: format!("amplitude must be finite and non-negative, got {amplitude}"),
            });
        }
        Ok(Self { amplitude })
    }
}

impl Augmentation for BackgroundNoise {
    fn name(&self) -> &'static str {
        "noise"
    }

    fn apply(&self, samples: &[f32], _sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        let mut rng = rand::thread_rng();
        let noisy = samples
            .iter()
            .map(|&s| s + gaussian(&mut rng) * self.amplitude)
            .collect();
        Ok(vec![noisy])
    }
}

/// Draw a standard-normal sample via the Box-Muller transform.
fn gaussian<R: Rng>(rng: &mut R) -> f32 {
    // u1 must be nonzero for the logarithm
    let u1: f32 = rng.gen_range(f32::EPSILON..1.0);
    let u2: f32 = rng.gen_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_amplitude() {
        assert!(matches!(
            BackgroundNoise::new(-0.1),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_amplitude() {
        assert!(BackgroundNoise::new(f32::NAN).is_err());
    }

    #[test]
    fn test_zero_amplitude_is_identity() {
        let aug = BackgroundNoise::new(0.0).unwrap();
        let samples = vec![0.1, -0.2, 0.3];
        let out = aug.apply(&samples, 16_000).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], samples);
    }

    #[test]
    fn test_produces_single_variant_of_same_length() {
        let aug = BackgroundNoise::new(0.01).unwrap();
        let samples = vec![0.0; 1000];
        let out = aug.apply(&samples, 16_000).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), samples.len());
    }

    #[test]
    fn test_noise_actually_varies_samples() {
        let aug = BackgroundNoise::new(0.05).unwrap();
        let samples = vec![0.0; 1000];
        let out = aug.apply(&samples, 16_000).unwrap();
        let any_nonzero = out[0].iter().any(|&s| s != 0.0);
        assert!(any_nonzero, "noise should perturb a silent signal");
    }

    #[test]
    fn test_gaussian_sample_statistics() {
        let mut rng = rand::thread_rng();
        let n = 10_000;
        #[allow(clippy::cast_precision_loss)]
        let mean: f32 = (0..n).map(|_| gaussian(&mut rng)).sum::<f32>() / n as f32;
        assert!(mean.abs() < 0.1, "sample mean {mean} too far from 0");
    }
}
