//! Frequency filters backed by the external SoX tool.
//!
//! Each invocation works in its own temporary directory so concurrent
//! chains never share scratch files. The directory guard removes the
//! scratch WAVs on every exit path, including errors.

use crate::audio::{decode_wav_file, write_wav_file};
use crate::augment::Augmentation;
use crate::constants::{limits, sox};
use crate::error::{Error, Result};
use std::process::Command;

/// Peaking equalizer: an arbitrarily tall and wide filter at an arbitrary
/// frequency.
#[derive(Debug, Clone, Copy)]
pub struct Equalizer {
    frequency: f32,
    resonance: f32,
    gain_db: f32,
}

impl Equalizer {
    /// Create an equalizer augmentation.
    ///
    /// `frequency` is the filter center in Hz, `resonance` its width as a
    /// q-factor, `gain_db` its height in dB.
    pub fn new(frequency: f32, resonance: f32, gain_db: f32) -> Result<Self> {
        validate_filter_params("equalizer", frequency, resonance)?;
        if !gain_db.is_finite() {
            return Err(Error::InvalidParameter {
                augmentation: "equalizer",
                message: format!("gain must be finite, got {gain_db}"),
            });
        }
        Ok(Self {
            frequency,
            resonance,
            gain_db,
        })
    }
}

impl Augmentation for Equalizer {
    fn name(&self) -> &'static str {
        "equalizer"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        let effect = equalizer_args(self.frequency, self.resonance, self.gain_db);
        Ok(vec![run_sox(&effect, samples, sample_rate)?])
    }
}

/// Filter out high frequencies.
#[derive(Debug, Clone, Copy)]
pub struct LowPass {
    frequency: f32,
    resonance: f32,
    poles: u8,
}

impl LowPass {
    /// Create a lowpass augmentation.
    ///
    /// `resonance` only applies when `poles` is 2.
    pub fn new(frequency: f32, resonance: f32, poles: u8) -> Result<Self> {
        validate_filter_params("lowpass", frequency, resonance)?;
        validate_poles("lowpass", poles)?;
        Ok(Self {
            frequency,
            resonance,
            poles,
        })
    }
}

impl Augmentation for LowPass {
    fn name(&self) -> &'static str {
        "lowpass"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        let effect = pass_args("lowpass", self.frequency, self.resonance, self.poles);
        Ok(vec![run_sox(&effect, samples, sample_rate)?])
    }
}

/// Filter out low frequencies.
#[derive(Debug, Clone, Copy)]
pub struct HighPass {
    frequency: f32,
    resonance: f32,
    poles: u8,
}

impl HighPass {
    /// Create a highpass augmentation.
    ///
    /// `resonance` only applies when `poles` is 2.
    pub fn new(frequency: f32, resonance: f32, poles: u8) -> Result<Self> {
        validate_filter_params("highpass", frequency, resonance)?;
        validate_poles("highpass", poles)?;
        Ok(Self {
            frequency,
            resonance,
            poles,
        })
    }
}

impl Augmentation for HighPass {
    fn name(&self) -> &'static str {
        "highpass"
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        let effect = pass_args("highpass", self.frequency, self.resonance, self.poles);
        Ok(vec![run_sox(&effect, samples, sample_rate)?])
    }
}

fn validate_filter_params(
    augmentation: &'static str,
    frequency: f32,
    resonance: f32,
) -> Result<()> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(Error::InvalidParameter {
            augmentation,
            message: format!("frequency must be positive, got {frequency}"),
        });
    }
    if !resonance.is_finite() || resonance <= 0.0 {
        return Err(Error::InvalidParameter {
            augmentation,
            message: format!("resonance must be positive, got {resonance}"),
        });
    }
    Ok(())
}

fn validate_poles(augmentation: &'static str, poles: u8) -> Result<()> {
    if limits::VALID_POLES.contains(&poles) {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            augmentation,
            message: format!("poles must be 1 or 2, got {poles}"),
        })
    }
}

/// Build the sox effect arguments for the peaking equalizer.
fn equalizer_args(frequency: f32, resonance: f32, gain_db: f32) -> Vec<String> {
    vec![
        "equalizer".to_string(),
        format!("{frequency}"),
        format!("{resonance}q"),
        format!("{gain_db}"),
    ]
}

/// Build the sox effect arguments for a lowpass/highpass filter.
///
/// The q-factor width argument is only meaningful for the 2-pole variant.
fn pass_args(effect: &str, frequency: f32, resonance: f32, poles: u8) -> Vec<String> {
    let mut args = vec![effect.to_string(), format!("-{poles}"), format!("{frequency}")];
    if poles == 2 {
        args.push(format!("{resonance}q"));
    }
    args
}

/// Round-trip samples through sox with the given effect arguments.
///
/// Scratch WAVs live in a per-invocation temp directory whose guard cleans
/// up on success and on every error return.
fn run_sox(effect: &[String], samples: &[f32], sample_rate: u32) -> Result<Vec<f32>> {
    let scratch = tempfile::tempdir()?;
    let input_path = scratch.path().join(sox::SCRATCH_IN);
    let output_path = scratch.path().join(sox::SCRATCH_OUT);

    write_wav_file(&input_path, samples, sample_rate)?;

    let output = match Command::new(sox::TOOL)
        .arg(&input_path)
        .arg(&output_path)
        .args(effect)
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ToolUnavailable {
                tool: sox::TOOL,
                hint: sox::INSTALL_HINT.to_string(),
            });
        }
        Err(e) => return Err(Error::Io(e)),
    };

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool: sox::TOOL,
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(decode_wav_file(&output_path)?.samples)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lowpass_rejects_invalid_poles() {
        assert!(matches!(
            LowPass::new(1000.0, 0.707, 3),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(LowPass::new(1000.0, 0.707, 0).is_err());
        assert!(LowPass::new(1000.0, 0.707, 1).is_ok());
        assert!(LowPass::new(1000.0, 0.707, 2).is_ok());
    }

    #[test]
    fn test_highpass_rejects_invalid_poles() {
        assert!(HighPass::new(200.0, 0.707, 4).is_err());
        assert!(HighPass::new(200.0, 0.707, 2).is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_frequency() {
        assert!(Equalizer::new(0.0, 1.0, 3.0).is_err());
        assert!(Equalizer::new(-100.0, 1.0, 3.0).is_err());
        assert!(LowPass::new(f32::NAN, 1.0, 2).is_err());
    }

    #[test]
    fn test_equalizer_rejects_nonfinite_gain() {
        assert!(Equalizer::new(800.0, 0.15, f32::INFINITY).is_err());
        assert!(Equalizer::new(800.0, 0.15, -15.0).is_ok());
    }

    #[test]
    fn test_equalizer_effect_args() {
        let args = equalizer_args(800.0, 0.15, -15.0);
        assert_eq!(args, vec!["equalizer", "800", "0.15q", "-15"]);
    }

    #[test]
    fn test_pass_effect_args_one_pole_omits_width() {
        let args = pass_args("lowpass", 1000.0, 0.707, 1);
        assert_eq!(args, vec!["lowpass", "-1", "1000"]);
    }

    #[test]
    fn test_pass_effect_args_two_pole_includes_width() {
        let args = pass_args("highpass", 250.0, 0.707, 2);
        assert_eq!(args, vec!["highpass", "-2", "250", "0.707q"]);
    }
}
