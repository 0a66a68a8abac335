//! Configuration type definitions.

use crate::augment::{
    Augmentation, BackgroundNoise, Equalizer, HighPass, LowPass, PitchShift, TimeStretch,
    Windowing,
};
use crate::chain::Strategy;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Named chain presets.
    #[serde(default)]
    pub chains: HashMap<String, ChainPreset>,

    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// A named, ordered chain preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainPreset {
    /// Strategy override for this preset (falls back to the default).
    pub strategy: Option<Strategy>,

    /// Augmentations in application order.
    #[serde(default)]
    pub augmentations: Vec<AugmentationSpec>,
}

/// Default settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default chain preset name to use when none is given.
    pub chain: Option<String>,

    /// Default combination strategy.
    pub strategy: Strategy,

    /// Default output directory (None = alongside each input).
    pub output_dir: Option<PathBuf>,
}

/// Serialized form of one augmentation, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AugmentationSpec {
    /// Additive Gaussian background noise.
    Noise {
        /// Noise amplitude (standard deviation).
        amplitude: f32,
    },
    /// Pitch shift by half-steps.
    PitchShift {
        /// Shift in semitones, positive = up.
        semitones: f32,
    },
    /// Time stretch without pitch change.
    TimeStretch {
        /// Speed factor, >1 speeds up.
        rate: f32,
    },
    /// Peaking equalizer (sox-backed).
    Equalizer {
        /// Filter center frequency in Hz.
        frequency: f32,
        /// Filter width as a q-factor.
        resonance: f32,
        /// Filter height in dB.
        gain: f32,
    },
    /// Lowpass filter (sox-backed).
    Lowpass {
        /// Cutoff frequency in Hz.
        frequency: f32,
        /// Q-factor, applies to the 2-pole variant.
        resonance: f32,
        /// Number of poles, 1 or 2.
        #[serde(default = "default_poles")]
        poles: u8,
    },
    /// Highpass filter (sox-backed).
    Highpass {
        /// Cutoff frequency in Hz.
        frequency: f32,
        /// Q-factor, applies to the 2-pole variant.
        resonance: f32,
        /// Number of poles, 1 or 2.
        #[serde(default = "default_poles")]
        poles: u8,
    },
    /// Windowing segmentation (replaces its input).
    Window {
        /// Window length in seconds.
        window_length: f32,
        /// Hop between window starts in seconds.
        hop_size: f32,
        /// Discard the trailing remainder instead of zero-padding it.
        #[serde(default)]
        drop_last: bool,
    },
}

fn default_poles() -> u8 {
    1
}

impl AugmentationSpec {
    /// Construct the augmentation this spec describes.
    ///
    /// Parameter validation happens here, before any chain invocation.
    pub fn build(&self) -> Result<Box<dyn Augmentation>> {
        Ok(match *self {
            Self::Noise { amplitude } => Box::new(BackgroundNoise::new(amplitude)?),
            Self::PitchShift { semitones } => Box::new(PitchShift::new(semitones)?),
            Self::TimeStretch { rate } => Box::new(TimeStretch::new(rate)?),
            Self::Equalizer {
                frequency,
                resonance,
                gain,
            } => Box::new(Equalizer::new(frequency, resonance, gain)?),
            Self::Lowpass {
                frequency,
                resonance,
                poles,
            } => Box::new(LowPass::new(frequency, resonance, poles)?),
            Self::Highpass {
                frequency,
                resonance,
                poles,
            } => Box::new(HighPass::new(frequency, resonance, poles)?),
            Self::Window {
                window_length,
                hop_size,
                drop_last,
            } => Box::new(Windowing::new(window_length, hop_size, drop_last)?),
        })
    }
}
