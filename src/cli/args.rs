//! CLI argument definitions.

use crate::chain::Strategy;
use crate::cli::validators::{parse_eq_spec, parse_pass_spec, parse_window_spec};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate augmented audio variants for ML training sets.
#[derive(Debug, Parser)]
#[command(name = "wavaug")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input WAV files or directories to augment.
    pub inputs: Vec<PathBuf>,

    /// Common options for augmentation.
    #[command(flatten)]
    pub augment: AugmentArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage chain presets.
    Chains {
        /// Chains action to perform.
        #[command(subcommand)]
        action: ChainsAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Chains subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ChainsAction {
    /// List configured chain presets.
    List,
    /// Verify every preset's augmentation parameters.
    Check,
}

/// Arguments for the augment command.
///
/// Ad-hoc augmentation flags append to the chain in a fixed order:
/// pitch-shift, time-stretch, eq, lowpass, highpass, noise, window. Use a
/// chain preset from the config file for full control over ordering.
#[derive(Debug, Args)]
pub struct AugmentArgs {
    /// Chain preset name from configuration.
    #[arg(short, long, env = "WAVAUG_CHAIN")]
    pub chain: Option<String>,

    /// Combination strategy (overrides config).
    #[arg(short, long, value_enum, env = "WAVAUG_STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Add a pitch-shift stage (semitones, positive = up).
    #[arg(long, value_name = "SEMITONES", allow_hyphen_values = true)]
    pub pitch_shift: Option<f32>,

    /// Add a time-stretch stage (rate, >1 speeds up).
    #[arg(long, value_name = "RATE")]
    pub time_stretch: Option<f32>,

    /// Add a peaking equalizer stage: FREQ,Q,GAIN.
    #[arg(long, value_name = "FREQ,Q,GAIN", value_parser = parse_eq_spec, allow_hyphen_values = true)]
    pub eq: Option<(f32, f32, f32)>,

    /// Add a lowpass stage: FREQ[,Q[,POLES]].
    #[arg(long, value_name = "FREQ[,Q[,POLES]]", value_parser = parse_pass_spec)]
    pub lowpass: Option<(f32, f32, u8)>,

    /// Add a highpass stage: FREQ[,Q[,POLES]].
    #[arg(long, value_name = "FREQ[,Q[,POLES]]", value_parser = parse_pass_spec)]
    pub highpass: Option<(f32, f32, u8)>,

    /// Add a background-noise stage (amplitude).
    #[arg(long, value_name = "AMPLITUDE")]
    pub noise: Option<f32>,

    /// Add a windowing stage: LENGTH,HOP (seconds).
    #[arg(long, value_name = "LENGTH,HOP", value_parser = parse_window_spec)]
    pub window: Option<(f32, f32)>,

    /// Discard the trailing window remainder instead of zero-padding it.
    #[arg(long, requires = "window")]
    pub drop_last: bool,

    /// Output directory (default: alongside each input).
    #[arg(short, long, env = "WAVAUG_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing variant files.
    #[arg(long)]
    pub force: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_inputs() {
        let cli = Cli::try_parse_from(["wavaug", "a.wav", "b.wav"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.inputs.len(), 2);
    }

    #[test]
    fn test_parse_augmentation_flags() {
        let cli = Cli::try_parse_from([
            "wavaug",
            "--pitch-shift",
            "-2",
            "--eq",
            "800,0.15,-15",
            "--window",
            "4,2",
            "--drop-last",
            "in.wav",
        ])
        .unwrap();
        assert_eq!(cli.augment.pitch_shift, Some(-2.0));
        assert_eq!(cli.augment.eq, Some((800.0, 0.15, -15.0)));
        assert_eq!(cli.augment.window, Some((4.0, 2.0)));
        assert!(cli.augment.drop_last);
    }

    #[test]
    fn test_drop_last_requires_window() {
        assert!(Cli::try_parse_from(["wavaug", "--drop-last", "in.wav"]).is_err());
    }

    #[test]
    fn test_parse_strategy() {
        let cli = Cli::try_parse_from(["wavaug", "-s", "linear", "in.wav"]).unwrap();
        assert_eq!(cli.augment.strategy, Some(Strategy::Linear));
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["wavaug", "chains", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Chains {
                action: ChainsAction::List
            })
        ));
    }
}
