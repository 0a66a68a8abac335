//! Wavaug - audio augmentation variant generator.
//!
//! This crate generates augmented variants of WAV files for ML training
//! pipelines by folding chains of augmentations over an input signal.

#![warn(missing_docs)]

pub mod audio;
pub mod augment;
pub mod chain;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;

use chain::{Chain, Strategy};
use clap::Parser;
use cli::{AugmentArgs, ChainsAction, Cli, Command, ConfigAction};
use config::{Config, config_file_path, load_default_config, save_default_config};
use pipeline::{ProcessCheck, collect_input_files, output_dir_for, process_file, should_process};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for the wavaug CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.augment.verbose, cli.augment.quiet);

    let config = load_default_config()?;
    config::validate_config(&config)?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    if cli.inputs.is_empty() {
        return Err(Error::NoValidInputFiles);
    }

    augment_files(&cli.inputs, &cli.augment, &config)
}

/// Augment input files with the chain assembled from args and config.
fn augment_files(inputs: &[PathBuf], args: &AugmentArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    let files = collect_input_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoValidInputFiles);
    }

    info!("Found {} WAV file(s) to augment", files.len());

    let chain = build_chain(args, config)?;
    if chain.is_empty() {
        warn!(
            "Chain is empty; {} strategy will {}",
            chain.strategy(),
            if chain.strategy() == Strategy::Flat {
                "produce no variants"
            } else {
                "copy each input through unchanged"
            }
        );
    } else {
        info!(
            "Chain of {} augmentation(s), {} strategy",
            chain.len(),
            chain.strategy()
        );
    }

    let output_dir = resolve_output_dir(args, config);
    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);

    let mut processed = 0;
    let mut skipped = 0;
    let mut errors = 0;
    let mut total_variants = 0;
    let mut total_audio_secs = 0.0f32;

    for file in &files {
        let file_output_dir = output_dir_for(file, output_dir.as_deref());

        if let ProcessCheck::SkipExists = should_process(file, &file_output_dir, args.force) {
            info!("Skipping (output exists): {}", file.display());
            skipped += 1;
            progress::inc_progress(file_progress.as_ref());
            continue;
        }

        match process_file(file, &file_output_dir, &chain) {
            Ok(result) => {
                processed += 1;
                total_variants += result.variants;
                total_audio_secs += result.audio_duration_secs;
            }
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                errors += 1;
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} processed, {} skipped, {} errors, {} variant(s) from {:.1}s of audio in {:.2}s",
        processed, skipped, errors, total_variants, total_audio_secs, total_duration
    );

    if errors > 0 {
        warn!("{} file(s) had errors", errors);
    }

    Ok(())
}

/// Resolve the output directory: the explicit flag wins over the config
/// default; neither set means alongside each input.
fn resolve_output_dir(args: &AugmentArgs, config: &Config) -> Option<PathBuf> {
    args.output_dir
        .clone()
        .or_else(|| config.defaults.output_dir.clone())
}

/// Assemble the chain from a preset and/or ad-hoc flags.
///
/// A preset's augmentations come first, then the ad-hoc flags in their
/// documented order. The strategy resolves from the explicit flag, then the
/// preset, then the config default.
fn build_chain(args: &AugmentArgs, config: &Config) -> Result<Chain> {
    let preset_name = args.chain.as_ref().or(config.defaults.chain.as_ref());
    let preset = preset_name
        .map(|name| config::get_chain(config, name))
        .transpose()?;

    let strategy = args
        .strategy
        .or_else(|| preset.and_then(|p| p.strategy))
        .unwrap_or(config.defaults.strategy);

    let mut chain = Chain::new(strategy);

    if let Some(preset) = preset {
        for spec in &preset.augmentations {
            chain.append(spec.build()?);
        }
    }

    if let Some(semitones) = args.pitch_shift {
        chain.append(Box::new(augment::PitchShift::new(semitones)?));
    }
    if let Some(rate) = args.time_stretch {
        chain.append(Box::new(augment::TimeStretch::new(rate)?));
    }
    if let Some((frequency, resonance, gain)) = args.eq {
        chain.append(Box::new(augment::Equalizer::new(frequency, resonance, gain)?));
    }
    if let Some((frequency, resonance, poles)) = args.lowpass {
        chain.append(Box::new(augment::LowPass::new(frequency, resonance, poles)?));
    }
    if let Some((frequency, resonance, poles)) = args.highpass {
        chain.append(Box::new(augment::HighPass::new(frequency, resonance, poles)?));
    }
    if let Some(amplitude) = args.noise {
        chain.append(Box::new(augment::BackgroundNoise::new(amplitude)?));
    }
    if let Some((window_length, hop_size)) = args.window {
        chain.append(Box::new(augment::Windowing::new(
            window_length,
            hop_size,
            args.drop_last,
        )?));
    }

    Ok(chain)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

#[allow(clippy::print_stdout)]
fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
        Command::Chains { action } => handle_chains_command(action, config),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nAdd chain presets under [chains.<name>] to get started.");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[allow(clippy::print_stdout)]
fn handle_chains_command(action: ChainsAction, config: &Config) -> Result<()> {
    match action {
        ChainsAction::List => {
            if config.chains.is_empty() {
                println!("No chain presets configured.");
            } else {
                println!("Configured chain presets:");
                let mut names: Vec<_> = config.chains.keys().collect();
                names.sort();
                for name in names {
                    let preset = &config.chains[name];
                    let default_marker =
                        config.defaults.chain.as_ref().is_some_and(|d| d == name);
                    println!(
                        "  {} ({} augmentation(s), {}){}",
                        name,
                        preset.augmentations.len(),
                        preset.strategy.unwrap_or(config.defaults.strategy),
                        if default_marker { " [default]" } else { "" }
                    );
                }
            }
            Ok(())
        }
        ChainsAction::Check => {
            for (name, preset) in &config.chains {
                config::validate_preset(name, preset)?;
                println!("  {name}: OK");
            }
            Ok(())
        }
    }
}
