//! Single file processing pipeline.

use crate::audio::decode_wav_file;
use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::output::write_variants;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Number of variant files written.
    pub variants: usize,
    /// Duration of the input audio in seconds.
    pub audio_duration_secs: f32,
}

/// Process a single WAV file: decode, invoke the chain, write variants.
pub fn process_file(input_path: &Path, output_dir: &Path, chain: &Chain) -> Result<ProcessResult> {
    let start_time = Instant::now();

    info!("Processing: {}", input_path.display());

    let decoded = decode_wav_file(input_path)?;
    debug!(
        "Decoded {:.1}s of audio at {} Hz",
        decoded.duration_secs, decoded.sample_rate
    );

    let variants = chain.invoke(&decoded.samples, decoded.sample_rate)?;
    debug!(
        "Chain of {} augmentation(s) ({}) produced {} variant(s)",
        chain.len(),
        chain.strategy(),
        variants.len()
    );

    std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreate {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    write_variants(input_path, output_dir, &variants, decoded.sample_rate)?;

    info!(
        "Wrote {} variant(s) for {} in {:.2}s",
        variants.len(),
        input_path.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(ProcessResult {
        variants: variants.len(),
        audio_duration_secs: decoded.duration_secs,
    })
}
