//! WAV decoding using hound.

use crate::error::{Error, Result};
use hound::{SampleFormat, WavReader};
use std::path::Path;

/// Decoded audio data.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Audio samples as mono f32 in range [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_secs: f32,
}

/// Decode a WAV file to mono f32 samples.
///
/// Multi-channel input is mixed down to mono by averaging channels.
pub fn decode_wav_file(path: &Path) -> Result<DecodedAudio> {
    let mut reader = WavReader::open(path).map_err(|e| Error::WavRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, _) => read_samples(&mut reader, path, |s: f32| s)?,
        (SampleFormat::Int, 16) => {
            const I16_NORM: f32 = 32768.0;
            read_samples(&mut reader, path, |s: i16| f32::from(s) / I16_NORM)?
        }
        (SampleFormat::Int, bits) => {
            // 8/24/32-bit integer widths all come through hound as i32
            #[allow(clippy::cast_precision_loss)]
            let norm = (1i64 << (i64::from(bits) - 1)) as f32;
            #[allow(clippy::cast_precision_loss)]
            read_samples(&mut reader, path, move |s: i32| s as f32 / norm)?
        }
    };

    let samples = mix_to_mono(&interleaved, channels);

    #[allow(clippy::cast_precision_loss)]
    let duration_secs = samples.len() as f32 / spec.sample_rate as f32;

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate,
        duration_secs,
    })
}

/// Read all samples from the reader, converting each with `convert`.
fn read_samples<R, S, F>(
    reader: &mut WavReader<R>,
    path: &Path,
    convert: F,
) -> Result<Vec<f32>>
where
    R: std::io::Read,
    S: hound::Sample,
    F: Fn(S) -> f32,
{
    reader
        .samples::<S>()
        .map(|s| {
            s.map(&convert).map_err(|e| Error::WavRead {
                path: path.to_path_buf(),
                source: e,
            })
        })
        .collect()
}

/// Mix interleaved samples down to mono by averaging channels.
fn mix_to_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = 1.0 / channels as f32;
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() * scale)
        .collect()
}
