//! WAV encoding using hound.

use crate::error::{Error, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// Write mono f32 samples to a 16-bit PCM WAV file.
pub fn write_wav_file(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| Error::WavWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    for &sample in samples {
        #[allow(clippy::cast_possible_truncation)]
        let sample_i16 = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        writer
            .write_sample(sample_i16)
            .map_err(|e| Error::WavWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
    }

    writer.finalize().map_err(|e| Error::WavWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
