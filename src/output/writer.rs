//! Variant WAV file writing.

use crate::audio::write_wav_file;
use crate::error::Result;
use crate::pipeline::variant_path_for;
use std::path::Path;
use tracing::debug;

/// Write each variant as `<stem>.aug-NNN.wav` into the output directory.
///
/// Variants are written in working-set order, so variant 0 of a
/// combinatoric chain is always the unaugmented original (when the chain
/// contains no replacing augmentation).
pub fn write_variants(
    input_path: &Path,
    output_dir: &Path,
    variants: &[Vec<f32>],
    sample_rate: u32,
) -> Result<()> {
    for (index, samples) in variants.iter().enumerate() {
        let path = variant_path_for(input_path, output_dir, index);
        debug!("Writing variant {} to {}", index, path.display());
        write_wav_file(&path, samples, sample_rate)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::audio::decode_wav_file;
    use tempfile::TempDir;

    #[test]
    fn test_writes_numbered_variants() {
        let dir = TempDir::new().unwrap();
        let variants = vec![vec![0.0f32; 100], vec![0.5f32; 100], vec![-0.5f32; 100]];

        write_variants(Path::new("bird.wav"), dir.path(), &variants, 8_000).unwrap();

        for i in 0..3 {
            let path = dir.path().join(format!("bird.aug-{i:03}.wav"));
            assert!(path.exists(), "missing variant {i}");
            let decoded = decode_wav_file(&path).unwrap();
            assert_eq!(decoded.samples.len(), 100);
        }
        assert!(!dir.path().join("bird.aug-003.wav").exists());
    }

    #[test]
    fn test_no_variants_writes_nothing() {
        let dir = TempDir::new().unwrap();
        write_variants(Path::new("bird.wav"), dir.path(), &[], 8_000).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
