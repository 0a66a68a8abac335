//! Pipeline coordination for file processing.

use crate::constants::{VARIANT_INDEX_WIDTH, VARIANT_TAG, WAV_EXTENSIONS};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Result of checking whether a file should be processed.
#[derive(Debug)]
pub enum ProcessCheck {
    /// File should be processed.
    Process,
    /// Skip - variant output already exists.
    SkipExists,
}

/// Determine the output directory for a file.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// Output path for the variant at `index`: `<stem>.aug-NNN.wav`.
pub fn variant_path_for(input: &Path, output_dir: &Path, index: usize) -> PathBuf {
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );
    output_dir.join(format!(
        "{stem}.{VARIANT_TAG}-{index:0width$}.wav",
        width = VARIANT_INDEX_WIDTH
    ))
}

/// Output path of the first variant, used for skip detection.
pub fn first_variant_path(input: &Path, output_dir: &Path) -> PathBuf {
    variant_path_for(input, output_dir, 0)
}

/// Check if a file should be processed.
///
/// The variant count is unknown before invoking the chain, so the presence
/// of the first variant stands in for "already augmented."
pub fn should_process(input: &Path, output_dir: &Path, force: bool) -> ProcessCheck {
    if !force && first_variant_path(input, output_dir).exists() {
        return ProcessCheck::SkipExists;
    }
    ProcessCheck::Process
}

/// Collect input files from paths (files and directories).
///
/// A directly named file must be a WAV; directory scans silently skip
/// anything that is not.
pub fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_wav_file(path) {
                files.push(path.clone());
            } else {
                return Err(Error::UnsupportedFormat { path: path.clone() });
            }
        } else if path.is_dir() {
            collect_wav_files_recursive(path, &mut files)?;
        } else {
            warn!("Skipping non-existent path: {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Recursively collect WAV files from a directory.
fn collect_wav_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_wav_files_recursive(&path, files)?;
        } else if is_wav_file(&path) && !is_variant_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

/// Check if a path has a recognized WAV extension.
fn is_wav_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_lowercase();
            WAV_EXTENSIONS.contains(&lower.as_str())
        })
}

/// Skip files this tool produced so re-runs over a directory do not
/// augment earlier variants.
pub(crate) fn is_variant_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| {
            stem.rsplit_once('.')
                .is_some_and(|(_, tag)| tag.starts_with(&format!("{VARIANT_TAG}-")))
        })
}
