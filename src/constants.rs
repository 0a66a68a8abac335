//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "wavaug";

/// File extensions recognized as WAV input.
pub const WAV_EXTENSIONS: &[&str] = &["wav", "wave"];

/// Tag inserted into variant filenames: `<stem>.aug-NNN.wav`.
pub const VARIANT_TAG: &str = "aug";

/// Zero-padded width of the variant index in output filenames.
pub const VARIANT_INDEX_WIDTH: usize = 3;

/// Parameter domains enforced at augmentation construction time.
pub mod limits {
    /// Maximum absolute pitch shift in semitones (two octaves).
    pub const MAX_PITCH_SEMITONES: f32 = 24.0;

    /// Exclusive lower bound of the time-stretch rate (4x slowdown).
    pub const MIN_STRETCH_RATE: f32 = 0.25;

    /// Maximum time-stretch rate (4x speedup).
    pub const MAX_STRETCH_RATE: f32 = 4.0;

    /// Valid pole counts for the lowpass/highpass filters.
    pub const VALID_POLES: &[u8] = &[1, 2];
}

/// External tool constants for the sox-backed filter family.
pub mod sox {
    /// Name of the sox binary looked up on PATH.
    pub const TOOL: &str = "sox";

    /// Remediation hint shown when sox is missing.
    pub const INSTALL_HINT: &str =
        "install SoX (http://sox.sourceforge.net/) or make sure it is on your PATH";

    /// Scratch input filename inside the per-invocation temp directory.
    pub const SCRATCH_IN: &str = "in.wav";

    /// Scratch output filename inside the per-invocation temp directory.
    pub const SCRATCH_OUT: &str = "out.wav";
}
