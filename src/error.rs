//! Error types for wavaug.

/// Result type alias for wavaug operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for wavaug.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Chain preset not found in configuration.
    #[error("chain '{name}' not found in configuration")]
    ChainNotFound {
        /// Name of the missing chain preset.
        name: String,
    },

    /// Augmentation constructed with an out-of-domain parameter.
    #[error("invalid parameter for {augmentation}: {message}")]
    InvalidParameter {
        /// Name of the augmentation being constructed.
        augmentation: &'static str,
        /// Description of the invalid parameter.
        message: String,
    },

    /// External transform tool is missing from the system.
    #[error("external tool '{tool}' is not available: {hint}")]
    ToolUnavailable {
        /// Name of the missing tool.
        tool: &'static str,
        /// Remediation hint for the user.
        hint: String,
    },

    /// External transform tool ran but failed.
    #[error("external tool '{tool}' failed: {message}")]
    ToolFailed {
        /// Name of the failing tool.
        tool: &'static str,
        /// Captured stderr or exit status description.
        message: String,
    },

    /// No valid WAV files found.
    #[error("no valid WAV files found in the provided paths")]
    NoValidInputFiles,

    /// Unsupported input format.
    #[error("unsupported audio format for '{path}' (only WAV input is supported)")]
    UnsupportedFormat {
        /// Path to the rejected file.
        path: std::path::PathBuf,
    },

    /// Failed to read a WAV file.
    #[error("failed to read WAV file '{path}'")]
    WavRead {
        /// Path to the WAV file.
        path: std::path::PathBuf,
        /// Underlying decode error.
        #[source]
        source: hound::Error,
    },

    /// Failed to write a WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWrite {
        /// Path to the WAV file.
        path: std::path::PathBuf,
        /// Underlying encode error.
        #[source]
        source: hound::Error,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
