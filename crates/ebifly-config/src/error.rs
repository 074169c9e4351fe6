//! Error types for ebifly-config

/// Result type for ebifly-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or invoking effects.
///
/// Malformed user input never ends up here; it degrades to defaults and a
/// [`Diagnostic`](crate::diagnostics::Diagnostic). These variants are the
/// non-recoverable cases.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from ebifly-fs
    #[error(transparent)]
    Fs(#[from] ebifly_fs::Error),

    /// The bundled default schema has no value for a key the assembler needs
    #[error(
        "Default is null for {key}, broken plugin!! Re-download the jar and check its hash"
    )]
    MissingDefault { key: String },

    /// The bundled default schema could not be used at all
    #[error("Invalid default config: {message}")]
    InvalidDefaults { message: String },

    /// A YAML document could not be parsed into a mapping
    #[error("Failed to parse YAML: {message}")]
    Parse { message: String },

    /// An effect was invoked at a location that has no world
    #[error("Location don't have world")]
    MissingWorld,
}

impl Error {
    pub fn missing_default(key: impl Into<String>) -> Self {
        Self::MissingDefault { key: key.into() }
    }

    /// True for errors that mean the bundled defaults are corrupt.
    pub fn is_broken_defaults(&self) -> bool {
        matches!(self, Self::MissingDefault { .. } | Self::InvalidDefaults { .. })
    }
}
