//! Error types for ebifly-cli

pub type Result<T> = std::result::Result<T, CliError>;

/// Anything that makes an `ebifly` command exit non-zero.
///
/// Configuration problems are not errors here; they are printed as
/// diagnostics and the command still succeeds.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Broken bundled schema, failed migration I/O or a missing world
    #[error(transparent)]
    Config(#[from] ebifly_config::Error),

    /// Failed to render `--json` output
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invalid command-line input
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
