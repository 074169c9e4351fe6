use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber writing to stderr.
///
/// Uses `RUST_LOG` when set. Otherwise logging stays off unless `verbose`
/// is given, which enables `debug`. Diagnostics are printed by the commands
/// themselves, so the subscriber is only for troubleshooting.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter_layer = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::try_new("debug")?,
        Err(_) => return Ok(()),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Verbose mode enabled");
    Ok(())
}
