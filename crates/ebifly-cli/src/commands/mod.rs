//! Command implementations for ebifly-cli

pub mod check;
pub mod init;
pub mod preview;
pub mod show;

pub use check::run_check;
pub use init::run_init;
pub use preview::run_preview;
pub use show::run_show;

use std::path::Path;

use ebifly_config::{ConfigLoader, Diagnostics, MainConfig};

use crate::error::Result;

/// Load and assemble the configuration in `dir`.
pub(crate) fn load(dir: &Path) -> Result<(ConfigLoader, MainConfig, Diagnostics)> {
    let loader = ConfigLoader::new(dir);
    let (config, diagnostics) = MainConfig::load(&loader)?;
    Ok((loader, config, diagnostics))
}
