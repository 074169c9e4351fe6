//! Filesystem helpers for the EbiFly plugin data directory
//!
//! Provides normalized paths, locked atomic writes and the backup rename
//! used when an incompatible `config.yml` is replaced.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::DataFile;
pub use error::{Error, Result};
pub use path::NormalizedPath;
