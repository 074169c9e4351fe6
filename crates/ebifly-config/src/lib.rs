//! Configuration validation and notice effect composition for EbiFly.
//!
//! Loads `config.yml` from a plugin data directory, backs up files that
//! predate versioning, and assembles a [`MainConfig`] in which every
//! malformed value has been replaced by its default or disabled. Problems
//! are reported as [`Diagnostics`] instead of errors; only a broken bundled
//! schema or failed file I/O aborts a load.
//!
//! ```no_run
//! use ebifly_config::{ConfigLoader, Location, MainConfig};
//! # fn demo(presenter: &dyn ebifly_config::Presenter) -> ebifly_config::Result<()> {
//! let (config, diagnostics) = MainConfig::load(&ConfigLoader::new("plugins/EbiFly"))?;
//! for diagnostic in &diagnostics {
//!     eprintln!("{}: {}", diagnostic.severity, diagnostic.message);
//! }
//! config
//!     .enable_effect()
//!     .invoke(&Location::new("world", 0.0, 64.0, 0.0), presenter)?;
//! # Ok(())
//! # }
//! ```

pub mod diagnostics;
pub mod document;
pub mod economy;
pub mod effect;
pub mod error;
pub mod kind;
pub mod loader;
pub mod main_config;
pub mod notice;
pub mod resolve;
pub mod tristate;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use document::{ConfigDocument, Section};
pub use economy::{EconomyConfig, RefundTarget};
pub use effect::{Effect, Location, ParticleEffect, Presenter, SoundEffect};
pub use error::{Error, Result};
pub use kind::{ConfigEnum, Particle, Sound, SoundCategory, resolve_kind};
pub use loader::{ConfigLoader, DEFAULT_CONFIG};
pub use main_config::MainConfig;
pub use notice::NoticeConfig;
pub use resolve::resolve_section;
pub use tristate::{TriState, parse_tri_state};
