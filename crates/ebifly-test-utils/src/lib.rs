//! Shared test utilities for the EbiFly workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`plugin_dir`]: [`TestPluginDir`], a temporary plugin data directory
//! - [`presenter`]: [`RecordingPresenter`], a `Presenter` that records calls

pub mod plugin_dir;
pub mod presenter;

pub use plugin_dir::TestPluginDir;
pub use presenter::{PresentedCall, RecordingPresenter};
