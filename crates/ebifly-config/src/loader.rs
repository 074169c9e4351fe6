//! Loading `config.yml` with legacy detection and backup
//!
//! The loader owns the plugin data directory. It creates `config.yml` from
//! the bundled schema when missing, moves a pre-versioning file aside to
//! `config_old.yml` and recreates it, and warns when the file's `version`
//! differs from the schema's. Versioned files are never migrated.

use ebifly_fs::{DataFile, NormalizedPath, io};
use serde_yaml::{Mapping, Value};

use crate::diagnostics::Diagnostics;
use crate::document::{ConfigDocument, parse_mapping};
use crate::{Error, Result};

/// The schema bundled with the plugin.
pub const DEFAULT_CONFIG: &str = include_str!("../resources/config.yml");

/// Loads the configuration document from a plugin data directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    data_dir: NormalizedPath,
    default_schema: String,
}

impl ConfigLoader {
    /// Create a loader using the bundled default schema.
    pub fn new(data_dir: impl Into<NormalizedPath>) -> Self {
        Self::with_defaults(data_dir, DEFAULT_CONFIG)
    }

    /// Create a loader with a custom default schema.
    pub fn with_defaults(
        data_dir: impl Into<NormalizedPath>,
        default_schema: impl Into<String>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            default_schema: default_schema.into(),
        }
    }

    pub fn data_dir(&self) -> &NormalizedPath {
        &self.data_dir
    }

    pub fn config_path(&self) -> NormalizedPath {
        self.data_dir.data_file(DataFile::Config)
    }

    pub fn backup_path(&self) -> NormalizedPath {
        self.data_dir.data_file(DataFile::LegacyBackup)
    }

    pub fn default_schema(&self) -> &str {
        &self.default_schema
    }

    /// The `version` declared by the default schema.
    pub fn default_version(&self) -> Result<i64> {
        required_version(&self.defaults()?)
    }

    /// Load `config.yml`, replacing it if it predates versioning.
    pub fn load(&self, diagnostics: &mut Diagnostics) -> Result<ConfigDocument> {
        let defaults = self.defaults()?;
        let default_version = required_version(&defaults)?;

        let values = self.read_or_create(diagnostics)?;

        if !has_key(&values, "version") {
            diagnostics.warning(
                Some("version"),
                "IMPORTANT NOTICE: config.yml older than 2.0 is not compatible with this version!!",
            );
            diagnostics.warning(
                Some("version"),
                format!(
                    "Detected older version {}, this file is backed up to {}",
                    DataFile::Config,
                    DataFile::LegacyBackup
                ),
            );
            diagnostics.warning(Some("version"), format!("Please check new {}", DataFile::Config));

            io::move_file(&self.config_path(), &self.backup_path())?;
            let values = self.read_or_create(diagnostics)?;
            return Ok(ConfigDocument::new(values, defaults));
        }

        let document = ConfigDocument::new(values, defaults);
        match document.version() {
            Some(version) if version == default_version => {
                tracing::debug!(version, "config.yml version matches");
            }
            found => {
                let found = found.map_or_else(|| "unknown".to_string(), |v| v.to_string());
                diagnostics.warning(
                    Some("version"),
                    format!(
                        "Detected config.yml version {} but this plugin expects version {}!!",
                        found, default_version
                    ),
                );
                diagnostics.warning(Some("version"), "Incompatible changes in config.yml");
                diagnostics.warning(
                    Some("version"),
                    "Please check config.yml. If you need downgrade, use backup.",
                );
            }
        }

        Ok(document)
    }

    /// Write the default schema to `config.yml`.
    ///
    /// An existing file is left alone unless `force` is set, in which case
    /// it is first moved to the backup location. Returns whether a file was
    /// written.
    pub fn write_defaults(&self, force: bool) -> Result<bool> {
        let path = self.config_path();
        if path.is_file() {
            if !force {
                return Ok(false);
            }
            io::move_file(&path, &self.backup_path())?;
        }

        io::write_text(&path, &self.default_schema)?;
        Ok(true)
    }

    fn defaults(&self) -> Result<Mapping> {
        parse_mapping(&self.default_schema).map_err(|e| Error::InvalidDefaults {
            message: e.to_string(),
        })
    }

    // An unparseable file reads as empty, which the caller then treats as
    // a legacy file and moves aside. Invalid UTF-8 is decoded lossily.
    fn read_or_create(&self, diagnostics: &mut Diagnostics) -> Result<Mapping> {
        let path = self.config_path();
        if !path.is_file() {
            tracing::debug!(path = %path, "Creating config.yml from defaults");
            io::write_text(&path, &self.default_schema)?;
        }

        let source = match String::from_utf8(io::read_bytes(&path)?) {
            Ok(source) => source,
            Err(e) => {
                diagnostics.severe(
                    None,
                    format!(
                        "{} is not valid UTF-8, unreadable characters were replaced",
                        path
                    ),
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        match parse_mapping(&source) {
            Ok(values) => Ok(values),
            Err(e) => {
                diagnostics.severe(None, format!("Cannot load {}: {}", path, e));
                Ok(Mapping::new())
            }
        }
    }
}

fn has_key(values: &Mapping, key: &str) -> bool {
    values.get(key).is_some_and(|v| !v.is_null())
}

fn required_version(defaults: &Mapping) -> Result<i64> {
    defaults
        .get("version")
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::InvalidDefaults {
            message: "default config has no integer version".to_string(),
        })
}
