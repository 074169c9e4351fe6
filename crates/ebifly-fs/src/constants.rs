//! Well-known files inside the plugin data directory.

/// Files the configuration layer reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    /// The live configuration document
    Config,
    /// Where a pre-versioning `config.yml` is moved before recreation
    LegacyBackup,
}

impl DataFile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config.yml",
            Self::LegacyBackup => "config_old.yml",
        }
    }
}

impl std::fmt::Display for DataFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(DataFile::Config.as_str(), "config.yml");
        assert_eq!(DataFile::LegacyBackup.to_string(), "config_old.yml");
    }
}
