//! Init command implementation

use std::path::Path;

use colored::Colorize;
use ebifly_config::ConfigLoader;

use crate::error::Result;

/// Run the init command
pub fn run_init(dir: &Path, force: bool) -> Result<()> {
    let loader = ConfigLoader::new(dir);
    let had_config = loader.config_path().is_file();

    if !loader.write_defaults(force)? {
        println!(
            "{} {} already exists (use {} to replace it)",
            "=".dimmed(),
            loader.config_path(),
            "--force".cyan()
        );
        return Ok(());
    }

    if had_config {
        println!(
            "{} Moved the previous file to {}",
            "+".green(),
            loader.backup_path()
        );
    }
    println!(
        "{} Wrote default configuration to {}",
        "OK".green().bold(),
        loader.config_path()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebifly_config::DEFAULT_CONFIG;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();
        run_init(temp.path(), false).unwrap();

        let written = fs::read_to_string(temp.path().join("config.yml")).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yml"), "version: 2\n").unwrap();

        run_init(temp.path(), false).unwrap();

        let kept = fs::read_to_string(temp.path().join("config.yml")).unwrap();
        assert_eq!(kept, "version: 2\n");
        assert!(!temp.path().join("config_old.yml").exists());
    }

    #[test]
    fn test_init_force_backs_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yml"), "version: 2\n").unwrap();

        run_init(temp.path(), true).unwrap();

        let backup = fs::read_to_string(temp.path().join("config_old.yml")).unwrap();
        assert_eq!(backup, "version: 2\n");
        let written = fs::read_to_string(temp.path().join("config.yml")).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
    }
}
