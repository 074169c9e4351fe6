//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// EbiFly - check and preview the plugin's config.yml
#[derive(Parser, Debug)]
#[command(name = "ebifly")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Plugin data directory containing config.yml
    #[arg(short, long, global = true, env = "EBIFLY_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Write the default config.yml
    ///
    /// An existing file is kept unless --force is given, in which case it
    /// is moved to config_old.yml first.
    Init {
        /// Replace an existing config.yml
        #[arg(long)]
        force: bool,
    },

    /// Load config.yml and report every problem found
    ///
    /// Backs up and recreates a config.yml that predates versioning.
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the validated configuration
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print what a notification effect would do at a location
    ///
    /// Examples:
    ///   ebifly preview enable
    ///   ebifly preview timeout --world world_nether --y 80
    Preview {
        /// Which notification to preview
        #[arg(value_enum)]
        occasion: Occasion,

        /// World name of the location
        #[arg(long, default_value = "world")]
        world: String,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, default_value_t = 64.0, allow_negative_numbers = true)]
        y: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        z: f64,
    },
}

/// Notification occasions.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occasion {
    /// Flight enabled
    Enable,
    /// Flight disabled
    Disable,
    /// Flight about to run out
    Timeout,
    /// Flight paid for
    Payment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_preview() {
        let cli = Cli::try_parse_from([
            "ebifly", "--dir", "plugins/EbiFly", "preview", "timeout", "--x", "-4.5",
        ])
        .unwrap();

        assert_eq!(cli.dir, PathBuf::from("plugins/EbiFly"));
        match cli.command {
            Some(Commands::Preview { occasion, x, y, .. }) => {
                assert_eq!(occasion, Occasion::Timeout);
                assert_eq!(x, -4.5);
                assert_eq!(y, 64.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_json() {
        let cli = Cli::try_parse_from(["ebifly", "check", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Check { json: true }));
    }

    #[test]
    fn test_rejects_unknown_occasion() {
        assert!(Cli::try_parse_from(["ebifly", "preview", "landing"]).is_err());
    }
}
