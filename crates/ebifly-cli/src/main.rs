//! EbiFly configuration CLI
//!
//! Checks, shows and previews the plugin's `config.yml` outside the server.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow(), e);
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.dir, cmd),
        None => {
            println!("{} configuration tool", "ebifly".green().bold());
            println!();
            println!("Run {} for available commands.", "ebifly --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(dir: &std::path::Path, cmd: Commands) -> Result<()> {
    tracing::debug!(dir = %dir.display(), command = ?cmd, "Running command");
    match cmd {
        Commands::Init { force } => commands::run_init(dir, force),
        Commands::Check { json } => commands::run_check(dir, json),
        Commands::Show { json } => commands::run_show(dir, json),
        Commands::Preview {
            occasion,
            world,
            x,
            y,
            z,
        } => commands::run_preview(dir, occasion, &world, (x, y, z)),
    }
}
