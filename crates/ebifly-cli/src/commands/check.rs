//! Check command implementation

use std::path::Path;

use colored::Colorize;
use ebifly_config::{Diagnostic, Diagnostics, Severity};
use serde::Serialize;

use crate::error::Result;

/// Machine-readable result of a check.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    path: String,
    status: &'static str,
    diagnostics: &'a Diagnostics,
}

/// Run the check command
pub fn run_check(dir: &Path, json: bool) -> Result<()> {
    let (loader, _config, diagnostics) = super::load(dir)?;

    if json {
        let report = CheckReport {
            path: loader.config_path().to_string(),
            status: status(&diagnostics),
            diagnostics: &diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Checking {}", loader.config_path().to_string().cyan());
    println!();

    for diagnostic in &diagnostics {
        println!("  {}", render(diagnostic));
    }
    if !diagnostics.is_empty() {
        println!();
    }

    println!("{}", summary(&diagnostics));
    Ok(())
}

fn status(diagnostics: &Diagnostics) -> &'static str {
    match diagnostics.worst() {
        None => "ok",
        Some(Severity::Warning) => "warnings",
        Some(Severity::Severe) => "errors",
    }
}

fn render(diagnostic: &Diagnostic) -> String {
    let marker = match diagnostic.severity {
        Severity::Warning => "!".yellow().bold(),
        Severity::Severe => "x".red().bold(),
    };
    match &diagnostic.key {
        Some(key) => format!("{} [{}] {}", marker, key.dimmed(), diagnostic.message),
        None => format!("{} {}", marker, diagnostic.message),
    }
}

fn summary(diagnostics: &Diagnostics) -> String {
    if diagnostics.is_empty() {
        return format!("{} config.yml is valid", "OK".green().bold());
    }

    let severe = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Severe)
        .count();
    let warnings = diagnostics.len() - severe;
    let line = format!(
        "{} problem(s): {} severe, {} warning(s)",
        diagnostics.len(),
        severe,
        warnings
    );
    if severe > 0 {
        line.red().to_string()
    } else {
        line.yellow().to_string()
    }
}
