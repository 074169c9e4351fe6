//! Preview command implementation

use std::path::Path;

use colored::Colorize;
use ebifly_config::{Effect, Location, ParticleEffect, Presenter, SoundEffect};

use crate::cli::Occasion;
use crate::error::{CliError, Result};

/// Presenter that prints each call instead of rendering it.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn spawn_particle(&self, world: &str, at: &Location, particle: &ParticleEffect) {
        println!("  {} {}", "particle".magenta(), format_particle(world, at, particle));
    }

    fn play_sound(&self, world: &str, at: &Location, sound: &SoundEffect) {
        println!("  {}    {}", "sound".blue(), format_sound(world, at, sound));
    }
}

/// Run the preview command
pub fn run_preview(
    dir: &Path,
    occasion: Occasion,
    world: &str,
    (x, y, z): (f64, f64, f64),
) -> Result<()> {
    if world.trim().is_empty() {
        return Err(CliError::user("--world must not be empty"));
    }

    let (_loader, config, diagnostics) = super::load(dir)?;
    if !diagnostics.is_empty() {
        eprintln!(
            "{}: config.yml has {} issue(s), run {} for details",
            "note".yellow(),
            diagnostics.len(),
            "ebifly check".cyan()
        );
    }

    let (name, effect) = match occasion {
        Occasion::Enable => ("enable", config.enable_effect().clone()),
        Occasion::Disable => ("disable", config.disable_effect().clone()),
        Occasion::Timeout => ("timeout", config.timeout_effect()),
        Occasion::Payment => ("payment", config.payment_effect().clone()),
    };

    if !effect.is_active() {
        println!("{} notice.{} has no particle or sound", "=".dimmed(), name);
        return Ok(());
    }

    println!(
        "{} notice.{} ({} call(s))",
        "Preview".bold(),
        name.cyan(),
        effect.len()
    );
    preview(&effect, &Location::new(world, x, y, z))
}

fn preview(effect: &Effect, at: &Location) -> Result<()> {
    effect.invoke(at, &ConsolePresenter)?;
    Ok(())
}

fn format_particle(world: &str, at: &Location, particle: &ParticleEffect) -> String {
    format!(
        "{} x{} at {} offset ({}, {}, {}) extra {}",
        particle.kind,
        particle.count,
        format_location(world, at),
        particle.offset_x,
        particle.offset_y,
        particle.offset_z,
        particle.extra
    )
}

fn format_sound(world: &str, at: &Location, sound: &SoundEffect) -> String {
    format!(
        "{} [{}] at {} volume {} pitch {}",
        sound.kind,
        sound.category,
        format_location(world, at),
        sound.volume,
        sound.pitch
    )
}

fn format_location(world: &str, at: &Location) -> String {
    format!("{} ({}, {}, {})", world, at.x, at.y, at.z)
}
