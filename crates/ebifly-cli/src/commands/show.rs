//! Show command implementation

use std::path::Path;

use colored::Colorize;
use ebifly_config::main_config::RESTRICT_TEMPORARY;
use ebifly_config::{Effect, MainConfig, RefundTarget, TriState};

use crate::error::Result;

/// Run the show command
pub fn run_show(dir: &Path, json: bool) -> Result<()> {
    let (loader, config, diagnostics) = super::load(dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "EbiFly Configuration".bold());
    println!();
    println!("{}:   {}", "Config".dimmed(), loader.config_path());
    if !diagnostics.is_empty() {
        println!(
            "{}:   {} (run {} for details)",
            "Issues".dimmed(),
            diagnostics.len().to_string().yellow(),
            "ebifly check".cyan()
        );
    }
    println!();

    for line in render(&config) {
        println!("{}", line);
    }
    Ok(())
}

fn render(config: &MainConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("{}:", "General".bold()));
    lines.push(format!("  version check:  {}", config.version_check));
    lines.push(format!("  fall safety:    {}", config.safety_fall));
    lines.push(format!("  lava safety:    {}s", config.safety_lava));
    lines.push(format!(
        "  locale:         {} (client locale {})",
        config.locale_default,
        if config.locale_enable { "on" } else { "off" }
    ));
    lines.push(String::new());

    lines.push(format!("{}:", "Restrictions".bold()));
    lines.push(format!("  respawn:        {}", config.restrict_respawn));
    lines.push(format!("  world change:   {}", config.restrict_world));
    lines.push(format!("  gamemode:       {}", config.restrict_gamemode));
    lines.push(format!(
        "  levitation:     {}",
        restriction(config.restrict_levitation)
    ));
    lines.push(format!("  water:          {}", restriction(config.restrict_water)));
    lines.push(String::new());

    lines.push(format!("{}:", "Economy".bold()));
    match &config.economy {
        None => lines.push(format!("  {}", "disabled".dimmed())),
        Some(economy) => {
            lines.push(format!("  price:          {}", economy.price));
            lines.push(format!(
                "  server account: {}",
                economy.server.as_deref().unwrap_or("none")
            ));
            let refund = match economy.refund_target() {
                Some(RefundTarget::Flyer) => "flyer",
                Some(RefundTarget::Payer) => "payer",
                None => "none",
            };
            lines.push(format!("  refund:         {}", refund));
        }
    }
    lines.push(String::new());

    lines.push(format!("{}:", "Notices".bold()));
    lines.push(format!("  enable:         {}", describe(config.enable_effect())));
    lines.push(format!("  disable:        {}", describe(config.disable_effect())));
    lines.push(format!(
        "  timeout:        {} ({}s before, actionbar {})",
        describe(&config.timeout_effect()),
        config.notice_timeout_second,
        config.notice_timeout_actionbar
    ));
    lines.push(format!(
        "  payment:        {} (actionbar {})",
        describe(config.payment_effect()),
        config.notice_payment_actionbar
    ));

    lines
}

fn restriction(value: TriState) -> &'static str {
    match value {
        TriState::Affirmative => "stop flight",
        TriState::Alternate => RESTRICT_TEMPORARY,
        TriState::Unset => "ignore",
    }
}

/// One-line summary of what an effect does.
pub(crate) fn describe(effect: &Effect) -> String {
    match effect {
        Effect::Disabled => "disabled".to_string(),
        Effect::Particle(particle) => format!("{} x{}", particle.kind, particle.count),
        Effect::Sound(sound) => format!("{} (pitch {})", sound.kind, sound.pitch),
        Effect::Sequence(first, second) => {
            format!("{} + {}", describe(first), describe(second))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebifly_config::{ConfigDocument, DEFAULT_CONFIG, Diagnostics};

    fn default_config() -> MainConfig {
        let document = ConfigDocument::from_yaml(DEFAULT_CONFIG, DEFAULT_CONFIG).unwrap();
        MainConfig::from_document(&document, &mut Diagnostics::new()).unwrap()
    }

    #[test]
    fn test_describe_default_effects() {
        let config = default_config();

        assert_eq!(
            describe(config.enable_effect()),
            "CLOUD x30 + ENTITY_ENDER_DRAGON_FLAP (pitch 1)"
        );
        assert_eq!(
            describe(&config.timeout_effect()),
            "SMOKE_NORMAL x30 + BLOCK_NOTE_BLOCK_PLING (pitch 2)"
        );
        assert_eq!(describe(&Effect::Disabled), "disabled");
    }

    #[test]
    fn test_render_default_sections() {
        colored::control::set_override(false);
        let lines = render(&default_config());

        assert!(lines.contains(&"  levitation:     temporary".to_string()));
        assert!(lines.contains(&"  water:          ignore".to_string()));
        assert!(lines.contains(&"  disabled".to_string()));
        assert!(lines.contains(&"Notices:".to_string()));
    }
}
