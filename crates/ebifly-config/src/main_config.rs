//! The validated configuration snapshot
//!
//! [`MainConfig`] is assembled once from a [`ConfigDocument`] and never
//! changes afterwards. Invalid values are replaced or their feature is
//! switched off, with a diagnostic for each replacement.

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::document::{ConfigDocument, Section};
use crate::economy::EconomyConfig;
use crate::effect::Effect;
use crate::loader::ConfigLoader;
use crate::notice::NoticeConfig;
use crate::resolve::resolve_section;
use crate::tristate::{TriState, parse_tri_state};
use crate::{Error, Result};

/// Keyword that makes a restriction suspend flight instead of ending it.
pub const RESTRICT_TEMPORARY: &str = "temporary";

/// Upper bound for `notice.timeout.second`.
pub const MAX_TIMEOUT_SECOND: i64 = 60;

/// Fully validated plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainConfig {
    pub version_check: bool,

    pub safety_fall: bool,
    pub safety_lava: i64,

    pub locale_enable: bool,
    pub locale_default: String,

    pub restrict_respawn: bool,
    pub restrict_world: bool,
    pub restrict_gamemode: bool,
    pub restrict_levitation: TriState,
    pub restrict_water: TriState,

    /// `None` when economy is disabled or its price is not positive
    pub economy: Option<EconomyConfig>,

    pub notice_enable: NoticeConfig,
    pub notice_disable: NoticeConfig,
    pub notice_timeout: NoticeConfig,
    pub notice_payment: NoticeConfig,

    /// Always within `0..=60`
    pub notice_timeout_second: u32,
    pub notice_timeout_actionbar: bool,
    pub notice_payment_actionbar: bool,
}

impl MainConfig {
    /// Load `config.yml` through `loader` and assemble it.
    pub fn load(loader: &ConfigLoader) -> Result<(Self, Diagnostics)> {
        let mut diagnostics = Diagnostics::new();
        let document = loader.load(&mut diagnostics)?;
        let config = Self::from_document(&document, &mut diagnostics)?;
        tracing::debug!(
            diagnostics = diagnostics.len(),
            economy = config.economy.is_some(),
            "Loaded config.yml"
        );
        Ok((config, diagnostics))
    }

    /// Assemble the snapshot from an already loaded document.
    pub fn from_document(
        document: &ConfigDocument,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self> {
        let root = document.root();

        let locale_default = root
            .get_string("locale.default")
            .ok_or_else(|| Error::missing_default("locale.default"))?;

        let economy = if root.get_bool("economy.enable") {
            let section = resolve_section(&root, "economy", diagnostics)?;
            let economy = EconomyConfig::from_section(&section);
            if economy.is_none() {
                diagnostics.warning(
                    Some("economy.price"),
                    "economy.price is 0 or less in config.yml",
                );
                diagnostics.warning(Some("economy.price"), "Disabled economy feature.");
            }
            economy
        } else {
            None
        };

        Ok(Self {
            version_check: root.get_bool("versionCheck"),
            safety_fall: root.get_bool("safety.fall"),
            safety_lava: root.get_int("safety.lava"),
            locale_enable: root.get_bool("locale.enable"),
            locale_default,
            restrict_respawn: root.get_bool("restrict.respawn"),
            restrict_world: root.get_bool("restrict.world"),
            restrict_gamemode: root.get_bool("restrict.gamemode"),
            restrict_levitation: restriction(&root, "restrict.levitation"),
            restrict_water: restriction(&root, "restrict.water"),
            economy,
            notice_enable: notice(&root, "notice.enable", diagnostics)?,
            notice_disable: notice(&root, "notice.disable", diagnostics)?,
            notice_timeout: notice(&root, "notice.timeout", diagnostics)?,
            notice_payment: notice(&root, "notice.payment", diagnostics)?,
            notice_timeout_second: timeout_second(&root, diagnostics),
            notice_timeout_actionbar: root.get_bool_or("notice.timeout.actionbar", false),
            notice_payment_actionbar: root.get_bool_or("notice.payment.actionbar", false),
        })
    }

    pub fn enable_effect(&self) -> &Effect {
        self.notice_enable.merge()
    }

    pub fn disable_effect(&self) -> &Effect {
        self.notice_disable.merge()
    }

    /// The timeout notice, borrowing any unset channel from the disable notice.
    pub fn timeout_effect(&self) -> Effect {
        self.notice_timeout.merge_with(&self.notice_disable)
    }

    pub fn payment_effect(&self) -> &Effect {
        self.notice_payment.merge()
    }
}

fn restriction(root: &Section<'_>, key: &str) -> TriState {
    parse_tri_state(root.get_string(key).as_deref(), RESTRICT_TEMPORARY)
}

fn notice(root: &Section<'_>, key: &str, diagnostics: &mut Diagnostics) -> Result<NoticeConfig> {
    let section = resolve_section(root, key, diagnostics)?;
    Ok(NoticeConfig::from_section(&section, diagnostics))
}

fn timeout_second(root: &Section<'_>, diagnostics: &mut Diagnostics) -> u32 {
    const KEY: &str = "notice.timeout.second";
    let second = root.get_int(KEY);

    if second > MAX_TIMEOUT_SECOND {
        diagnostics.severe(
            Some(KEY),
            format!("{} is greater than {} in config.yml", KEY, MAX_TIMEOUT_SECOND),
        );
        diagnostics.severe(Some(KEY), format!("Using {}", MAX_TIMEOUT_SECOND));
    } else if second < 0 {
        diagnostics.severe(Some(KEY), format!("{} is less than 0 in config.yml", KEY));
        diagnostics.severe(Some(KEY), "Using 0");
    }

    second.clamp(0, MAX_TIMEOUT_SECOND) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DEFAULT_CONFIG;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn assemble(source: &str) -> (MainConfig, Diagnostics) {
        let document = ConfigDocument::from_yaml(source, DEFAULT_CONFIG).unwrap();
        let mut diagnostics = Diagnostics::new();
        let config = MainConfig::from_document(&document, &mut diagnostics).unwrap();
        (config, diagnostics)
    }

    #[test]
    fn test_defaults_only_is_clean_except_missing_notices() {
        let (config, diagnostics) = assemble("version: 2\n");

        assert!(config.version_check);
        assert!(config.safety_fall);
        assert_eq!(config.locale_default, "en_us");
        assert_eq!(config.restrict_levitation, TriState::Alternate);
        assert_eq!(config.restrict_water, TriState::Unset);
        assert_eq!(config.economy, None);
        assert_eq!(config.notice_timeout_second, 10);
        // The four notice sections are missing from the document itself
        assert_eq!(diagnostics.len(), 8);
        assert!(config.notice_enable.particle.is_active());
    }

    #[test]
    fn test_bundled_schema_assembles_cleanly() {
        let (config, diagnostics) = assemble(DEFAULT_CONFIG);

        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        assert!(config.notice_timeout_actionbar);
        assert!(!config.notice_payment_actionbar);
        assert_eq!(config.notice_timeout.particle, Effect::Disabled);
        assert!(config.notice_timeout.sound.is_active());
    }

    #[rstest]
    #[case(90, 60, 2)]
    #[case(61, 60, 2)]
    #[case(60, 60, 0)]
    #[case(45, 45, 0)]
    #[case(0, 0, 0)]
    #[case(-5, 0, 2)]
    fn test_timeout_second_clamped(
        #[case] input: i64,
        #[case] stored: u32,
        #[case] reported: usize,
    ) {
        let source = DEFAULT_CONFIG.replace("second: 10", &format!("second: {}", input));
        let (config, diagnostics) = assemble(&source);

        assert_eq!(config.notice_timeout_second, stored);
        assert_eq!(diagnostics.for_key("notice.timeout.second").count(), reported);
    }

    #[rstest]
    #[case("0")]
    #[case("-1.5")]
    fn test_economy_disabled_by_price(#[case] price: &str) {
        let source = DEFAULT_CONFIG
            .replace("enable: false\n  # Price", "enable: true\n  # Price")
            .replace("price: 10.0", &format!("price: {}", price));
        let (config, diagnostics) = assemble(&source);

        assert_eq!(config.economy, None);
        let messages: Vec<_> = diagnostics
            .for_key("economy.price")
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["economy.price is 0 or less in config.yml", "Disabled economy feature."]
        );
    }

    #[test]
    fn test_economy_enabled() {
        let source = DEFAULT_CONFIG.replace("enable: false\n  # Price", "enable: true\n  # Price");
        let (config, diagnostics) = assemble(&source);

        let economy = config.economy.unwrap();
        assert_eq!(economy.price, 10.0);
        assert_eq!(economy.server, None);
        assert_eq!(economy.refund, TriState::Alternate);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_economy_section_not_mapping_uses_defaults() {
        let (config, diagnostics) = assemble("version: 2\neconomy: true\n");

        // `economy.enable` cannot be read through a scalar, so the schema's false wins
        assert_eq!(config.economy, None);
        assert_eq!(diagnostics.for_key("economy").count(), 0);
    }

    #[test]
    fn test_restrictions_accept_booleans_and_keywords() {
        let source = DEFAULT_CONFIG
            .replace("levitation: temporary", "levitation: true")
            .replace("water: false", "water: TEMPORARY");
        let (config, _) = assemble(&source);

        assert_eq!(config.restrict_levitation, TriState::Affirmative);
        assert_eq!(config.restrict_water, TriState::Alternate);
    }

    #[test]
    fn test_timeout_effect_borrows_disable_particle() {
        let (config, _) = assemble(DEFAULT_CONFIG);

        let effect = config.timeout_effect();

        assert_eq!(
            effect,
            config
                .notice_disable
                .particle
                .clone()
                .then(config.notice_timeout.sound.clone())
        );
    }

    #[test]
    fn test_missing_locale_default_is_fatal() {
        let document = ConfigDocument::from_yaml("version: 2\n", "version: 2\n").unwrap();
        let mut diagnostics = Diagnostics::new();

        let err = MainConfig::from_document(&document, &mut diagnostics).unwrap_err();
        assert!(matches!(err, Error::MissingDefault { ref key } if key == "locale.default"));
    }

    #[test]
    fn test_serializes_to_json() {
        let (config, _) = assemble(DEFAULT_CONFIG);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["noticeTimeoutSecond"], 10);
        assert_eq!(json["restrictLevitation"], "alternate");
        assert_eq!(json["noticeEnable"]["particle"]["particle"]["kind"], "CLOUD");
    }
}
