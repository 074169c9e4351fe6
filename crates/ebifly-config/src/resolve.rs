//! Section lookup with fallback to the default schema

use crate::diagnostics::Diagnostics;
use crate::document::Section;
use crate::{Error, Result};

/// Return the mapping at `key` under `parent`.
///
/// A missing or non-mapping value is replaced by the default schema's
/// mapping and reported as severe. Only a default schema without that
/// mapping is an error.
pub fn resolve_section<'a>(
    parent: &Section<'a>,
    key: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Section<'a>> {
    let path = parent.full_path(key);

    if let Some(section) = parent.child(key) {
        return Ok(section);
    }

    if parent.contains(key) {
        diagnostics.severe(
            Some(&path),
            format!("{} is not valid value in config.yml", path),
        );
    } else {
        diagnostics.severe(Some(&path), format!("{} is not found in config.yml", path));
    }
    diagnostics.severe(Some(&path), "Using default value.");

    parent
        .default_child(key)
        .ok_or_else(|| Error::missing_default(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::document::ConfigDocument;
    use pretty_assertions::assert_eq;

    const DEFAULTS: &str = "economy:\n  price: 10.0\n  server: server\n";

    #[test]
    fn test_present_section_is_returned() {
        let doc = ConfigDocument::from_yaml("economy:\n  price: 3.5\n", DEFAULTS).unwrap();
        let mut diagnostics = Diagnostics::new();

        let section = resolve_section(&doc.root(), "economy", &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(section.get_double("price"), 3.5);
        // Missing keys still read through to the schema
        assert_eq!(section.get_string("server").as_deref(), Some("server"));
    }

    #[test]
    fn test_absent_section_uses_defaults() {
        let doc = ConfigDocument::from_yaml("version: 2\n", DEFAULTS).unwrap();
        let mut diagnostics = Diagnostics::new();

        let section = resolve_section(&doc.root(), "economy", &mut diagnostics).unwrap();

        assert_eq!(section.get_double("price"), 10.0);
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["economy is not found in config.yml", "Using default value."]
        );
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Severe));
    }

    #[test]
    fn test_scalar_section_uses_defaults() {
        let doc = ConfigDocument::from_yaml("economy: 5\n", DEFAULTS).unwrap();
        let mut diagnostics = Diagnostics::new();

        let section = resolve_section(&doc.root(), "economy", &mut diagnostics).unwrap();

        assert_eq!(section.get_double("price"), 10.0);
        assert_eq!(section.path(), "economy");
        assert_eq!(
            diagnostics.iter().next().unwrap().message,
            "economy is not valid value in config.yml"
        );
    }

    #[test]
    fn test_nested_key_uses_full_path() {
        let doc = ConfigDocument::from_yaml(
            "notice:\n  enable: []\n",
            "notice:\n  enable:\n    sound:\n      type: UI_TOAST_IN\n",
        )
        .unwrap();
        let mut diagnostics = Diagnostics::new();

        let notice = resolve_section(&doc.root(), "notice", &mut diagnostics).unwrap();
        assert!(diagnostics.is_empty());
        let enable = resolve_section(&notice, "enable", &mut diagnostics).unwrap();

        assert_eq!(enable.path(), "notice.enable");
        assert_eq!(diagnostics.for_key("notice.enable").count(), 2);
        assert_eq!(enable.get_string("sound.type").as_deref(), Some("UI_TOAST_IN"));
    }

    #[test]
    fn test_missing_default_is_fatal() {
        let doc = ConfigDocument::from_yaml("version: 2\n", "version: 2\n").unwrap();
        let mut diagnostics = Diagnostics::new();

        let err = resolve_section(&doc.root(), "economy", &mut diagnostics).unwrap_err();

        assert!(matches!(err, Error::MissingDefault { ref key } if key == "economy"));
        assert!(err.is_broken_defaults());
    }
}
