//! Enum-typed configuration values
//!
//! Particle and sound kinds are written in `config.yml` by their upper-case
//! names. [`resolve_kind`] turns a `<key>.type` entry into a variant, or
//! `None` when the sub-feature is switched off or the name is unknown.

use serde_yaml::Value;

use crate::diagnostics::Diagnostics;
use crate::document::{Section, render_inline};

/// An enum whose variants are addressed by a fixed upper-case name.
pub trait ConfigEnum: Sized + Copy + 'static {
    /// Human-readable name of the value domain, used in diagnostics.
    const DOMAIN: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The variant's configuration name.
    fn name(self) -> &'static str;

    /// Look up a variant by its exact name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

/// Declare a [`ConfigEnum`] with `Display` and name-based `Serialize`.
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $domain:literal {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)+
        }

        impl $crate::kind::ConfigEnum for $name {
            const DOMAIN: &'static str = $domain;
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::kind::ConfigEnum::name(*self))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::kind::ConfigEnum::name(*self))
            }
        }
    };
}
pub(crate) use config_enum;

mod particle;
mod sound;

pub use particle::Particle;
pub use sound::{Sound, SoundCategory};

/// Resolve the `<key>.type` entry of `section` against `E`.
///
/// - `key` missing or not a mapping: `None`, silently.
/// - `type` of `false`, `null` or empty (any case): `None`, silently.
/// - Unknown name, or a list or mapping: `None` and one severe diagnostic.
pub fn resolve_kind<E: ConfigEnum>(
    section: &Section<'_>,
    key: &str,
    diagnostics: &mut Diagnostics,
) -> Option<E> {
    if !section.is_section(key) {
        return None;
    }

    let type_key = format!("{}.type", key);
    let raw = match section.value(&type_key) {
        Some(value @ (Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_))) => {
            render_inline(value)
        }
        _ => section.get_string_or(&type_key, ""),
    };
    let name = raw.to_uppercase();
    if name == "FALSE" || name == "NULL" || name.is_empty() {
        return None;
    }

    let resolved = E::from_name(&name);
    if resolved.is_none() {
        let path = section.full_path(&type_key);
        diagnostics.severe(
            Some(&path),
            format!("{} is invalid value in config.yml ({} at {})", raw, E::DOMAIN, path),
        );
    }
    resolved
}
