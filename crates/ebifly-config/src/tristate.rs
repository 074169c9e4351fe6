//! Three-valued flags for settings where "unset" differs from "no"

use serde::Serialize;

/// A parsed tri-state flag.
///
/// What `Alternate` means depends on the setting: for `restrict.water` it
/// is "temporary", for `economy.refund` it is "payer".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    /// The literal `true`
    Affirmative,
    /// The setting's alternate keyword
    Alternate,
    /// Anything else, including a missing value
    #[default]
    Unset,
}

/// Parse `raw` against `"true"` and `alternate`, ignoring ASCII case.
pub fn parse_tri_state(raw: Option<&str>, alternate: &str) -> TriState {
    let Some(raw) = raw else {
        return TriState::Unset;
    };

    if raw.eq_ignore_ascii_case("true") {
        TriState::Affirmative
    } else if raw.eq_ignore_ascii_case(alternate) {
        TriState::Alternate
    } else {
        TriState::Unset
    }
}
