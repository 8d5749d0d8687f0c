//! The light/dark appearance preference.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Error returned when a string is not one of the two preference names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme preference: {0:?} (expected \"light\" or \"dark\")")]
pub struct ParsePreferenceError(pub String);

/// Appearance preference selected by the user.
///
/// The string form (`"light"` / `"dark"`) is used both as the persisted value
/// and as the marker reflected onto the visual root.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// The other variant.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Marker carried by the visual root while this preference is active.
    pub fn marker(self) -> &'static str {
        self.as_str()
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn is_light(self) -> bool {
        matches!(self, ThemePreference::Light)
    }
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsing is exact: persisted values other than `light` and `dark` are invalid.
impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggled_flips_every_variant() {
        for pref in all::<ThemePreference>() {
            assert_ne!(pref.toggled(), pref);
            assert_eq!(pref.toggled().toggled(), pref);
        }
    }

    #[test]
    fn test_parse_exact_names_only() {
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert!("blue".parse::<ThemePreference>().is_err());
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_display_matches_marker() {
        for pref in all::<ThemePreference>() {
            assert_eq!(pref.to_string(), pref.marker());
            assert_eq!(pref.to_string().parse(), Ok(pref));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let yaml = serde_yaml::to_string(&ThemePreference::Light).unwrap();
        assert_eq!(yaml.trim(), "light");
        let pref: ThemePreference = serde_yaml::from_str("dark").unwrap();
        assert_eq!(pref, ThemePreference::Dark);
    }
}
