//! Settings value types: display theme and simulated OS permission flags.

use serde::{Deserialize, Serialize};

/// Display theme of the shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable string form used as the persisted value ("light" / "dark").
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses the persisted string form. Returns `None` for anything else,
    /// so callers can fall back to the default on corrupt data.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simulated OS permission toggles. Each flag loads and defaults
/// independently of the others.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PermissionFlags {
    pub notifications: bool,
    pub microphone: bool,
    pub camera: bool,
    pub location: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn test_theme_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_permission_flags_tolerate_missing_fields() {
        let flags: PermissionFlags = serde_json::from_str(r#"{"camera":true}"#).unwrap();
        assert!(flags.camera);
        assert!(!flags.notifications);
        assert!(!flags.microphone);
        assert!(!flags.location);
    }
}
