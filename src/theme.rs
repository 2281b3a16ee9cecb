//! Theme preference
//!
//! Dark/light is a persisted user choice. When nothing has been persisted
//! yet we fall back to the terminal's ambient preference, approximated from
//! the COLORFGBG environment variable that several terminals export.

/// Persisted dark/light choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// The opposite preference
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Storage form: the `darkMode` key holds "true" or "false"
    pub fn as_storage_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "true",
            ThemePreference::Light => "false",
        }
    }

    /// Parse the storage form; anything unrecognized is None
    pub fn from_storage_str(s: &str) -> Option<Self> {
        match s {
            "true" => Some(ThemePreference::Dark),
            "false" => Some(ThemePreference::Light),
            _ => None,
        }
    }

    /// Read the terminal's ambient preference
    ///
    /// Consulted once, only when no theme has been persisted.
    pub fn ambient() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    /// COLORFGBG heuristic: "fg;bg" where a background of 7 or 15 means a
    /// light terminal. Missing or unparseable values default to dark.
    fn from_colorfgbg(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return ThemePreference::Dark;
        };

        match value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
            Some(7) | Some(15) => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }
}
