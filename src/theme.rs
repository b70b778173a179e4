use std::fmt;
use std::str::FromStr;

/// localStorage key for the persisted theme preference.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Attribute set on `<html>` that the stylesheet keys its tokens off.
pub const HTML_ATTR: &str = "data-theme";

/// Site-wide color theme. Dark is the default for first-time visitors;
/// the header persists every change back to localStorage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(()),
        }
    }
}
