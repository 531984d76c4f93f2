//! Light/dark colour theme

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An RGB triple, displayed as `"r, g, b"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// Foreground/background colours for a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Palette {
    /// CSS custom properties carrying this palette
    pub fn css_variables(&self) -> [(&'static str, String); 2] {
        [
            ("--color-dark", self.dark.to_string()),
            ("--color-light", self.light.to_string()),
        ]
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Theme matching a system colour-scheme preference
    pub fn preferred(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Day => Palette {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => Palette {
                dark: PAPER,
                light: INK,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown theme '{0}' (expected 'day' or 'night')")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
