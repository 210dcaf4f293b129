//! Color values and the fixed base ramps.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

fn hex_color_pattern() -> &'static Regex {
    HEX_COLOR.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"))
}

/// A validated `#rrggbb` color.
///
/// The original spelling is kept as written, so `#AABBCC` stays upper-case
/// in every generated file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Parse a hex color string, returning `None` if it is not `#` followed
    /// by exactly six hex digits.
    pub fn parse(value: &str) -> Option<Self> {
        if hex_color_pattern().is_match(value) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    /// Color from one of the compiled-in ramps.
    pub fn fixed(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Three shades of one neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    pub light: &'static str,
    pub mid: &'static str,
    pub dark: &'static str,
}

/// Background ramp shared by every theme.
pub const BLACK: Ramp = Ramp {
    light: "#333333",
    mid: "#222222",
    dark: "#111111",
};

/// Foreground ramp shared by every theme.
pub const WHITE: Ramp = Ramp {
    light: "#ffffff",
    mid: "#dddddd",
    dark: "#bbbbbb",
};

/// The six semantic roles a palette supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Rich,
    Dull,
    Dark,
    Light,
    Mid,
    DeepAccent,
}

impl Role {
    /// All roles in declaration order.
    pub const ALL: [Role; 6] = [
        Role::Rich,
        Role::Dull,
        Role::Dark,
        Role::Light,
        Role::Mid,
        Role::DeepAccent,
    ];

    /// Field name as it appears in variant files.
    pub fn field_name(self) -> &'static str {
        match self {
            Role::Rich => "rich",
            Role::Dull => "dull",
            Role::Dark => "dark",
            Role::Light => "light",
            Role::Mid => "mid",
            Role::DeepAccent => "deep_accent",
        }
    }
}
