//! Lines written to the chat window

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Horizontal placement of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl std::fmt::Display for Align {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 24-bit RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Agent speech (greeting, refusals)
    pub const AGENT: Color = Color::rgb(0x00, 0x80, 0x5A);
    /// Agent replies to operator input
    pub const REPLY: Color = Color::rgb(0xFF, 0x30, 0x00);
    /// Command dividers
    pub const DIVIDER: Color = Color::rgb(0x40, 0x40, 0x40);
    /// Session notices
    pub const SYSTEM: Color = Color::rgb(0x80, 0x80, 0x80);

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// One immutable line in the chat window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub align: Align,
    pub color: Color,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, align: Align, color: Color) -> Self {
        Self {
            text: text.into(),
            align,
            color,
        }
    }

    pub fn left(text: impl Into<String>, color: Color) -> Self {
        Self::new(text, Align::Left, color)
    }

    pub fn center(text: impl Into<String>, color: Color) -> Self {
        Self::new(text, Align::Center, color)
    }

    pub fn right(text: impl Into<String>, color: Color) -> Self {
        Self::new(text, Align::Right, color)
    }

    /// Empty centered line used as spacing above dividers.
    pub fn spacer() -> Self {
        Self::center("", Color::DIVIDER)
    }
}
