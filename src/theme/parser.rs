//! Colour token parsing

use ratatui::style::Color;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error type for colour token parsing failures
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color format: {0}")]
    InvalidHex(String),
    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

/// Parse a colour token: `#RRGGBB`, `#RGB`, `indexed_N` or a terminal colour name.
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let input = input.trim();
    if let Some(digits) = input.strip_prefix('#') {
        return parse_hex_digits(digits)
            .ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
    }
    if let Some(Ok(index)) = input.strip_prefix("indexed_").map(str::parse::<u8>) {
        return Ok(Color::Indexed(index));
    }
    parse_named_color(input)
}

fn parse_hex_digits(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::Rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        // #RGB: each digit is doubled, 0xf -> 0xff
        3 => Some(Color::Rgb(
            channel(&digits[0..1])? * 17,
            channel(&digits[1..2])? * 17,
            channel(&digits[2..3])? * 17,
        )),
        _ => None,
    }
}

/// Parse named colour (case-insensitive)
fn parse_named_color(name: &str) -> Result<Color, ColorParseError> {
    match name.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "white" => Ok(Color::White),
        "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "light_red" => Ok(Color::LightRed),
        "light_green" => Ok(Color::LightGreen),
        "light_yellow" => Ok(Color::LightYellow),
        "light_blue" => Ok(Color::LightBlue),
        "light_magenta" => Ok(Color::LightMagenta),
        "light_cyan" => Ok(Color::LightCyan),
        "reset" => Ok(Color::Reset),
        _ => Err(ColorParseError::UnknownName(name.to_string())),
    }
}

/// Colour that (de)serializes as a token string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SerializableColor(pub Color);

impl From<SerializableColor> for Color {
    fn from(sc: SerializableColor) -> Self {
        sc.0
    }
}

impl<'de> Deserialize<'de> for SerializableColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_color(&value)
            .map(SerializableColor)
            .map_err(|e| D::Error::custom(format!("Failed to parse color: {e}")))
    }
}

impl Serialize for SerializableColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let token = match self.0 {
            Color::Rgb(r, g, b) => {
                return serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}"))
            }
            Color::Indexed(i) => return serializer.serialize_str(&format!("indexed_{i}")),
            Color::Reset => "reset",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Gray => "gray",
            Color::DarkGray => "dark_gray",
            Color::LightRed => "light_red",
            Color::LightGreen => "light_green",
            Color::LightYellow => "light_yellow",
            Color::LightBlue => "light_blue",
            Color::LightMagenta => "light_magenta",
            Color::LightCyan => "light_cyan",
            Color::White => "white",
        };
        serializer.serialize_str(token)
    }
}
