use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgba8,
    error::{BackdropError, BackdropResult},
};

/// Parse `#RRGGBB`, `RRGGBB`, `#RRGGBBAA` or `RRGGBBAA` (hex digits case-insensitive).
pub fn parse_background_color(s: &str) -> BackdropResult<Rgba8> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> BackdropResult<u8> {
        let invalid = || BackdropError::validation(format!("invalid hex byte \"{pair}\""));
        // `from_str_radix` also takes a leading sign.
        if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u8::from_str_radix(pair, 16).map_err(|_| invalid())
    }

    if !hex.is_ascii() {
        return Err(BackdropError::validation(format!("invalid color \"{s}\"")));
    }

    let (r, g, b, a) = match hex.len() {
        6 => (
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        ),
        _ => {
            return Err(BackdropError::validation(format!(
                "color \"{s}\" must be #RRGGBB or #RRGGBBAA"
            )));
        }
    };

    Ok(Rgba8 { r, g, b, a })
}

/// `#rrggbbaa` form of `color`.
pub fn format_background_color(color: Rgba8) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.r, color.g, color.b, color.a
    )
}

impl Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_background_color(*self))
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_background_color(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
