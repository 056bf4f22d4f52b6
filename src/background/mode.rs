use std::fmt;

use serde::{Deserialize, Serialize};

/// Scaling/placement strategy for a background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundMode {
    /// Scale each axis independently to the canvas size.
    Stretch,
    /// Preserve aspect ratio, cover the canvas, crop the overflow.
    Fill,
    /// Preserve aspect ratio, show the whole image, letterbox the rest.
    Fit,
    /// No scaling, centered on the canvas.
    Center,
    /// No scaling, repeated across the canvas.
    Tile,
    /// Plain color, no image involved.
    SolidColor,
    /// Sentinel for an unrecognized configuration value.
    Invalid,
}

/// Anchor used to pick the visible part of an image cropped by [`BackgroundMode::Fill`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundGravity {
    /// Keep the top edge.
    North,
    /// Keep the bottom edge.
    South,
    /// Keep the right edge.
    East,
    /// Keep the left edge.
    West,
    /// Keep the middle.
    Center,
    /// Sentinel for an unrecognized configuration value.
    Invalid,
}

/// The subset of [`BackgroundMode`] the placement engine can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageMode {
    /// See [`BackgroundMode::Stretch`].
    Stretch,
    /// See [`BackgroundMode::Fill`].
    Fill,
    /// See [`BackgroundMode::Fit`].
    Fit,
    /// See [`BackgroundMode::Center`].
    Center,
    /// See [`BackgroundMode::Tile`].
    Tile,
}

/// Parse a mode name. Unknown names are logged and map to [`BackgroundMode::Invalid`].
pub fn parse_background_mode(mode: &str) -> BackgroundMode {
    match mode {
        "stretch" => BackgroundMode::Stretch,
        "fill" => BackgroundMode::Fill,
        "fit" => BackgroundMode::Fit,
        "center" => BackgroundMode::Center,
        "tile" => BackgroundMode::Tile,
        "solid_color" => BackgroundMode::SolidColor,
        _ => {
            tracing::error!("unsupported background mode: {mode}");
            BackgroundMode::Invalid
        }
    }
}

/// Parse a gravity name. Unknown names are logged and map to [`BackgroundGravity::Invalid`].
pub fn parse_background_gravity(gravity: &str) -> BackgroundGravity {
    match gravity {
        "north" => BackgroundGravity::North,
        "south" => BackgroundGravity::South,
        "east" => BackgroundGravity::East,
        "west" => BackgroundGravity::West,
        "center" => BackgroundGravity::Center,
        _ => {
            tracing::error!("unsupported background gravity: {gravity}");
            BackgroundGravity::Invalid
        }
    }
}

impl BackgroundMode {
    /// Configuration name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Fill => "fill",
            Self::Fit => "fit",
            Self::Center => "center",
            Self::Tile => "tile",
            Self::SolidColor => "solid_color",
            Self::Invalid => "invalid",
        }
    }

    /// Narrow to the modes the placement engine draws; `None` for solid color and invalid.
    pub fn image_mode(self) -> Option<ImageMode> {
        match self {
            Self::Stretch => Some(ImageMode::Stretch),
            Self::Fill => Some(ImageMode::Fill),
            Self::Fit => Some(ImageMode::Fit),
            Self::Center => Some(ImageMode::Center),
            Self::Tile => Some(ImageMode::Tile),
            Self::SolidColor | Self::Invalid => None,
        }
    }
}

impl BackgroundGravity {
    /// Configuration name of this gravity.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Center => "center",
            Self::Invalid => "invalid",
        }
    }
}

impl From<ImageMode> for BackgroundMode {
    fn from(mode: ImageMode) -> Self {
        match mode {
            ImageMode::Stretch => Self::Stretch,
            ImageMode::Fill => Self::Fill,
            ImageMode::Fit => Self::Fit,
            ImageMode::Center => Self::Center,
            ImageMode::Tile => Self::Tile,
        }
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BackgroundGravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ImageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BackgroundMode::from(*self).as_str())
    }
}

impl Serialize for BackgroundMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unknown names deserialize to the sentinel so the caller decides how to react.
impl<'de> Deserialize<'de> for BackgroundMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(parse_background_mode(&s))
    }
}

impl Serialize for BackgroundGravity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BackgroundGravity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(parse_background_gravity(&s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/mode.rs"]
mod tests;
