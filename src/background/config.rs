use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    assets::color::parse_background_color,
    background::mode::{
        BackgroundGravity, BackgroundMode, parse_background_gravity, parse_background_mode,
    },
    foundation::{
        core::Rgba8,
        error::{BackdropError, BackdropResult},
    },
};

/// Everything needed to draw one background.
///
/// JSON form:
///
/// ```json
/// { "image": "wall.png", "mode": "fill", "gravity": "north", "color": "#202020" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Image to draw; required by every mode except solid color.
    #[serde(default)]
    pub image: Option<PathBuf>,
    /// Placement mode.
    #[serde(default = "default_mode")]
    pub mode: BackgroundMode,
    /// Crop anchor for fill mode.
    #[serde(default = "default_gravity")]
    pub gravity: BackgroundGravity,
    /// Color painted under the image, or on its own in solid color mode.
    #[serde(default)]
    pub color: Option<Rgba8>,
}

fn default_mode() -> BackgroundMode {
    BackgroundMode::Fill
}

fn default_gravity() -> BackgroundGravity {
    BackgroundGravity::Center
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            image: None,
            mode: default_mode(),
            gravity: default_gravity(),
            color: None,
        }
    }
}

impl BackgroundConfig {
    /// Build a config from raw configuration strings.
    ///
    /// Mode and gravity go through [`parse_background_mode`] and [`parse_background_gravity`];
    /// an unknown value is kept as the `Invalid` sentinel and rejected by [`Self::validate`].
    pub fn from_strings(
        image: Option<PathBuf>,
        mode: Option<&str>,
        gravity: Option<&str>,
        color: Option<&str>,
    ) -> BackdropResult<Self> {
        let mut config = Self::default();
        config.override_with(image, mode, gravity, color)?;
        Ok(config)
    }

    /// Replace the fields that are given, parsing strings the same way as
    /// [`Self::from_strings`]. On a bad color nothing is changed.
    pub fn override_with(
        &mut self,
        image: Option<PathBuf>,
        mode: Option<&str>,
        gravity: Option<&str>,
        color: Option<&str>,
    ) -> BackdropResult<()> {
        let color = color.map(parse_background_color).transpose()?;
        if let Some(image) = image {
            self.image = Some(image);
        }
        if let Some(mode) = mode {
            self.mode = parse_background_mode(mode);
        }
        if let Some(gravity) = gravity {
            self.gravity = parse_background_gravity(gravity);
        }
        if color.is_some() {
            self.color = color;
        }
        Ok(())
    }

    /// Load a JSON config. Relative image paths resolve against the file's directory.
    pub fn from_json_path(path: &Path) -> BackdropResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open background config '{}'", path.display()))?;
        let mut config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse background config '{}'", path.display()))?;

        if let (Some(image), Some(root)) = (config.image.as_mut(), path.parent())
            && image.is_relative()
        {
            *image = root.join(&*image);
        }
        Ok(config)
    }

    /// Check the combination of settings is drawable.
    pub fn validate(&self) -> BackdropResult<()> {
        match self.mode {
            BackgroundMode::Invalid => Err(BackdropError::validation(
                "background mode is not supported",
            )),
            BackgroundMode::SolidColor => {
                if self.color.is_none() {
                    return Err(BackdropError::validation(
                        "solid_color mode requires a color",
                    ));
                }
                Ok(())
            }
            mode => {
                if self.image.is_none() {
                    return Err(BackdropError::validation(format!(
                        "{mode} mode requires an image"
                    )));
                }
                if mode == BackgroundMode::Fill && self.gravity == BackgroundGravity::Invalid {
                    tracing::warn!("invalid gravity for fill mode, center will be used");
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/background/config.rs"]
mod tests;
