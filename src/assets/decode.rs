use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::{
    core::Size,
    error::{BackdropError, BackdropResult},
};

/// Largest width or height the raster backend can sample from.
pub const MAX_IMAGE_SIDE: u32 = u16::MAX as u32;

/// Decoded background raster.
///
/// Pixels are premultiplied RGBA8, row-major, and shared so the handle is cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundImage {
    /// Intrinsic width in pixels (1..=[`MAX_IMAGE_SIDE`]).
    pub width: u32,
    /// Intrinsic height in pixels (1..=[`MAX_IMAGE_SIDE`]).
    pub height: u32,
    /// `width * height * 4` premultiplied bytes.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl BackgroundImage {
    /// Wrap premultiplied RGBA8 pixels, checking dimensions against the buffer length.
    ///
    /// Sides longer than [`MAX_IMAGE_SIDE`] are rejected with [`BackdropError::Decode`].
    pub fn from_rgba8_premul(
        width: u32,
        height: u32,
        rgba8_premul: Vec<u8>,
    ) -> BackdropResult<Self> {
        if width == 0 || height == 0 {
            return Err(BackdropError::decode(format!(
                "image has empty dimensions {width}x{height}"
            )));
        }
        if width > MAX_IMAGE_SIDE || height > MAX_IMAGE_SIDE {
            return Err(BackdropError::decode(format!(
                "image dimensions {width}x{height} exceed the {MAX_IMAGE_SIDE} pixel limit"
            )));
        }
        if rgba8_premul.len() != width as usize * height as usize * 4 {
            return Err(BackdropError::decode("image byte length mismatch"));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Intrinsic size as floating point.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Decode an encoded image held in memory.
pub fn decode_image(bytes: &[u8]) -> BackdropResult<BackgroundImage> {
    let dyn_img = image::load_from_memory(bytes).map_err(|err| {
        BackdropError::decode(format!(
            "failed to read background image: {err}{}",
            decoder_hint()
        ))
    })?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    BackgroundImage::from_rgba8_premul(width, height, rgba8_premul)
}

/// Read and decode the image at `path`.
///
/// Failures are logged at error level and returned; the caller must not render without an image.
#[tracing::instrument]
pub fn load_background_image(path: &Path) -> BackdropResult<BackgroundImage> {
    let loaded = std::fs::read(path)
        .with_context(|| format!("read background image '{}'", path.display()))
        .map_err(BackdropError::from)
        .and_then(|bytes| decode_image(&bytes));

    match loaded {
        Ok(image) => {
            tracing::debug!(
                width = image.width,
                height = image.height,
                "loaded background image"
            );
            Ok(image)
        }
        Err(err) => {
            tracing::error!("failed to load background image ({err:#})");
            Err(err)
        }
    }
}

fn decoder_hint() -> &'static str {
    if cfg!(feature = "all-formats") {
        ""
    } else {
        concat!(
            ". backdrop was built without the `all-formats` feature, so only PNG images ",
            "can be loaded; this is the likely cause"
        )
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
