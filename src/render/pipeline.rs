use crate::{
    assets::decode::{BackgroundImage, load_background_image},
    background::{compose::draw_background, config::BackgroundConfig, mode::BackgroundMode},
    foundation::{core::Canvas, error::BackdropResult},
    render::cpu::{CpuCanvas, FrameRGBA},
};

/// Load the configured image (if the mode needs one) and render the background on the CPU.
///
/// Pipeline:
/// 1. [`BackgroundConfig::validate`]
/// 2. [`load_background_image`] for image modes
/// 3. [`render_background_with_image`]
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
#[tracing::instrument(skip(config), fields(mode = %config.mode))]
pub fn render_background(config: &BackgroundConfig, canvas: Canvas) -> BackdropResult<FrameRGBA> {
    config.validate()?;

    let image = match (&config.image, config.mode) {
        (_, BackgroundMode::SolidColor) | (None, _) => None,
        (Some(path), _) => Some(load_background_image(path)?),
    };

    render_background_with_image(config, image.as_ref(), canvas)
}

/// Render with an already decoded image, e.g. when redrawing after a resize.
pub fn render_background_with_image(
    config: &BackgroundConfig,
    image: Option<&BackgroundImage>,
    canvas: Canvas,
) -> BackdropResult<FrameRGBA> {
    let mut target = CpuCanvas::new(canvas)?;
    draw_background(&mut target, config, image, canvas)?;
    Ok(target.finish())
}
