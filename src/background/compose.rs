use crate::{
    assets::decode::BackgroundImage,
    background::{
        config::BackgroundConfig,
        mode::BackgroundMode,
        placement::render_image,
    },
    foundation::{
        core::Canvas,
        error::{BackdropError, BackdropResult},
    },
    render::context::DrawContext,
};

/// Draw a full background: the configured color (if any), then the image.
///
/// Solid color mode paints only the color. Image modes need `image`; the placement engine is
/// never reached with solid color or invalid modes.
pub fn draw_background<C: DrawContext + ?Sized>(
    ctx: &mut C,
    config: &BackgroundConfig,
    image: Option<&BackgroundImage>,
    canvas: Canvas,
) -> BackdropResult<()> {
    let image_mode = match config.mode {
        BackgroundMode::Invalid => {
            return Err(BackdropError::validation("background mode is not supported"));
        }
        BackgroundMode::SolidColor => {
            let color = config.color.ok_or_else(|| {
                BackdropError::validation("solid_color mode requires a color")
            })?;
            ctx.save();
            ctx.set_source_color(color);
            ctx.paint();
            ctx.restore();
            return Ok(());
        }
        mode => mode.image_mode().ok_or_else(|| {
            BackdropError::validation(format!("{mode} mode cannot draw an image"))
        })?,
    };

    let image = image.ok_or_else(|| {
        BackdropError::validation(format!("{image_mode} mode requires a decoded image"))
    })?;

    if let Some(color) = config.color {
        ctx.save();
        ctx.set_source_color(color);
        ctx.paint();
        ctx.restore();
    }

    render_image(ctx, image, image_mode, config.gravity, canvas);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/background/compose.rs"]
mod tests;
