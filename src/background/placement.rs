//! Placement engine: where and how large a background image lands on a canvas.
//!
//! Geometry is computed in [`plan_placement`] as a pure function and applied to a
//! [`DrawContext`] by [`render_image`]. Offsets are expressed in the scaled user space, i.e. in
//! image pixels, the way a canvas API binds a source after `scale` has been applied.

use crate::{
    assets::decode::BackgroundImage,
    background::mode::{BackgroundGravity, BackgroundMode, ImageMode},
    foundation::core::{Canvas, Size, Vec2},
    render::context::DrawContext,
};

/// How the image is bound as the paint source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceBinding {
    /// Single copy with its top-left corner at this user-space offset.
    At(Vec2),
    /// Repeating pattern anchored at the user-space origin.
    Tiled,
}

/// Transform and source binding for one background draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Per-axis scale applied before binding; `None` leaves the transform untouched.
    pub scale: Option<Vec2>,
    /// Source binding issued after scaling.
    pub source: SourceBinding,
}

impl Placement {
    /// Effective scale factors (`(1, 1)` when no scale is applied).
    pub fn scale_factors(&self) -> Vec2 {
        self.scale.unwrap_or(Vec2::new(1.0, 1.0))
    }

    /// Source offset in user space; `None` for tiled sources.
    pub fn offset(&self) -> Option<Vec2> {
        match self.source {
            SourceBinding::At(offset) => Some(offset),
            SourceBinding::Tiled => None,
        }
    }

    /// Size of the image on the canvas after scaling.
    pub fn scaled_size(&self, image: Size) -> Size {
        let s = self.scale_factors();
        Size::new(image.width * s.x, image.height * s.y)
    }

    /// Issue this placement against `ctx`: save, scale, bind, paint, restore.
    pub fn apply<C: DrawContext + ?Sized>(&self, ctx: &mut C, image: &BackgroundImage) {
        ctx.save();
        if let Some(s) = self.scale {
            ctx.scale(s.x, s.y);
        }
        match self.source {
            SourceBinding::At(offset) => ctx.set_source(image, offset),
            SourceBinding::Tiled => ctx.set_source_tiled(image),
        }
        ctx.paint();
        ctx.restore();
    }
}

/// Compute the placement of an image of intrinsic size `image` on `canvas`.
///
/// `gravity` only matters for [`ImageMode::Fill`]. A gravity along the axis that does not
/// overflow falls back to center and logs an error.
pub fn plan_placement(
    image: Size,
    canvas: Canvas,
    mode: ImageMode,
    gravity: BackgroundGravity,
) -> Placement {
    let (width, height) = (image.width, image.height);
    let buffer_width = f64::from(canvas.width);
    let buffer_height = f64::from(canvas.height);

    match mode {
        ImageMode::Stretch => Placement {
            scale: Some(Vec2::new(buffer_width / width, buffer_height / height)),
            source: SourceBinding::At(Vec2::ZERO),
        },
        ImageMode::Fill => {
            let window_ratio = buffer_width / buffer_height;
            let bg_ratio = width / height;

            if window_ratio > bg_ratio {
                let scale = buffer_width / width;
                let y = match gravity {
                    BackgroundGravity::North => 0.0,
                    BackgroundGravity::South => (buffer_height - scale * height) / scale,
                    BackgroundGravity::Center => buffer_height / 2.0 / scale - height / 2.0,
                    BackgroundGravity::East
                    | BackgroundGravity::West
                    | BackgroundGravity::Invalid => {
                        unsupported_gravity(gravity);
                        buffer_height / 2.0 / scale - height / 2.0
                    }
                };
                Placement {
                    scale: Some(Vec2::new(scale, scale)),
                    source: SourceBinding::At(Vec2::new(0.0, y)),
                }
            } else {
                let scale = buffer_height / height;
                let x = match gravity {
                    BackgroundGravity::West => 0.0,
                    BackgroundGravity::East => (buffer_width / 2.0 / scale - width / 2.0) * 2.0,
                    BackgroundGravity::Center => buffer_width / 2.0 / scale - width / 2.0,
                    BackgroundGravity::North
                    | BackgroundGravity::South
                    | BackgroundGravity::Invalid => {
                        unsupported_gravity(gravity);
                        buffer_width / 2.0 / scale - width / 2.0
                    }
                };
                Placement {
                    scale: Some(Vec2::new(scale, scale)),
                    source: SourceBinding::At(Vec2::new(x, 0.0)),
                }
            }
        }
        ImageMode::Fit => {
            let window_ratio = buffer_width / buffer_height;
            let bg_ratio = width / height;

            if window_ratio > bg_ratio {
                let scale = buffer_height / height;
                Placement {
                    scale: Some(Vec2::new(scale, scale)),
                    source: SourceBinding::At(Vec2::new(
                        buffer_width / 2.0 / scale - width / 2.0,
                        0.0,
                    )),
                }
            } else {
                let scale = buffer_width / width;
                Placement {
                    scale: Some(Vec2::new(scale, scale)),
                    source: SourceBinding::At(Vec2::new(
                        0.0,
                        buffer_height / 2.0 / scale - height / 2.0,
                    )),
                }
            }
        }
        ImageMode::Center => Placement {
            scale: None,
            source: SourceBinding::At(Vec2::new(
                buffer_width / 2.0 - width / 2.0,
                buffer_height / 2.0 - height / 2.0,
            )),
        },
        ImageMode::Tile => Placement {
            scale: None,
            source: SourceBinding::Tiled,
        },
    }
}

fn unsupported_gravity(gravity: BackgroundGravity) {
    tracing::error!("unsupported gravity {gravity} for this ratio, defaulting to center");
}

/// Draw `image` onto `ctx` for a canvas of `canvas` pixels using an image placement mode.
///
/// Exactly one `paint` is issued, bracketed by `save`/`restore`.
///
/// # Panics
///
/// Panics if the image has a zero dimension.
#[tracing::instrument(
    skip(ctx, image),
    fields(image_width = image.width, image_height = image.height)
)]
pub fn render_image<C: DrawContext + ?Sized>(
    ctx: &mut C,
    image: &BackgroundImage,
    mode: ImageMode,
    gravity: BackgroundGravity,
    canvas: Canvas,
) {
    assert!(
        image.width > 0 && image.height > 0,
        "background image must have non-zero dimensions, got {}x{}",
        image.width,
        image.height
    );

    let placement = plan_placement(image.size(), canvas, mode, gravity);
    tracing::debug!(?placement, "background placement");
    placement.apply(ctx, image);
}

/// Draw `image` onto `ctx` for a `buffer_width` x `buffer_height` canvas.
///
/// # Panics
///
/// [`BackgroundMode::SolidColor`] and [`BackgroundMode::Invalid`] are drawn elsewhere and must
/// never reach this function; passing either panics, as does a zero-sized image.
pub fn render_background_image<C: DrawContext + ?Sized>(
    ctx: &mut C,
    image: &BackgroundImage,
    mode: BackgroundMode,
    gravity: BackgroundGravity,
    buffer_width: u32,
    buffer_height: u32,
) {
    let Some(image_mode) = mode.image_mode() else {
        panic!("background mode {mode} cannot be rendered as an image");
    };
    render_image(
        ctx,
        image,
        image_mode,
        gravity,
        Canvas::new(buffer_width, buffer_height),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/background/placement.rs"]
mod tests;
