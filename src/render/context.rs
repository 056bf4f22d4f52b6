use crate::{
    assets::decode::BackgroundImage,
    foundation::core::{Rgba8, Vec2},
};

/// Abstract 2D drawing context the placement engine issues calls against.
///
/// Semantics follow a classic immediate-mode canvas: `save`/`restore` push and pop the current
/// transform together with the bound source, `scale` post-multiplies the current transform, and
/// `paint` composites the bound source through the current transform over the whole canvas.
pub trait DrawContext {
    /// Push the current transform and source.
    fn save(&mut self);

    /// Pop back to the state of the matching [`DrawContext::save`].
    fn restore(&mut self);

    /// Scale user space by `(sx, sy)`.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Bind `image` as the source, its top-left corner at `offset` in user space.
    ///
    /// Outside the image bounds the source is transparent.
    fn set_source(&mut self, image: &BackgroundImage, offset: Vec2);

    /// Bind `image` as a pattern repeating in both directions from the user-space origin.
    fn set_source_tiled(&mut self, image: &BackgroundImage);

    /// Bind a uniform color as the source.
    fn set_source_color(&mut self, color: Rgba8);

    /// Composite the bound source onto the canvas.
    fn paint(&mut self);
}
