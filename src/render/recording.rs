use crate::{
    assets::decode::BackgroundImage,
    foundation::core::{Rgba8, Vec2},
    render::context::DrawContext,
};

/// One call received by a [`RecordingContext`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// [`DrawContext::save`].
    Save,
    /// [`DrawContext::restore`].
    Restore,
    /// [`DrawContext::scale`].
    Scale(Vec2),
    /// [`DrawContext::set_source`], with the bound image's size.
    SetSource {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// Offset the image was bound at.
        offset: Vec2,
    },
    /// [`DrawContext::set_source_tiled`], with the bound image's size.
    SetSourceTiled {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// [`DrawContext::set_source_color`].
    SetSourceColor(Rgba8),
    /// [`DrawContext::paint`].
    Paint,
}

/// A [`DrawContext`] that draws nothing and remembers every call it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
    depth: usize,
}

impl RecordingContext {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of `save` calls not yet matched by a `restore`.
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    /// Number of `paint` calls received.
    pub fn paint_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Paint))
            .count()
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) {
        self.depth += 1;
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.calls.push(DrawCall::Restore);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.calls.push(DrawCall::Scale(Vec2::new(sx, sy)));
    }

    fn set_source(&mut self, image: &BackgroundImage, offset: Vec2) {
        self.calls.push(DrawCall::SetSource {
            width: image.width,
            height: image.height,
            offset,
        });
    }

    fn set_source_tiled(&mut self, image: &BackgroundImage) {
        self.calls.push(DrawCall::SetSourceTiled {
            width: image.width,
            height: image.height,
        });
    }

    fn set_source_color(&mut self, color: Rgba8) {
        self.calls.push(DrawCall::SetSourceColor(color));
    }

    fn paint(&mut self) {
        self.calls.push(DrawCall::Paint);
    }
}
