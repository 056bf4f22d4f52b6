//! backdrop positions and scales a single raster image on a canvas for use as a desktop
//! background.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: mode and gravity strings go through [`parse_background_mode`] and
//!    [`parse_background_gravity`]; unknown values become the `Invalid` sentinel.
//! 2. **Decode**: [`load_background_image`] turns a file into a [`BackgroundImage`].
//! 3. **Place**: [`plan_placement`] computes the scale and source offset for the mode.
//! 4. **Draw**: [`render_background_image`] issues `save`/`scale`/`set_source`/`paint`/`restore`
//!    against any [`DrawContext`]; [`CpuCanvas`] rasterizes them with `vello_cpu`.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless placement**: every render is a pure function of image size, canvas size, mode
//!   and gravity, and leaves the context's transform stack as it found it.
//! - **Premultiplied RGBA8** end-to-end: decoded images and rendered frames are premultiplied.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod background;
mod foundation;
mod render;

pub use assets::color::{format_background_color, parse_background_color};
pub use assets::decode::{BackgroundImage, MAX_IMAGE_SIDE, decode_image, load_background_image};
pub use background::compose::draw_background;
pub use background::config::BackgroundConfig;
pub use background::mode::{
    BackgroundGravity, BackgroundMode, ImageMode, parse_background_gravity, parse_background_mode,
};
pub use background::placement::{
    Placement, SourceBinding, plan_placement, render_background_image, render_image,
};
pub use foundation::core::{Affine, Canvas, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{BackdropError, BackdropResult};
pub use render::context::DrawContext;
pub use render::cpu::{CpuCanvas, FrameRGBA};
pub use render::pipeline::{render_background, render_background_with_image};
pub use render::recording::{DrawCall, RecordingContext};
