use std::sync::Arc;

use crate::{
    assets::decode::BackgroundImage,
    foundation::{
        core::{Affine, Canvas, Rect, Rgba8, Vec2},
        error::{BackdropError, BackdropResult},
    },
    render::context::DrawContext,
};

/// Rendered canvas pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, as expected by PNG encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

#[derive(Clone)]
enum Source {
    Image {
        paint: vello_cpu::Image,
        offset: Vec2,
        width: f64,
        height: f64,
    },
    Tiled {
        paint: vello_cpu::Image,
    },
    Color(Rgba8),
}

#[derive(Clone)]
struct DrawState {
    transform: Affine,
    source: Option<Source>,
}

/// CPU raster [`DrawContext`] backed by `vello_cpu`.
///
/// Paints accumulate in a render context and are rasterized by [`CpuCanvas::finish`].
pub struct CpuCanvas {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl std::fmt::Debug for CpuCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuCanvas")
            .field("canvas", &self.canvas)
            .field("transform", &self.state.transform)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl CpuCanvas {
    /// Transparent canvas of the given size.
    pub fn new(canvas: Canvas) -> BackdropResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(BackdropError::render(format!(
                "canvas has empty dimensions {}x{}",
                canvas.width, canvas.height
            )));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BackdropError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BackdropError::render("canvas height exceeds u16"))?;

        Ok(Self {
            canvas,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            state: DrawState {
                transform: Affine::IDENTITY,
                source: None,
            },
            stack: Vec::new(),
        })
    }

    /// Canvas this context draws onto.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Current user-space transform.
    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    /// Rasterize everything painted so far.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    // Canvas bounds mapped back into the current user space.
    fn user_space_canvas(&self) -> Rect {
        self.state
            .transform
            .inverse()
            .transform_rect_bbox(self.canvas.rect())
    }
}

impl DrawContext for CpuCanvas {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("restore without matching save"),
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform * Affine::scale_non_uniform(sx, sy);
    }

    fn set_source(&mut self, image: &BackgroundImage, offset: Vec2) {
        self.state.source = image_paint(image, vello_cpu::peniko::Extend::Pad).map(|paint| {
            Source::Image {
                paint,
                offset,
                width: f64::from(image.width),
                height: f64::from(image.height),
            }
        });
    }

    fn set_source_tiled(&mut self, image: &BackgroundImage) {
        self.state.source = image_paint(image, vello_cpu::peniko::Extend::Repeat)
            .map(|paint| Source::Tiled { paint });
    }

    fn set_source_color(&mut self, color: Rgba8) {
        self.state.source = Some(Source::Color(color));
    }

    fn paint(&mut self) {
        let Some(source) = self.state.source.clone() else {
            tracing::warn!("paint without a bound source");
            return;
        };

        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match source {
            Source::Image {
                paint,
                offset,
                width,
                height,
            } => {
                // Only the image's own rect is covered; everything outside stays untouched.
                let bounds = Rect::new(offset.x, offset.y, offset.x + width, offset.y + height)
                    .intersect(self.user_space_canvas());
                if bounds.is_zero_area() {
                    return;
                }
                self.ctx
                    .set_paint_transform(affine_to_cpu(Affine::translate(offset)));
                self.ctx.set_paint(paint);
                self.ctx.fill_rect(&rect_to_cpu(bounds));
            }
            Source::Tiled { paint } => {
                let bounds = self.user_space_canvas();
                self.ctx.set_paint(paint);
                self.ctx.fill_rect(&rect_to_cpu(bounds));
            }
            Source::Color(c) => {
                let bounds = self.user_space_canvas();
                self.ctx
                    .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
                self.ctx.fill_rect(&rect_to_cpu(bounds));
            }
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn image_paint(
    image: &BackgroundImage,
    extend: vello_cpu::peniko::Extend,
) -> Option<vello_cpu::Image> {
    match image_premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height) {
        Ok(pixmap) => Some(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler {
                x_extend: extend,
                y_extend: extend,
                ..vello_cpu::peniko::ImageSampler::default()
            },
        }),
        Err(err) => {
            tracing::error!("cannot bind background image as paint source: {err}");
            None
        }
    }
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> BackdropResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| BackdropError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| BackdropError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(BackdropError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
