use kurbo::{Cap, PathEl, Shape as _, Stroke, StrokeOpts};

use crate::foundation::core::{Affine, BezPath, Canvas, Line, Point, Rect, Rgba8};
use crate::foundation::error::{BitrifillError, BitrifillResult};
use crate::render::surface::{Paint, RenderSurface};

const TOLERANCE: f64 = 0.1;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Raster surface powered by `vello_cpu`.
///
/// Calls are recorded into a render context; [`CpuSurface::finish`] rasterizes them.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> BitrifillResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BitrifillError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BitrifillError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(BitrifillError::render("surface dimensions must be > 0"));
        }
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Rasterize everything drawn since the last [`RenderSurface::clear`].
    pub fn finish(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn set_color(&mut self, c: Rgba8) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    }
}

impl RenderSurface for CpuSurface {
    fn width(&self) -> f64 {
        f64::from(self.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.height)
    }

    fn clear(&mut self, color: Rgba8) {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.set_color(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    fn draw_line(&mut self, line: Line, paint: &Paint) {
        let cap = if paint.round_cap { Cap::Round } else { Cap::Butt };
        let style = Stroke::new(paint.stroke_width).with_caps(cap);
        let outline = kurbo::stroke(
            line.path_elements(TOLERANCE),
            &style,
            &StrokeOpts::default(),
            TOLERANCE,
        );
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(paint.color);
        self.ctx.fill_path(&bezpath_to_cpu(&outline));
    }

    fn fill_clipped_path(&mut self, clip: &BezPath, rect: Rect, transform: Affine, paint: &Paint) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.set_color(paint.color);
        self.ctx.push_clip_layer(&bezpath_to_cpu(clip));
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
        self.ctx.pop_layer();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
