use crate::foundation::core::{Affine, BezPath, Line, Rect, Rgba8};

/// Stroke/fill settings for one draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgba8,
    pub stroke_width: f64,
    pub round_cap: bool,
}

/// The drawing operations the effect needs from a canvas.
///
/// Coordinates are in pixels with the origin at the top-left corner and `y` pointing down.
pub trait RenderSurface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Paint the whole surface with `color`, discarding earlier content.
    fn clear(&mut self, color: Rgba8);

    /// Stroke `line` (already in surface space).
    fn draw_line(&mut self, line: Line, paint: &Paint);

    /// Fill the part of `rect` inside `clip`, both in local space, then map through `transform`.
    fn fill_clipped_path(&mut self, clip: &BezPath, rect: Rect, transform: Affine, paint: &Paint);
}

/// One recorded [`RenderSurface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear(Rgba8),
    Line {
        line: Line,
        paint: Paint,
    },
    ClippedFill {
        clip: BezPath,
        rect: Rect,
        transform: Affine,
        paint: Paint,
    },
}

/// A surface that keeps calls as data instead of pixels.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            cmds: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Rgba8) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear(color));
    }

    fn draw_line(&mut self, line: Line, paint: &Paint) {
        self.cmds.push(DrawCmd::Line {
            line,
            paint: *paint,
        });
    }

    fn fill_clipped_path(&mut self, clip: &BezPath, rect: Rect, transform: Affine, paint: &Paint) {
        self.cmds.push(DrawCmd::ClippedFill {
            clip: clip.clone(),
            rect,
            transform,
            paint: *paint,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
