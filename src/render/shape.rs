//! Geometry of the bi-tri-fill-line shape as a pure function of `(scale, width, height)`.
//!
//! The shape is two mirrored halves (above and below the center). Each half carries a pair of
//! mirrored strokes growing out of the left/right corners and a triangle filled from its base
//! upward. Over one sweep the strokes grow first, then the triangles fill, then both halves
//! slide apart while the whole figure rotates.

use crate::config::EffectConfig;
use crate::foundation::core::{Affine, BezPath, Line, Point, Rect};
use crate::render::surface::{Paint, RenderSurface};

/// `sin(pi * s)`: rises 0 -> 1 -> 0 over a full sweep.
pub fn sinify(s: f64) -> f64 {
    (s * std::f64::consts::PI).sin()
}

/// Progress past the start of phase `i` out of `n`, floored at 0.
pub fn max_scale(s: f64, i: u32, n: u32) -> f64 {
    (s - f64::from(i) / f64::from(n)).max(0.0)
}

/// Progress within phase `i` out of `n`, normalized to `[0, 1]`.
pub fn divide_scale(s: f64, i: u32, n: u32) -> f64 {
    let n_inv = 1.0 / f64::from(n);
    n_inv.min(max_scale(s, i, n)) * f64::from(n)
}

/// Triangle fill of one half: the clip region, the filled rect, and where both land.
#[derive(Clone, Debug, PartialEq)]
pub struct ClippedFill {
    pub clip: BezPath,
    pub rect: Rect,
    pub transform: Affine,
}

/// One mirrored half: two strokes in surface space and a triangle fill.
#[derive(Clone, Debug, PartialEq)]
pub struct Half {
    pub lines: [Line; 2],
    pub fill: ClippedFill,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// Upper half first, then the lower one.
    pub halves: [Half; 2],
}

fn triangle(size: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((-size, 0.0));
    path.line_to((0.0, -size));
    path.line_to((size, 0.0));
    path.close_path();
    path
}

/// Shape for a node at `scale` on a `width` x `height` surface.
pub fn bi_tri_fill_line(
    scale: f64,
    width: f64,
    height: f64,
    config: &EffectConfig,
) -> ShapeGeometry {
    let n = config.phases;
    let sf = sinify(scale);
    let size = width.min(height) / config.size_factor;
    let grow = divide_scale(sf, 0, n);
    let fill = divide_scale(sf, 1, n);
    let spread = divide_scale(sf, 2, n);

    let base = Affine::translate((width / 2.0, height / 2.0))
        * Affine::rotate((config.rotation_degrees * spread).to_radians());

    let half = |j: u32| {
        let mirror_y = 1.0 - 2.0 * f64::from(j);
        let t = base
            * Affine::scale_non_uniform(1.0, mirror_y)
            * Affine::translate((0.0, -(height / 2.0 - size) * spread));
        let line = |k: u32| {
            let mirror_x = 1.0 - 2.0 * f64::from(k);
            let m = t * Affine::scale_non_uniform(mirror_x, 1.0);
            Line::new(
                m * Point::new(-size, 0.0),
                m * Point::new(-size + size * grow, -size * grow),
            )
        };
        Half {
            lines: [line(0), line(1)],
            fill: ClippedFill {
                clip: triangle(size),
                rect: Rect::new(-size, -size * fill, size, 0.0),
                transform: t,
            },
        }
    };
    ShapeGeometry {
        halves: [half(0), half(1)],
    }
}

/// Paint for node `index` on a `width` x `height` surface.
pub fn node_paint(config: &EffectConfig, index: usize, width: f64, height: f64) -> Paint {
    Paint {
        color: config.color_for(index),
        stroke_width: width.min(height) / config.stroke_factor,
        round_cap: true,
    }
}

pub fn draw_bi_tri_fill_line<S: RenderSurface + ?Sized>(
    surface: &mut S,
    config: &EffectConfig,
    index: usize,
    scale: f64,
) {
    let (w, h) = (surface.width(), surface.height());
    let paint = node_paint(config, index, w, h);
    let shape = bi_tri_fill_line(scale, w, h, config);
    for half in &shape.halves {
        for line in half.lines {
            surface.draw_line(line, &paint);
        }
        let f = &half.fill;
        surface.fill_clipped_path(&f.clip, f.rect, f.transform, &paint);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
