//! Bitrifill renders a chain of colored bi-tri-fill-line shapes that sweep open and closed, one
//! node per tap, walking the chain back and forth.
//!
//! # Model
//!
//! - [`ScaleState`]: one node's sweep progress between the rest values `0` and `1`.
//! - [`NodeChain`]: the fixed row of [`AnimationNode`]s (one per palette color) and the node
//!   currently in play. Settling hands the turn to the neighbor; at either end the traversal
//!   direction flips and the end node plays twice.
//! - [`FrameAnimator`]: turns render passes into ticks and asks the [`ViewHost`] for the next
//!   pass after a fixed delay. It never blocks and never schedules itself.
//! - [`Renderer`]: what a host view calls on every render pass and on every tap.
//!
//! Drawing goes through the [`RenderSurface`] trait; [`CpuSurface`] rasterizes with
//! `vello_cpu`, [`RecordingSurface`] keeps calls as data. [`HeadlessView`] is a host with a
//! virtual clock for offline rendering and tests.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod host;
mod render;
mod renderer;

pub use animation::animator::FrameAnimator;
pub use animation::chain::{NodeChain, Settle};
pub use animation::node::{AnimationNode, Neighbor};
pub use animation::state::ScaleState;
pub use config::{EffectConfig, MIN_TICK_STEP};
pub use foundation::core::{Affine, BezPath, Canvas, Direction, Line, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{BitrifillError, BitrifillResult};
pub use host::{FrameStamp, HeadlessView, HostError, ViewHost};
pub use render::cpu::{CpuSurface, FrameRGBA};
pub use render::shape::{
    ClippedFill, Half, ShapeGeometry, bi_tri_fill_line, divide_scale, draw_bi_tri_fill_line,
    max_scale, node_paint, sinify,
};
pub use render::surface::{DrawCmd, Paint, RecordingSurface, RenderSurface};
pub use renderer::Renderer;
