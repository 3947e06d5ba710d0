//! Palette, geometry, and pacing constants for the effect.

use std::time::Duration;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{BitrifillError, BitrifillResult};

/// Smallest per-tick step accepted. Below this, float accumulation can stall before a sweep
/// completes.
pub const MIN_TICK_STEP: f64 = 1e-9;

/// Fixed constants that drive the effect.
///
/// The palette length is also the chain length: node `i` is drawn with `colors[i]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// One color per chain node, in chain order.
    pub colors: Vec<Rgba8>,
    /// Color each frame is cleared to.
    pub background: Rgba8,
    /// Number of animation phases a single sweep is split into.
    pub phases: u32,
    /// Stroke width is `min(width, height) / stroke_factor`.
    pub stroke_factor: f64,
    /// Shape half-extent is `min(width, height) / size_factor`.
    pub size_factor: f64,
    /// Delay between a tick and the redraw it schedules.
    pub tick_delay_ms: u64,
    /// Base increment; the per-tick step is `step_size / phases`.
    pub step_size: f64,
    /// Rotation reached at the end of the last phase.
    pub rotation_degrees: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                Rgba8::opaque(0xF4, 0x43, 0x36),
                Rgba8::opaque(0x67, 0x3A, 0xB7),
                Rgba8::opaque(0xFF, 0x98, 0x00),
                Rgba8::opaque(0x3F, 0x51, 0xB5),
                Rgba8::opaque(0x4C, 0xAF, 0x50),
            ],
            background: Rgba8::opaque(0xBD, 0xBD, 0xBD),
            phases: 4,
            stroke_factor: 90.0,
            size_factor: 3.2,
            tick_delay_ms: 20,
            step_size: 0.02,
            rotation_degrees: 180.0,
        }
    }
}

impl EffectConfig {
    pub fn validate(&self) -> BitrifillResult<()> {
        if self.colors.is_empty() {
            return Err(BitrifillError::config("palette must not be empty"));
        }
        if self.phases == 0 {
            return Err(BitrifillError::config("phases must be > 0"));
        }
        if !self.stroke_factor.is_finite() || self.stroke_factor <= 0.0 {
            return Err(BitrifillError::config("stroke_factor must be finite and > 0"));
        }
        if !self.size_factor.is_finite() || self.size_factor <= 0.0 {
            return Err(BitrifillError::config("size_factor must be finite and > 0"));
        }
        if !(self.step_size > 0.0 && self.step_size < 1.0) {
            return Err(BitrifillError::config("step_size must be in (0, 1)"));
        }
        if self.tick_step() < MIN_TICK_STEP {
            return Err(BitrifillError::config(format!(
                "step_size / phases must be >= {MIN_TICK_STEP}"
            )));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(BitrifillError::config("rotation_degrees must be finite"));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> BitrifillResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| BitrifillError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Chain length.
    pub fn node_count(&self) -> usize {
        self.colors.len()
    }

    /// Scale advanced per tick.
    pub fn tick_step(&self) -> f64 {
        self.step_size / f64::from(self.phases)
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }

    /// Palette color for node `index`, wrapping if out of range.
    pub fn color_for(&self, index: usize) -> Rgba8 {
        self.colors[index % self.colors.len()]
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
