/// Progress of a single node's sweep between the two rest values `0` and `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleState {
    scale: f64,
    dir: f64,
    prev_scale: f64,
}

impl ScaleState {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `1.0` towards 1, `-1.0` towards 0, `0.0` when idle.
    pub fn dir(&self) -> f64 {
        self.dir
    }

    /// Last committed rest value.
    pub fn prev_scale(&self) -> f64 {
        self.prev_scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Advance by one tick of `step`.
    ///
    /// Returns the committed value when this tick carried the sweep past a full unit; the scale
    /// is then snapped to `prev_scale + dir` and the state goes idle.
    pub fn update(&mut self, step: f64) -> Option<f64> {
        self.scale += step * self.dir;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return Some(self.prev_scale);
        }
        None
    }

    /// Begin a sweep away from the current rest value. Ignored unless idle.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
