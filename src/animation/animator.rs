use std::time::Duration;

use crate::animation::chain::Settle;
use crate::host::ViewHost;

/// Two-state (idle/running) driver that turns redraws into ticks.
///
/// The animator never schedules itself: each render pass calls [`FrameAnimator::tick`] once,
/// and a tick asks the host for exactly one deferred redraw. A host that can no longer redraw
/// (torn down) ends the loop; that failure is logged and dropped.
#[derive(Clone, Debug)]
pub struct FrameAnimator {
    running: bool,
    delay: Duration,
}

impl FrameAnimator {
    pub fn new(delay: Duration) -> Self {
        Self {
            running: false,
            delay,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Idle -> running, followed by an immediate redraw request. No-op while running.
    pub fn start<H: ViewHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        tracing::debug!("animator started");
        if let Err(err) = host.request_redraw() {
            tracing::debug!(%err, "initial redraw request dropped");
        }
        true
    }

    /// Running -> idle. Does not force a redraw.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        tracing::debug!("animator stopped");
        true
    }

    /// Run one `advance` step and schedule the next redraw. Does nothing while idle.
    ///
    /// A settle reported by `advance` stops the animator; the redraw is still scheduled so the
    /// settled frame gets drawn, and that pass finds the animator idle.
    pub fn tick<H, F>(&mut self, host: &mut H, advance: F) -> Option<Settle>
    where
        H: ViewHost + ?Sized,
        F: FnOnce() -> Option<Settle>,
    {
        if !self.running {
            return None;
        }
        let settle = advance();
        tracing::trace!(settled = settle.is_some(), "tick");
        if settle.is_some() {
            self.stop();
        }
        if let Err(err) = host.schedule_redraw(self.delay) {
            tracing::debug!(%err, "redraw not scheduled, animation loop ends");
        }
        settle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
