//! Host view lifecycle: redraw requests going out, taps and render passes coming in.

use std::collections::VecDeque;
use std::time::Duration;

use crate::foundation::error::BitrifillResult;
use crate::render::surface::RenderSurface;
use crate::renderer::Renderer;

/// Why a redraw could not be queued.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    /// The view was torn down.
    #[error("view is detached")]
    Detached,
}

/// What the animation core needs from the view that hosts it.
pub trait ViewHost {
    /// Queue a render pass as soon as possible.
    fn request_redraw(&mut self) -> Result<(), HostError>;

    /// Queue a render pass after `delay`. Must not block.
    fn schedule_redraw(&mut self, delay: Duration) -> Result<(), HostError>;
}

/// A frame produced while pumping a [`HeadlessView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStamp {
    /// 0-based count of render passes so far.
    pub index: u64,
    /// Virtual time of the pass, in milliseconds.
    pub time_ms: u64,
}

/// A view without a window, driven by a virtual millisecond clock.
///
/// Redraw requests coalesce the way invalidation does on a real view: several requests before
/// the next pass produce a single pass, at the earliest requested time.
#[derive(Debug)]
pub struct HeadlessView {
    now_ms: u64,
    pending_redraw: Option<u64>,
    taps: VecDeque<u64>,
    teardown_at: Option<u64>,
    attached: bool,
    frames: u64,
}

impl Default for HeadlessView {
    fn default() -> Self {
        Self::new()
    }
}

enum Event {
    Tap,
    Redraw,
    Teardown,
}

impl HeadlessView {
    /// A freshly attached view; its first pass is pending at time 0.
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            pending_redraw: Some(0),
            taps: VecDeque::new(),
            teardown_at: None,
            attached: true,
            frames: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn has_pending_redraw(&self) -> bool {
        self.pending_redraw.is_some()
    }

    /// Queue a tap-down at absolute virtual time `at_ms`. Taps are kept in time order.
    pub fn tap_at(&mut self, at_ms: u64) {
        let pos = self.taps.partition_point(|&t| t <= at_ms);
        self.taps.insert(pos, at_ms);
    }

    /// Tear the view down at virtual time `at_ms`.
    pub fn detach_at(&mut self, at_ms: u64) {
        self.teardown_at = Some(at_ms);
    }

    /// Tear the view down now. Pending work is dropped and later requests fail.
    pub fn detach(&mut self) {
        self.attached = false;
        self.pending_redraw = None;
        self.taps.clear();
        self.teardown_at = None;
        tracing::debug!(now_ms = self.now_ms, "view detached");
    }

    fn next_event(&self) -> Option<(u64, Event)> {
        let mut next: Option<(u64, Event)> = None;
        let mut consider = |at: Option<u64>, ev: Event| {
            if let Some(at) = at
                && next.as_ref().is_none_or(|(t, _)| at < *t)
            {
                next = Some((at, ev));
            }
        };
        consider(self.teardown_at, Event::Teardown);
        consider(self.taps.front().copied(), Event::Tap);
        consider(self.pending_redraw, Event::Redraw);
        next
    }

    /// Deliver taps and render passes in time order until nothing is pending, the view is torn
    /// down, or `max_frames` passes have run. `sink` sees the surface after every pass.
    pub fn run_until_idle<S, F>(
        &mut self,
        renderer: &mut Renderer,
        surface: &mut S,
        max_frames: u64,
        mut sink: F,
    ) -> BitrifillResult<u64>
    where
        S: RenderSurface + ?Sized,
        F: FnMut(FrameStamp, &mut S) -> BitrifillResult<()>,
    {
        let start_frames = self.frames;
        while self.attached && self.frames - start_frames < max_frames {
            let Some((at, event)) = self.next_event() else {
                break;
            };
            self.now_ms = self.now_ms.max(at);
            match event {
                Event::Teardown => self.detach(),
                Event::Tap => {
                    self.taps.pop_front();
                    renderer.handle_tap(self);
                }
                Event::Redraw => {
                    self.pending_redraw = None;
                    let stamp = FrameStamp {
                        index: self.frames,
                        time_ms: self.now_ms,
                    };
                    renderer.render(surface, self);
                    self.frames += 1;
                    sink(stamp, surface)?;
                }
            }
        }
        Ok(self.frames - start_frames)
    }

    fn queue_redraw(&mut self, at_ms: u64) -> Result<(), HostError> {
        if !self.attached {
            return Err(HostError::Detached);
        }
        self.pending_redraw = Some(self.pending_redraw.map_or(at_ms, |t| t.min(at_ms)));
        Ok(())
    }
}

impl ViewHost for HeadlessView {
    fn request_redraw(&mut self) -> Result<(), HostError> {
        self.queue_redraw(self.now_ms)
    }

    fn schedule_redraw(&mut self, delay: Duration) -> Result<(), HostError> {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.queue_redraw(self.now_ms.saturating_add(delay_ms))
    }
}

#[cfg(test)]
#[path = "../tests/unit/host/host.rs"]
mod tests;
