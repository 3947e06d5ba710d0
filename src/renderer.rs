use crate::animation::animator::FrameAnimator;
use crate::animation::chain::{NodeChain, Settle};
use crate::config::EffectConfig;
use crate::foundation::error::BitrifillResult;
use crate::host::ViewHost;
use crate::render::surface::RenderSurface;

/// Composes the node chain, the frame animator, and drawing.
///
/// A host calls [`Renderer::render`] for every render pass and [`Renderer::handle_tap`] for
/// every tap-down.
#[derive(Clone, Debug)]
pub struct Renderer {
    config: EffectConfig,
    chain: NodeChain,
    animator: FrameAnimator,
}

impl Renderer {
    pub fn new(config: EffectConfig) -> BitrifillResult<Self> {
        let chain = NodeChain::new(&config)?;
        let animator = FrameAnimator::new(config.tick_delay());
        Ok(Self {
            config,
            chain,
            animator,
        })
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn animator(&self) -> &FrameAnimator {
        &self.animator
    }

    /// Draw the active node, then let the animator run one tick.
    #[tracing::instrument(level = "trace", skip_all, fields(node = self.chain.active().index()))]
    pub fn render<S, H>(&mut self, surface: &mut S, host: &mut H) -> Option<Settle>
    where
        S: RenderSurface + ?Sized,
        H: ViewHost + ?Sized,
    {
        surface.clear(self.config.background);
        self.chain.active().draw(surface, &self.config);
        self.animator.tick(host, || self.chain.update())
    }

    /// Start the active node's sweep and the animator. Ignored while a sweep is in flight.
    pub fn handle_tap<H: ViewHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.chain.start_updating() {
            tracing::trace!("tap ignored, node already moving");
            return false;
        }
        self.animator.start(host);
        true
    }
}

#[cfg(test)]
#[path = "../tests/unit/host/renderer.rs"]
mod tests;
