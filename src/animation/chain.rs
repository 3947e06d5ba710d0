use crate::animation::node::{AnimationNode, Neighbor};
use crate::config::{EffectConfig, MIN_TICK_STEP};
use crate::foundation::core::Direction;
use crate::foundation::error::{BitrifillError, BitrifillResult};

/// A node finished its sweep during [`NodeChain::update`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settle {
    /// Node that settled.
    pub node: usize,
    /// Committed rest value, `0.0` or `1.0`.
    pub value: f64,
    /// The node had no neighbor in the traversal direction, so the direction flipped and the
    /// same node stays active.
    pub boundary: bool,
}

/// The fixed chain of nodes plus the rotating selection of the active one.
///
/// Starts at node 0 moving forward. Each settle hands the active role to the neighbor in the
/// current direction; at an end the direction flips instead, so the end node sweeps twice in a
/// row (`0, 1, .., n-1, n-1, .., 1, 0, 0, 1, ..`).
#[derive(Clone, Debug)]
pub struct NodeChain {
    nodes: Vec<AnimationNode>,
    active: usize,
    direction: Direction,
    step: f64,
}

impl NodeChain {
    pub fn new(config: &EffectConfig) -> BitrifillResult<Self> {
        config.validate()?;
        Self::with_len(config.node_count(), config.tick_step())
    }

    pub fn with_len(len: usize, step: f64) -> BitrifillResult<Self> {
        if len == 0 {
            return Err(BitrifillError::config("chain needs at least one node"));
        }
        if !(MIN_TICK_STEP..1.0).contains(&step) {
            return Err(BitrifillError::config(format!(
                "tick step must be in [{MIN_TICK_STEP}, 1)"
            )));
        }
        Ok(Self {
            nodes: AnimationNode::build_chain(len),
            active: 0,
            direction: Direction::Forward,
            step,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn active(&self) -> &AnimationNode {
        &self.nodes[self.active]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn node(&self, index: usize) -> Option<&AnimationNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[AnimationNode] {
        &self.nodes
    }

    /// Advance the active node by one tick.
    pub fn update(&mut self) -> Option<Settle> {
        let node = self.active;
        let value = self.nodes[node].update(self.step)?;

        let neighbor = self.nodes[node].neighbor(self.direction);
        if let Neighbor::Boundary(_) = neighbor {
            self.direction = self.direction.flipped();
            tracing::debug!(node, direction = ?self.direction, "chain boundary, direction flipped");
        }
        self.active = neighbor.index();
        tracing::debug!(node, value, next = self.active, "node settled");

        Some(Settle {
            node,
            value,
            boundary: neighbor.is_boundary(),
        })
    }

    /// Start the active node's sweep; `false` while it is already moving.
    pub fn start_updating(&mut self) -> bool {
        let started = self.nodes[self.active].start_updating();
        if started {
            tracing::debug!(
                node = self.active,
                dir = self.nodes[self.active].state().dir(),
                "node started"
            );
        }
        started
    }

    /// Tick until the active node settles. Returns `None` if it was idle.
    pub fn run_to_settle(&mut self) -> Option<Settle> {
        if self.active().state().is_idle() {
            return None;
        }
        loop {
            if let Some(settle) = self.update() {
                return Some(settle);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/chain.rs"]
mod tests;
