use crate::animation::state::ScaleState;
use crate::config::EffectConfig;
use crate::foundation::core::Direction;
use crate::render::shape::draw_bi_tri_fill_line;
use crate::render::surface::RenderSurface;

/// Result of asking a node for its neighbor in a traversal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor {
    /// Index of the adjacent node.
    Linked(usize),
    /// No node in that direction; carries the asking node's own index.
    Boundary(usize),
}

impl Neighbor {
    pub fn index(self) -> usize {
        match self {
            Self::Linked(i) | Self::Boundary(i) => i,
        }
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary(_))
    }
}

/// One element of the chain: its palette index, its own sweep state, and index links to the
/// adjacent nodes. Links are positions in the owning chain's node vector.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationNode {
    index: usize,
    state: ScaleState,
    next: Option<usize>,
    prev: Option<usize>,
}

impl AnimationNode {
    fn new(index: usize) -> Self {
        Self {
            index,
            state: ScaleState::default(),
            next: None,
            prev: None,
        }
    }

    /// Build `len` nodes linked `0 <-> 1 <-> ... <-> len-1`. Both ends have a missing link.
    pub fn build_chain(len: usize) -> Vec<Self> {
        let mut nodes: Vec<Self> = (0..len).map(Self::new).collect();
        for i in 1..len {
            nodes[i - 1].next = Some(i);
            nodes[i].prev = Some(i - 1);
        }
        nodes
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &ScaleState {
        &self.state
    }

    pub fn scale(&self) -> f64 {
        self.state.scale()
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// `next` when moving forward, `prev` otherwise; [`Neighbor::Boundary`] when that link is
    /// missing.
    pub fn neighbor(&self, direction: Direction) -> Neighbor {
        let link = match direction {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        };
        match link {
            Some(i) => Neighbor::Linked(i),
            None => Neighbor::Boundary(self.index),
        }
    }

    pub fn update(&mut self, step: f64) -> Option<f64> {
        self.state.update(step)
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    /// Draw this node's shape in its palette color at its current scale.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S, config: &EffectConfig) {
        draw_bi_tri_fill_line(surface, config, self.index, self.state.scale());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/node.rs"]
mod tests;
