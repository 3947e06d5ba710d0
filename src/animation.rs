pub(crate) mod animator;
pub(crate) mod chain;
pub(crate) mod node;
pub(crate) mod state;
