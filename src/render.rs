pub(crate) mod cpu;
pub(crate) mod shape;
pub(crate) mod surface;
