// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std and the async trait machinery.

pub mod model;
pub mod ports;
