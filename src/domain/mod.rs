// Domain layer: core models and ports (interfaces). Concrete loaders and clocks live in adapters.

pub mod model;
pub mod ports;
