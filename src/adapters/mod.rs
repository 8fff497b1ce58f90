// Adapters layer: concrete clocks and event loaders behind the domain ports.

pub mod clock;
pub mod memory;
