// Domain layer: probe models and the ports the core engine depends on.

pub mod model;
pub mod ports;
