// Domain layer: value types and ports. No HTTP or config parsing here.

pub mod model;
pub mod ports;
