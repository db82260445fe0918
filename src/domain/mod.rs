// Domain layer: posts, timings and the ports the demo talks through.

pub mod model;
pub mod ports;
