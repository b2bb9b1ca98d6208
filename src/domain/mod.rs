// Domain layer: content records and the provider port. No I/O here.

pub mod model;
pub mod ports;
