// Domain layer: match types and the sink port. No I/O here.

pub mod model;
pub mod ports;
