// Domain layer: values, the keyed object model, sections and ports. No I/O here.

pub mod model;
pub mod ports;
