// Domain layer: catalog and profile models plus the ports the engine depends on.

pub mod model;
pub mod ports;
