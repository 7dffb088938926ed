// Domain layer: service identities, the inbound selection request and the backend port.

pub mod extras;
pub mod model;
pub mod ports;
