// Domain layer: the movie record, its field rules and the ports the rest of the crate plugs into.

pub mod model;
pub mod ports;
