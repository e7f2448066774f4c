// Domain layer: records exchanged with the backend and the capability traits
// the behavior layer depends on.

pub mod model;
pub mod ports;
