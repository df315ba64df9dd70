// Domain layer: registry models and ports (interfaces). No external collaborators
// beyond serde/chrono for data shapes.

pub mod model;
pub mod ports;
