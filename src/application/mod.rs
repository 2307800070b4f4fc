//! Application layer: port traits and the pipeline services built on them.

pub mod ports;
pub mod services;
