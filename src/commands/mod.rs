//! Command handlers: wire real adapters into the application services.

pub mod cluster;
pub mod component;
pub mod version;
