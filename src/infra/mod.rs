//! Infrastructure adapters: terraform, kubectl, and the config loader.

pub mod config;
pub mod kubectl;
pub mod terraform;
