//! Application services for the cluster lifecycle pipelines.
//!
//! Each module imports only from `crate::domain` and
//! `crate::application::ports`. Services never print, never exit the
//! process, and reach the outside world only through injected ports.

pub mod components;
pub mod destroy;
pub mod install;
pub mod readiness;
