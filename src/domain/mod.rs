//! Pure domain types and validation.
//!
//! This layer has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`. Everything
//! here is constructible and checkable without I/O.

pub mod backend;
pub mod error;
pub mod pipeline;
pub mod readiness;
pub mod spec;

pub use backend::BackendConfig;
pub use error::{ComponentError, ConfigError, ProvisionError, ReadinessError};
pub use pipeline::{PipelineResult, Stage, StageOutcome};
pub use readiness::{WorkloadKind, WorkloadReadinessTarget, WorkloadStatus};
pub use spec::{ClusterSpec, ComponentSpec, VerifySpec};
