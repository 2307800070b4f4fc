//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. Messages are user-facing: they say
//! what failed and, where there is one, the command that recovers.

use thiserror::Error;

use crate::domain::readiness::{WorkloadKind, WorkloadStatus};

// ── Configuration errors ──────────────────────────────────────────────────────

/// Errors detected before any external side effect. Never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no platform configured: the cluster configuration must name exactly one platform")]
    MissingPlatform,

    #[error("duplicate component name '{0}': component names must be unique")]
    DuplicateComponent(String),

    #[error("invalid backend configuration: {0}")]
    InvalidBackend(String),

    #[error(
        "PERMANENT LOSS OF DATA. ACTION CANNOT BE UNDONE.\n\
         If you are sure you want to destroy the cluster, re-run with --confirm"
    )]
    ConfirmationRequired,
}

// ── Provisioning errors ───────────────────────────────────────────────────────

/// Errors from the external provisioning tool.
///
/// `Aborted` is deliberately distinct from `Failed`: a caller-initiated
/// timeout or cancellation is not a diagnosis of the infrastructure.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("terraform {operation} failed:\n{diagnostics}")]
    Failed {
        operation: String,
        /// The tool's own stderr, preserved verbatim.
        diagnostics: String,
    },

    #[error("terraform {operation} aborted before completion")]
    Aborted { operation: String },

    #[error(
        "terraform state is locked by another run; \
         only one pipeline may mutate a cluster's working directory at a time"
    )]
    StateLocked,
}

// ── Readiness errors ──────────────────────────────────────────────────────────

/// Errors from the readiness poller.
#[derive(Debug, Error)]
pub enum ReadinessError {
    /// "Not yet", as opposed to a hard failure. Carries the last observed
    /// status so an operator can re-run verification instead of the pipeline.
    #[error(
        "timed out waiting for {kind} {namespace}/{name} to become ready (last observed: {})",
        last.map_or_else(|| "never reached".to_string(), |s| format!("{}/{} ready", s.ready, s.desired))
    )]
    Timeout {
        kind: WorkloadKind,
        namespace: String,
        name: String,
        last: Option<WorkloadStatus>,
    },

    #[error("readiness wait for {kind} {namespace}/{name} was cancelled")]
    Cancelled {
        kind: WorkloadKind,
        namespace: String,
        name: String,
    },

    #[error("invalid readiness target: {0}")]
    InvalidTarget(String),
}

// ── Component errors ──────────────────────────────────────────────────────────

/// A component install failure, identified by component name.
#[derive(Debug, Error)]
#[error("installing component '{name}'")]
pub struct ComponentError {
    pub name: String,
    #[source]
    pub source: anyhow::Error,
}
