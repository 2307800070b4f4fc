//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces infrastructure must fulfill. This file imports
//! only from `crate::domain` — never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

use anyhow::Result;

use crate::domain::{ComponentSpec, WorkloadKind, WorkloadStatus};

// ── Provisioning Driver Port ──────────────────────────────────────────────────

/// The external infrastructure-provisioning tool, scoped to one cluster's
/// working directory.
///
/// Implementations must fail fast and surface the tool's own diagnostic
/// output verbatim. None of these operations is transactional: a failed
/// `apply` leaves whatever the tool created in place.
#[allow(async_fn_in_trait)]
pub trait Provisioner {
    /// Lay out the working directory: platform module plus rendered backend.
    async fn configure(&self, platform: &str, rendered_backend: &str) -> Result<()>;

    /// Create or update infrastructure. Long-running; a caller-side abort
    /// must surface as "aborted", distinct from tool failure.
    async fn apply(&self) -> Result<()>;

    /// Tear infrastructure down. Destroying a never-created cluster is a
    /// no-op success.
    async fn destroy(&self) -> Result<()>;
}

// ── Cluster API Ports ─────────────────────────────────────────────────────────

/// Read-only view of the cluster control plane.
///
/// An implementation is the "cluster access handle": it owns whatever
/// credentials it needs (e.g. a kubeconfig path), so callers never assemble
/// credential paths themselves.
#[allow(async_fn_in_trait)]
pub trait WorkloadApi {
    /// Whether the control plane currently answers at all. A transport
    /// error means "cannot tell", not "unhealthy" — early in a cluster's
    /// life the API server is simply not serving yet.
    async fn reachable(&self) -> Result<bool>;

    /// One synchronous read of a workload's replica counts.
    async fn workload_status(
        &self,
        kind: WorkloadKind,
        namespace: &str,
        name: &str,
    ) -> Result<WorkloadStatus>;
}

/// Applies a component's rendered manifests to the cluster.
///
/// Must be safe to call repeatedly with identical inputs: retried pipeline
/// runs re-invoke it for components that are already installed.
#[allow(async_fn_in_trait)]
pub trait ComponentInstaller {
    async fn install(&self, component: &ComponentSpec) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
