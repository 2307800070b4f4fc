//! Workload readiness targets and kind-specific predicates.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ReadinessError;

/// Kinds of control-plane-managed workloads we can wait on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
    DaemonSet,
}

impl WorkloadKind {
    /// The kubectl resource name for this kind.
    #[must_use]
    pub fn resource(self) -> &'static str {
        match self {
            Self::Deployment => "deployment",
            Self::StatefulSet => "statefulset",
            Self::DaemonSet => "daemonset",
        }
    }
}

impl std::fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.resource())
    }
}

/// Replica counts observed from a workload's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadStatus {
    pub ready: u32,
    pub desired: u32,
}

/// One readiness wait: which workload, what counts as ready, and how long
/// to keep asking. Constructed per verification call, never persisted.
#[derive(Debug, Clone)]
pub struct WorkloadReadinessTarget {
    pub kind: WorkloadKind,
    pub namespace: String,
    pub name: String,
    /// Expected ready replicas for deployments and stateful sets. `None`
    /// trusts the desired count the workload's own status reports. Ignored
    /// for daemon sets, whose desired count is topology-dependent.
    pub want_replicas: Option<u32>,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl WorkloadReadinessTarget {
    /// Reject unusable targets before any polling starts.
    ///
    /// # Errors
    ///
    /// Returns [`ReadinessError::InvalidTarget`] for a zero poll interval or
    /// timeout, or an unnamed workload.
    pub fn validate(&self) -> Result<(), ReadinessError> {
        if self.poll_interval.is_zero() {
            return Err(ReadinessError::InvalidTarget(
                "poll interval must be positive".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ReadinessError::InvalidTarget(
                "timeout must be positive".to_string(),
            ));
        }
        if self.name.trim().is_empty() || self.namespace.trim().is_empty() {
            return Err(ReadinessError::InvalidTarget(
                "workload namespace and name must be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an observed status satisfies this target.
    ///
    /// Daemon sets are ready when their status-reported ready count equals
    /// their status-reported desired count; a desired count of zero means
    /// the controller has not scheduled anything yet and is never ready.
    /// The other kinds compare ready against `want_replicas` when given,
    /// else the reported desired count.
    #[must_use]
    pub fn is_satisfied_by(&self, status: WorkloadStatus) -> bool {
        match self.kind {
            WorkloadKind::DaemonSet => status.desired > 0 && status.ready == status.desired,
            WorkloadKind::Deployment | WorkloadKind::StatefulSet => {
                let desired = self.want_replicas.unwrap_or(status.desired);
                status.ready >= desired
            }
        }
    }
}
