//! Readiness polling: wait for workloads to satisfy their replica predicate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use futures_util::future::try_join_all;
use tokio::time::Instant;

use crate::application::ports::WorkloadApi;
use crate::domain::{ReadinessError, WorkloadReadinessTarget};

/// Caller-initiated abort for in-flight readiness waits.
///
/// Checked between polls: a fired token makes the wait return
/// [`ReadinessError::Cancelled`] instead of running to its timeout.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Poll the control plane until `target` is satisfied or its timeout lapses.
///
/// Each poll is a single synchronous read. Transient read errors count as
/// "not yet ready" — during early polls the API server may not be serving
/// at all — and are retried until the timeout. A target satisfied on the
/// first poll returns without sleeping.
///
/// # Errors
///
/// [`ReadinessError::InvalidTarget`] before any polling for a non-positive
/// interval or timeout; [`ReadinessError::Timeout`] carrying the last
/// observed status once `target.timeout` has elapsed;
/// [`ReadinessError::Cancelled`] when `cancel` fires.
pub async fn wait_for(
    api: &impl WorkloadApi,
    target: &WorkloadReadinessTarget,
    cancel: &CancelToken,
) -> Result<(), ReadinessError> {
    target.validate()?;

    let deadline = Instant::now() + target.timeout;
    let mut last = None;

    loop {
        if cancel.is_cancelled() {
            return Err(ReadinessError::Cancelled {
                kind: target.kind,
                namespace: target.namespace.clone(),
                name: target.name.clone(),
            });
        }

        if let Ok(status) = api
            .workload_status(target.kind, &target.namespace, &target.name)
            .await
        {
            if target.is_satisfied_by(status) {
                return Ok(());
            }
            last = Some(status);
        }

        if Instant::now() + target.poll_interval > deadline {
            return Err(ReadinessError::Timeout {
                kind: target.kind,
                namespace: target.namespace.clone(),
                name: target.name.clone(),
                last,
            });
        }
        tokio::time::sleep(target.poll_interval).await;
    }
}

/// Wait for every target, polling them concurrently against the cluster
/// API. All waits must succeed before the phase is considered complete; the
/// first failure is returned.
///
/// # Errors
///
/// Propagates the first [`ReadinessError`] from any target.
pub async fn wait_for_all(
    api: &impl WorkloadApi,
    targets: &[WorkloadReadinessTarget],
    cancel: &CancelToken,
) -> Result<(), ReadinessError> {
    try_join_all(targets.iter().map(|t| wait_for(api, t, cancel))).await?;
    Ok(())
}

/// Poll basic API reachability until the control plane answers.
///
/// Provisioning-tool success does not guarantee the control plane is
/// serving traffic yet; reachability lags infrastructure creation by a
/// bounded but non-deterministic amount of time.
///
/// # Errors
///
/// Returns an error naming the timeout when the API never answers, or a
/// cancellation error when `cancel` fires.
pub async fn wait_reachable(
    api: &impl WorkloadApi,
    poll_interval: Duration,
    timeout: Duration,
    cancel: &CancelToken,
) -> Result<()> {
    anyhow::ensure!(
        !poll_interval.is_zero() && !timeout.is_zero(),
        "reachability poll interval and timeout must be positive"
    );

    let deadline = Instant::now() + timeout;
    loop {
        if cancel.is_cancelled() {
            anyhow::bail!("cluster reachability wait was cancelled");
        }

        if matches!(api.reachable().await, Ok(true)) {
            return Ok(());
        }

        if Instant::now() + poll_interval > deadline {
            anyhow::bail!(
                "control plane did not become reachable within {}s",
                timeout.as_secs()
            );
        }
        tokio::time::sleep(poll_interval).await;
    }
}
