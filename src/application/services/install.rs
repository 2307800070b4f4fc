//! The install pipeline: backend → provision → verify → components.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{ComponentInstaller, ProgressReporter, Provisioner, WorkloadApi};
use crate::application::services::components::install_components;
use crate::application::services::readiness::{CancelToken, wait_for_all, wait_reachable};
use crate::domain::{
    BackendConfig, ClusterSpec, PipelineResult, Stage, StageOutcome, WorkloadReadinessTarget,
};

/// Knobs for the verify stage plus the shared cancel token.
pub struct InstallOptions<'a, R: ProgressReporter> {
    pub reporter: &'a R,
    /// Interval between readiness polls during verification.
    pub poll_interval: Duration,
    /// Budget for each verification wait.
    pub verify_timeout: Duration,
    pub cancel: &'a CancelToken,
}

impl<'a, R: ProgressReporter> InstallOptions<'a, R> {
    /// Defaults matching one readiness probe every five seconds for up to
    /// ten minutes.
    pub fn new(reporter: &'a R, cancel: &'a CancelToken) -> Self {
        Self {
            reporter,
            poll_interval: Duration::from_secs(5),
            verify_timeout: Duration::from_secs(600),
            cancel,
        }
    }
}

/// Run the install pipeline for `spec`.
///
/// Stages execute strictly in order; the first failure aborts all
/// subsequent stages with no compensation. Stages 4–7 make irreversible
/// external changes — a retried run detects already-applied infrastructure
/// through the provisioning tool's own state, and component installation is
/// idempotent, so re-running after a partial failure is safe but never
/// automatic.
///
/// On success, returns one [`PipelineResult`] per executed stage, in order.
///
/// # Errors
///
/// Returns the failing stage's error, wrapped with the stage name. The
/// cluster is left as the failing stage left it.
pub async fn install_cluster(
    spec: &ClusterSpec,
    provisioner: &impl Provisioner,
    api: &impl WorkloadApi,
    installer: &impl ComponentInstaller,
    opts: InstallOptions<'_, impl ProgressReporter>,
) -> Result<Vec<PipelineResult>> {
    spec.validate()?;

    let reporter = opts.reporter;
    let mut results = Vec::new();

    // Stage 1: Resolve backend — absent means local, no remote coordination.
    let backend = spec.backend.clone().unwrap_or_else(BackendConfig::local);
    results.push(PipelineResult::completed(Stage::ResolveBackend));

    // Stage 2: Validate backend configuration.
    backend
        .validate()
        .with_context(|| format!("stage '{}'", Stage::ValidateBackend))?;
    results.push(PipelineResult::completed(Stage::ValidateBackend));

    // Stage 3: Render backend configuration.
    let rendered_backend = backend.render();
    results.push(PipelineResult::completed(Stage::RenderBackend));

    // Stage 4: Configure the provisioning working directory.
    reporter.step("configuring provisioning working directory...");
    provisioner
        .configure(&spec.platform, &rendered_backend)
        .await
        .with_context(|| format!("stage '{}'", Stage::ConfigureWorkingDir))?;
    results.push(PipelineResult::completed(Stage::ConfigureWorkingDir));

    // Stage 5: Provisioning apply. Success means infrastructure exists but
    // the control plane is not yet proven reachable.
    reporter.step("applying infrastructure (this may take several minutes)...");
    provisioner
        .apply()
        .await
        .with_context(|| format!("stage '{}'", Stage::Apply))?;
    reporter.success("infrastructure applied");
    results.push(PipelineResult::completed(Stage::Apply));

    // Stage 6: Verify reachability, then any configured control-plane
    // workloads. Independent workload waits poll concurrently.
    reporter.step("waiting for the control plane to answer...");
    wait_reachable(api, opts.poll_interval, opts.verify_timeout, opts.cancel)
        .await
        .with_context(|| format!("stage '{}'", Stage::Verify))?;
    if !spec.verify.is_empty() {
        reporter.step("waiting for control-plane workloads...");
        let targets: Vec<WorkloadReadinessTarget> = spec
            .verify
            .iter()
            .map(|v| WorkloadReadinessTarget {
                kind: v.kind,
                namespace: v.namespace.clone(),
                name: v.name.clone(),
                want_replicas: v.replicas,
                poll_interval: opts.poll_interval,
                timeout: opts.verify_timeout,
            })
            .collect();
        wait_for_all(api, &targets, opts.cancel)
            .await
            .with_context(|| format!("stage '{}'", Stage::Verify))?;
    }
    reporter.success("cluster is reachable and healthy");
    results.push(PipelineResult::completed(Stage::Verify));

    // Stage 7: Install components in declared order, fail-fast.
    let installed = install_components(installer, &spec.components, reporter)
        .await
        .with_context(|| format!("stage '{}'", Stage::InstallComponents))?;
    results.push(PipelineResult {
        stage: Stage::InstallComponents,
        outcome: StageOutcome::ComponentsInstalled(installed),
    });

    Ok(results)
}
