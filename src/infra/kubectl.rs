//! Infrastructure implementation of the cluster API ports over kubectl.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{ComponentInstaller, WorkloadApi};
use crate::command_runner::CommandRunner;
use crate::domain::{ComponentSpec, WorkloadKind, WorkloadStatus};

/// Relative path of the generated credential bundle under a cluster's
/// asset directory.
const KUBECONFIG_PATH: &str = "cluster-assets/auth/kubeconfig";

/// The cluster access handle: a kubeconfig plus a command runner.
///
/// Generic over `R: CommandRunner` so tests can inject canned kubectl
/// output. Holding the kubeconfig path here keeps the credential-layout
/// convention out of the pipeline; fakes substitute this whole type.
pub struct KubectlCluster<R: CommandRunner> {
    runner: R,
    kubeconfig: PathBuf,
}

impl<R: CommandRunner> KubectlCluster<R> {
    pub fn new(runner: R, kubeconfig: PathBuf) -> Self {
        Self { runner, kubeconfig }
    }

    /// Handle for the credential bundle a fresh install generates.
    pub fn for_asset_dir(runner: R, asset_dir: &Path) -> Self {
        Self::new(runner, asset_dir.join(KUBECONFIG_PATH))
    }

    fn kubeconfig_arg(&self) -> String {
        format!("--kubeconfig={}", self.kubeconfig.display())
    }
}

impl<R: CommandRunner> WorkloadApi for KubectlCluster<R> {
    async fn reachable(&self) -> Result<bool> {
        let kubeconfig = self.kubeconfig_arg();
        let output = self
            .runner
            .run("kubectl", &[&kubeconfig, "get", "--raw=/readyz"])
            .await
            .context("kubectl get --raw=/readyz")?;
        Ok(output.status.success())
    }

    async fn workload_status(
        &self,
        kind: WorkloadKind,
        namespace: &str,
        name: &str,
    ) -> Result<WorkloadStatus> {
        let kubeconfig = self.kubeconfig_arg();
        let output = self
            .runner
            .run(
                "kubectl",
                &[
                    &kubeconfig,
                    "get",
                    kind.resource(),
                    name,
                    "--namespace",
                    namespace,
                    "--output",
                    "json",
                ],
            )
            .await
            .with_context(|| format!("kubectl get {kind} {namespace}/{name}"))?;
        anyhow::ensure!(
            output.status.success(),
            "kubectl get {kind} {namespace}/{name} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let doc: serde_json::Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("parsing kubectl output for {kind} {namespace}/{name}"))?;
        Ok(parse_status(kind, &doc))
    }
}

/// Extract the replica counts a readiness predicate needs.
///
/// Fields absent from the status (normal while a workload is still coming
/// up) count as zero; a daemon set with no schedule targets yet reports
/// desired 0 and is therefore not treated as ready=desired until the
/// controller has filled its status in.
fn parse_status(kind: WorkloadKind, doc: &serde_json::Value) -> WorkloadStatus {
    let field = |path: &[&str]| -> u32 {
        let mut node = doc;
        for key in path {
            match node.get(key) {
                Some(next) => node = next,
                None => return 0,
            }
        }
        u32::try_from(node.as_u64().unwrap_or(0)).unwrap_or(u32::MAX)
    };

    match kind {
        WorkloadKind::Deployment | WorkloadKind::StatefulSet => WorkloadStatus {
            ready: field(&["status", "readyReplicas"]),
            desired: field(&["spec", "replicas"]),
        },
        WorkloadKind::DaemonSet => WorkloadStatus {
            ready: field(&["status", "numberReady"]),
            desired: field(&["status", "desiredNumberScheduled"]),
        },
    }
}

impl<R: CommandRunner> ComponentInstaller for KubectlCluster<R> {
    async fn install(&self, component: &ComponentSpec) -> Result<()> {
        let manifests = component.rendered_manifests()?;
        let kubeconfig = self.kubeconfig_arg();
        // Server-side apply of identical manifests is a no-op, which is what
        // makes retried pipeline runs safe for already-installed components.
        let output = self
            .runner
            .run_with_stdin(
                "kubectl",
                &[&kubeconfig, "apply", "--filename", "-"],
                manifests.as_bytes(),
            )
            .await
            .context("kubectl apply")?;
        anyhow::ensure!(
            output.status.success(),
            "kubectl apply failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(())
    }
}
