//! Cluster and component specifications.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::backend::BackendConfig;
use crate::domain::error::ConfigError;
use crate::domain::readiness::WorkloadKind;

/// The fully-resolved cluster configuration for one pipeline run.
///
/// Produced once per invocation by the configuration loader and immutable
/// thereafter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClusterSpec {
    /// Platform identity, e.g. `"aws"` or `"baremetal"`. Exactly one.
    pub platform: String,
    /// Per-cluster directory holding generated configuration, credentials,
    /// and provisioning state.
    pub asset_dir: PathBuf,
    /// State backend for the provisioning tool. `None` means local.
    #[serde(default)]
    pub backend: Option<BackendConfig>,
    /// Components to install, in declared order.
    #[serde(default)]
    pub components: Vec<ComponentSpec>,
    /// Control-plane workloads the verify stage gates on, in addition to
    /// basic API reachability.
    #[serde(default)]
    pub verify: Vec<VerifySpec>,
}

impl ClusterSpec {
    /// Structural validation, run before the pipeline starts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPlatform`] when no platform is named and
    /// [`ConfigError::DuplicateComponent`] on a repeated component name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.platform.trim().is_empty() {
            return Err(ConfigError::MissingPlatform);
        }
        let mut seen = std::collections::HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(ConfigError::DuplicateComponent(component.name.clone()));
            }
        }
        Ok(())
    }
}

/// A single installable component: a unique name plus the manifests it
/// applies to the cluster. The payload is opaque to the pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentSpec {
    pub name: String,
    /// Either a single manifest document or a sequence of them.
    pub manifest: serde_yaml::Value,
}

impl ComponentSpec {
    /// Render the component's manifests as a multi-document YAML stream
    /// suitable for `kubectl apply -f -`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn rendered_manifests(&self) -> Result<String> {
        let docs = match &self.manifest {
            serde_yaml::Value::Sequence(seq) => seq.clone(),
            other => vec![other.clone()],
        };
        let mut out = String::new();
        for doc in docs {
            out.push_str("---\n");
            out.push_str(&serde_yaml::to_string(&doc)?);
        }
        Ok(out)
    }
}

/// A workload the verify stage waits on after the control plane answers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifySpec {
    pub kind: WorkloadKind,
    pub namespace: String,
    pub name: String,
    /// Expected ready replicas. `None` trusts the workload's own status.
    #[serde(default)]
    pub replicas: Option<u32>,
}
