//! Provisioning state backends: where terraform keeps its state file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// State-backend configuration for the provisioning tool.
///
/// Rendered to the HCL fragment terraform expects. `Local` with no path is
/// the default when a cluster configuration names no backend at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackendConfig {
    /// State file on the local filesystem; no remote coordination.
    Local {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    /// State file in an S3-compatible object store.
    S3 {
        bucket: String,
        key: String,
        region: String,
    },
}

impl BackendConfig {
    /// The backend used when the cluster configuration names none.
    #[must_use]
    pub fn local() -> Self {
        Self::Local { path: None }
    }

    /// Structural and semantic checks on the backend parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBackend`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Local { path } => {
                if let Some(p) = path {
                    if p.as_os_str().is_empty() {
                        return Err(ConfigError::InvalidBackend(
                            "local backend path must not be empty".to_string(),
                        ));
                    }
                    if let Some(parent) = p.parent() {
                        if !parent.as_os_str().is_empty() && !parent.is_dir() {
                            return Err(ConfigError::InvalidBackend(format!(
                                "local backend path parent '{}' does not exist",
                                parent.display()
                            )));
                        }
                    }
                }
                Ok(())
            }
            Self::S3 {
                bucket,
                key,
                region,
            } => {
                for (field, value) in [("bucket", bucket), ("key", key), ("region", region)] {
                    if value.trim().is_empty() {
                        return Err(ConfigError::InvalidBackend(format!(
                            "s3 backend requires a non-empty '{field}'"
                        )));
                    }
                }
                Ok(())
            }
        }
    }

    /// Render the `terraform { backend "…" { … } }` fragment.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Local { path } => {
                let mut body = String::new();
                if let Some(p) = path {
                    body = format!("\n    path = \"{}\"", p.display());
                }
                format!("terraform {{\n  backend \"local\" {{{body}\n  }}\n}}\n")
            }
            Self::S3 {
                bucket,
                key,
                region,
            } => format!(
                "terraform {{\n  backend \"s3\" {{\n    bucket = \"{bucket}\"\n    key    = \"{key}\"\n    region = \"{region}\"\n  }}\n}}\n"
            ),
        }
    }
}
