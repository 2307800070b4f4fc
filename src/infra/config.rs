//! Cluster configuration loader: `cluster.yaml` → [`ClusterSpec`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::ClusterSpec;

/// Default configuration file name, resolved in the current directory.
pub const DEFAULT_CONFIG: &str = "cluster.yaml";

/// Load and validate a cluster specification from a YAML file.
///
/// `~` in the asset directory is expanded to the user's home. Validation
/// failures here are configuration errors: they happen before the pipeline
/// starts and before any external side effect.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the spec
/// violates a structural invariant (missing platform, duplicate component
/// names).
pub fn load_cluster_spec(path: &Path) -> Result<ClusterSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let mut spec: ClusterSpec = serde_yaml::from_str(&content)
        .with_context(|| format!("cannot parse {}", path.display()))?;

    spec.asset_dir = expand_home(&spec.asset_dir)?;
    spec.validate()
        .with_context(|| format!("invalid cluster configuration in {}", path.display()))?;
    Ok(spec)
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let Ok(stripped) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.join(stripped))
}
