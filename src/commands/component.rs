//! `berth component install [NAME...]` — apply components to an existing
//! cluster without re-running provisioning.

use std::path::Path;

use anyhow::Result;

use crate::application::services::components::install_selected;
use crate::command_runner::{DEFAULT_CMD_TIMEOUT, TokioCommandRunner};
use crate::infra::config::load_cluster_spec;
use crate::infra::kubectl::KubectlCluster;
use crate::output::{OutputContext, TerminalReporter};

/// Run `berth component install`.
///
/// # Errors
///
/// Returns an error for an undeclared component name, or the first failing
/// component install (later components are not attempted).
pub async fn install(ctx: &OutputContext, config: &Path, names: &[String]) -> Result<()> {
    let spec = load_cluster_spec(config)?;

    let cluster = KubectlCluster::for_asset_dir(
        TokioCommandRunner::new(DEFAULT_CMD_TIMEOUT),
        &spec.asset_dir,
    );
    let reporter = TerminalReporter::new(ctx);

    let installed = install_selected(&cluster, &spec.components, names, &reporter).await?;
    if installed.is_empty() {
        ctx.info("No components configured.");
    }
    Ok(())
}
