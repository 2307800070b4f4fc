//! `berth cluster install` / `berth cluster destroy --confirm`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::services::destroy::destroy_cluster;
use crate::application::services::install::{InstallOptions, install_cluster};
use crate::application::services::readiness::CancelToken;
use crate::command_runner::{DEFAULT_CMD_TIMEOUT, DEFAULT_TOOL_TIMEOUT, TokioCommandRunner};
use crate::domain::StageOutcome;
use crate::infra::config::load_cluster_spec;
use crate::infra::kubectl::KubectlCluster;
use crate::infra::terraform::TerraformProvisioner;
use crate::output::{OutputContext, TerminalReporter};

/// Run `berth cluster install`.
///
/// # Errors
///
/// Returns the first failing stage's error; everything the earlier stages
/// produced is left in place.
pub async fn install(ctx: &OutputContext, config: &Path) -> Result<()> {
    let spec = load_cluster_spec(config)?;

    let provisioner = TerraformProvisioner::new(
        TokioCommandRunner::new(DEFAULT_TOOL_TIMEOUT),
        &spec.asset_dir,
    );
    let cluster = KubectlCluster::for_asset_dir(
        TokioCommandRunner::new(DEFAULT_CMD_TIMEOUT),
        &spec.asset_dir,
    );
    let reporter = TerminalReporter::new(ctx);
    let cancel = CancelToken::new();

    let results = install_cluster(
        &spec,
        &provisioner,
        &cluster,
        &cluster,
        InstallOptions::new(&reporter, &cancel),
    )
    .await
    .with_context(|| format!("installing cluster on platform '{}'", spec.platform))?;

    ctx.info(&format!(
        "Your configurations are stored in {}",
        spec.asset_dir.display()
    ));
    for result in &results {
        if let StageOutcome::ComponentsInstalled(names) = &result.outcome {
            if !names.is_empty() {
                ctx.info(&format!("Installed components: {}", names.join(", ")));
            }
        }
    }
    Ok(())
}

/// Run `berth cluster destroy [--confirm]`.
///
/// # Errors
///
/// Returns a confirmation-required error when `confirm` is false (nothing
/// is touched), or the provisioning tool's error on teardown failure.
pub async fn destroy(ctx: &OutputContext, config: &Path, confirm: bool) -> Result<()> {
    let spec = load_cluster_spec(config)?;

    let provisioner = TerraformProvisioner::new(
        TokioCommandRunner::new(DEFAULT_TOOL_TIMEOUT),
        &spec.asset_dir,
    );
    let reporter = TerminalReporter::new(ctx);

    destroy_cluster(&provisioner, confirm, &reporter).await?;
    ctx.info("You can safely remove the asset directory now.");
    Ok(())
}
