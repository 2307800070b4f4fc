//! The destroy pipeline: confirmation gate, then provisioning teardown.

use anyhow::{Context, Result};

use crate::application::ports::{ProgressReporter, Provisioner};
use crate::domain::ConfigError;

/// Destroy the cluster's infrastructure.
///
/// `confirmed` is an explicit parameter, not ambient state: the CLI flag
/// that sets it is parsed elsewhere and the pipeline stays independently
/// testable. When it is `false` this returns
/// [`ConfigError::ConfirmationRequired`] before any collaborator is
/// touched — destruction is irreversible.
///
/// Destroying an already-destroyed or never-created cluster succeeds; the
/// provisioning tool's "nothing to destroy" outcome is not an error.
///
/// # Errors
///
/// Returns the confirmation error, or the provisioning tool's failure with
/// its diagnostics preserved.
pub async fn destroy_cluster(
    provisioner: &impl Provisioner,
    confirmed: bool,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    if !confirmed {
        return Err(ConfigError::ConfirmationRequired.into());
    }

    reporter.step("destroying infrastructure...");
    provisioner
        .destroy()
        .await
        .context("destroying cluster infrastructure")?;
    reporter.success("cluster destroyed");

    Ok(())
}
