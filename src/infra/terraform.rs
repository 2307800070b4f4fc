//! Infrastructure implementation of the `Provisioner` port over terraform.
//!
//! `TerraformProvisioner<R>` routes every terraform invocation through a
//! `CommandRunner`, so tests can inject a mock runner without spawning real
//! processes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::Provisioner;
use crate::command_runner::{CommandRunner, CommandTimeout};
use crate::domain::ProvisionError;

/// The terraform working directory under a cluster's asset directory.
const WORKING_DIR: &str = "terraform";

/// Terraform's local state file name, used to recognize "never created".
const STATE_FILE: &str = "terraform.tfstate";

/// Terraform adapter scoped to one cluster's asset directory.
///
/// The on-disk working directory and state file are the single source of
/// truth for infrastructure existence. They must not be mutated by two
/// pipeline runs at once; terraform's own state lock is detected and
/// surfaced loudly rather than silently corrupting state, but this adapter
/// does not implement distributed locking.
pub struct TerraformProvisioner<R: CommandRunner> {
    runner: R,
    working_dir: PathBuf,
}

impl<R: CommandRunner> TerraformProvisioner<R> {
    pub fn new(runner: R, asset_dir: &Path) -> Self {
        Self {
            runner,
            working_dir: asset_dir.join(WORKING_DIR),
        }
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    async fn terraform(&self, operation: &str, extra: &[&str]) -> Result<()> {
        let dir = self.working_dir.to_string_lossy().to_string();
        let chdir = format!("-chdir={dir}");
        let mut args = vec![chdir.as_str(), operation];
        args.extend_from_slice(extra);

        let output = match self.runner.run("terraform", &args).await {
            Ok(o) => o,
            Err(e) if e.is::<CommandTimeout>() => {
                return Err(ProvisionError::Aborted {
                    operation: operation.to_string(),
                }
                .into());
            }
            Err(e) => return Err(e.context(format!("terraform {operation}"))),
        };

        if output.status.success() {
            return Ok(());
        }

        let diagnostics = String::from_utf8_lossy(&output.stderr).to_string();
        if diagnostics.contains("Error acquiring the state lock") {
            return Err(ProvisionError::StateLocked.into());
        }
        Err(ProvisionError::Failed {
            operation: operation.to_string(),
            diagnostics,
        }
        .into())
    }
}

impl<R: CommandRunner> Provisioner for TerraformProvisioner<R> {
    async fn configure(&self, platform: &str, rendered_backend: &str) -> Result<()> {
        std::fs::create_dir_all(&self.working_dir)
            .with_context(|| format!("creating {}", self.working_dir.display()))?;

        // The platform module sources live under the asset directory; the
        // configuration loader is responsible for putting them there.
        let main_tf = format!(
            "module \"{platform}\" {{\n  source = \"../modules/{platform}\"\n}}\n"
        );
        std::fs::write(self.working_dir.join("main.tf"), main_tf)
            .context("writing terraform module configuration")?;
        std::fs::write(self.working_dir.join("backend.tf"), rendered_backend)
            .context("writing terraform backend configuration")?;

        self.terraform("init", &["-no-color", "-input=false"]).await
    }

    async fn apply(&self) -> Result<()> {
        self.terraform("apply", &["-auto-approve", "-no-color", "-input=false"])
            .await
    }

    async fn destroy(&self) -> Result<()> {
        // Never configured, or local state never written: nothing to destroy.
        if !self.working_dir.is_dir() {
            return Ok(());
        }
        if !self.working_dir.join(STATE_FILE).exists()
            && !self.working_dir.join("backend.tf").exists()
        {
            return Ok(());
        }

        self.terraform("destroy", &["-auto-approve", "-no-color", "-input=false"])
            .await
    }
}
