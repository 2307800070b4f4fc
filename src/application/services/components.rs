//! Ordered component installation.

use anyhow::Result;

use crate::application::ports::{ComponentInstaller, ProgressReporter};
use crate::domain::{ComponentError, ComponentSpec};

/// Install components in exactly their declared order, stopping at the
/// first failure.
///
/// Later components may depend on earlier ones being present, so no
/// reordering for parallelism is permitted. Already-installed components
/// are left in place when a later one fails; re-applying them on a retried
/// run is a no-op because the installer is idempotent.
///
/// Returns the names of the components that were installed.
///
/// # Errors
///
/// Returns a [`ComponentError`] naming the failing component. Components
/// after the failing one are not attempted.
pub async fn install_components(
    installer: &impl ComponentInstaller,
    components: &[ComponentSpec],
    reporter: &impl ProgressReporter,
) -> Result<Vec<String>> {
    let mut installed = Vec::with_capacity(components.len());

    for component in components {
        reporter.step(&format!("installing component '{}'...", component.name));
        installer
            .install(component)
            .await
            .map_err(|source| ComponentError {
                name: component.name.clone(),
                source,
            })?;
        reporter.success(&format!("component '{}' installed", component.name));
        installed.push(component.name.clone());
    }

    Ok(installed)
}

/// Resolve a user-supplied subset of component names against the declared
/// list and install them, preserving declared order. An empty selection
/// means all components.
///
/// # Errors
///
/// Returns a configuration error for a name that is not declared, or the
/// first [`ComponentError`] from installation.
pub async fn install_selected(
    installer: &impl ComponentInstaller,
    components: &[ComponentSpec],
    names: &[String],
    reporter: &impl ProgressReporter,
) -> Result<Vec<String>> {
    if names.is_empty() {
        return install_components(installer, components, reporter).await;
    }

    for name in names {
        if !components.iter().any(|c| &c.name == name) {
            anyhow::bail!("component '{name}' is not declared in the cluster configuration");
        }
    }

    let selected: Vec<ComponentSpec> = components
        .iter()
        .filter(|c| names.contains(&c.name))
        .cloned()
        .collect();

    install_components(installer, &selected, reporter).await
}
