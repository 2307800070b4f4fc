//! Unit tests for ordered component installation.

#![allow(clippy::expect_used)]

use berth_cli::application::services::components::{install_components, install_selected};

use crate::mocks::{NoopReporter, RecordingInstaller, component};

#[tokio::test]
async fn installs_every_component_in_declared_order() {
    let installer = RecordingInstaller::new();
    let components = vec![component("networking"), component("storage"), component("dns")];

    let installed = install_components(&installer, &components, &NoopReporter)
        .await
        .expect("all components install");

    assert_eq!(installed, vec!["networking", "storage", "dns"]);
    assert_eq!(installer.call_order(), installed);
}

#[tokio::test]
async fn stops_at_the_first_failure() {
    let installer = RecordingInstaller::failing_on("storage");
    let components = vec![component("networking"), component("storage"), component("dns")];

    let err = install_components(&installer, &components, &NoopReporter)
        .await
        .expect_err("storage must fail");

    assert!(err.to_string().contains("storage"));
    assert_eq!(installer.call_order(), vec!["networking", "storage"]);
    assert_eq!(installer.applied_components(), vec!["networking"]);
}

#[tokio::test]
async fn reinstalling_an_installed_component_is_a_no_op() {
    let installer = RecordingInstaller::new();
    let dns = component("dns");

    install_components(&installer, std::slice::from_ref(&dns), &NoopReporter)
        .await
        .expect("first install");
    install_components(&installer, std::slice::from_ref(&dns), &NoopReporter)
        .await
        .expect("second install of identical input must not error");

    assert_eq!(installer.call_order(), vec!["dns", "dns"]);
    assert_eq!(installer.applied_components(), vec!["dns"]);
}

#[tokio::test]
async fn selection_preserves_declared_order_not_argument_order() {
    let installer = RecordingInstaller::new();
    let components = vec![component("networking"), component("storage"), component("dns")];

    install_selected(
        &installer,
        &components,
        &["dns".to_string(), "networking".to_string()],
        &NoopReporter,
    )
    .await
    .expect("selection installs");

    assert_eq!(installer.call_order(), vec!["networking", "dns"]);
}

#[tokio::test]
async fn unknown_selection_fails_before_any_install() {
    let installer = RecordingInstaller::new();
    let components = vec![component("networking")];

    let err = install_selected(
        &installer,
        &components,
        &["metrics".to_string()],
        &NoopReporter,
    )
    .await
    .expect_err("unknown name must fail");

    assert!(err.to_string().contains("'metrics'"));
    assert!(installer.call_order().is_empty());
}

#[tokio::test]
async fn empty_selection_means_all_components() {
    let installer = RecordingInstaller::new();
    let components = vec![component("networking"), component("dns")];

    let installed = install_selected(&installer, &components, &[], &NoopReporter)
        .await
        .expect("all components install");

    assert_eq!(installed, vec!["networking", "dns"]);
}
