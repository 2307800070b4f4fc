//! Unit tests for the destroy pipeline.

#![allow(clippy::expect_used)]

use berth_cli::application::services::destroy::destroy_cluster;
use berth_cli::domain::ConfigError;

use crate::mocks::{NoopReporter, RecordingProvisioner, UntouchableProvisioner};

#[tokio::test]
async fn unconfirmed_destroy_touches_no_collaborator() {
    // UntouchableProvisioner panics on any call, failing the test if the
    // confirmation gate lets anything through.
    let err = destroy_cluster(&UntouchableProvisioner, false, &NoopReporter)
        .await
        .expect_err("must require confirmation");

    assert!(
        err.downcast_ref::<ConfigError>()
            .is_some_and(|e| matches!(e, ConfigError::ConfirmationRequired)),
        "expected the confirmation-required error, got: {err:#}"
    );
    assert!(err.to_string().contains("--confirm"));
}

#[tokio::test]
async fn confirmed_destroy_invokes_the_driver_once() {
    let provisioner = RecordingProvisioner::new();

    destroy_cluster(&provisioner, true, &NoopReporter)
        .await
        .expect("destroy succeeds");

    assert_eq!(provisioner.calls(), vec!["destroy"]);
}
