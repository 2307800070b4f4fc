//! Shared mock infrastructure for unit tests.
//!
//! Canned implementations of the application ports so each test file
//! doesn't re-define the same boilerplate. Recorders wrap their state in
//! `Mutex` so the mocks stay `Sync` for concurrent waits.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Result;
use berth_cli::application::ports::{
    ComponentInstaller, ProgressReporter, Provisioner, WorkloadApi,
};
use berth_cli::domain::{ComponentSpec, WorkloadKind, WorkloadStatus};

// ── Mock: no-op progress reporter ────────────────────────────────────────────

pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

// ── Mock: recording provisioner ──────────────────────────────────────────────

/// Records every call; optionally fails `apply`.
#[derive(Default)]
pub struct RecordingProvisioner {
    pub calls: Mutex<Vec<String>>,
    pub rendered_backend: Mutex<Option<String>>,
    pub fail_apply: bool,
}

impl RecordingProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_apply() -> Self {
        Self {
            fail_apply: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().expect("lock").push(call.to_string());
    }
}

impl Provisioner for RecordingProvisioner {
    async fn configure(&self, platform: &str, rendered_backend: &str) -> Result<()> {
        self.record(&format!("configure {platform}"));
        *self.rendered_backend.lock().expect("lock") = Some(rendered_backend.to_string());
        Ok(())
    }

    async fn apply(&self) -> Result<()> {
        self.record("apply");
        if self.fail_apply {
            anyhow::bail!("terraform apply failed:\nError: compute quota exceeded");
        }
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        self.record("destroy");
        Ok(())
    }
}

// ── Mock: provisioner that must never be reached ─────────────────────────────

/// Fails the test on any call. Used to prove a pipeline path touches no
/// collaborator.
pub struct UntouchableProvisioner;

impl Provisioner for UntouchableProvisioner {
    async fn configure(&self, _: &str, _: &str) -> Result<()> {
        panic!("configure must not be called");
    }

    async fn apply(&self) -> Result<()> {
        panic!("apply must not be called");
    }

    async fn destroy(&self) -> Result<()> {
        panic!("destroy must not be called");
    }
}

// ── Mock: scripted workload API ──────────────────────────────────────────────

/// One scripted poll observation.
pub enum Poll {
    Status(WorkloadStatus),
    /// A transient read error (API not answering yet).
    TransientError,
}

/// Plays back a script of poll results; the last entry repeats forever.
/// Counts polls so tests can assert how often the control plane was asked.
pub struct ScriptedApi {
    reachable: Mutex<VecDeque<bool>>,
    statuses: Mutex<VecDeque<Poll>>,
    pub reachable_polls: AtomicU32,
    pub status_polls: AtomicU32,
}

impl ScriptedApi {
    pub fn new(script: Vec<Poll>) -> Self {
        Self {
            reachable: Mutex::new(VecDeque::new()),
            statuses: Mutex::new(script.into()),
            reachable_polls: AtomicU32::new(0),
            status_polls: AtomicU32::new(0),
        }
    }

    /// Always reachable, workloads always fully ready.
    pub fn healthy() -> Self {
        Self::new(vec![Poll::Status(WorkloadStatus {
            ready: 1,
            desired: 1,
        })])
    }

    pub fn with_reachability(self, script: Vec<bool>) -> Self {
        *self.reachable.lock().expect("lock") = script.into();
        self
    }

    pub fn status_poll_count(&self) -> u32 {
        self.status_polls.load(Ordering::Relaxed)
    }

    pub fn reachable_poll_count(&self) -> u32 {
        self.reachable_polls.load(Ordering::Relaxed)
    }
}

impl WorkloadApi for ScriptedApi {
    async fn reachable(&self) -> Result<bool> {
        self.reachable_polls.fetch_add(1, Ordering::Relaxed);
        let mut script = self.reachable.lock().expect("lock");
        if script.len() > 1 {
            return Ok(script.pop_front().expect("non-empty"));
        }
        Ok(script.front().copied().unwrap_or(true))
    }

    async fn workload_status(
        &self,
        _kind: WorkloadKind,
        _namespace: &str,
        _name: &str,
    ) -> Result<WorkloadStatus> {
        self.status_polls.fetch_add(1, Ordering::Relaxed);
        let mut script = self.statuses.lock().expect("lock");
        let entry = if script.len() > 1 {
            script.pop_front().expect("non-empty")
        } else {
            match script.front() {
                Some(Poll::Status(s)) => Poll::Status(*s),
                Some(Poll::TransientError) | None => Poll::TransientError,
            }
        };
        match entry {
            Poll::Status(s) => Ok(s),
            Poll::TransientError => anyhow::bail!("connection refused"),
        }
    }
}

// ── Mock: recording component installer ──────────────────────────────────────

/// Records install order and keeps a set of applied components, so tests
/// can assert idempotent re-application and what survived a failure.
#[derive(Default)]
pub struct RecordingInstaller {
    pub install_calls: Mutex<Vec<String>>,
    pub applied: Mutex<Vec<String>>,
    pub fail_on: Option<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn call_order(&self) -> Vec<String> {
        self.install_calls.lock().expect("lock").clone()
    }

    pub fn applied_components(&self) -> Vec<String> {
        self.applied.lock().expect("lock").clone()
    }
}

impl ComponentInstaller for RecordingInstaller {
    async fn install(&self, component: &ComponentSpec) -> Result<()> {
        self.install_calls
            .lock()
            .expect("lock")
            .push(component.name.clone());
        if self.fail_on.as_deref() == Some(component.name.as_str()) {
            anyhow::bail!("manifest apply rejected by cluster");
        }
        // Re-applying an identical component is a no-op, as with the real
        // `kubectl apply` semantics.
        let mut applied = self.applied.lock().expect("lock");
        if !applied.contains(&component.name) {
            applied.push(component.name.clone());
        }
        Ok(())
    }
}

// ── Spec constructors ────────────────────────────────────────────────────────

pub fn component(name: &str) -> ComponentSpec {
    ComponentSpec {
        name: name.to_string(),
        manifest: serde_yaml::Value::Null,
    }
}
