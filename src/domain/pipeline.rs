//! Pipeline stages and per-stage outcomes, for reporting only.

/// The ordered stages of the install pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveBackend,
    ValidateBackend,
    RenderBackend,
    ConfigureWorkingDir,
    Apply,
    Verify,
    InstallComponents,
}

impl Stage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ResolveBackend => "resolve backend",
            Self::ValidateBackend => "validate backend",
            Self::RenderBackend => "render backend",
            Self::ConfigureWorkingDir => "configure working directory",
            Self::Apply => "provisioning apply",
            Self::Verify => "verify cluster",
            Self::InstallComponents => "install components",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a completed stage did. Not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Completed,
    /// Components applied by the install-components stage, in order.
    ComponentsInstalled(Vec<String>),
}

/// Per-stage record returned by a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub stage: Stage,
    pub outcome: StageOutcome,
}

impl PipelineResult {
    #[must_use]
    pub fn completed(stage: Stage) -> Self {
        Self {
            stage,
            outcome: StageOutcome::Completed,
        }
    }
}
