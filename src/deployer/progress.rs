//! Progress reporting hook for deployment runs.

/// Receives human-readable progress lines from the [`Deployer`](super::Deployer).
pub trait ProgressSink: Send + Sync {
    /// Called once per completed step.
    fn step(&self, message: &str);
}

/// Discards progress; the default for library use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn step(&self, _message: &str) {}
}
