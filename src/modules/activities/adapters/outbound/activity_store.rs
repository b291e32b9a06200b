use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityStoreError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

/// Write side of the activity catalog.
///
/// `append` only succeeds when `expected_version` still matches the version
/// the caller loaded, so a check made against a loaded activity holds at the
/// moment its events land.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError>;

    async fn append(
        &self,
        activity_name: &str,
        expected_version: i64,
        new_events: &[RosterEvent],
    ) -> Result<i64, ActivityStoreError>;
}
