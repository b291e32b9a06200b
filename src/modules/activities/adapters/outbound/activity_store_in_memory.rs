use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError, LoadedActivity,
};
use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct StoredActivity {
    activity: Activity,
    version: i64,
}

pub struct InMemoryActivityStore {
    seed: ActivityCatalog,
    inner: RwLock<BTreeMap<String, StoredActivity>>,
    offline: AtomicBool,
    delay_append_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn new(seed: ActivityCatalog) -> Self {
        let inner = RwLock::new(Self::stored(&seed));
        Self {
            seed,
            inner,
            offline: AtomicBool::new(false),
            delay_append_ms: AtomicU64::new(0),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Drops every roster change made since construction.
    pub async fn reset(&self) {
        *self.inner.write().await = Self::stored(&self.seed);
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_append_ms(&self, delay_ms: u64) {
        self.delay_append_ms.store(delay_ms, Ordering::SeqCst);
    }

    fn stored(seed: &ActivityCatalog) -> BTreeMap<String, StoredActivity> {
        seed.iter()
            .map(|(name, activity)| {
                (
                    name.clone(),
                    StoredActivity {
                        activity: activity.clone(),
                        version: 0,
                    },
                )
            })
            .collect()
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ActivityStoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(activity_name).map(|stored| LoadedActivity {
            activity: stored.activity.clone(),
            version: stored.version,
        }))
    }

    async fn append(
        &self,
        activity_name: &str,
        expected_version: i64,
        new_events: &[RosterEvent],
    ) -> Result<i64, ActivityStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let stored = guard
            .get_mut(activity_name)
            .ok_or_else(|| ActivityStoreError::UnknownActivity(activity_name.to_string()))?;
        if stored.version != expected_version {
            return Err(ActivityStoreError::VersionMismatch {
                expected: expected_version,
                actual: stored.version,
            });
        }
        for event in new_events.iter().cloned() {
            stored.activity = evolve(stored.activity.clone(), event);
            stored.version += 1;
        }
        Ok(stored.version)
    }
}

#[async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_all(&self) -> anyhow::Result<ActivityCatalog> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .map(|(name, stored)| (name.clone(), stored.activity.clone()))
            .collect())
    }
}
