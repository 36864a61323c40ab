use std::collections::HashSet;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use primaflow_core::models::{AssessmentResponse, ContactInfo, ResponsePatch};
use primaflow_core::snapshot_keys;

use crate::backend::SnapshotBackend;
use crate::error::StoreError;
use crate::snapshot;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Debounce window for coalescing rapid updates into one write.
    pub debounce: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            debounce: Duration::from_millis(300),
        }
    }
}

/// Owns the session's single mutable response record.
///
/// Updates merge in call order; persistence is coalesced behind a
/// cancelable debounce timer keyed by dirty group. `flush` must be
/// awaited on step unmount (and before the final routing decision) so no
/// in-memory-only edit is lost.
pub struct ResponseStore {
    state: Arc<Mutex<AssessmentResponse>>,
    backend: Arc<dyn SnapshotBackend>,
    config: StoreConfig,
    dirty: Arc<StdMutex<HashSet<&'static str>>>,
    pending: StdMutex<Option<JoinHandle<()>>>,
}

impl ResponseStore {
    pub fn new(backend: Arc<dyn SnapshotBackend>, config: StoreConfig) -> Self {
        ResponseStore {
            state: Arc::new(Mutex::new(AssessmentResponse::default())),
            backend,
            config,
            dirty: Arc::new(StdMutex::new(HashSet::new())),
            pending: StdMutex::new(None),
        }
    }

    /// Merge a partial patch and schedule a debounced write for the
    /// affected groups. The timer restarts on every update.
    pub async fn update(&self, patch: ResponsePatch) {
        let groups = snapshot::groups_for(&patch);

        {
            let mut state = self.state.lock().await;
            state.apply(patch);
        }

        if groups.is_empty() {
            return;
        }
        self.dirty.lock().unwrap().extend(groups);
        self.schedule_write();
    }

    /// Set contact details. Volatile only — never persisted, so no write
    /// is scheduled.
    pub async fn set_contact(&self, contact: ContactInfo) {
        self.state.lock().await.contact = Some(contact);
    }

    /// Wipe contact fields from memory.
    pub async fn clear_sensitive(&self) {
        self.state.lock().await.clear_contact();
    }

    /// Clone of the latest merged response.
    pub async fn response(&self) -> AssessmentResponse {
        self.state.lock().await.clone()
    }

    /// Cancel any pending debounce timer and write all dirty groups now.
    pub async fn flush(&self) -> Result<(), StoreError> {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
        write_dirty(&self.state, &self.backend, &self.dirty).await
    }

    /// Reconstruct state from persisted snapshots. Called once at step
    /// mount. A group that fails to parse is discarded and removed from
    /// the backend — corruption is never fatal.
    pub async fn restore(&self) -> Result<AssessmentResponse, StoreError> {
        let mut restored = AssessmentResponse::default();

        for key in snapshot_keys::ALL {
            let raw = match self.backend.load(key) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(e) => {
                    warn!(key, error = %e, "snapshot read failed, skipping group");
                    continue;
                }
            };
            if let Err(e) = snapshot::restore_group(&mut restored, key, &raw) {
                warn!(key, error = %e, "corrupt snapshot discarded");
                if let Err(e) = self.backend.remove(key) {
                    warn!(key, error = %e, "could not clear corrupt snapshot");
                }
            }
        }

        let mut state = self.state.lock().await;
        // Contact fields never come back from a snapshot; keep whatever
        // is in volatile memory.
        restored.contact = state.contact.take();
        *state = restored.clone();
        Ok(restored)
    }

    fn schedule_write(&self) {
        let state = Arc::clone(&self.state);
        let backend = Arc::clone(&self.backend);
        let dirty = Arc::clone(&self.dirty);
        let debounce = self.config.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if let Err(e) = write_dirty(&state, &backend, &dirty).await {
                warn!(error = %e, "debounced snapshot write failed");
            }
        });

        // Restarting the timer: the previous pending write is canceled,
        // its dirty groups are still marked and picked up by this one.
        if let Some(previous) = self.pending.lock().unwrap().replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for ResponseStore {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}

async fn write_dirty(
    state: &Mutex<AssessmentResponse>,
    backend: &Arc<dyn SnapshotBackend>,
    dirty: &StdMutex<HashSet<&'static str>>,
) -> Result<(), StoreError> {
    // Drain the dirty set only while holding the state lock. The lock is
    // the last suspension point, so an abort cannot strand drained keys
    // unwritten, and any group marked dirty before the drain was applied
    // before this clone.
    let state = state.lock().await;
    let keys: Vec<&'static str> = dirty.lock().unwrap().drain().collect();
    if keys.is_empty() {
        return Ok(());
    }
    let response = state.clone();
    drop(state);

    for key in keys {
        let raw = snapshot::capture_group(&response, key)?;
        backend.save(key, &raw)?;
        debug!(key, "snapshot written");
    }
    Ok(())
}
