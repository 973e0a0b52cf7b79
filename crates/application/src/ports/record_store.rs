use ferrous_mockdns_domain::RecordSnapshot;
use std::sync::Arc;

/// Holder of the snapshot currently visible to listeners.
///
/// Implementations must make `publish` and `current` safe to call from any
/// number of tasks, and must never expose a partially replaced snapshot.
pub trait RecordStorePort: Send + Sync {
    /// Atomically replace the visible snapshot
    fn publish(&self, snapshot: Arc<RecordSnapshot>);

    /// Snapshot visible at the time of the call
    fn current(&self) -> Arc<RecordSnapshot>;
}
