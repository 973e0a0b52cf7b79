use arc_swap::ArcSwap;
use ferrous_mockdns_application::ports::RecordStorePort;
use ferrous_mockdns_domain::RecordSnapshot;
use std::sync::Arc;

/// Lock-free holder of the current snapshot.
///
/// Readers get an `Arc` to whatever was published last; a publish never
/// waits for readers and readers never observe a half-built map.
pub struct ArcSwapRecordStore {
    snapshot: ArcSwap<RecordSnapshot>,
}

impl ArcSwapRecordStore {
    pub fn new(initial: RecordSnapshot) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(initial),
        }
    }

    pub fn empty() -> Self {
        Self::new(RecordSnapshot::empty())
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }
}

impl Default for ArcSwapRecordStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl RecordStorePort for ArcSwapRecordStore {
    fn publish(&self, snapshot: Arc<RecordSnapshot>) {
        self.snapshot.store(snapshot);
    }

    fn current(&self) -> Arc<RecordSnapshot> {
        self.snapshot.load_full()
    }
}
