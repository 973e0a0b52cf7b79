#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_mockdns_application::ports::{RecordLoaderPort, RecordStorePort};
use ferrous_mockdns_domain::{RecordDefinition, RecordLoadError, RecordSnapshot};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

pub struct MockRecordStore {
    snapshot: RwLock<Arc<RecordSnapshot>>,
    publish_count: Mutex<usize>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::with_records(vec![])
    }

    pub fn with_records(definitions: Vec<RecordDefinition>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(RecordSnapshot::from_definitions(definitions))),
            publish_count: Mutex::new(0),
        }
    }

    pub fn publish_count(&self) -> usize {
        *self.publish_count.lock().unwrap()
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStorePort for MockRecordStore {
    fn publish(&self, snapshot: Arc<RecordSnapshot>) {
        *self.snapshot.write().unwrap() = snapshot;
        *self.publish_count.lock().unwrap() += 1;
    }

    fn current(&self) -> Arc<RecordSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap())
    }
}

/// Loader that replays queued results, one per `load` call.
pub struct MockRecordLoader {
    results: Mutex<VecDeque<Result<Vec<RecordDefinition>, RecordLoadError>>>,
    requested_paths: Mutex<Vec<PathBuf>>,
}

impl MockRecordLoader {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            requested_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn push_records(&self, definitions: Vec<RecordDefinition>) {
        self.results.lock().unwrap().push_back(Ok(definitions));
    }

    pub fn push_error(&self, error: RecordLoadError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl Default for MockRecordLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordLoaderPort for MockRecordLoader {
    async fn load(&self, path: &Path) -> Result<RecordSnapshot, RecordLoadError> {
        self.requested_paths.lock().unwrap().push(path.to_path_buf());

        let next = self.results.lock().unwrap().pop_front();
        match next {
            Some(Ok(definitions)) => Ok(RecordSnapshot::from_definitions(definitions)),
            Some(Err(e)) => Err(e),
            None => Err(RecordLoadError::NotFound {
                path: path.display().to_string(),
                reason: "no result queued".to_string(),
            }),
        }
    }
}
