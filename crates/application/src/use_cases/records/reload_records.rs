use crate::ports::{RecordLoaderPort, RecordStorePort};
use ferrous_mockdns_domain::RecordLoadError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Load the record file and publish it as the current snapshot.
///
/// On failure nothing is published and the previous snapshot stays live.
pub struct ReloadRecordsUseCase {
    loader: Arc<dyn RecordLoaderPort>,
    store: Arc<dyn RecordStorePort>,
    path: PathBuf,
}

impl ReloadRecordsUseCase {
    pub fn new(
        loader: Arc<dyn RecordLoaderPort>,
        store: Arc<dyn RecordStorePort>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            loader,
            store,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of domains in the newly published snapshot.
    pub async fn execute(&self) -> Result<usize, RecordLoadError> {
        let snapshot = self.loader.load(&self.path).await?;
        let count = snapshot.len();

        self.store.publish(Arc::new(snapshot));

        info!(path = %self.path.display(), records = count, "Record file loaded");

        Ok(count)
    }
}
