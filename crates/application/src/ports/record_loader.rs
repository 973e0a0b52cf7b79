use async_trait::async_trait;
use ferrous_mockdns_domain::{RecordLoadError, RecordSnapshot};
use std::path::Path;

#[async_trait]
pub trait RecordLoaderPort: Send + Sync {
    /// Read and parse a record file into a fresh snapshot.
    ///
    /// Either a complete snapshot is returned or nothing is; the loader never
    /// publishes.
    async fn load(&self, path: &Path) -> Result<RecordSnapshot, RecordLoadError>;
}
