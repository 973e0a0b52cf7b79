pub mod loader;
pub mod store;
pub mod watcher;

pub use loader::{parse_records, JsonRecordLoader};
pub use store::ArcSwapRecordStore;
pub use watcher::{RecordFileWatcher, WatcherHandle};
