mod record_loader;
mod record_store;

pub use record_loader::RecordLoaderPort;
pub use record_store::RecordStorePort;
