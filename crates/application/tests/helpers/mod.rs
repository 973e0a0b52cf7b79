#![allow(unused_imports)]

pub mod builders;
pub mod mock_repositories;

pub use builders::RecordDefinitionBuilder;
pub use mock_repositories::{MockRecordLoader, MockRecordStore};
