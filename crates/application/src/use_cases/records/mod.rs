mod reload_records;

pub use reload_records::ReloadRecordsUseCase;
