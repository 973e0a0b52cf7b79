pub mod dns;
pub mod records;

pub use dns::AnswerQueryUseCase;
pub use records::ReloadRecordsUseCase;
