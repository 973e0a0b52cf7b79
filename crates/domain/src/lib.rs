//! Ferrous MockDNS Domain Layer
pub mod config;
pub mod dns_answer;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod record_definition;
pub mod record_snapshot;

pub use config::{CliOverrides, Config, ConfigError, ResponderProfile};
pub use dns_answer::DnsAnswer;
pub use dns_protocol::Transport;
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use errors::{LoadErrorKind, RecordLoadError};
pub use record_definition::RecordDefinition;
pub use record_snapshot::RecordSnapshot;
