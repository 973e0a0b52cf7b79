use super::{RecordType, Transport};
use std::sync::Arc;

/// DNS query (domain + record type + transport it was received on).
/// Uses `Arc<str>` so the name can be shared with answer records without copying.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub transport: Transport,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType, transport: Transport) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            transport,
        }
    }

    /// Lowercased, dot-terminated form of the queried name.
    pub fn canonical_name(&self) -> String {
        crate::record_definition::canonicalize(&self.domain)
    }
}
