use crate::DnsRecord;
use std::time::Duration;

/// Result of answering one query: records plus transport side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswer {
    pub records: Vec<DnsRecord>,

    /// Set the TC bit on the reply
    pub truncated: bool,

    /// Artificial latency to wait before replying
    pub delay: Option<Duration>,
}

impl DnsAnswer {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
