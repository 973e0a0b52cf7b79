use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One entry of the record file.
///
/// ```
/// use ferrous_mockdns_domain::RecordDefinition;
///
/// let record = RecordDefinition {
///     host: "a.test".into(),
///     ips: vec!["10.0.0.1".into(), "2001:db8::1".into()],
///     ttl: 60,
///     ..Default::default()
/// };
/// assert_eq!(record.fqdn(), "a.test.");
/// assert_eq!(record.v6_ttl(), 60);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordDefinition {
    /// Domain name without the trailing root dot
    pub host: String,

    /// Addresses in answer order; IPv4 and IPv6 may be mixed
    #[serde(default)]
    pub ips: Vec<String>,

    /// Canonical name target; empty means no CNAME record
    #[serde(default)]
    pub cname: String,

    /// TTL for A and CNAME records
    #[serde(default)]
    pub ttl: u32,

    /// TTL for AAAA records, 0 inherits `ttl`
    #[serde(default)]
    pub v6_ttl: u32,

    /// Delay injected before replying
    #[serde(default)]
    pub sleep_ms: u64,

    /// Force the TC bit on UDP replies
    #[serde(default)]
    pub tc: bool,
}

impl RecordDefinition {
    /// Snapshot key: lowercased host with the root dot appended.
    pub fn fqdn(&self) -> String {
        canonicalize(&self.host)
    }

    pub fn v4_ttl(&self) -> u32 {
        self.ttl
    }

    pub fn v6_ttl(&self) -> u32 {
        if self.v6_ttl != 0 {
            self.v6_ttl
        } else {
            self.ttl
        }
    }

    pub fn cname_target(&self) -> Option<String> {
        if self.cname.is_empty() {
            None
        } else {
            Some(format!("{}.", self.cname))
        }
    }

    pub fn delay(&self) -> Option<Duration> {
        (self.sleep_ms > 0).then(|| Duration::from_millis(self.sleep_ms))
    }
}

/// Lowercase a name and make sure it ends with exactly one root dot.
pub(crate) fn canonicalize(name: &str) -> String {
    let mut fqdn = name.trim_end_matches('.').to_ascii_lowercase();
    fqdn.push('.');
    fqdn
}
