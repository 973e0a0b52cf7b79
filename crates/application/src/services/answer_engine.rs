use ferrous_mockdns_domain::{
    DnsAnswer, DnsQuery, DnsRecord, RecordData, RecordDefinition, RecordSnapshot, RecordType,
    ResponderProfile,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, trace};

/// Builds the answer section for a query from a record snapshot.
///
/// Pure: no I/O and no waiting. The injected delay is returned in the
/// answer and honoured by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerEngine {
    profile: ResponderProfile,
}

impl AnswerEngine {
    pub fn new(profile: ResponderProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> ResponderProfile {
        self.profile
    }

    pub fn answer(&self, query: &DnsQuery, snapshot: &RecordSnapshot) -> DnsAnswer {
        if !query.record_type.is_address() {
            debug!(domain = %query.domain, record_type = %query.record_type, "Not an A or AAAA query");
            return DnsAnswer::empty();
        }

        let name = query.canonical_name();
        let Some(definition) = snapshot.lookup(&name) else {
            debug!(domain = %name, "Domain not found");
            return DnsAnswer::empty();
        };

        let owner: Arc<str> = Arc::from(name);
        let mut records = self.address_records(&owner, query.record_type, definition);

        if self.profile.cname_enabled() {
            if let Some(target) = definition.cname_target() {
                records.push(DnsRecord::new(
                    Arc::clone(&owner),
                    definition.ttl,
                    RecordData::CNAME(Arc::from(target)),
                ));
            }
        }

        DnsAnswer {
            records,
            truncated: definition.tc && query.transport.allows_truncation(),
            delay: definition.delay(),
        }
    }

    fn address_records(
        &self,
        owner: &Arc<str>,
        record_type: RecordType,
        definition: &RecordDefinition,
    ) -> Vec<DnsRecord> {
        let v4_ttl = definition.v4_ttl();
        let v6_ttl = if self.profile.split_ttl_enabled() {
            definition.v6_ttl()
        } else {
            definition.ttl
        };

        definition
            .ips
            .iter()
            .filter_map(|text| match parse_address(text) {
                Some(address) => Some(address),
                None => {
                    trace!(host = %definition.host, ip = %text, "Skipping unparsable address");
                    None
                }
            })
            .filter_map(|address| match (record_type, address) {
                (RecordType::A, IpAddr::V4(v4)) => Some(DnsRecord::new(
                    Arc::clone(owner),
                    v4_ttl,
                    RecordData::A(v4),
                )),
                (RecordType::AAAA, IpAddr::V6(v6)) => Some(DnsRecord::new(
                    Arc::clone(owner),
                    v6_ttl,
                    RecordData::AAAA(v6),
                )),
                _ => None,
            })
            .collect()
    }
}

/// IPv4-mapped IPv6 text (`::ffff:a.b.c.d`) is classified as IPv4.
fn parse_address(text: &str) -> Option<IpAddr> {
    match text.parse::<IpAddr>().ok()? {
        IpAddr::V6(v6) => Some(
            v6.to_ipv4_mapped()
                .map(IpAddr::V4)
                .unwrap_or(IpAddr::V6(v6)),
        ),
        v4 @ IpAddr::V4(_) => Some(v4),
    }
}
