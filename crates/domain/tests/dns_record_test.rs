use ferrous_mockdns_domain::{DnsQuery, DnsRecord, RecordData, RecordType, Transport};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;

#[test]
fn test_record_type_wire_numbers() {
    assert_eq!(RecordType::from_u16(1), RecordType::A);
    assert_eq!(RecordType::from_u16(28), RecordType::AAAA);
    assert_eq!(RecordType::from_u16(5), RecordType::CNAME);
    assert_eq!(RecordType::from_u16(15), RecordType::Other(15));
    assert_eq!(RecordType::Other(15).to_u16(), 15);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
}

#[test]
fn test_only_a_and_aaaa_are_address_types() {
    assert!(RecordType::A.is_address());
    assert!(RecordType::AAAA.is_address());
    assert!(!RecordType::CNAME.is_address());
    assert!(!RecordType::Other(16).is_address());
}

#[test]
fn test_record_type_parse_and_display() {
    assert_eq!(RecordType::from_str("aaaa").unwrap(), RecordType::AAAA);
    assert_eq!(RecordType::from_str("TYPE15").unwrap(), RecordType::Other(15));
    assert!(RecordType::from_str("bogus").is_err());
    assert_eq!(RecordType::Other(99).to_string(), "TYPE99");
    assert_eq!(RecordType::A.to_string(), "A");
}

#[test]
fn test_record_data_type() {
    let record = DnsRecord::new(
        Arc::from("a.test."),
        60,
        RecordData::A(Ipv4Addr::new(10, 0, 0, 1)),
    );
    assert_eq!(record.record_type(), RecordType::A);

    let cname = RecordData::CNAME(Arc::from("origin.test."));
    assert_eq!(cname.record_type(), RecordType::CNAME);
}

#[test]
fn test_query_canonical_name() {
    let query = DnsQuery::new("WWW.Example.com", RecordType::A, Transport::Udp);
    assert_eq!(query.canonical_name(), "www.example.com.");

    let query = DnsQuery::new("www.example.com.", RecordType::A, Transport::Tcp);
    assert_eq!(query.canonical_name(), "www.example.com.");
}

#[test]
fn test_only_udp_allows_truncation() {
    assert!(Transport::Udp.allows_truncation());
    assert!(!Transport::Tcp.allows_truncation());
}
