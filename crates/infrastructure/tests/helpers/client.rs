use ferrous_mockdns_infrastructure::dns::transport::tcp::{
    read_with_length_prefix, send_with_length_prefix,
};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use tokio::net::{TcpStream, UdpSocket};

const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn build_query(domain: &str, record_type: RecordType) -> Vec<u8> {
    build_query_with_id(0x1234, domain, record_type)
}

pub fn build_query_with_id(id: u16, domain: &str, record_type: RecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    encode(&message)
}

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

pub async fn query_udp(server: SocketAddr, packet: &[u8]) -> Message {
    let bytes = send_udp_raw(server, packet)
        .await
        .expect("no UDP reply before timeout");
    Message::from_vec(&bytes).unwrap()
}

/// Send one datagram and wait for a reply; `None` on timeout.
pub async fn send_udp_raw(server: SocketAddr, packet: &[u8]) -> Option<Vec<u8>> {
    send_udp_with_timeout(server, packet, CLIENT_TIMEOUT).await
}

pub async fn send_udp_with_timeout(
    server: SocketAddr,
    packet: &[u8],
    timeout: Duration,
) -> Option<Vec<u8>> {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(packet, server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    match tokio::time::timeout(timeout, socket.recv_from(&mut buf)).await {
        Ok(Ok((len, _))) => Some(buf[..len].to_vec()),
        _ => None,
    }
}

pub async fn query_tcp(server: SocketAddr, packet: &[u8]) -> Message {
    let mut stream = TcpStream::connect(server).await.unwrap();
    send_with_length_prefix(&mut stream, packet).await.unwrap();

    let bytes = tokio::time::timeout(CLIENT_TIMEOUT, read_with_length_prefix(&mut stream))
        .await
        .expect("no TCP reply before timeout")
        .unwrap();
    Message::from_vec(&bytes).unwrap()
}

/// Addresses from the answer section in order, ignoring non-address records.
pub fn answer_ips(message: &Message) -> Vec<IpAddr> {
    message
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
            _ => None,
        })
        .collect()
}
