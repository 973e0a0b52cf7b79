//! Reply construction on top of `hickory_proto::op::Message`.

use ferrous_mockdns_domain::{DnsAnswer, DnsRecord, RecordData};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{rdata, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("Invalid record name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Failed to serialize DNS message: {0}")]
    Serialize(String),
}

/// Reply skeleton for `request`: same id and opcode, QR set, RD and CD
/// copied, first question echoed, no records.
pub fn reply_envelope(request: &Message, code: ResponseCode) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
    reply.set_recursion_desired(request.recursion_desired());
    reply.set_checking_disabled(request.checking_disabled());
    reply.set_response_code(code);

    if let Some(question) = request.queries().first() {
        reply.add_query(question.clone());
    }

    reply
}

/// NOERROR reply carrying the answer records in order, with TC applied.
pub fn build_answer_reply(request: &Message, answer: &DnsAnswer) -> Result<Message, WireError> {
    let mut reply = reply_envelope(request, ResponseCode::NoError);

    for record in &answer.records {
        reply.add_answer(to_hickory_record(record)?);
    }

    reply.set_truncated(answer.truncated);

    Ok(reply)
}

pub fn to_hickory_record(record: &DnsRecord) -> Result<Record, WireError> {
    let name = parse_name(&record.name)?;

    let rdata = match &record.data {
        RecordData::A(v4) => RData::A(rdata::A(*v4)),
        RecordData::AAAA(v6) => RData::AAAA(rdata::AAAA(*v6)),
        RecordData::CNAME(target) => RData::CNAME(rdata::CNAME(parse_name(target)?)),
    };

    Ok(Record::from_rdata(name, record.ttl, rdata))
}

/// Serialize a Message to wire format bytes
pub fn serialize(message: &Message) -> Result<Vec<u8>, WireError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message
        .emit(&mut encoder)
        .map_err(|e| WireError::Serialize(e.to_string()))?;

    Ok(buf)
}

fn parse_name(name: &str) -> Result<Name, WireError> {
    Name::from_str(name).map_err(|e| WireError::InvalidName {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
