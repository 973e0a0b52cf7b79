use crate::dns::record_type_map::RecordTypeMapper;
use crate::dns::wire_response;
use ferrous_mockdns_application::use_cases::AnswerQueryUseCase;
use ferrous_mockdns_domain::{DnsQuery, Transport};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use std::sync::Arc;
use tracing::{debug, error};

/// Turns one wire query into one wire reply, independent of transport.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<AnswerQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when the packet should be dropped without a reply.
    pub async fn handle(&self, bytes: &[u8], transport: Transport) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(transport = %transport, error = %e, len = bytes.len(), "Dropping undecodable packet");
                return None;
            }
        };

        if request.message_type() == MessageType::Response {
            debug!(transport = %transport, id = request.id(), "Dropping DNS response sent to server");
            return None;
        }

        if request.op_code() != OpCode::Query {
            debug!(transport = %transport, op_code = ?request.op_code(), "Unsupported opcode");
            return encode_error(&request, ResponseCode::NotImp);
        }

        let Some(question) = request.queries().first() else {
            debug!(transport = %transport, id = request.id(), "Query without question");
            return encode_error(&request, ResponseCode::FormErr);
        };

        let query = DnsQuery::new(
            question.name().to_ascii(),
            RecordTypeMapper::from_hickory(question.query_type()),
            transport,
        );

        debug!(domain = %query.domain, record_type = %query.record_type, transport = %transport, "DNS query received");

        let answer = self.use_case.execute(&query).await;

        let encoded = wire_response::build_answer_reply(&request, &answer)
            .and_then(|reply| wire_response::serialize(&reply));

        match encoded {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!(domain = %query.domain, error = %e, "Failed to build reply");
                encode_error(&request, ResponseCode::ServFail)
            }
        }
    }
}

fn encode_error(request: &Message, code: ResponseCode) -> Option<Vec<u8>> {
    let reply = wire_response::reply_envelope(request, code);
    match wire_response::serialize(&reply) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(code = ?code, error = %e, "Failed to encode error reply");
            None
        }
    }
}
