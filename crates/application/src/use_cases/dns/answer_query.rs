use crate::ports::RecordStorePort;
use crate::services::AnswerEngine;
use ferrous_mockdns_domain::{DnsAnswer, DnsQuery};
use std::sync::Arc;
use tracing::debug;

pub struct AnswerQueryUseCase {
    store: Arc<dyn RecordStorePort>,
    engine: AnswerEngine,
}

impl AnswerQueryUseCase {
    pub fn new(store: Arc<dyn RecordStorePort>, engine: AnswerEngine) -> Self {
        Self { store, engine }
    }

    /// Answer against the snapshot current at call time, then wait out the
    /// record's injected delay. The wait only suspends this query's task.
    pub async fn execute(&self, query: &DnsQuery) -> DnsAnswer {
        let snapshot = self.store.current();
        let answer = self.engine.answer(query, &snapshot);
        drop(snapshot);

        if let Some(delay) = answer.delay {
            debug!(domain = %query.domain, delay_ms = delay.as_millis() as u64, "Injecting latency");
            tokio::time::sleep(delay).await;
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            transport = %query.transport,
            answers = answer.records.len(),
            truncated = answer.truncated,
            "Query answered"
        );

        answer
    }
}
