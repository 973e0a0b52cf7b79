use ferrous_mockdns_application::services::AnswerEngine;
use ferrous_mockdns_application::use_cases::{AnswerQueryUseCase, ReloadRecordsUseCase};
use ferrous_mockdns_domain::Config;
use ferrous_mockdns_infrastructure::dns::DnsServerHandler;
use ferrous_mockdns_infrastructure::records::{ArcSwapRecordStore, JsonRecordLoader};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub store: Arc<ArcSwapRecordStore>,
    pub reload: Arc<ReloadRecordsUseCase>,
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    /// Wire store, loader and use cases. The store starts empty; the
    /// caller performs the initial load through `reload`.
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(ArcSwapRecordStore::empty());
        let loader = Arc::new(JsonRecordLoader::new());

        let reload = Arc::new(ReloadRecordsUseCase::new(
            loader,
            store.clone(),
            config.records.path.clone(),
        ));

        let engine = AnswerEngine::new(config.records.profile);
        let answer = Arc::new(AnswerQueryUseCase::new(store.clone(), engine));
        let handler = Arc::new(DnsServerHandler::new(answer));

        info!(profile = %engine.profile(), "DNS services initialized");

        Self {
            store,
            reload,
            handler,
        }
    }
}
