use ferrous_mockdns_application::ports::RecordStorePort;
use ferrous_mockdns_application::services::AnswerEngine;
use ferrous_mockdns_application::use_cases::{AnswerQueryUseCase, ReloadRecordsUseCase};
use ferrous_mockdns_domain::{RecordSnapshot, ResponderProfile};
use ferrous_mockdns_infrastructure::dns::{DnsServerHandler, TcpListener, UdpListener};
use ferrous_mockdns_infrastructure::records::{parse_records, ArcSwapRecordStore, JsonRecordLoader};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinHandle;

pub const SAMPLE_RECORDS: &str = r#"[
  {"host":"a.test","ips":["10.0.0.1","2001:db8::1"],"ttl":60,"v6_ttl":120},
  {"host":"trunc.test","ips":["10.0.0.2"],"ttl":30,"tc":true},
  {"host":"alias.test","ips":["10.0.0.3"],"cname":"target.test","ttl":45},
  {"host":"slow.test","ips":["10.0.0.4"],"ttl":10,"sleep_ms":300}
]"#;

pub fn write_records(path: &Path, json: &str) {
    std::fs::write(path, json).unwrap();
}

/// UDP and TCP listeners on ephemeral loopback ports over one store.
pub struct TestServer {
    pub udp_addr: SocketAddr,
    pub tcp_addr: SocketAddr,
    pub store: Arc<ArcSwapRecordStore>,
    pub records_path: PathBuf,
    pub reload: Arc<ReloadRecordsUseCase>,
    pub handler: Arc<DnsServerHandler>,
    _dir: TempDir,
    tasks: Vec<JoinHandle<()>>,
}

impl TestServer {
    pub async fn start(json: &str) -> Self {
        Self::start_with_profile(json, ResponderProfile::Full).await
    }

    pub async fn start_with_profile(json: &str, profile: ResponderProfile) -> Self {
        let dir = TempDir::new().unwrap();
        let records_path = dir.path().join("record.json");
        write_records(&records_path, json);

        let snapshot = RecordSnapshot::from_definitions(parse_records(json).unwrap());
        let store = Arc::new(ArcSwapRecordStore::new(snapshot));

        let answer = Arc::new(AnswerQueryUseCase::new(
            store.clone() as Arc<dyn RecordStorePort>,
            AnswerEngine::new(profile),
        ));
        let reload = Arc::new(ReloadRecordsUseCase::new(
            Arc::new(JsonRecordLoader::new()),
            store.clone(),
            records_path.clone(),
        ));
        let handler = Arc::new(DnsServerHandler::new(answer));

        let loopback: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let udp = UdpListener::bind(loopback).unwrap();
        let tcp = TcpListener::bind(loopback).unwrap();
        let udp_addr = udp.local_addr();
        let tcp_addr = tcp.local_addr();

        let udp_handler = handler.clone();
        let tcp_handler = handler.clone();
        let tasks = vec![
            tokio::spawn(async move {
                let _ = udp.serve(udp_handler).await;
            }),
            tokio::spawn(async move {
                let _ = tcp.serve(tcp_handler).await;
            }),
        ];

        Self {
            udp_addr,
            tcp_addr,
            store,
            records_path,
            reload,
            handler,
            _dir: dir,
            tasks,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
