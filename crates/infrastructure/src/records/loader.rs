use async_trait::async_trait;
use ferrous_mockdns_application::ports::RecordLoaderPort;
use ferrous_mockdns_domain::{RecordDefinition, RecordLoadError, RecordSnapshot};
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// Reads the JSON record file:
///
/// ```text
/// [{"host":"example.com","ips":["1.2.3.4","::1"],"cname":"","ttl":300,"v6_ttl":0,"sleep_ms":0,"tc":false}]
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordLoader;

impl JsonRecordLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordLoaderPort for JsonRecordLoader {
    async fn load(&self, path: &Path) -> Result<RecordSnapshot, RecordLoadError> {
        let display = path.display().to_string();

        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| RecordLoadError::NotFound {
                path: display.clone(),
                reason: e.to_string(),
            })?;

        let definitions = parse_bytes(&contents).map_err(|reason| RecordLoadError::Malformed {
            path: display.clone(),
            reason,
        })?;

        log_duplicates(&definitions);

        Ok(RecordSnapshot::from_definitions(definitions))
    }
}

/// Parse the record file contents into definitions, in file order.
pub fn parse_records(contents: &str) -> Result<Vec<RecordDefinition>, String> {
    parse_bytes(contents.as_bytes())
}

/// Invalid UTF-8 is reported as a JSON error, not an I/O error.
fn parse_bytes(contents: &[u8]) -> Result<Vec<RecordDefinition>, String> {
    serde_json::from_slice(contents).map_err(|e| e.to_string())
}

fn log_duplicates(definitions: &[RecordDefinition]) {
    let mut seen = FxHashSet::default();
    for definition in definitions {
        let fqdn = definition.fqdn();
        if !seen.insert(fqdn) {
            debug!(host = %definition.host, "Duplicate host in record file, last definition wins");
        }
    }
}
