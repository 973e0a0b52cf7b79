#![allow(dead_code)]
use ferrous_mockdns_domain::RecordDefinition;

pub struct RecordDefinitionBuilder {
    definition: RecordDefinition,
}

impl RecordDefinitionBuilder {
    pub fn new(host: &str) -> Self {
        Self {
            definition: RecordDefinition {
                host: host.to_string(),
                ttl: 300,
                ..Default::default()
            },
        }
    }

    pub fn ip(mut self, ip: &str) -> Self {
        self.definition.ips.push(ip.to_string());
        self
    }

    pub fn cname(mut self, cname: &str) -> Self {
        self.definition.cname = cname.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.definition.ttl = ttl;
        self
    }

    pub fn v6_ttl(mut self, ttl: u32) -> Self {
        self.definition.v6_ttl = ttl;
        self
    }

    pub fn sleep_ms(mut self, ms: u64) -> Self {
        self.definition.sleep_ms = ms;
        self
    }

    pub fn tc(mut self, tc: bool) -> Self {
        self.definition.tc = tc;
        self
    }

    pub fn build(self) -> RecordDefinition {
        self.definition
    }
}
