use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feature set used when answering.
///
/// `Basic` mirrors the stripped-down responder: no CNAME records, a single
/// TTL for both address families, and no file watching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderProfile {
    #[default]
    Full,
    Basic,
}

impl ResponderProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponderProfile::Full => "full",
            ResponderProfile::Basic => "basic",
        }
    }

    pub fn cname_enabled(&self) -> bool {
        matches!(self, ResponderProfile::Full)
    }

    pub fn split_ttl_enabled(&self) -> bool {
        matches!(self, ResponderProfile::Full)
    }

    pub fn auto_reload_enabled(&self) -> bool {
        matches!(self, ResponderProfile::Full)
    }
}

impl fmt::Display for ResponderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponderProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(ResponderProfile::Full),
            "basic" => Ok(ResponderProfile::Basic),
            _ => Err(format!("Invalid profile: {} (expected full or basic)", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    /// JSON record file
    #[serde(default = "default_records_path")]
    pub path: String,

    /// Reload the record file when it changes
    #[serde(default = "default_true")]
    pub auto_reload: bool,

    #[serde(default)]
    pub profile: ResponderProfile,
}

impl RecordsConfig {
    /// Auto-reload as requested, unless the profile does not support it.
    pub fn watch_enabled(&self) -> bool {
        self.auto_reload && self.profile.auto_reload_enabled()
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            path: default_records_path(),
            auto_reload: true,
            profile: ResponderProfile::Full,
        }
    }
}

fn default_records_path() -> String {
    "record.json".to_string()
}

fn default_true() -> bool {
    true
}
