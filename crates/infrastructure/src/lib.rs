//! Ferrous MockDNS Infrastructure Layer
pub mod dns;
pub mod records;
