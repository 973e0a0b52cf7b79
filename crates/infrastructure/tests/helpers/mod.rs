#![allow(dead_code, unused_imports)]

pub mod client;
pub mod server;

pub use client::{
    answer_ips, build_query, build_query_with_id, query_tcp, query_udp, send_udp_raw,
};
pub use server::{write_records, TestServer, SAMPLE_RECORDS};
