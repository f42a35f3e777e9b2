//! Shared test utilities for paygate integration tests

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use paygate::Response;
use std::io::Write;

/// Gzip-compress a byte slice the way the gateway compresses bodies
pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

/// Build an already-unpacked response from raw parts
pub async fn unpacked<B: Into<Vec<u8>>>(status: u16, status_text: &str, body: B) -> Response {
    let mut response = Response::from_parts(status, status_text, body);
    response.unpack_body().await.expect("unpack_body");
    response
}
