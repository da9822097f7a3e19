#![allow(dead_code)]

use std::path::PathBuf;

use certinfo::cert::Certificate;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("Failed to read fixture")
}

pub fn load_cert(name: &str) -> Certificate {
    Certificate::new(fixture(name)).expect("Failed to parse fixture certificate")
}
