//! Shared fixtures for structure integration tests
#![allow(dead_code)]

use std::sync::Once;

use ::common::structure::{Mapping, Structure};
use serde_json::json;

static TRACING: Once = Once::new();

/// Install a test subscriber once, honouring RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A document shaped like a record pulled from a document store
pub fn sample_document() -> Structure {
    json!({
        "success": true,
        "data": {
            "rank": "student",
            "age": 20,
            "profile": {
                "city": "geneva",
                "country": "ch",
                "tags": ["a", "b"],
            },
            "ids": [2820046943342890302u64, 4563046943342890302u64, 7],
        },
        "history": [
            {"year": 2019, "country": "fr"},
            {"year": 2021, "country": "ch"},
        ],
    })
}

/// Unwrap the object behind a `json!` literal
pub fn mapping(value: Structure) -> Mapping {
    match value {
        Structure::Object(map) => map,
        other => panic!("fixture must be a mapping, got {other}"),
    }
}
