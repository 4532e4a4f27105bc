//! Shared helpers for gateway integration tests.
#![allow(dead_code)]

pub mod fake_gateway;

use serde_json::{json, Value};

/// Event body in gateway wire format.
pub fn event_json(title: &str, description: &str, category_ids: &[u64]) -> Value {
    json!({
        "title": title,
        "description": description,
        "image": "http://x/y.png",
        "startTime": "2024-01-01T10:00",
        "endTime": "2024-01-01T12:00",
        "categoryIds": category_ids,
        "createdBy": 1,
    })
}
