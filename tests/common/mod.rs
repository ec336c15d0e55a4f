//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use reducer_kit::http::{HeaderFn, Response};
use serde_json::Value;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a fmt subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A 401 response whose `location` header points at `url`.
pub fn redirect_response(url: &'static str) -> Response {
    Response::new(401).with_headers(HeaderFn(move |name: &str| {
        (name == "location").then(|| url.to_string())
    }))
}

/// Response with a JSON text body.
pub fn text_response(status: u16, body: &str) -> Response {
    Response::new(status).with_text(body)
}

pub fn identity(data: Value, _meta: Value) -> Value {
    data
}
