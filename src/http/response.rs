//! Response unwrapping and redirect detection.
//!
//! ```text
//! Response ──status_filter──→ envelope ──split data/meta──→ handler(data, meta)
//!              │
//!              ├─ empty        → {}
//!              ├─ 401          → { "redirect_to": location }
//!              ├─ 2xx          → decoded body
//!              └─ other status → decoded body if any, else {}
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::{json, Value};
use thiserror::Error;

use super::status::{is_success, is_unauthorized, HasStatus};
use crate::action::{
    action_creator_or_new, empty_object, or_empty, Action, ActionCreator, CreatorSource,
};

/// Errors that can occur while decoding a response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Raw response body: still encoded, or already decoded by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Json(Value),
}

/// Header access by name.
pub trait HeaderLookup: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

impl HeaderLookup for HashMap<String, String> {
    /// Exact match first, then ASCII case-insensitive.
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name)
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .cloned()
    }
}

/// Adapts a lookup function to [`HeaderLookup`].
pub struct HeaderFn<F>(pub F);

impl<F> HeaderLookup for HeaderFn<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

/// Response descriptor handed over by the transport.
#[derive(Default)]
pub struct Response {
    pub status: Option<u16>,
    pub value: Option<Body>,
    pub headers: Option<Box<dyn HeaderLookup>>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.value = Some(Body::Text(body.into()));
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.value = Some(Body::Json(body));
        self
    }

    pub fn with_headers<H>(mut self, headers: H) -> Self
    where
        H: HeaderLookup + 'static,
    {
        self.headers = Some(Box::new(headers));
        self
    }

    /// Build a descriptor from an untyped record.
    ///
    /// Reads `status`, `value` and a `headers` object of string values.
    /// Anything that is not an object yields an empty descriptor.
    pub fn from_json(record: &Value) -> Self {
        let Value::Object(map) = record else {
            return Self::default();
        };

        let value = match map.get("value") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(Body::Text(text.clone())),
            Some(other) => Some(Body::Json(other.clone())),
        };

        let headers = map.get("headers").and_then(Value::as_object).map(|h| {
            let lookup: HashMap<String, String> = h
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect();
            Box::new(lookup) as Box<dyn HeaderLookup>
        });

        Self {
            status: record.status(),
            value,
            headers,
        }
    }

    /// True when there is no status, no body and no headers.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.value.is_none() && self.headers.is_none()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.as_ref().and_then(|h| h.get(name))
    }
}

impl HasStatus for Response {
    fn status(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("value", &self.value)
            .field("has_headers", &self.headers.is_some())
            .finish()
    }
}

/// Decode JSON text. An empty string decodes to `{}`.
pub fn parse(text: &str) -> Result<Value, ResponseError> {
    if text.is_empty() {
        return Ok(empty_object());
    }
    Ok(serde_json::from_str(text)?)
}

/// Decode text bodies; pass already decoded bodies through.
pub fn parse_if_string(body: &Body) -> Result<Value, ResponseError> {
    match body {
        Body::Text(text) => parse(text),
        Body::Json(value) => Ok(value.clone()),
    }
}

/// Decoded body of `response`, or `{}` when it has none.
pub fn encode_response(response: &Response) -> Result<Value, ResponseError> {
    match &response.value {
        Some(body) => parse_if_string(body),
        None => Ok(empty_object()),
    }
}

/// Classify a response and extract its envelope.
pub fn status_filter(response: Option<&Response>) -> Result<Value, ResponseError> {
    let Some(response) = response.filter(|r| !r.is_empty()) else {
        return Ok(empty_object());
    };

    if is_unauthorized(response) {
        let location = response.header("location");
        tracing::debug!(location = ?location, "Unauthorized response, redirecting");
        return Ok(json!({ "redirect_to": location }));
    }

    if !is_success(response) {
        tracing::debug!(
            status = ?response.status,
            has_body = response.value.is_some(),
            "Response outside 2xx, decoding body anyway"
        );
    }

    encode_response(response)
}

/// Receives the unwrapped `(data, meta)` pair of a response.
pub trait ResponseHandler {
    type Output;

    fn handle(&self, data: Value, meta: Value) -> Self::Output;
}

impl<F, T> ResponseHandler for F
where
    F: Fn(Value, Value) -> T,
{
    type Output = T;

    fn handle(&self, data: Value, meta: Value) -> T {
        self(data, meta)
    }
}

impl ResponseHandler for ActionCreator {
    type Output = Action;

    /// Wrap the response data into an action of this creator's type.
    fn handle(&self, data: Value, meta: Value) -> Action {
        self.create(Some(data), Some(meta))
    }
}

/// Unwraps responses and feeds them to a [`ResponseHandler`].
#[derive(Debug, Clone)]
pub struct FetchCallback<H> {
    handler: H,
}

impl<H: ResponseHandler> FetchCallback<H> {
    pub fn call(&self, response: Option<&Response>) -> Result<H::Output, ResponseError> {
        let envelope = status_filter(response)?;
        let (data, meta) = split_envelope(envelope);
        Ok(self.handler.handle(data, meta))
    }
}

/// `data` if present, else the whole envelope; `meta` defaults to `{}`.
fn split_envelope(envelope: Value) -> (Value, Value) {
    let meta = or_empty(envelope.get("meta").cloned());
    let has_data = envelope.get("data").is_some_and(|data| !data.is_null());
    if !has_data {
        return (envelope, meta);
    }
    (envelope["data"].clone(), meta)
}

pub fn fetch_callback<H: ResponseHandler>(handler: H) -> FetchCallback<H> {
    FetchCallback { handler }
}

/// [`fetch_callback`] that wraps the result into an action.
pub fn fetch_action_callback(source: impl Into<CreatorSource>) -> FetchCallback<ActionCreator> {
    fetch_callback(action_creator_or_new(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(parse("").unwrap(), json!({}));
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        assert!(matches!(parse("{nope"), Err(ResponseError::Decode(_))));
    }

    #[test]
    fn test_parse_if_string_passes_decoded_through() {
        let decoded = json!({ "data": [1] });
        assert_eq!(parse_if_string(&Body::Json(decoded.clone())).unwrap(), decoded);
        assert_eq!(
            parse_if_string(&Body::Text("{\"data\":[1]}".into())).unwrap(),
            decoded
        );
    }

    #[test]
    fn test_status_filter_empty_inputs() {
        assert_eq!(status_filter(None).unwrap(), json!({}));
        assert_eq!(status_filter(Some(&Response::default())).unwrap(), json!({}));
    }

    #[test]
    fn test_status_filter_redirect_without_location() {
        let response = Response::new(401);
        assert_eq!(
            status_filter(Some(&response)).unwrap(),
            json!({ "redirect_to": null })
        );
    }

    #[test]
    fn test_status_filter_returns_envelope_on_success() {
        let response = Response::new(204).with_text("");
        assert_eq!(status_filter(Some(&response)).unwrap(), json!({}));
    }

    #[test]
    fn test_split_envelope_null_data_uses_envelope() {
        let (data, meta) = split_envelope(json!({ "data": null, "meta": null }));
        assert_eq!(data, json!({ "data": null, "meta": null }));
        assert_eq!(meta, json!({}));
    }

    #[test]
    fn test_header_map_lookup_is_case_insensitive() {
        let headers = HashMap::from([("Location".to_string(), "/login".to_string())]);
        assert_eq!(HeaderLookup::get(&headers, "location").as_deref(), Some("/login"));
    }
}
