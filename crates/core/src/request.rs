//! Request and response records exchanged with the HTTP layer.
//!
//! The core only describes requests; sending them is left to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP methods used against the PostBin API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Outgoing request description, filled in before dispatch.
///
/// `url` is a path relative to the API base URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}

/// Full HTTP response handed to post-receive transforms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl FullResponse {
    /// Decode a response body: JSON when it parses, a plain string otherwise,
    /// `null` when empty.
    pub fn body_from_text(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }
}

/// One result record flowing out of an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionItem {
    pub json: Value,
}

impl ExecutionItem {
    pub fn new(json: Value) -> Self {
        Self { json }
    }
}

/// Split a response body into result items.
///
/// Arrays yield one item per element, `null` yields nothing, anything else is
/// a single item.
pub fn items_from_body(body: Value) -> Vec<ExecutionItem> {
    match body {
        Value::Null => Vec::new(),
        Value::Array(values) => values.into_iter().map(ExecutionItem::new).collect(),
        other => vec![ExecutionItem::new(other)],
    }
}
