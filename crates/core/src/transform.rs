//! Reshape PostBin bin records.
//!
//! The bin endpoint answers with `binId`, `now` and `expires` (plus whatever
//! else PostBin adds). Callers get a flatter record with ISO renderings of
//! both timestamps and ready-made links to the bin.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::date::JsDate;
use crate::request::{ExecutionItem, FullResponse};
use crate::urls::{POSTBIN_VIEW_BASE_URL, POSTBIN_WEB_BASE_URL};

/// Transformed bin record.
///
/// Source fields are copied verbatim; a field missing from the source is
/// left out of the serialized record.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransformedBin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now_timestamp: Option<Value>,
    pub now_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_timestamp: Option<Value>,
    pub expires_iso: String,
    pub request_url: String,
    pub view_url: String,
}

impl TransformedBin {
    /// JSON payload of the record, with absent source fields left out
    pub fn into_json(self) -> Value {
        let mut record = Map::new();
        if let Some(bin_id) = self.bin_id {
            record.insert("binId".to_string(), bin_id);
        }
        if let Some(now) = self.now_timestamp {
            record.insert("nowTimestamp".to_string(), now);
        }
        record.insert("nowIso".to_string(), Value::String(self.now_iso));
        if let Some(expires) = self.expires_timestamp {
            record.insert("expiresTimestamp".to_string(), expires);
        }
        record.insert("expiresIso".to_string(), Value::String(self.expires_iso));
        record.insert("requestUrl".to_string(), Value::String(self.request_url));
        record.insert("viewUrl".to_string(), Value::String(self.view_url));
        Value::Object(record)
    }
}

/// Transform a single bin record
pub fn transform_bin(record: &Value) -> TransformedBin {
    let bin_id = record.get("binId");
    let now = record.get("now");
    let expires = record.get("expires");
    let bin_id_text = concat_text(bin_id);

    TransformedBin {
        bin_id: bin_id.cloned(),
        now_timestamp: now.cloned(),
        now_iso: JsDate::from_value(now).to_iso_string(),
        expires_timestamp: expires.cloned(),
        expires_iso: JsDate::from_value(expires).to_iso_string(),
        request_url: format!("{POSTBIN_WEB_BASE_URL}{bin_id_text}"),
        view_url: format!("{POSTBIN_VIEW_BASE_URL}{bin_id_text}"),
    }
}

/// Replace every item's payload with its transformed bin record.
///
/// One output item per input item, in the same order. The full response is
/// accepted for parity with other post-receive hooks and is not read.
pub fn transform_bin_response(
    items: Vec<ExecutionItem>,
    _response: &FullResponse,
) -> Vec<ExecutionItem> {
    items
        .into_iter()
        .map(|item| {
            let transformed = transform_bin(&item.json);
            ExecutionItem::new(transformed.into_json())
        })
        .collect()
}

/// Text a value contributes when concatenated onto a string, following
/// JavaScript's `String(value)`. A missing value reads as `undefined`.
fn concat_text(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                v => concat_text(Some(v)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}
