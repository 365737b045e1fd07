//! Resource/operation catalogue of the PostBin node.
//!
//! Every operation plans its outgoing request from a [`NodeContext`] through
//! the URL builders, and says whether its response goes through the bin
//! transform afterwards.

use std::fmt;

use serde_json::Value;

use crate::context::NodeContext;
use crate::error::ValidationError;
use crate::request::{items_from_body, ExecutionItem, FullResponse, HttpMethod, RequestOptions};
use crate::transform::transform_bin_response;
use crate::urls::{
    build_bin_api_url, build_bin_test_url, build_request_url, POSTBIN_API_BASE_PATH,
    REQUEST_ID_PARAMETER,
};

/// Payload of a test request sent into a bin
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendPayload {
    pub method: HttpMethod,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create a new bin
    CreateBin,
    /// Get a bin's status
    GetBin,
    /// Delete a bin
    DeleteBin,
    /// Get a captured request by its id
    GetRequest,
    /// Get the oldest captured request and remove it from the bin
    RemoveFirstRequest,
    /// Send a test request into a bin
    SendRequest(SendPayload),
}

impl Operation {
    pub fn resource(&self) -> &'static str {
        match self {
            Operation::CreateBin | Operation::GetBin | Operation::DeleteBin => "bin",
            _ => "request",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateBin => "create",
            Operation::GetBin | Operation::GetRequest => "get",
            Operation::DeleteBin => "delete",
            Operation::RemoveFirstRequest => "removeFirst",
            Operation::SendRequest(_) => "send",
        }
    }

    /// Whether the response payload is a bin record to reshape
    pub fn transforms_response(&self) -> bool {
        matches!(self, Operation::CreateBin | Operation::GetBin)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource(), self.name())
    }
}

/// Build the outgoing request for an operation.
///
/// `GetRequest` reads `requestId` from the context; `RemoveFirstRequest`
/// ignores it and always asks for the oldest request.
pub fn plan_request(
    operation: &Operation,
    ctx: &NodeContext,
) -> Result<RequestOptions, ValidationError> {
    match operation {
        Operation::CreateBin => Ok(RequestOptions {
            url: POSTBIN_API_BASE_PATH.to_string(),
            ..RequestOptions::new(HttpMethod::Post)
        }),
        Operation::GetBin => build_bin_api_url(ctx, RequestOptions::new(HttpMethod::Get)),
        Operation::DeleteBin => build_bin_api_url(ctx, RequestOptions::new(HttpMethod::Delete)),
        Operation::GetRequest => build_request_url(ctx, RequestOptions::new(HttpMethod::Get)),
        Operation::RemoveFirstRequest => {
            let ctx = without_request_id(ctx);
            build_request_url(&ctx, RequestOptions::new(HttpMethod::Get))
        }
        Operation::SendRequest(payload) => {
            let options = RequestOptions {
                method: payload.method,
                query: payload.query.clone(),
                body: payload.body.clone(),
                ..RequestOptions::default()
            };
            build_bin_test_url(ctx, options)
        }
    }
}

/// Turn a response into result items, applying the bin transform when the
/// operation calls for it.
pub fn process_response(operation: &Operation, response: &FullResponse) -> Vec<ExecutionItem> {
    let items = items_from_body(response.body.clone());
    if operation.transforms_response() {
        transform_bin_response(items, response)
    } else {
        items
    }
}

fn without_request_id(ctx: &NodeContext) -> NodeContext {
    let mut stripped = NodeContext::new(ctx.node().clone());
    for (name, value) in ctx.parameters() {
        if name != REQUEST_ID_PARAMETER {
            stripped = stripped.with_parameter(name, value);
        }
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bin_id::BIN_ID_PARAMETER;
    use crate::context::NodeRef;
    use serde_json::json;

    const BIN: &str = "1699999999999-1699999999998";

    fn ctx() -> NodeContext {
        NodeContext::new(NodeRef::new("PostBin", "postBin"))
            .with_parameter(BIN_ID_PARAMETER, BIN)
    }

    #[test]
    fn test_plan_create_needs_no_bin() {
        let empty = NodeContext::new(NodeRef::new("PostBin", "postBin"));
        let options = plan_request(&Operation::CreateBin, &empty).unwrap();
        assert_eq!(options.method, HttpMethod::Post);
        assert_eq!(options.url, "/developers/postbin/api/bin");
    }

    #[test]
    fn test_plan_get_and_delete_bin() {
        let get = plan_request(&Operation::GetBin, &ctx()).unwrap();
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(get.url, format!("/developers/postbin/api/bin/{BIN}"));

        let delete = plan_request(&Operation::DeleteBin, &ctx()).unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.url, get.url);
    }

    #[test]
    fn test_plan_get_request() {
        let ctx = ctx().with_parameter(REQUEST_ID_PARAMETER, "abc123");
        let options = plan_request(&Operation::GetRequest, &ctx).unwrap();
        assert_eq!(
            options.url,
            format!("/developers/postbin/api/bin/{BIN}/req/abc123")
        );
    }

    #[test]
    fn test_plan_remove_first_ignores_request_id() {
        let ctx = ctx().with_parameter(REQUEST_ID_PARAMETER, "abc123");
        let options = plan_request(&Operation::RemoveFirstRequest, &ctx).unwrap();
        assert_eq!(
            options.url,
            format!("/developers/postbin/api/bin/{BIN}/req/shift")
        );
    }

    #[test]
    fn test_plan_send_request() {
        let payload = SendPayload {
            method: HttpMethod::Post,
            query: vec![("source".to_string(), "cli".to_string())],
            body: Some(json!({"hello": "world"})),
        };
        let options = plan_request(&Operation::SendRequest(payload.clone()), &ctx()).unwrap();
        assert_eq!(options.url, format!("/developers/postbin/{BIN}"));
        assert_eq!(options.method, HttpMethod::Post);
        assert_eq!(options.query, payload.query);
        assert_eq!(options.body, payload.body);
    }

    #[test]
    fn test_plan_rejects_invalid_bin() {
        let bad = NodeContext::new(NodeRef::new("PostBin", "postBin"))
            .with_parameter(BIN_ID_PARAMETER, "12345");
        for op in [
            Operation::GetBin,
            Operation::DeleteBin,
            Operation::GetRequest,
            Operation::RemoveFirstRequest,
            Operation::SendRequest(SendPayload::default()),
        ] {
            let err = plan_request(&op, &bad).unwrap_err();
            assert_eq!(err.message, "Bin ID format is not valid", "{op}");
        }
    }

    #[test]
    fn test_process_response_transforms_bins_only() {
        let response = FullResponse {
            status_code: 200,
            body: json!({"binId": BIN, "now": 1700000000000_u64, "expires": 1700086400000_u64}),
            ..FullResponse::default()
        };

        let items = process_response(&Operation::GetBin, &response);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].json["nowIso"], "2023-11-14T22:13:20.000Z");

        let items = process_response(&Operation::GetRequest, &response);
        assert_eq!(items[0].json, response.body);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::CreateBin.to_string(), "bin:create");
        assert_eq!(Operation::RemoveFirstRequest.to_string(), "request:removeFirst");
    }
}
