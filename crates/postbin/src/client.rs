use crate::prelude::{eprintln, *};
use postbin_core::context::{NodeContext, NodeRef};
use postbin_core::operations::{plan_request, process_response, Operation};
use postbin_core::request::{ExecutionItem, FullResponse, HttpMethod, RequestOptions};

/// Default PostBin host; API paths are appended to it
pub const DEFAULT_BASE_URL: &str = "https://www.toptal.com";

const NODE_NAME: &str = "PostBin";
const NODE_TYPE: &str = "postbin-cli";

/// Result of running one operation end to end
#[derive(Debug, Clone)]
pub struct OperationOutput {
    pub response: FullResponse,
    pub items: Vec<ExecutionItem>,
}

/// Fresh node context for a CLI invocation
pub fn node_context() -> NodeContext {
    NodeContext::new(NodeRef::new(NODE_NAME, NODE_TYPE))
}

/// Create the HTTP client used for PostBin calls
pub fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("postbin/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

pub fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Absolute URL for a planned request
pub fn request_url(base_url: &str, options: &RequestOptions) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), options.url)
}

/// Send a planned request and collect the full response.
///
/// Non-success statuses are returned as [`Error::Http`] carrying the body.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    options: &RequestOptions,
) -> Result<FullResponse> {
    let url = request_url(base_url, options);
    log::debug!("{} {}", options.method.as_str(), url);

    let mut request = client.request(to_reqwest_method(options.method), &url);
    if !options.query.is_empty() {
        request = request.query(&options.query);
    }
    if let Some(body) = &options.body {
        request = request.json(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to send request to {url}: {e}")))?;

    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Network(format!("Failed to read response from {url}: {e}")))?;

    log::debug!("{} {} -> {}", options.method.as_str(), url, status);

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            body: text,
        }
        .into());
    }

    Ok(FullResponse {
        status_code: status.as_u16(),
        headers,
        body: FullResponse::body_from_text(&text),
    })
}

/// Plan, dispatch and post-process one operation
pub async fn run_operation(
    operation: &Operation,
    ctx: &NodeContext,
    global: &crate::Global,
) -> Result<OperationOutput> {
    let options = plan_request(operation, ctx).map_err(Error::from)?;

    if global.verbose {
        eprintln!(
            "{}: {} {}",
            operation,
            options.method.as_str(),
            request_url(&global.base_url, &options)
        );
    }

    let client = create_client()?;
    let response = execute(&client, &global.base_url, &options).await?;
    let items = process_response(operation, &response);

    Ok(OperationOutput { response, items })
}
