//! PostBin URL builders.
//!
//! Each builder resolves the bin identifier from the node context and writes a
//! path relative to the API base into the request options. Nothing else in the
//! options is touched, and resolver failures are returned as-is.

use crate::bin_id::parse_bin_id;
use crate::context::NodeContext;
use crate::error::ValidationError;
use crate::request::RequestOptions;

pub const POSTBIN_BASE_PATH: &str = "/developers/postbin";
pub const POSTBIN_API_BASE_PATH: &str = "/developers/postbin/api/bin";

/// Public site URL, used for the links embedded in transformed bins
pub const POSTBIN_WEB_BASE_URL: &str = "https://www.toptal.com/developers/postbin/";
pub const POSTBIN_VIEW_BASE_URL: &str = "https://www.toptal.com/developers/postbin/b/";

pub const REQUEST_ID_PARAMETER: &str = "requestId";

/// Request id used when none is given: PostBin answers `shift` with the
/// oldest captured request and removes it from the bin.
pub const DEFAULT_REQUEST_ID: &str = "shift";

pub fn bin_api_path(bin_id: &str) -> String {
    format!("{POSTBIN_API_BASE_PATH}/{bin_id}")
}

pub fn bin_test_path(bin_id: &str) -> String {
    format!("{POSTBIN_BASE_PATH}/{bin_id}")
}

pub fn request_path(bin_id: &str, request_id: &str) -> String {
    format!("{POSTBIN_API_BASE_PATH}/{bin_id}/req/{request_id}")
}

/// Point the request at the bin status endpoint
pub fn build_bin_api_url(
    ctx: &NodeContext,
    mut options: RequestOptions,
) -> Result<RequestOptions, ValidationError> {
    let bin_id = parse_bin_id(ctx)?;
    options.url = bin_api_path(&bin_id);
    Ok(options)
}

/// Point the request at the bin itself, where test requests are captured
pub fn build_bin_test_url(
    ctx: &NodeContext,
    mut options: RequestOptions,
) -> Result<RequestOptions, ValidationError> {
    let bin_id = parse_bin_id(ctx)?;
    options.url = bin_test_path(&bin_id);
    Ok(options)
}

/// Point the request at one captured request of the bin.
///
/// The request id is used verbatim and defaults to [`DEFAULT_REQUEST_ID`].
pub fn build_request_url(
    ctx: &NodeContext,
    mut options: RequestOptions,
) -> Result<RequestOptions, ValidationError> {
    let request_id = ctx.parameter_or(REQUEST_ID_PARAMETER, DEFAULT_REQUEST_ID);
    let bin_id = parse_bin_id(ctx)?;
    options.url = request_path(&bin_id, request_id);
    Ok(options)
}
