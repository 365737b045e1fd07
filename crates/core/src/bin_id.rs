//! Bin identifier extraction.
//!
//! A bin identifier is two 13-digit numbers joined by a hyphen
//! (e.g. `1699999999999-1699999999998`). Users paste it in many shapes: bare,
//! inside a full PostBin URL, or inside the `Bin '<id>'.` message PostBin
//! prints on creation. The resolver finds the first identifier anywhere in the
//! input and returns it untouched.

use std::sync::OnceLock;

use regex::Regex;

use crate::context::{NodeContext, NodeRef};
use crate::error::ValidationError;

/// Name of the node parameter holding the raw bin identifier
pub const BIN_ID_PARAMETER: &str = "binId";

// ASCII word boundaries and digits only; Unicode letters and digits must not
// glue onto an identifier.
const BIN_ID_PATTERN: &str = r"(?-u:\b)[0-9]{13}-[0-9]{13}(?-u:\b)";

fn bin_id_regex() -> &'static Regex {
    static RE_BIN_ID: OnceLock<Regex> = OnceLock::new();
    RE_BIN_ID.get_or_init(|| Regex::new(BIN_ID_PATTERN).unwrap())
}

/// Find the first (leftmost) bin identifier inside `raw`.
pub fn find_bin_id(raw: &str) -> Option<&str> {
    bin_id_regex().find(raw).map(|m| m.as_str())
}

/// Resolve a bin identifier from raw user input.
///
/// Fails with [`ValidationError::invalid_bin_id`] attributed to `node` when the
/// input holds no identifier.
pub fn resolve_bin_id(node: &NodeRef, raw: &str) -> Result<String, ValidationError> {
    find_bin_id(raw)
        .map(str::to_string)
        .ok_or_else(|| ValidationError::invalid_bin_id(node))
}

/// Resolve the bin identifier from the `binId` parameter of a node context.
///
/// A missing parameter is treated like an empty one and fails validation.
pub fn parse_bin_id(ctx: &NodeContext) -> Result<String, ValidationError> {
    resolve_bin_id(ctx.node(), ctx.parameter_or(BIN_ID_PARAMETER, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIN: &str = "1699999999999-1699999999998";

    fn node() -> NodeRef {
        NodeRef::new("PostBin", "postBin")
    }

    #[test]
    fn test_resolve_bare_id() {
        assert_eq!(resolve_bin_id(&node(), BIN).unwrap(), BIN);
    }

    #[test]
    fn test_resolve_id_from_creation_message() {
        let raw = "Bin '1699999999999-1699999999998'.";
        assert_eq!(resolve_bin_id(&node(), raw).unwrap(), BIN);
    }

    #[test]
    fn test_resolve_id_from_url() {
        let raw = "https://www.toptal.com/developers/postbin/b/1699999999999-1699999999998";
        assert_eq!(resolve_bin_id(&node(), raw).unwrap(), BIN);
    }

    #[test]
    fn test_leftmost_match_wins() {
        let raw = "1111111111111-2222222222222 and 3333333333333-4444444444444";
        assert_eq!(
            resolve_bin_id(&node(), raw).unwrap(),
            "1111111111111-2222222222222"
        );
    }

    #[test]
    fn test_wrong_digit_counts_rejected() {
        for raw in [
            "169999999999-1699999999998",
            "1699999999999-169999999999",
            "16999999999990-1699999999998",
            "1699999999999-16999999999980",
            "1699999999999_1699999999998",
        ] {
            assert!(resolve_bin_id(&node(), raw).is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn test_word_characters_break_the_boundary() {
        assert!(find_bin_id("x1699999999999-1699999999998").is_none());
        assert!(find_bin_id("1699999999999-1699999999998_").is_none());
    }

    #[test]
    fn test_non_ascii_neighbours_do_not_break_the_boundary() {
        assert_eq!(find_bin_id("é1699999999999-1699999999998é"), Some(BIN));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are \d in Unicode mode
        assert!(find_bin_id("١٦٩٩٩٩٩٩٩٩٩٩٩-١٦٩٩٩٩٩٩٩٩٩٩٨").is_none());
    }

    #[test]
    fn test_no_match_is_validation_error() {
        let err = resolve_bin_id(&node(), "not a bin").unwrap_err();
        assert_eq!(err, ValidationError::invalid_bin_id(&node()));
    }

    #[test]
    fn test_parse_bin_id_from_context() {
        let ctx = NodeContext::new(node()).with_parameter(BIN_ID_PARAMETER, format!(" {BIN} "));
        assert_eq!(parse_bin_id(&ctx).unwrap(), BIN);
    }

    #[test]
    fn test_parse_bin_id_missing_parameter() {
        let ctx = NodeContext::new(node());
        assert!(parse_bin_id(&ctx).is_err());
    }
}
