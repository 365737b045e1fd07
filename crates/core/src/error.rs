use thiserror::Error;

use crate::context::NodeRef;

/// User-facing validation failure, attributed to the node that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{node}: {message}")]
pub struct ValidationError {
    pub node: NodeRef,
    pub message: String,
    pub description: String,
}

impl ValidationError {
    pub fn new(node: NodeRef, message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            node,
            message: message.into(),
            description: description.into(),
        }
    }

    /// The error raised when no bin identifier can be found in the input
    pub fn invalid_bin_id(node: &NodeRef) -> Self {
        Self::new(
            node.clone(),
            "Bin ID format is not valid",
            "Please check the provided Bin ID and try again.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bin_id_error() {
        let err = ValidationError::invalid_bin_id(&NodeRef::new("Fetch bin", "postBin"));
        assert_eq!(err.message, "Bin ID format is not valid");
        assert_eq!(
            err.description,
            "Please check the provided Bin ID and try again."
        );
        assert_eq!(err.node.name, "Fetch bin");
        assert_eq!(
            err.to_string(),
            "Fetch bin (postBin): Bin ID format is not valid"
        );
    }
}
