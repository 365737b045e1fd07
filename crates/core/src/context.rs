//! Explicit execution context.
//!
//! Operations receive the invoking node and its resolved parameters as a
//! value instead of reading them from ambient host state.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of the node an operation runs on behalf of.
///
/// Carried into errors so the caller can tell which node raised them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRef {
    pub name: String,
    pub node_type: String,
}

impl NodeRef {
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.node_type)
    }
}

/// Explicit execution context: the invoking node plus its resolved parameters.
///
/// Parameters are plain strings; resolving expressions or credentials is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeContext {
    node: NodeRef,
    parameters: BTreeMap<String, String>,
}

impl NodeContext {
    pub fn new(node: NodeRef) -> Self {
        Self {
            node,
            parameters: BTreeMap::new(),
        }
    }

    /// Builder-style parameter setter
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn node(&self) -> &NodeRef {
        &self.node
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Look up a parameter, falling back to `default` when it was never set
    pub fn parameter_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.parameter(name).unwrap_or(default)
    }
}
