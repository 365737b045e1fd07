//! Core library for postbin
//!
//! This crate implements the **Functional Core** of the postbin application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`postbin_core`** (this crate): Pure transformation functions with zero I/O
//! - **`postbin`**: HTTP dispatch, argument handling and output (the Imperative Shell)
//!
//! Everything here is a plain function of its inputs. Functions that need to
//! know "which node is running" or "what parameters were given" take an
//! explicit [`context::NodeContext`] instead of reaching for ambient state.
//!
//! # Module Organization
//!
//! - [`bin_id`]: Extract a bin identifier from free-form input
//! - [`urls`]: Build PostBin API paths into outgoing request options
//! - [`transform`]: Reshape bin status records
//! - [`date`]: JavaScript-compatible date parsing and ISO rendering
//! - [`operations`]: The bin/request operations and their request plans
//! - [`request`]: Request options, responses and result items
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use postbin_core::context::{NodeContext, NodeRef};
//! use postbin_core::operations::{plan_request, Operation};
//!
//! let ctx = NodeContext::new(NodeRef::new("PostBin", "postBin"))
//!     .with_parameter("binId", "Bin '1699999999999-1699999999998'.");
//!
//! let options = plan_request(&Operation::GetBin, &ctx)?;
//! assert_eq!(options.url, "/developers/postbin/api/bin/1699999999999-1699999999998");
//! ```

pub mod bin_id;
pub mod context;
pub mod date;
pub mod error;
pub mod operations;
pub mod request;
pub mod transform;
pub mod urls;

pub use error::ValidationError;
