//! Data types used throughout Arbiter.
//!
//! - **access**: permission triples, assertion parameters and decisions
//! - **node**: role/resource hierarchy kinds

pub mod access;
pub mod node;

pub use access::{AccessCheck, Params, Permission, WILDCARD_OPERATION};
pub use node::NodeKind;
