//! Registry and resolution engine.
//!
//! `registry` holds registration; `resolver` adds the query operations to
//! the same `Registry` type.

mod registry;
mod resolver;

pub use registry::Registry;
