//! # Arbiter Policy
//!
//! `arbiter_policy` is an embeddable access-control decision engine. Given
//! a role, an operation and a resource it answers whether access is
//! explicitly allowed, explicitly denied, or undetermined.
//!
//! Key concepts:
//!
//! 1. **Hierarchies**: Roles and resources form parent/child graphs. A rule
//!    on a general role or resource applies to every descendant.
//!
//! 2. **Rules**: Allow and deny rules keyed by exact
//!    (role, operation, resource) triples, optionally gated by an
//!    [`Assertion`] evaluated with caller parameters at decision time.
//!
//! 3. **Resolution**: Deny always wins. Multi-role resolution scans roles
//!    in order and stops at the first denial.
//!
//! ```
//! use arbiter_policy::{AccessCheck, Registry};
//!
//! let mut registry = Registry::new();
//! registry.add_role("user", &[] as &[&str]).unwrap();
//! registry.add_role("admin", &["user"]).unwrap();
//! registry.add_resource("server", &[] as &[&str]).unwrap();
//! registry.allow("user", "status", "server").unwrap();
//! registry.deny("admin", "format", "server").unwrap();
//!
//! let check = registry.resolve("admin", "status", "server", true, None).unwrap();
//! assert_eq!(check, AccessCheck::Allowed);
//!
//! let check = registry
//!     .resolve_any(&["user", "admin"], "format", "server", None)
//!     .unwrap();
//! assert_eq!(check, AccessCheck::Denied);
//! ```

pub mod engine;
pub mod model;
pub mod store;

// Re-export key types and traits for convenience
pub use arbiter_core::{AccessCheck, Error, Params, Permission, RegistryError, Result};
pub use engine::Registry;
pub use model::{Assertion, Effect, Rule};
pub use store::{Hierarchy, RuleSet};
