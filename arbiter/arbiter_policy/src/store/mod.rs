//! Registry storage.
//!
//! The two structures the registry is built from: hierarchy graphs for
//! roles and resources, and rule sets for allow and deny rules.

mod hierarchy;
mod rule_set;

pub use hierarchy::Hierarchy;
pub use rule_set::RuleSet;
