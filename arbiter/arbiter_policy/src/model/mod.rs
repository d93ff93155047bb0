//! Policy models.
//!
//! This module defines rules, their effects and the assertion trait.

pub mod rule;

pub use rule::{Assertion, Effect, Rule, Unconditional, UNCONDITIONAL};
