//! Rule set.
//!
//! Maps exact permission triples to rules of a single effect. Lookups do
//! no hierarchy expansion; the resolver generates the candidate triples.

use arbiter_core::types::Permission;
use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Assertion, Effect, Rule};

/// The rules of one effect, keyed by permission.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// The effect every rule in this set has.
    effect: Effect,

    /// The rules, indexed by permission.
    rules: HashMap<Permission, Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new(effect: Effect) -> Self {
        Self {
            effect,
            rules: HashMap::new(),
        }
    }

    /// The effect of the rules in this set.
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Insert a rule, replacing any rule already bound to `permission`.
    ///
    /// # Returns
    ///
    /// The rule that was replaced, if any.
    pub fn put(
        &mut self,
        permission: Permission,
        assertion: Option<Arc<dyn Assertion>>,
    ) -> Option<Rule> {
        let rule = Rule::new(permission.clone(), assertion);
        self.rules.insert(permission, rule)
    }

    /// The rule bound to exactly `permission`.
    pub fn matching(&self, permission: &Permission) -> Option<&Rule> {
        self.rules.get(permission)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rules, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbiter_core::types::Params;

    #[test]
    fn test_put_and_match() {
        let mut rules = RuleSet::new(Effect::Allow);
        assert!(rules.is_empty());
        assert_eq!(rules.effect(), Effect::Allow);

        let permission = Permission::new("admin", "run", "server");
        assert!(rules.put(permission.clone(), None).is_none());

        let rule = rules.matching(&permission).unwrap();
        assert_eq!(rule.permission(), &permission);
        assert!(rule.applies("admin", "run", "server", &Params::new()));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_match_is_exact() {
        let mut rules = RuleSet::new(Effect::Deny);
        rules.put(Permission::new("admin", "", "server"), None);

        assert!(rules
            .matching(&Permission::new("admin", "run", "server"))
            .is_none());
        assert!(rules
            .matching(&Permission::new("staff", "", "server"))
            .is_none());
        assert!(rules
            .matching(&Permission::new("admin", "", "server"))
            .is_some());
    }

    #[test]
    fn test_put_overwrites_assertion() {
        let mut rules = RuleSet::new(Effect::Allow);
        let permission = Permission::new("admin", "run", "server");

        let never: Arc<dyn Assertion> = Arc::new(|_: &str, _: &str, _: &str, _: &Params| false);
        rules.put(permission.clone(), Some(never));
        assert!(!rules
            .matching(&permission)
            .unwrap()
            .applies("admin", "run", "server", &Params::new()));

        let replaced = rules.put(permission.clone(), None).unwrap();
        assert!(replaced.is_conditional());
        assert!(rules
            .matching(&permission)
            .unwrap()
            .applies("admin", "run", "server", &Params::new()));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.iter().count(), 1);
    }
}
