//! Access resolution.
//!
//! Single-role resolution expands the role and the resource into their
//! ancestor closures and checks every (role, operation, resource)
//! candidate against the deny and allow rule sets. A deny that applies
//! ends resolution immediately, so the outcome does not depend on the
//! order candidates are visited in.
//!
//! Multi-role resolution scans roles in the given order. The order
//! matters: the first role that resolves to `Denied` ends the scan.

use arbiter_core::error::Result;
use arbiter_core::types::{AccessCheck, Params, Permission, WILDCARD_OPERATION};
use tracing::trace;

use super::registry::Registry;

impl Registry {
    /// Resolve access for a single role.
    ///
    /// When `check_allow` is `false` only deny rules are consulted, so the
    /// result is either `Denied` or `Unknown`.
    ///
    /// # Errors
    ///
    /// `UnknownRole` or `UnknownResource` if either is empty or
    /// unregistered. No assertion is evaluated in that case.
    pub fn resolve(
        &self,
        role: &str,
        operation: &str,
        resource: &str,
        check_allow: bool,
        params: Option<&Params>,
    ) -> Result<AccessCheck> {
        self.ensure_role(role)?;
        self.ensure_resource(resource)?;

        let empty = Params::new();
        let params = params.unwrap_or(&empty);

        let candidates = self.candidates(role, operation, resource);
        let check = self.evaluate(candidates, role, operation, resource, check_allow, params);

        trace!(role, operation, resource, check_allow, %check, "Resolved access");
        Ok(check)
    }

    /// Resolve access for an ordered list of roles.
    ///
    /// * If no role has allowed access yet and every remaining role is
    ///   denial-only, the result is `Denied` without evaluating them.
    /// * A role resolving to `Denied` ends the scan with `Denied`; later
    ///   roles are never consulted.
    /// * Once a role has allowed access, later roles are only checked for
    ///   denials.
    ///
    /// # Errors
    ///
    /// The first error returned for any role, with no partial result.
    pub fn resolve_any<S: AsRef<str>>(
        &self,
        roles: &[S],
        operation: &str,
        resource: &str,
        params: Option<&Params>,
    ) -> Result<AccessCheck> {
        // remaining_denial_only[i]: every role in roles[i..] is denial-only
        let mut remaining_denial_only = vec![true; roles.len() + 1];
        for (i, role) in roles.iter().enumerate().rev() {
            remaining_denial_only[i] =
                remaining_denial_only[i + 1] && self.is_denial_only(role.as_ref());
        }

        let mut check = AccessCheck::Unknown;

        for (i, role) in roles.iter().enumerate() {
            let role = role.as_ref();

            if !check.is_allowed() && remaining_denial_only[i] {
                trace!(
                    role,
                    operation,
                    resource,
                    remaining = roles.len() - i,
                    "Remaining roles are denial-only"
                );
                return Ok(AccessCheck::Denied);
            }

            match self.resolve(role, operation, resource, check.is_unknown(), params)? {
                AccessCheck::Unknown => {}
                AccessCheck::Denied => {
                    trace!(role, operation, resource, "Role denied access");
                    return Ok(AccessCheck::Denied);
                }
                AccessCheck::Allowed => check = AccessCheck::Allowed,
            }
        }

        Ok(check)
    }

    /// Every (role, operation, resource) triple that could hold a rule
    /// relevant to the request.
    fn candidates(&self, role: &str, operation: &str, resource: &str) -> Vec<Permission> {
        let roles = self.roles.ancestors(role);
        let resources = self.resources.ancestors(resource);
        let operations: &[&str] = if operation == WILDCARD_OPERATION {
            &[WILDCARD_OPERATION]
        } else {
            &[WILDCARD_OPERATION, operation]
        };

        let mut candidates = Vec::with_capacity(roles.len() * operations.len() * resources.len());
        for r in &roles {
            for o in operations {
                for s in &resources {
                    candidates.push(Permission::new(*r, *o, *s));
                }
            }
        }

        candidates
    }

    /// Check candidates against the rule sets.
    ///
    /// Assertions see the requested role, operation and resource, not the
    /// candidate they were matched through.
    fn evaluate<I>(
        &self,
        candidates: I,
        role: &str,
        operation: &str,
        resource: &str,
        check_allow: bool,
        params: &Params,
    ) -> AccessCheck
    where
        I: IntoIterator<Item = Permission>,
    {
        let mut check = AccessCheck::Unknown;

        for permission in candidates {
            if let Some(rule) = self.denied.matching(&permission) {
                if rule.applies(role, operation, resource, params) {
                    return AccessCheck::Denied;
                }
            }

            if check_allow {
                if let Some(rule) = self.allowed.matching(&permission) {
                    if rule.applies(role, operation, resource, params) {
                        check = AccessCheck::Allowed;
                    }
                }
            }
        }

        check
    }
}
