//! Route-pattern based authorization decisions.
//!
//! The policy table is static configuration: built once at startup, next to
//! the route declarations, and read-only afterwards. Protection is
//! declared per route prefix — unmatched routes default to public, so every
//! route that needs protection must be enumerated.

pub mod pattern;

use serde::{Deserialize, Serialize};

use storefront_entity::user::Role;

use crate::principal::Principal;

pub use pattern::RoutePattern;

/// What a route requires of its caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AccessRequirement {
    /// Anyone, including anonymous callers.
    Public,
    /// Any resolved principal.
    Authenticated,
    /// A resolved principal whose role set intersects the given roles.
    RequireRoles(Vec<Role>),
}

impl AccessRequirement {
    /// Rank used for the equal-specificity tie-break: protection wins
    /// over convenience.
    fn restrictiveness(&self) -> u8 {
        match self {
            Self::Public => 0,
            Self::Authenticated => 1,
            Self::RequireRoles(_) => 2,
        }
    }
}

/// The outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// The request may proceed to its handler.
    Allow,
    /// The route requires authentication and no principal is present (401).
    DenyUnauthenticated,
    /// The principal is authenticated but lacks a required role (403).
    DenyForbidden,
}

/// One row of the policy table.
#[derive(Debug, Clone)]
struct PolicyEntry {
    pattern: RoutePattern,
    requirement: AccessRequirement,
}

/// The static route-protection table.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicyTable {
    entries: Vec<PolicyEntry>,
}

impl RoutePolicyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route pattern with its requirement (builder style).
    pub fn route(mut self, pattern: &str, requirement: AccessRequirement) -> Self {
        self.entries.push(PolicyEntry {
            pattern: RoutePattern::parse(pattern),
            requirement,
        });
        self
    }

    /// Decides access for a request path and its resolved principal.
    ///
    /// The most specific matching pattern wins; at equal specificity the
    /// more restrictive requirement wins. An unmatched path is public.
    /// Authentication is always checked before roles, so a missing
    /// principal yields `DenyUnauthenticated` even on role-gated routes.
    pub fn decide(&self, path: &str, principal: Option<&Principal>) -> AccessDecision {
        let best = self
            .entries
            .iter()
            .filter(|e| e.pattern.matches(path))
            .max_by_key(|e| (e.pattern.specificity(), e.requirement.restrictiveness()));

        match best.map(|e| &e.requirement) {
            None | Some(AccessRequirement::Public) => AccessDecision::Allow,
            Some(AccessRequirement::Authenticated) => match principal {
                Some(_) => AccessDecision::Allow,
                None => AccessDecision::DenyUnauthenticated,
            },
            Some(AccessRequirement::RequireRoles(roles)) => match principal {
                None => AccessDecision::DenyUnauthenticated,
                Some(p) if p.has_any_role(roles) => AccessDecision::Allow,
                Some(_) => AccessDecision::DenyForbidden,
            },
        }
    }
}
