use serde::Deserialize;

use crate::models::Role;

// A protected destination and the roles admitted to it, consumed
// verbatim from configuration. An empty role list means any
// authenticated role.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RouteRule {
    pub path: String,
    #[serde(default)]
    pub allowed_roles: Vec<Role>,
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    // Absent means the destination is unprotected.
    pub fn rule_for(&self, path: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.path == path)
    }
}

impl From<Vec<RouteRule>> for RouteTable {
    fn from(rules: Vec<RouteRule>) -> Self {
        Self::new(rules)
    }
}
