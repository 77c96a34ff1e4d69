use super::Role;

// The single derived identity all authorization decisions run
// against. Never persisted; recomputed from the credential sets on
// every navigation and on each session-changed notification.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveSession {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl EffectiveSession {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
        }
    }

    pub fn authenticated(role: Role) -> Self {
        Self {
            authenticated: true,
            role: Some(role),
        }
    }

    pub fn is_worker(&self) -> bool {
        self.authenticated && self.role == Some(Role::Worker)
    }
}
