mod routes;

pub use routes::{RouteRule, RouteTable};

use crate::models::{EffectiveSession, Role};

// Navigation targets the gate can produce. Closed set: login for the
// unauthenticated, each role's own home for the wrong-role case.
pub const LOGIN: &str = "/login";
pub const WORKER_LOGIN: &str = "/worker/login";
pub const WORKER_DASHBOARD: &str = "/worker/dashboard";
pub const COMMERCIAL_DASHBOARD: &str = "/commercial-dashboard";
pub const PROFILE: &str = "/profile";
pub const HOME: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectTo(&'static str),
}

// Authorizes a navigation given the declared allowed roles for the
// destination. An empty allowed set means any authenticated role.
// Pure: no storage reads, no mutation; the warning log is advisory
// only.
pub fn authorize(session: &EffectiveSession, allowed_roles: &[Role]) -> AccessDecision {
    if !session.authenticated {
        return AccessDecision::RedirectTo(LOGIN);
    }
    if allowed_roles.is_empty() {
        return AccessDecision::Allow;
    }
    match &session.role {
        Some(role) if allowed_roles.contains(role) => AccessDecision::Allow,
        denied => {
            tracing::warn!(
                role = denied.as_ref().map(Role::as_str).unwrap_or("none"),
                allowed = ?allowed_roles.iter().map(Role::as_str).collect::<Vec<_>>(),
                "access denied, redirecting to role home"
            );
            AccessDecision::RedirectTo(role_home(denied.as_ref()))
        }
    }
}

// Smart redirect target: an authenticated user who is merely in the
// wrong place goes to their own home, never back to login.
fn role_home(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::Worker) => WORKER_DASHBOARD,
        Some(Role::Commercial) => COMMERCIAL_DASHBOARD,
        Some(Role::Individual) | Some(Role::Charity) => PROFILE,
        // Admin has no dedicated home route here; unrecognized and
        // missing roles fall back the same way.
        Some(Role::Admin) | Some(Role::Unknown(_)) | None => HOME,
    }
}
