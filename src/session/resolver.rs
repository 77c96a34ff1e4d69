use crate::models::{CredentialSets, EffectiveSession, Role};

// Collapses the two credential sets into the one identity used for
// authorization. Worker sessions win the tie on purpose: on a shared
// device a stale regular-user session must not shadow an active
// worker session. Total and infallible; partial or malformed data
// resolves to unauthenticated.
pub fn resolve(creds: &CredentialSets) -> EffectiveSession {
    if creds.worker.is_authenticated() {
        return EffectiveSession::authenticated(Role::Worker);
    }
    if creds.user.is_authenticated() {
        if let Some(role) = &creds.user.role {
            return EffectiveSession::authenticated(role.clone());
        }
    }
    EffectiveSession::anonymous()
}
