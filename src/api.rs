use std::collections::HashMap;

use chrono::NaiveDate;

use crate::access;
use crate::errors::{redirect, AppError, AppResult};
use crate::session::SessionStore;

// Which credential set an authenticated call belongs to. A rejected
// call only ever terminates its own domain's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialDomain {
    User,
    Worker,
}

impl CredentialDomain {
    pub fn login_path(&self) -> &'static str {
        match self {
            CredentialDomain::User => access::LOGIN,
            CredentialDomain::Worker => access::WORKER_LOGIN,
        }
    }
}

// Handles the response status of an authenticated call. A 401 or 403
// means the token is stale: clear that domain's credentials (which
// emits the session-changed notification) and hand back the redirect
// to that domain's login page. Any other status is the caller's
// problem.
pub fn handle_api_error(
    store: &SessionStore,
    domain: CredentialDomain,
    status: u16,
) -> Option<String> {
    if status != 401 && status != 403 {
        return None;
    }
    tracing::warn!(status, ?domain, "authenticated call rejected, clearing session");
    match domain {
        CredentialDomain::User => store.logout_user(),
        CredentialDomain::Worker => store.logout_worker(),
    }
    let err = AppError::Auth("Session expired, please log in again".to_string());
    Some(redirect::with_error(domain.login_path(), &err))
}

// Decodes the pickup-count query response: ISO date string -> count.
// Feed the result to DailyPickupCounts::reconcile.
pub fn parse_daily_counts(body: &str) -> AppResult<HashMap<NaiveDate, u32>> {
    Ok(serde_json::from_str(body)?)
}
