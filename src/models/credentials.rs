use serde::{Deserialize, Serialize};

use super::Role;

// The two credential sets authenticate differently and that asymmetry
// is part of the existing contract: the user set trusts its explicit
// logged-in flag, the worker set trusts token presence plus an exact
// role match. Kept as two distinct shapes so the difference is visible
// in the types instead of buried in field checks.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub logged_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerCredentials {
    pub token: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialSets {
    pub user: UserCredentials,
    pub worker: WorkerCredentials,
}

impl UserCredentials {
    // The flag is the authoritative signal for this set; a role must
    // also be present or the session is unusable for authorization.
    pub fn is_authenticated(&self) -> bool {
        self.logged_in && self.role.is_some()
    }
}

impl WorkerCredentials {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.role == Some(Role::Worker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_set_requires_flag_and_role() {
        let mut creds = UserCredentials {
            token: Some("jwt".to_string()),
            role: Some(Role::Individual),
            logged_in: true,
        };
        assert!(creds.is_authenticated());

        creds.logged_in = false;
        assert!(!creds.is_authenticated());

        creds.logged_in = true;
        creds.role = None;
        assert!(!creds.is_authenticated());
    }

    #[test]
    fn test_user_set_flag_wins_over_missing_token() {
        // Existing contract: the flag, not the token, authenticates
        // the user set.
        let creds = UserCredentials {
            token: None,
            role: Some(Role::Charity),
            logged_in: true,
        };
        assert!(creds.is_authenticated());
    }

    #[test]
    fn test_worker_set_requires_token_and_exact_role() {
        let mut creds = WorkerCredentials {
            token: Some("jwt".to_string()),
            role: Some(Role::Worker),
        };
        assert!(creds.is_authenticated());

        creds.role = Some(Role::Admin);
        assert!(!creds.is_authenticated());

        creds.role = Some(Role::Worker);
        creds.token = None;
        assert!(!creds.is_authenticated());
    }
}
