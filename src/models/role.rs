use serde::{Deserialize, Serialize};
use std::fmt;

// Roles are lowercase strings on the wire and in the credential store.
// Anything outside the closed set is carried as Unknown rather than
// rejected, so the gate can route it through its fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Individual,
    Commercial,
    Charity,
    Worker,
    Admin,
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Individual => "individual",
            Role::Commercial => "commercial",
            Role::Charity => "charity",
            Role::Worker => "worker",
            Role::Admin => "admin",
            Role::Unknown(other) => other,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unknown(_))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        // Case-sensitive by contract: "Worker" is not a worker.
        match value.as_str() {
            "individual" => Role::Individual,
            "commercial" => Role::Commercial,
            "charity" => Role::Charity,
            "worker" => Role::Worker,
            "admin" => Role::Admin,
            _ => Role::Unknown(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known() {
        assert_eq!(Role::from("individual"), Role::Individual);
        assert_eq!(Role::from("commercial"), Role::Commercial);
        assert_eq!(Role::from("charity"), Role::Charity);
        assert_eq!(Role::from("worker"), Role::Worker);
        assert_eq!(Role::from("admin"), Role::Admin);
    }

    #[test]
    fn test_role_parse_is_case_sensitive() {
        assert_eq!(Role::from("Worker"), Role::Unknown("Worker".to_string()));
        assert_eq!(Role::from("ADMIN"), Role::Unknown("ADMIN".to_string()));
    }

    #[test]
    fn test_role_unknown_preserves_original_string() {
        let role = Role::from("superuser");
        assert!(!role.is_recognized());
        assert_eq!(role.as_str(), "superuser");
        assert_eq!(role.to_string(), "superuser");
    }

    #[test]
    fn test_role_string_round_trip() {
        for raw in ["individual", "commercial", "charity", "worker", "admin", "weird"] {
            assert_eq!(String::from(Role::from(raw)), raw);
        }
    }
}
