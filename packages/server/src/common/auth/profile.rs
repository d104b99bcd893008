use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

/// Role stored on a user account and embedded in its token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Key of the access table: a stored role, or anonymous for callers
/// without a valid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Admin,
    User,
    Anonymous,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Admin => "ADMIN",
            Profile::User => "USER",
            Profile::Anonymous => "ANONYMOUS",
        }
    }
}

impl From<Role> for Profile {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Profile::Admin,
            Role::User => Profile::User,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ANONYMOUS" => Ok(Profile::Anonymous),
            other => other.parse::<Role>().map(Profile::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
        assert!("superAdmin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_profile_from_role() {
        assert_eq!(Profile::from(Role::Admin), Profile::Admin);
        assert_eq!(Profile::from(Role::User), Profile::User);
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!("anonymous".parse::<Profile>().unwrap(), Profile::Anonymous);
        assert_eq!("ADMIN".parse::<Profile>().unwrap(), Profile::Admin);
        assert!("guest".parse::<Profile>().is_err());
    }
}
