use crate::common::UserId;

use super::{Profile, Role};

/// Caller identity resolved once per request.
///
/// This is the only input to authorization decisions downstream of the
/// gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Option<UserId>,
    pub email: Option<String>,
    pub profile: Profile,
}

impl Identity {
    /// Identity of a caller holding a verified token
    pub fn authenticated(user_id: UserId, email: String, role: Role) -> Self {
        Self {
            user_id: Some(user_id),
            email: Some(email),
            profile: role.into(),
        }
    }

    /// Identity of a caller without a valid token
    pub fn fallback(profile: Profile) -> Self {
        Self {
            user_id: None,
            email: None,
            profile,
        }
    }

    pub fn anonymous() -> Self {
        Self::fallback(Profile::Anonymous)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::anonymous()
    }
}
