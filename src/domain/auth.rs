use std::str::FromStr;

use uuid::Uuid;

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::Validation(format!("unknown role '{}'", other))),
        }
    }
}

/// Caller identity as supplied by the upstream identity provider. The core
/// trusts these values as already authenticated.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "admin privileges required".to_string(),
            ))
        }
    }

    /// Ownership rule: admins see everything, users only their own orders.
    /// The same denial is produced for every non-owner, so callers cannot
    /// distinguish "exists but not yours" from plain denial.
    pub fn authorize_order_access(&self, owner: Uuid) -> Result<(), DomainError> {
        if self.is_admin() || self.user_id == owner {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "not authorized to access this order".to_string(),
            ))
        }
    }
}
