//! The user on whose behalf an operation runs.
//!
//! Identity is established upstream; the engine only checks roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May change system-wide settings and record payments.
    Admin,
    /// May record payments.
    PayrollClerk,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// Returns the role's wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PayrollClerk => "payroll_clerk",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Role::Admin),
            "payroll_clerk" => Ok(Role::PayrollClerk),
            "viewer" => Ok(Role::Viewer),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Login name.
    pub username: String,
    /// Assigned role.
    pub role: Role,
}

impl Actor {
    /// Returns true if the actor may change system-wide settings.
    pub fn can_manage_settings(&self) -> bool {
        self.role == Role::Admin
    }

    /// Returns true if the actor may create payment records.
    pub fn can_record_payments(&self) -> bool {
        matches!(self.role, Role::Admin | Role::PayrollClerk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> Actor {
        Actor {
            username: "mrodriguez".to_string(),
            role,
        }
    }

    #[test]
    fn test_only_admin_manages_settings() {
        assert!(actor(Role::Admin).can_manage_settings());
        assert!(!actor(Role::PayrollClerk).can_manage_settings());
        assert!(!actor(Role::Viewer).can_manage_settings());
    }

    #[test]
    fn test_viewer_cannot_record_payments() {
        assert!(actor(Role::Admin).can_record_payments());
        assert!(actor(Role::PayrollClerk).can_record_payments());
        assert!(!actor(Role::Viewer).can_record_payments());
    }

    #[test]
    fn test_role_from_header_value() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" viewer ".parse::<Role>().unwrap(), Role::Viewer);
        assert!("superuser".parse::<Role>().is_err());
        assert_eq!(Role::PayrollClerk.to_string(), "payroll_clerk");
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str("\"payroll_clerk\"").unwrap();
        assert_eq!(role, Role::PayrollClerk);
    }
}
