//! Error type for the storage layer.

use std::fmt;

use thiserror::Error;

/// The kinds of record that can be looked up by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// An employee, keyed by cedula.
    Employee,
    /// A course, keyed by id.
    Course,
    /// A period, keyed by id.
    Period,
    /// A configuration value, keyed by name.
    Setting,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Employee => "employee",
            Entity::Course => "course",
            Entity::Period => "period",
            Entity::Setting => "setting",
        };
        f.write_str(name)
    }
}

/// Errors raised by a [`PayrollStore`](super::PayrollStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with that key exists.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// What was looked up.
        entity: Entity,
        /// The key that was looked up.
        key: String,
    },

    /// An insert collided with an existing record on a unique column set.
    #[error("unique constraint violated on {column}")]
    UniqueViolation {
        /// The column (or comma-separated column set) that must be unique.
        column: String,
    },

    /// A record failed validation before it was written.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// The store cannot serve requests.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = StoreError::NotFound {
            entity: Entity::Course,
            key: "robotica".to_string(),
        };
        assert_eq!(error.to_string(), "course not found: robotica");
    }

    #[test]
    fn test_unique_violation_display() {
        let error = StoreError::UniqueViolation {
            column: "employee_cedula, period_id".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unique constraint violated on employee_cedula, period_id"
        );
    }
}
