//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing benefits and
//! recording payments.

use thiserror::Error;

use crate::store::{Entity, StoreError};

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     cedula: "V-12345678".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: V-12345678");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the given cedula.
    #[error("Employee not found: {cedula}")]
    EmployeeNotFound {
        /// The cedula that was looked up.
        cedula: String,
    },

    /// No course exists with the given identifier.
    #[error("Course not found: {course_id}")]
    CourseNotFound {
        /// The course identifier that was looked up.
        course_id: String,
    },

    /// No period exists with the given identifier.
    #[error("Period not found: {period_id}")]
    PeriodNotFound {
        /// The period identifier that was looked up.
        period_id: String,
    },

    /// A configuration key has no stored value.
    #[error("Setting not found: {key}")]
    SettingNotFound {
        /// The missing key.
        key: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A request field was missing, out of range or otherwise unusable.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A payment already exists for this employee and period.
    #[error("Employee '{employee}' already has a payment for period '{period}'")]
    AlreadyPaid {
        /// The employee cedula.
        employee: String,
        /// The period identifier.
        period: String,
    },

    /// The caller is not allowed to perform the operation.
    #[error("User '{actor}' is not authorized to {action}")]
    Unauthorized {
        /// The user that attempted the operation.
        actor: String,
        /// The attempted action.
        action: String,
    },

    /// The storage layer rejected an operation.
    #[error("Storage error: {0}")]
    Store(#[source] StoreError),

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<StoreError> for EngineError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { entity, key } => match entity {
                Entity::Employee => EngineError::EmployeeNotFound { cedula: key },
                Entity::Course => EngineError::CourseNotFound { course_id: key },
                Entity::Period => EngineError::PeriodNotFound { period_id: key },
                Entity::Setting => EngineError::SettingNotFound { key },
            },
            other => EngineError::Store(other),
        }
    }
}
