//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct together with the academic
//! level enums used to resolve the academic bonus.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Academic levels recognised by the academic bonus table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademicLevel {
    /// Técnico Superior Universitario.
    Tsu,
    /// Licenciado (bachelor's degree).
    Licenciado,
    /// Postgraduate specialization.
    Specialization,
    /// Master's degree.
    Masters,
    /// Doctorate.
    Doctorate,
}

/// The postgraduate level recorded on an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostgraduateLevel {
    /// No postgraduate studies recorded.
    #[default]
    None,
    /// Postgraduate specialization.
    Specialization,
    /// Master's degree.
    Masters,
    /// Doctorate.
    Doctorate,
}

impl PostgraduateLevel {
    /// Returns the academic level this postgraduate level maps to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{AcademicLevel, PostgraduateLevel};
    ///
    /// assert_eq!(PostgraduateLevel::Masters.academic_level(), Some(AcademicLevel::Masters));
    /// assert_eq!(PostgraduateLevel::None.academic_level(), None);
    /// ```
    pub fn academic_level(self) -> Option<AcademicLevel> {
        match self {
            PostgraduateLevel::None => None,
            PostgraduateLevel::Specialization => Some(AcademicLevel::Specialization),
            PostgraduateLevel::Masters => Some(AcademicLevel::Masters),
            PostgraduateLevel::Doctorate => Some(AcademicLevel::Doctorate),
        }
    }
}

/// An employee of the foundation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// National identity number, the employee's primary key.
    pub cedula: String,
    /// Given names.
    pub first_name: String,
    /// Family names.
    pub last_name: String,
    /// Monthly base salary.
    pub monthly_salary: Decimal,
    /// The date the employee joined AVEC, used for seniority.
    pub avec_hire_date: NaiveDate,
    /// Free-text academic title (e.g. "Licenciado en Educación").
    #[serde(default)]
    pub academic_title: Option<String>,
    /// Explicit postgraduate level; takes precedence over the title.
    #[serde(default)]
    pub postgraduate_level: PostgraduateLevel,
    /// Number of children, used by per-child bonuses.
    #[serde(default)]
    pub children_count: u32,
    /// Contracted hours per week.
    pub weekly_hours: Decimal,
}

/// Hours in a week; contracted hours can never exceed it.
const HOURS_PER_WEEK: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

impl Employee {
    /// Returns the employee's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks the record for values no calculation can work with.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, PostgraduateLevel};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee {
    ///     cedula: "V-12345678".to_string(),
    ///     first_name: "Ana".to_string(),
    ///     last_name: "Pérez".to_string(),
    ///     monthly_salary: Decimal::new(1000, 0),
    ///     avec_hire_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
    ///     academic_title: None,
    ///     postgraduate_level: PostgraduateLevel::None,
    ///     children_count: 0,
    ///     weekly_hours: Decimal::new(40, 0),
    /// };
    /// assert!(employee.validate().is_ok());
    ///
    /// employee.monthly_salary = Decimal::new(-1, 0);
    /// assert!(employee.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.cedula.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "cedula".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.monthly_salary.is_sign_negative() {
            return Err(EngineError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.weekly_hours.is_sign_negative() || self.weekly_hours > HOURS_PER_WEEK {
            return Err(EngineError::InvalidEmployee {
                field: "weekly_hours".to_string(),
                message: format!("must be between 0 and {}", HOURS_PER_WEEK),
            });
        }
        Ok(())
    }
}
