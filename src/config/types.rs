//! Configuration types for benefit calculation.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML seed files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{
    AcademicBonusTier, Course, CoursePayment, Employee, GenericBonus, PerformanceTier, Period,
    SeniorityBonusTier,
};

/// Settings key holding the statutory minimum wage.
pub const MINIMUM_WAGE_KEY: &str = "sueldo_minimo";

/// Settings key holding the integral salary multiplier applied to base salary.
pub const INTEGRAL_SALARY_KEY: &str = "salario_integral";

/// Structure of `settings.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsFile {
    /// System-wide constants by key.
    pub settings: HashMap<String, Decimal>,
}

/// Structure of `seniority_bonuses.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeniorityBonusFile {
    /// Seniority tiers, in any order.
    pub tiers: Vec<SeniorityBonusTier>,
}

/// Structure of `academic_bonuses.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AcademicBonusFile {
    /// One row per academic level.
    pub tiers: Vec<AcademicBonusTier>,
}

/// Structure of `bonuses.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenericBonusFile {
    /// The generic primas catalogue.
    pub bonuses: Vec<GenericBonus>,
}

/// Structure of `performance_tiers.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceTierFile {
    /// Score tiers, in any order.
    pub tiers: Vec<PerformanceTier>,
}

/// Structure of `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// Employee records.
    pub employees: Vec<Employee>,
}

/// Structure of `periods.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodsFile {
    /// Period records.
    pub periods: Vec<Period>,
}

/// Structure of `courses.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoursesFile {
    /// Course records.
    pub courses: Vec<Course>,
    /// Payments already made towards those courses.
    #[serde(default)]
    pub payments: Vec<CoursePayment>,
}

/// The reference tables read by the calculator.
#[derive(Debug, Clone, Default)]
pub struct BonusTables {
    /// Seniority tiers (sorted by threshold, ascending).
    seniority: Vec<SeniorityBonusTier>,
    /// Academic tiers.
    academic: Vec<AcademicBonusTier>,
    /// Generic primas.
    generic: Vec<GenericBonus>,
    /// Performance tiers (sorted by minimum score, ascending).
    performance: Vec<PerformanceTier>,
}

impl BonusTables {
    /// Creates the tables, sorting the step tables by threshold.
    pub fn new(
        seniority: Vec<SeniorityBonusTier>,
        academic: Vec<AcademicBonusTier>,
        generic: Vec<GenericBonus>,
        performance: Vec<PerformanceTier>,
    ) -> Self {
        let mut seniority = seniority;
        seniority.sort_by_key(|t| t.years_of_service);
        let mut performance = performance;
        performance.sort_by_key(|t| t.min_score);
        Self {
            seniority,
            academic,
            generic,
            performance,
        }
    }

    /// Returns the seniority tiers.
    pub fn seniority(&self) -> &[SeniorityBonusTier] {
        &self.seniority
    }

    /// Returns the academic tiers.
    pub fn academic(&self) -> &[AcademicBonusTier] {
        &self.academic
    }

    /// Returns the generic primas.
    pub fn generic(&self) -> &[GenericBonus] {
        &self.generic
    }

    /// Returns the performance tiers.
    pub fn performance(&self) -> &[PerformanceTier] {
        &self.performance
    }
}

/// Everything loaded from a seed directory.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    /// System-wide constants.
    pub settings: HashMap<String, Decimal>,
    /// Bonus reference tables.
    pub tables: BonusTables,
    /// Employees.
    pub employees: Vec<Employee>,
    /// Periods.
    pub periods: Vec<Period>,
    /// Courses.
    pub courses: Vec<Course>,
    /// Course payments.
    pub course_payments: Vec<CoursePayment>,
}
