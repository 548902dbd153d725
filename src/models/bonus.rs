//! Bonus ("prima") table rows.
//!
//! These are the reference tables the calculator reads: the seniority and
//! academic step tables, the generic bonus catalogue and the performance
//! evaluation tiers. Percentages are fractions, so `0.05` means 5%.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AcademicLevel;

/// A row of the seniority bonus table.
///
/// The tier applies to employees whose years of service are at least
/// `years_of_service`; the highest qualifying threshold wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityBonusTier {
    /// Minimum whole years of service for this tier.
    pub years_of_service: u32,
    /// Fraction of the monthly salary paid as bonus.
    pub percentage: Decimal,
}

/// A row of the academic bonus table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicBonusTier {
    /// The academic level this row applies to.
    pub level: AcademicLevel,
    /// Fraction of the monthly salary paid as bonus.
    pub percentage: Decimal,
}

/// A row of the performance evaluation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceTier {
    /// Minimum evaluation score (0-100) for this tier.
    pub min_score: u32,
    /// Fraction of the monthly salary paid as bonus.
    pub percentage: Decimal,
}

/// The amount a generic bonus factor is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusBase {
    /// The employee's monthly base salary.
    BaseSalary,
    /// The employee's integral salary (base salary times the configured multiplier).
    IntegralSalary,
    /// The configured statutory minimum wage.
    MinimumWage,
    /// The employee's number of children.
    Children,
}

/// How often a generic bonus is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusFrequency {
    /// Paid with every monthly payroll.
    Monthly,
    /// Paid once a year.
    Annual,
}

/// How a generic bonus turns its factor into an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    /// `factor` is a fraction of the base.
    Percentage,
    /// `factor` multiplies the base.
    Factor,
    /// `factor` is a flat amount.
    Constant,
    /// `factor` is a number of salary days.
    Days,
}

/// A configurable bonus from the generic primas table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericBonus {
    /// Display name of the bonus.
    pub name: String,
    /// Factor, percentage, flat amount or day count depending on `kind`.
    pub factor: Decimal,
    /// What the factor is applied to.
    pub base: BonusBase,
    /// How often the bonus is paid.
    pub frequency: BonusFrequency,
    /// How the factor is interpreted.
    pub kind: BonusKind,
}
