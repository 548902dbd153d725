//! Period model.
//!
//! A [`Period`] is a named date range that scopes payments and course
//! offerings: a payroll month, a food-program cycle, an enrollment term.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a period is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// A payroll cycle.
    Payroll,
    /// A food-program payment cycle.
    FoodProgram,
    /// A course enrollment term.
    Enrollment,
    /// A performance evaluation cycle.
    Evaluation,
}

/// A named pay or enrollment period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Period, PeriodKind};
/// use chrono::NaiveDate;
///
/// let period = Period {
///     id: "2025-01".to_string(),
///     name: "Enero 2025".to_string(),
///     kind: PeriodKind::Payroll,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Unique period identifier (e.g. "2025-01").
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the period scopes.
    pub kind: PeriodKind,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl Period {
    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
