//! Floor policies for subtraction-based totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a computed difference may go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorPolicy {
    /// Negative results are returned as-is.
    Unclamped,
    /// Negative results become zero.
    ClampAtZero,
}

/// Policy applied to food-program totals: an absence deduction larger than
/// the benefit produces a negative amount.
pub const FOOD_PROGRAM_FLOOR: FloorPolicy = FloorPolicy::Unclamped;

/// Policy applied to student course debt: overpayment never produces a
/// negative debt.
pub const COURSE_DEBT_FLOOR: FloorPolicy = FloorPolicy::ClampAtZero;

impl FloorPolicy {
    /// Applies the policy to a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::FloorPolicy;
    /// use rust_decimal::Decimal;
    ///
    /// let value = Decimal::new(-50, 0);
    /// assert_eq!(FloorPolicy::Unclamped.apply(value), value);
    /// assert_eq!(FloorPolicy::ClampAtZero.apply(value), Decimal::ZERO);
    /// ```
    pub fn apply(self, value: Decimal) -> Decimal {
        match self {
            FloorPolicy::Unclamped => value,
            FloorPolicy::ClampAtZero => value.max(Decimal::ZERO),
        }
    }
}
