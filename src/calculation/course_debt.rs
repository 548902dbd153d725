//! Outstanding debt of a student on a course.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::CoursePayment;

use super::floor_policy::FloorPolicy;
use super::money::{checked_sub, checked_sum};

/// Calculates what a student still owes on a course.
///
/// Debt call sites pass [`COURSE_DEBT_FLOOR`](super::COURSE_DEBT_FLOOR), so
/// paying more than the price leaves a debt of zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_course_debt, FloorPolicy};
/// use rust_decimal::Decimal;
///
/// let price = Decimal::new(500, 0);
/// assert_eq!(
///     calculate_course_debt(price, Decimal::new(200, 0), FloorPolicy::ClampAtZero).unwrap(),
///     Decimal::new(300, 0)
/// );
/// assert_eq!(
///     calculate_course_debt(price, Decimal::new(600, 0), FloorPolicy::ClampAtZero).unwrap(),
///     Decimal::ZERO
/// );
/// ```
pub fn calculate_course_debt(
    course_price: Decimal,
    payments_sum: Decimal,
    floor: FloorPolicy,
) -> EngineResult<Decimal> {
    let debt = checked_sub(course_price, payments_sum, "course debt")?;
    Ok(floor.apply(debt))
}

/// Sums the amounts of a student's course payments.
pub fn sum_course_payments(payments: &[CoursePayment]) -> EngineResult<Decimal> {
    checked_sum(payments.iter().map(|p| p.amount), "course payments")
}
