//! Food-program (programa alimentario) payment totals.

use rust_decimal::Decimal;

use crate::error::EngineResult;

use super::floor_policy::FloorPolicy;
use super::money::checked_sub;

/// Calculates the amount an employee receives from the food program.
///
/// The result is the benefit minus the absence deduction, passed through
/// `floor`. Payment call sites use
/// [`FOOD_PROGRAM_FLOOR`](super::FOOD_PROGRAM_FLOOR), which leaves
/// negative totals in place. A difference outside the decimal range is a
/// [`CalculationError`](crate::error::EngineError::CalculationError).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_food_program_total, FloorPolicy};
/// use rust_decimal::Decimal;
///
/// let total = calculate_food_program_total(
///     Decimal::new(200, 0),
///     Decimal::new(250, 0),
///     FloorPolicy::Unclamped,
/// )
/// .unwrap();
/// assert_eq!(total, Decimal::new(-50, 0));
/// ```
pub fn calculate_food_program_total(
    total_benefit: Decimal,
    absence_deduction: Decimal,
    floor: FloorPolicy,
) -> EngineResult<Decimal> {
    let total = checked_sub(total_benefit, absence_deduction, "total_to_receive")?;
    Ok(floor.apply(total))
}
