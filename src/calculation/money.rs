//! Overflow-checked arithmetic on monetary amounts.
//!
//! Request bodies and settings accept any decimal that parses, so every
//! rule combines amounts through these helpers and reports an out-of-range
//! result as [`EngineError::CalculationError`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

fn out_of_range(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} is out of range", what),
    }
}

/// Sums `amounts`, naming the total `what` if it overflows.
pub(crate) fn checked_sum<I>(amounts: I, what: &str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).ok_or_else(|| out_of_range(what))
    })
}

pub(crate) fn checked_sub(lhs: Decimal, rhs: Decimal, what: &str) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| out_of_range(what))
}

pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal, what: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| out_of_range(what))
}

pub(crate) fn checked_div(lhs: Decimal, rhs: Decimal, what: &str) -> EngineResult<Decimal> {
    lhs.checked_div(rhs).ok_or_else(|| out_of_range(what))
}
