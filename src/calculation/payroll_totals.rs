//! Payroll totals for a single pay period.

use crate::error::EngineResult;
use crate::models::{PayrollAdditions, PayrollAssignments, PayrollDeductions, PayrollTotals};

use super::money::{checked_sub, checked_sum};

/// Calculates the payroll totals from assignments, additions and deductions.
///
/// Missing additions count as zero. The base salary is not part of the
/// total; `total_payroll` is assignments plus additions minus deductions.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if any total overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll_totals;
/// use payroll_engine::models::{PayrollAdditions, PayrollAssignments, PayrollDeductions};
/// use rust_decimal::Decimal;
///
/// let assignments = PayrollAssignments {
///     academic: Decimal::new(100, 0),
///     seniority: Decimal::new(50, 0),
///     ..Default::default()
/// };
/// let deductions = PayrollDeductions {
///     housing_policy: Decimal::new(30, 0),
///     social_security: Decimal::new(20, 0),
///     unemployment_insurance: Decimal::new(10, 0),
/// };
///
/// let totals =
///     calculate_payroll_totals(&assignments, &PayrollAdditions::default(), &deductions).unwrap();
/// assert_eq!(totals.total_assignments, Decimal::new(150, 0));
/// assert_eq!(totals.total_additional, Decimal::ZERO);
/// assert_eq!(totals.total_deductions, Decimal::new(60, 0));
/// assert_eq!(totals.total_payroll, Decimal::new(90, 0));
/// ```
pub fn calculate_payroll_totals(
    assignments: &PayrollAssignments,
    additions: &PayrollAdditions,
    deductions: &PayrollDeductions,
) -> EngineResult<PayrollTotals> {
    let total_assignments = checked_sum(
        [
            assignments.academic,
            assignments.seniority,
            assignments.per_child,
            assignments.compensatory,
        ],
        "total_assignments",
    )?;
    let total_additional = checked_sum(additions.amounts(), "total_additional")?;
    let total_deductions = checked_sum(
        [
            deductions.housing_policy,
            deductions.social_security,
            deductions.unemployment_insurance,
        ],
        "total_deductions",
    )?;
    let income = checked_sum([total_assignments, total_additional], "total_payroll")?;

    Ok(PayrollTotals {
        total_assignments,
        total_additional,
        total_deductions,
        total_payroll: checked_sub(income, total_deductions, "total_payroll")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn deductions(h: &str, s: &str, u: &str) -> PayrollDeductions {
        PayrollDeductions {
            housing_policy: dec(h),
            social_security: dec(s),
            unemployment_insurance: dec(u),
        }
    }

    #[test]
    fn test_reference_example() {
        let assignments = PayrollAssignments {
            academic: dec("100"),
            seniority: dec("50"),
            per_child: dec("0"),
            compensatory: dec("0"),
        };

        let totals = calculate_payroll_totals(
            &assignments,
            &PayrollAdditions::default(),
            &deductions("30", "20", "10"),
        )
        .unwrap();

        assert_eq!(totals.total_assignments, dec("150"));
        assert_eq!(totals.total_additional, dec("0"));
        assert_eq!(totals.total_deductions, dec("60"));
        assert_eq!(totals.total_payroll, dec("90"));
    }

    #[test]
    fn test_partial_additions_treat_missing_as_zero() {
        let additions = PayrollAdditions {
            night_differential: Some(dec("12.50")),
            holidays_worked: Some(dec("40")),
            ..Default::default()
        };

        let totals = calculate_payroll_totals(
            &PayrollAssignments::default(),
            &additions,
            &deductions("0", "0", "0"),
        )
        .unwrap();

        assert_eq!(totals.total_additional, dec("52.50"));
        assert_eq!(totals.total_payroll, dec("52.50"));
    }

    #[test]
    fn test_deductions_can_exceed_income() {
        let assignments = PayrollAssignments {
            compensatory: dec("10"),
            ..Default::default()
        };

        let totals = calculate_payroll_totals(
            &assignments,
            &PayrollAdditions::default(),
            &deductions("5", "5", "5"),
        )
        .unwrap();

        assert_eq!(totals.total_payroll, dec("-5"));
    }

    #[test]
    fn test_overflowing_assignments_are_a_calculation_error() {
        let assignments = PayrollAssignments {
            academic: Decimal::MAX,
            seniority: Decimal::MAX,
            ..Default::default()
        };

        let result = calculate_payroll_totals(
            &assignments,
            &PayrollAdditions::default(),
            &deductions("0", "0", "0"),
        );

        match result {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("total_assignments"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_net_total_is_a_calculation_error() {
        let assignments = PayrollAssignments {
            academic: Decimal::MAX,
            ..Default::default()
        };
        let additions = PayrollAdditions {
            retroactive_pay: Some(Decimal::MAX),
            ..Default::default()
        };

        let result = calculate_payroll_totals(&assignments, &additions, &deductions("0", "0", "0"));

        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
