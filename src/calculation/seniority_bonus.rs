//! Seniority bonus (prima de antigüedad) calculation.
//!
//! Years of service are counted in whole 365.25-day years from the AVEC hire
//! date. The seniority table is a step function: the tier with the largest
//! threshold not exceeding the employee's years of service applies.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee, SeniorityBonusTier};

use super::money::checked_mul;

/// Length of a service year in hundredths of a day (365.25 days).
const CENTI_DAYS_PER_YEAR: i64 = 36_525;

/// The result of calculating the seniority bonus, including the audit step.
#[derive(Debug, Clone)]
pub struct SeniorityBonusResult {
    /// Whole years of service on the calculation date.
    pub years_of_service: u32,
    /// The percentage of the matched tier, zero when no tier qualifies.
    pub percentage: Decimal,
    /// The bonus amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts whole years of service between `hire_date` and `today`.
///
/// A year is 365.25 days, so leap days do not push an anniversary early.
/// Fails with [`EngineError::InvalidEmployee`] when `hire_date` is after `today`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::years_of_service;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2015, 9, 1).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
///
/// assert_eq!(years_of_service(hired, day_before).unwrap(), 9);
/// assert_eq!(years_of_service(hired, anniversary).unwrap(), 10);
/// assert_eq!(years_of_service(hired, hired).unwrap(), 0);
/// ```
pub fn years_of_service(hire_date: NaiveDate, today: NaiveDate) -> EngineResult<u32> {
    let days = (today - hire_date).num_days();
    if days < 0 {
        return Err(EngineError::InvalidEmployee {
            field: "avec_hire_date".to_string(),
            message: format!("hire date {} is after {}", hire_date, today),
        });
    }

    u32::try_from(days * 100 / CENTI_DAYS_PER_YEAR).map_err(|_| EngineError::CalculationError {
        message: format!("years of service out of range for hire date {}", hire_date),
    })
}

/// Selects the tier with the largest threshold that is ≤ `years`.
///
/// The table does not need to be sorted. Returns `None` when no tier qualifies.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::select_seniority_tier;
/// use payroll_engine::models::SeniorityBonusTier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     SeniorityBonusTier { years_of_service: 0, percentage: Decimal::new(2, 2) },
///     SeniorityBonusTier { years_of_service: 5, percentage: Decimal::new(5, 2) },
///     SeniorityBonusTier { years_of_service: 10, percentage: Decimal::new(8, 2) },
/// ];
///
/// let tier = select_seniority_tier(&tiers, 7).unwrap();
/// assert_eq!(tier.percentage, Decimal::new(5, 2));
/// ```
pub fn select_seniority_tier(
    tiers: &[SeniorityBonusTier],
    years: u32,
) -> Option<&SeniorityBonusTier> {
    tiers
        .iter()
        .filter(|t| t.years_of_service <= years)
        .max_by_key(|t| t.years_of_service)
}

/// Calculates an employee's seniority bonus on `today`.
///
/// The amount is the matched tier's percentage of the monthly salary. An
/// employee who qualifies for no tier (for example one hired today when the
/// table has no 0-year row) gets a zero bonus, not an error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_seniority_bonus;
/// use payroll_engine::models::{Employee, PostgraduateLevel, SeniorityBonusTier};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     cedula: "V-12345678".to_string(),
///     first_name: "Ana".to_string(),
///     last_name: "Pérez".to_string(),
///     monthly_salary: Decimal::new(1000, 0),
///     avec_hire_date: NaiveDate::from_ymd_opt(2018, 1, 15).unwrap(),
///     academic_title: None,
///     postgraduate_level: PostgraduateLevel::None,
///     children_count: 0,
///     weekly_hours: Decimal::new(40, 0),
/// };
/// let tiers = vec![SeniorityBonusTier { years_of_service: 5, percentage: Decimal::new(5, 2) }];
/// let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
///
/// let result = calculate_seniority_bonus(&employee, &tiers, today, 1).unwrap();
/// assert_eq!(result.years_of_service, 7);
/// assert_eq!(result.amount, Decimal::new(50, 0));
/// ```
pub fn calculate_seniority_bonus(
    employee: &Employee,
    tiers: &[SeniorityBonusTier],
    today: NaiveDate,
    step_number: u32,
) -> EngineResult<SeniorityBonusResult> {
    let years = years_of_service(employee.avec_hire_date, today)?;
    let tier = select_seniority_tier(tiers, years);

    let (percentage, reasoning) = match tier {
        Some(t) => (
            t.percentage,
            format!(
                "{} years of service qualifies for the {} year tier: {} × ${}",
                years,
                t.years_of_service,
                t.percentage.normalize(),
                employee.monthly_salary.normalize()
            ),
        ),
        None => (
            Decimal::ZERO,
            format!("{} years of service qualifies for no seniority tier", years),
        ),
    };
    let amount = checked_mul(percentage, employee.monthly_salary, "seniority_bonus")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "seniority_bonus".to_string(),
        rule_name: "Seniority Bonus".to_string(),
        input: serde_json::json!({
            "cedula": employee.cedula,
            "avec_hire_date": employee.avec_hire_date.to_string(),
            "calculation_date": today.to_string(),
            "monthly_salary": employee.monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "years_of_service": years,
            "tier_threshold": tier.map(|t| t.years_of_service),
            "percentage": percentage.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(SeniorityBonusResult {
        years_of_service: years,
        percentage,
        amount,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostgraduateLevel;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standard_tiers() -> Vec<SeniorityBonusTier> {
        vec![
            SeniorityBonusTier {
                years_of_service: 0,
                percentage: dec("0.02"),
            },
            SeniorityBonusTier {
                years_of_service: 5,
                percentage: dec("0.05"),
            },
            SeniorityBonusTier {
                years_of_service: 10,
                percentage: dec("0.08"),
            },
        ]
    }

    fn create_test_employee(hire_date: NaiveDate) -> Employee {
        Employee {
            cedula: "V-12345678".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            monthly_salary: dec("1000"),
            avec_hire_date: hire_date,
            academic_title: None,
            postgraduate_level: PostgraduateLevel::None,
            children_count: 0,
            weekly_hours: dec("40"),
        }
    }

    #[test]
    fn test_seven_years_selects_five_year_tier() {
        let tiers = standard_tiers();
        let tier = select_seniority_tier(&tiers, 7).unwrap();
        assert_eq!(tier.years_of_service, 5);
        assert_eq!(tier.percentage, dec("0.05"));
    }

    #[test]
    fn test_exact_threshold_selects_that_tier() {
        let tiers = standard_tiers();
        let tier = select_seniority_tier(&tiers, 10).unwrap();
        assert_eq!(tier.percentage, dec("0.08"));
    }

    #[test]
    fn test_unsorted_table_still_selects_largest_qualifying() {
        let mut tiers = standard_tiers();
        tiers.reverse();
        let tier = select_seniority_tier(&tiers, 12).unwrap();
        assert_eq!(tier.years_of_service, 10);
    }

    #[test]
    fn test_no_qualifying_tier_returns_none() {
        let tiers = vec![SeniorityBonusTier {
            years_of_service: 3,
            percentage: dec("0.03"),
        }];
        assert!(select_seniority_tier(&tiers, 2).is_none());
        assert!(select_seniority_tier(&[], 40).is_none());
    }

    #[test]
    fn test_hired_today_without_zero_tier_is_zero_bonus() {
        let today = date(2025, 3, 1);
        let employee = create_test_employee(today);
        let tiers = vec![SeniorityBonusTier {
            years_of_service: 1,
            percentage: dec("0.01"),
        }];

        let result = calculate_seniority_bonus(&employee, &tiers, today, 1).unwrap();

        assert_eq!(result.years_of_service, 0);
        assert_eq!(result.percentage, Decimal::ZERO);
        assert_eq!(result.amount, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("no seniority tier"));
    }

    #[test]
    fn test_bonus_is_percentage_of_salary() {
        let employee = create_test_employee(date(2013, 5, 20));
        let result =
            calculate_seniority_bonus(&employee, &standard_tiers(), date(2025, 5, 21), 3).unwrap();

        assert_eq!(result.years_of_service, 12);
        assert_eq!(result.amount, dec("80"));
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "seniority_bonus");
        assert_eq!(result.audit_step.output["tier_threshold"], 10);
    }

    #[test]
    fn test_leap_days_do_not_advance_anniversary() {
        // 2016, 2020 and 2024 are leap years: 3652 days is still short of 10 years.
        assert_eq!(years_of_service(date(2015, 9, 1), date(2025, 8, 31)).unwrap(), 9);
        assert_eq!(years_of_service(date(2015, 9, 1), date(2025, 9, 1)).unwrap(), 10);
    }

    #[test]
    fn test_future_hire_date_is_rejected() {
        let result = years_of_service(date(2026, 1, 1), date(2025, 1, 1));

        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "avec_hire_date");
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_salary_is_a_calculation_error() {
        let mut employee = create_test_employee(date(2013, 5, 20));
        employee.monthly_salary = Decimal::MAX;
        let tiers = vec![SeniorityBonusTier {
            years_of_service: 0,
            percentage: dec("1.5"),
        }];

        let result = calculate_seniority_bonus(&employee, &tiers, date(2025, 5, 21), 1);

        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
