//! Full benefits breakdown for one employee on one date.

use std::time::Instant;

use chrono::NaiveDate;

use crate::config::{BonusTables, WageParameters};
use crate::error::EngineResult;
use crate::models::{AuditTrace, BenefitsBreakdown, Employee};

use super::academic_bonus::calculate_academic_bonus;
use super::generic_bonus::calculate_generic_bonuses;
use super::seniority_bonus::calculate_seniority_bonus;

/// Runs the seniority, academic and generic bonus rules for an employee.
///
/// Audit steps are numbered in that order, starting at 1. The first rule
/// that fails, including on an overflowing amount, fails the breakdown.
pub fn calculate_benefits(
    employee: &Employee,
    tables: &BonusTables,
    wages: &WageParameters,
    today: NaiveDate,
) -> EngineResult<BenefitsBreakdown> {
    let start = Instant::now();

    let seniority = calculate_seniority_bonus(employee, tables.seniority(), today, 1)?;
    let academic = calculate_academic_bonus(employee, tables.academic(), 2)?;
    let generic = calculate_generic_bonuses(employee, tables.generic(), wages, 3)?;

    let mut steps = Vec::with_capacity(2 + generic.audit_steps.len());
    steps.push(seniority.audit_step);
    steps.push(academic.audit_step);
    steps.extend(generic.audit_steps);

    Ok(BenefitsBreakdown {
        employee_cedula: employee.cedula.clone(),
        computed_on: today,
        monthly_salary: employee.monthly_salary,
        years_of_service: seniority.years_of_service,
        seniority_bonus: seniority.amount,
        academic_bonus: academic.amount,
        generic_bonuses: generic.bonuses,
        audit_trace: AuditTrace {
            steps,
            duration_us: start.elapsed().as_micros() as u64,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{
        AcademicBonusTier, AcademicLevel, BonusBase, BonusFrequency, BonusKind, GenericBonus,
        PostgraduateLevel, SeniorityBonusTier,
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tables() -> BonusTables {
        BonusTables::new(
            vec![
                SeniorityBonusTier {
                    years_of_service: 10,
                    percentage: dec("0.08"),
                },
                SeniorityBonusTier {
                    years_of_service: 0,
                    percentage: dec("0.02"),
                },
                SeniorityBonusTier {
                    years_of_service: 5,
                    percentage: dec("0.05"),
                },
            ],
            vec![AcademicBonusTier {
                level: AcademicLevel::Licenciado,
                percentage: dec("0.15"),
            }],
            vec![
                GenericBonus {
                    name: "Prima por hijo".to_string(),
                    factor: dec("10"),
                    base: BonusBase::Children,
                    frequency: BonusFrequency::Monthly,
                    kind: BonusKind::Factor,
                },
                GenericBonus {
                    name: "Bono vacacional".to_string(),
                    factor: dec("15"),
                    base: BonusBase::BaseSalary,
                    frequency: BonusFrequency::Annual,
                    kind: BonusKind::Days,
                },
            ],
            vec![],
        )
    }

    fn wages() -> WageParameters {
        WageParameters {
            minimum_wage: dec("130"),
            integral_salary_multiplier: dec("1.5"),
        }
    }

    fn create_test_employee() -> Employee {
        Employee {
            cedula: "V-12345678".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            monthly_salary: dec("1200"),
            avec_hire_date: NaiveDate::from_ymd_opt(2018, 1, 15).unwrap(),
            academic_title: Some("Licenciado en Educación".to_string()),
            postgraduate_level: PostgraduateLevel::None,
            children_count: 2,
            weekly_hours: dec("40"),
        }
    }

    #[test]
    fn test_breakdown_combines_all_rules() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let breakdown =
            calculate_benefits(&create_test_employee(), &tables(), &wages(), today).unwrap();

        assert_eq!(breakdown.years_of_service, 7);
        assert_eq!(breakdown.seniority_bonus, dec("60"));
        assert_eq!(breakdown.academic_bonus, dec("180"));
        assert_eq!(breakdown.generic_bonuses.len(), 2);
        assert_eq!(breakdown.generic_total(BonusFrequency::Monthly), Some(dec("20")));
        assert_eq!(breakdown.generic_total(BonusFrequency::Annual), Some(dec("600")));
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let breakdown =
            calculate_benefits(&create_test_employee(), &tables(), &wages(), today).unwrap();

        let numbers: Vec<u32> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(breakdown.audit_trace.steps[0].rule_id, "seniority_bonus");
        assert_eq!(breakdown.audit_trace.steps[1].rule_id, "academic_bonus");
    }

    #[test]
    fn test_future_hire_date_propagates_error() {
        let today = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let result = calculate_benefits(&create_test_employee(), &tables(), &wages(), today);

        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_overflowing_wage_parameter_fails_breakdown() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let base = tables();
        let tables = BonusTables::new(
            base.seniority().to_vec(),
            base.academic().to_vec(),
            vec![GenericBonus {
                name: "Prima de transporte".to_string(),
                factor: dec("0.02"),
                base: BonusBase::IntegralSalary,
                frequency: BonusFrequency::Monthly,
                kind: BonusKind::Percentage,
            }],
            vec![],
        );
        let wages = WageParameters {
            minimum_wage: dec("130"),
            integral_salary_multiplier: Decimal::MAX,
        };

        let result = calculate_benefits(&create_test_employee(), &tables, &wages, today);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
