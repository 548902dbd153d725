//! Generic bonus (primas) evaluation.
//!
//! Every configured bonus is evaluated for every employee; callers decide
//! which entries to ignore. The minimum wage and the integral salary
//! multiplier always come from [`WageParameters`], never from literals.

use rust_decimal::Decimal;

use crate::config::WageParameters;
use crate::error::EngineResult;
use crate::models::{AuditStep, BonusAmount, BonusBase, BonusKind, Employee, GenericBonus};

use super::money::{checked_div, checked_mul};

/// Salary days in a month, used to turn a monthly salary into a daily one.
pub const SALARY_DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The result of evaluating the generic bonuses for one employee.
#[derive(Debug, Clone)]
pub struct GenericBonusesResult {
    /// One amount per configured bonus, in table order.
    pub bonuses: Vec<BonusAmount>,
    /// One audit step per configured bonus.
    pub audit_steps: Vec<AuditStep>,
}

/// Evaluates a single generic bonus for an employee.
///
/// | kind | base | amount |
/// |---|---|---|
/// | percentage / factor | base salary | `factor × salary` |
/// | percentage / factor | minimum wage | `factor × minimum wage` |
/// | percentage / factor | integral salary | `factor × salary × integral multiplier` |
/// | percentage / factor | children | `factor × children` |
/// | constant | any | `factor` |
/// | days | any | `factor × salary / 30` |
///
/// Fails with [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// when the amount overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::evaluate_generic_bonus;
/// use payroll_engine::config::WageParameters;
/// use payroll_engine::models::{
///     BonusBase, BonusFrequency, BonusKind, Employee, GenericBonus, PostgraduateLevel,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     cedula: "V-1".to_string(),
///     first_name: "Ana".to_string(),
///     last_name: "Pérez".to_string(),
///     monthly_salary: Decimal::new(900, 0),
///     avec_hire_date: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
///     academic_title: None,
///     postgraduate_level: PostgraduateLevel::None,
///     children_count: 3,
///     weekly_hours: Decimal::new(40, 0),
/// };
/// let wages = WageParameters {
///     minimum_wage: Decimal::new(130, 0),
///     integral_salary_multiplier: Decimal::new(15, 1),
/// };
/// let vacation = GenericBonus {
///     name: "Bono vacacional".to_string(),
///     factor: Decimal::new(15, 0),
///     base: BonusBase::BaseSalary,
///     frequency: BonusFrequency::Annual,
///     kind: BonusKind::Days,
/// };
///
/// // 15 days of a 900/month salary
/// assert_eq!(
///     evaluate_generic_bonus(&vacation, &employee, &wages).unwrap(),
///     Decimal::new(450, 0)
/// );
/// ```
pub fn evaluate_generic_bonus(
    bonus: &GenericBonus,
    employee: &Employee,
    wages: &WageParameters,
) -> EngineResult<Decimal> {
    let name = bonus.name.as_str();
    match bonus.kind {
        BonusKind::Percentage | BonusKind::Factor => match bonus.base {
            BonusBase::BaseSalary => checked_mul(bonus.factor, employee.monthly_salary, name),
            BonusBase::MinimumWage => checked_mul(bonus.factor, wages.minimum_wage, name),
            BonusBase::IntegralSalary => {
                let on_salary = checked_mul(bonus.factor, employee.monthly_salary, name)?;
                checked_mul(on_salary, wages.integral_salary_multiplier, name)
            }
            BonusBase::Children => {
                checked_mul(bonus.factor, Decimal::from(employee.children_count), name)
            }
        },
        BonusKind::Constant => Ok(bonus.factor),
        BonusKind::Days => {
            let salary_days = checked_mul(bonus.factor, employee.monthly_salary, name)?;
            checked_div(salary_days, SALARY_DAYS_PER_MONTH, name)
        }
    }
}

/// Evaluates every configured generic bonus for an employee.
///
/// No row is filtered out: a per-child bonus for an employee without
/// children yields a zero entry.
pub fn calculate_generic_bonuses(
    employee: &Employee,
    bonuses: &[GenericBonus],
    wages: &WageParameters,
    step_number: u32,
) -> EngineResult<GenericBonusesResult> {
    let mut amounts = Vec::with_capacity(bonuses.len());
    let mut audit_steps = Vec::with_capacity(bonuses.len());

    for (offset, bonus) in (0u32..).zip(bonuses) {
        let amount = evaluate_generic_bonus(bonus, employee, wages)?;

        audit_steps.push(AuditStep {
            step_number: step_number + offset,
            rule_id: "generic_bonus".to_string(),
            rule_name: bonus.name.clone(),
            input: serde_json::json!({
                "cedula": employee.cedula,
                "kind": bonus.kind,
                "base": bonus.base,
                "factor": bonus.factor.normalize().to_string(),
                "monthly_salary": employee.monthly_salary.normalize().to_string(),
                "children_count": employee.children_count,
                "minimum_wage": wages.minimum_wage.normalize().to_string(),
                "integral_salary_multiplier":
                    wages.integral_salary_multiplier.normalize().to_string()
            }),
            output: serde_json::json!({
                "amount": amount.normalize().to_string(),
                "frequency": bonus.frequency
            }),
            reasoning: format!(
                "{:?} bonus on {:?} with factor {} = ${}",
                bonus.kind,
                bonus.base,
                bonus.factor.normalize(),
                amount.normalize()
            ),
        });

        amounts.push(BonusAmount {
            name: bonus.name.clone(),
            amount,
            frequency: bonus.frequency,
        });
    }

    Ok(GenericBonusesResult {
        bonuses: amounts,
        audit_steps,
    })
}
