//! Performance evaluation bonus.
//!
//! Scores run from 0 to 100. The performance table is a step function over
//! `min_score`, looked up the same way as the seniority table.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee, PerformanceTier};

use super::money::checked_mul;

/// Highest score an evaluation can award.
pub const MAX_EVALUATION_SCORE: u32 = 100;

/// The result of calculating a performance bonus, including the audit step.
#[derive(Debug, Clone)]
pub struct PerformanceBonusResult {
    /// The evaluated score.
    pub score: u32,
    /// The matched tier's percentage, zero when no tier qualifies.
    pub percentage: Decimal,
    /// The bonus amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Selects the tier with the largest `min_score` that is ≤ `score`.
pub fn select_performance_tier(
    tiers: &[PerformanceTier],
    score: u32,
) -> Option<&PerformanceTier> {
    tiers
        .iter()
        .filter(|t| t.min_score <= score)
        .max_by_key(|t| t.min_score)
}

/// Calculates an employee's performance bonus for an evaluation score.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `score` is above 100, and
/// [`EngineError::CalculationError`] if the amount overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_performance_bonus;
/// use payroll_engine::models::{Employee, PerformanceTier, PostgraduateLevel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     cedula: "V-1".to_string(),
///     first_name: "Ana".to_string(),
///     last_name: "Pérez".to_string(),
///     monthly_salary: Decimal::new(1000, 0),
///     avec_hire_date: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
///     academic_title: None,
///     postgraduate_level: PostgraduateLevel::None,
///     children_count: 0,
///     weekly_hours: Decimal::new(40, 0),
/// };
/// let tiers = vec![
///     PerformanceTier { min_score: 60, percentage: Decimal::new(5, 2) },
///     PerformanceTier { min_score: 90, percentage: Decimal::new(15, 2) },
/// ];
///
/// let result = calculate_performance_bonus(&employee, 92, &tiers, 1).unwrap();
/// assert_eq!(result.amount, Decimal::new(150, 0));
///
/// assert!(calculate_performance_bonus(&employee, 101, &tiers, 1).is_err());
/// ```
pub fn calculate_performance_bonus(
    employee: &Employee,
    score: u32,
    tiers: &[PerformanceTier],
    step_number: u32,
) -> EngineResult<PerformanceBonusResult> {
    if score > MAX_EVALUATION_SCORE {
        return Err(EngineError::InvalidInput {
            field: "score".to_string(),
            message: format!("must be between 0 and {}, got {}", MAX_EVALUATION_SCORE, score),
        });
    }

    let tier = select_performance_tier(tiers, score);
    let percentage = tier.map(|t| t.percentage).unwrap_or(Decimal::ZERO);
    let amount = checked_mul(percentage, employee.monthly_salary, "performance_bonus")?;

    let reasoning = match tier {
        Some(t) => format!(
            "Score {} reaches the {} point tier: {} × ${}",
            score,
            t.min_score,
            t.percentage.normalize(),
            employee.monthly_salary.normalize()
        ),
        None => format!("Score {} is below every performance tier", score),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "performance_bonus".to_string(),
        rule_name: "Performance Bonus".to_string(),
        input: serde_json::json!({
            "cedula": employee.cedula,
            "score": score,
            "monthly_salary": employee.monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier_min_score": tier.map(|t| t.min_score),
            "percentage": percentage.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(PerformanceBonusResult {
        score,
        percentage,
        amount,
        audit_step,
    })
}
