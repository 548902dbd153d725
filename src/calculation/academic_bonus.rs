//! Academic bonus (prima académica) calculation.
//!
//! An explicit postgraduate level always wins. Without one, the free-text
//! academic title is scanned for the "TSU" and "Licenciado" markers; any
//! other title resolves to no level and a zero bonus.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AcademicBonusTier, AcademicLevel, AuditStep, Employee};

use super::money::checked_mul;

/// Title substring identifying a Técnico Superior Universitario.
pub const TSU_TITLE_MARKER: &str = "TSU";

/// Title substring identifying a Licenciado.
pub const LICENCIADO_TITLE_MARKER: &str = "Licenciado";

/// Where an employee's academic level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademicLevelSource {
    /// The explicit postgraduate level.
    PostgraduateLevel,
    /// A marker found in the free-text title.
    TitleMarker,
    /// Nothing matched.
    Unresolved,
}

/// The result of calculating the academic bonus, including the audit step.
#[derive(Debug, Clone)]
pub struct AcademicBonusResult {
    /// The resolved academic level, if any.
    pub level: Option<AcademicLevel>,
    /// The matched row's percentage, zero without a match.
    pub percentage: Decimal,
    /// The bonus amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Resolves an employee's academic level.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{resolve_academic_level, AcademicLevelSource};
/// use payroll_engine::models::{AcademicLevel, Employee, PostgraduateLevel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee {
///     cedula: "V-1".to_string(),
///     first_name: "Luis".to_string(),
///     last_name: "Gómez".to_string(),
///     monthly_salary: Decimal::new(900, 0),
///     avec_hire_date: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
///     academic_title: Some("TSU en Informática".to_string()),
///     postgraduate_level: PostgraduateLevel::None,
///     children_count: 0,
///     weekly_hours: Decimal::new(40, 0),
/// };
///
/// assert_eq!(
///     resolve_academic_level(&employee),
///     (Some(AcademicLevel::Tsu), AcademicLevelSource::TitleMarker)
/// );
///
/// employee.postgraduate_level = PostgraduateLevel::Masters;
/// assert_eq!(
///     resolve_academic_level(&employee),
///     (Some(AcademicLevel::Masters), AcademicLevelSource::PostgraduateLevel)
/// );
/// ```
pub fn resolve_academic_level(employee: &Employee) -> (Option<AcademicLevel>, AcademicLevelSource) {
    if let Some(level) = employee.postgraduate_level.academic_level() {
        return (Some(level), AcademicLevelSource::PostgraduateLevel);
    }

    let title = employee.academic_title.as_deref().unwrap_or_default();
    if title.contains(TSU_TITLE_MARKER) {
        (Some(AcademicLevel::Tsu), AcademicLevelSource::TitleMarker)
    } else if title.contains(LICENCIADO_TITLE_MARKER) {
        (Some(AcademicLevel::Licenciado), AcademicLevelSource::TitleMarker)
    } else {
        (None, AcademicLevelSource::Unresolved)
    }
}

/// Calculates an employee's academic bonus.
///
/// The amount is the matching row's percentage of the monthly salary. An
/// unresolved level, or a level with no row in the table, yields zero.
pub fn calculate_academic_bonus(
    employee: &Employee,
    tiers: &[AcademicBonusTier],
    step_number: u32,
) -> EngineResult<AcademicBonusResult> {
    let (level, source) = resolve_academic_level(employee);
    let tier = level.and_then(|l| tiers.iter().find(|t| t.level == l));
    let percentage = tier.map(|t| t.percentage).unwrap_or(Decimal::ZERO);
    let amount = checked_mul(percentage, employee.monthly_salary, "academic_bonus")?;

    let reasoning = match (level, tier) {
        (Some(l), Some(t)) => format!(
            "Academic level {:?} ({:?}) pays {} × ${}",
            l,
            source,
            t.percentage.normalize(),
            employee.monthly_salary.normalize()
        ),
        (Some(l), None) => format!("Academic level {:?} has no row in the academic table", l),
        (None, _) => "No academic level could be resolved from postgraduate level or title"
            .to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "academic_bonus".to_string(),
        rule_name: "Academic Bonus".to_string(),
        input: serde_json::json!({
            "cedula": employee.cedula,
            "postgraduate_level": employee.postgraduate_level,
            "academic_title": employee.academic_title,
            "monthly_salary": employee.monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "level": level,
            "source": source,
            "percentage": percentage.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(AcademicBonusResult {
        level,
        percentage,
        amount,
        audit_step,
    })
}
