//! Payment records.
//!
//! Payroll, food-program and performance-evaluation payments are created
//! once and never edited. Derived totals are stored next to their inputs so
//! later reads never recompute them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four assignment bonuses of a payroll payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollAssignments {
    /// Academic bonus (prima académica).
    pub academic: Decimal,
    /// Seniority bonus (prima de antigüedad).
    pub seniority: Decimal,
    /// Per-child bonus (prima por hijos).
    pub per_child: Decimal,
    /// Compensatory bonus (prima compensatoria).
    pub compensatory: Decimal,
}

/// Optional additional earnings of a payroll payment.
///
/// Absent values count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollAdditions {
    /// Night shift differential (bono nocturno).
    #[serde(default)]
    pub night_differential: Option<Decimal>,
    /// Night overtime hours pay.
    #[serde(default)]
    pub night_overtime: Option<Decimal>,
    /// Day overtime hours pay.
    #[serde(default)]
    pub day_overtime: Option<Decimal>,
    /// Pay for holidays worked.
    #[serde(default)]
    pub holidays_worked: Option<Decimal>,
    /// Retroactive pay.
    #[serde(default)]
    pub retroactive_pay: Option<Decimal>,
}

impl PayrollAdditions {
    /// Returns the five additions in declaration order, with absent values as zero.
    pub fn amounts(&self) -> [Decimal; 5] {
        [
            self.night_differential,
            self.night_overtime,
            self.day_overtime,
            self.holidays_worked,
            self.retroactive_pay,
        ]
        .map(|amount| amount.unwrap_or(Decimal::ZERO))
    }
}

/// The deductions withheld from a payroll payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDeductions {
    /// Housing policy levy (ley de política habitacional).
    pub housing_policy: Decimal,
    /// Social security discount.
    pub social_security: Decimal,
    /// Unemployment insurance discount.
    pub unemployment_insurance: Decimal,
}

/// The derived totals of a payroll payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of the four assignments.
    pub total_assignments: Decimal,
    /// Sum of the five additions.
    pub total_additional: Decimal,
    /// Sum of the three deductions.
    pub total_deductions: Decimal,
    /// Assignments plus additions minus deductions.
    pub total_payroll: Decimal,
}

/// A finalized payroll payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPayment {
    /// Payment identifier.
    pub id: Uuid,
    /// The paid employee's cedula.
    pub employee_cedula: String,
    /// The payroll period being paid.
    pub period_id: String,
    /// Monthly base salary at payment time.
    pub base_salary: Decimal,
    /// Assignment bonuses.
    pub assignments: PayrollAssignments,
    /// Additional earnings.
    pub additions: PayrollAdditions,
    /// Deductions.
    pub deductions: PayrollDeductions,
    /// Totals derived from the fields above.
    pub totals: PayrollTotals,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
}

/// A finalized food-program payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodProgramPayment {
    /// Payment identifier.
    pub id: Uuid,
    /// The paid employee's cedula.
    pub employee_cedula: String,
    /// The food-program period being paid.
    pub period_id: String,
    /// Full benefit for the period.
    pub total_benefit: Decimal,
    /// Amount withheld for absences.
    pub absence_deduction: Decimal,
    /// Benefit minus absence deduction; may be negative.
    pub total_to_receive: Decimal,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
}

/// A finalized performance-evaluation payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEvaluationPayment {
    /// Payment identifier.
    pub id: Uuid,
    /// The evaluated employee's cedula.
    pub employee_cedula: String,
    /// The evaluation period.
    pub period_id: String,
    /// Evaluation score, 0 to 100.
    pub score: u32,
    /// Fraction of salary awarded for the score.
    pub percentage: Decimal,
    /// Awarded amount.
    pub amount: Decimal,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_additions_default_to_none_when_omitted() {
        let additions: PayrollAdditions =
            serde_json::from_str(r#"{"day_overtime": "12.50"}"#).unwrap();

        assert_eq!(additions.night_differential, None);
        assert_eq!(additions.day_overtime, Some(dec("12.50")));
    }

    #[test]
    fn test_amounts_treats_missing_as_zero() {
        let additions = PayrollAdditions {
            night_differential: None,
            night_overtime: Some(dec("10")),
            day_overtime: None,
            holidays_worked: Some(dec("5.5")),
            retroactive_pay: None,
        };

        assert_eq!(
            additions.amounts(),
            [Decimal::ZERO, dec("10"), Decimal::ZERO, dec("5.5"), Decimal::ZERO]
        );
    }

    #[test]
    fn test_null_addition_deserializes_as_none() {
        let additions: PayrollAdditions =
            serde_json::from_str(r#"{"night_differential": null}"#).unwrap();
        assert_eq!(additions.night_differential, None);
    }
}
