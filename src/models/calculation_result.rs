//! Calculation result models.
//!
//! This module contains the [`BenefitsBreakdown`] type and its associated
//! structures that capture the outputs of a benefits calculation, including
//! the individual bonus amounts and the audit trace explaining them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BonusFrequency;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The evaluated amount of one generic bonus for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAmount {
    /// Name of the bonus row that produced this amount.
    pub name: String,
    /// The computed amount.
    pub amount: Decimal,
    /// How often the bonus is paid.
    pub frequency: BonusFrequency,
}

/// Every bonus an employee is entitled to on a given date.
///
/// Used to pre-fill the assignments of a payroll payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsBreakdown {
    /// The employee's cedula.
    pub employee_cedula: String,
    /// The date the calculation was made for.
    pub computed_on: NaiveDate,
    /// The employee's monthly base salary at calculation time.
    pub monthly_salary: Decimal,
    /// Whole years of service at AVEC.
    pub years_of_service: u32,
    /// Seniority bonus amount.
    pub seniority_bonus: Decimal,
    /// Academic bonus amount.
    pub academic_bonus: Decimal,
    /// One entry per configured generic bonus, zero amounts included.
    pub generic_bonuses: Vec<BonusAmount>,
    /// How each amount was reached.
    pub audit_trace: AuditTrace,
}

impl BenefitsBreakdown {
    /// Sums the generic bonuses paid with the given frequency.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{AuditTrace, BenefitsBreakdown, BonusAmount, BonusFrequency};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// fn bonus(name: &str, amount: i64, frequency: BonusFrequency) -> BonusAmount {
    ///     BonusAmount { name: name.to_string(), amount: Decimal::new(amount, 0), frequency }
    /// }
    ///
    /// let breakdown = BenefitsBreakdown {
    ///     employee_cedula: "V-1".to_string(),
    ///     computed_on: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    ///     monthly_salary: Decimal::new(1000, 0),
    ///     years_of_service: 3,
    ///     seniority_bonus: Decimal::ZERO,
    ///     academic_bonus: Decimal::ZERO,
    ///     generic_bonuses: vec![
    ///         bonus("a", 10, BonusFrequency::Monthly),
    ///         bonus("b", 99, BonusFrequency::Annual),
    ///         bonus("c", 5, BonusFrequency::Monthly),
    ///     ],
    ///     audit_trace: AuditTrace { steps: vec![], duration_us: 0 },
    /// };
    ///
    /// assert_eq!(breakdown.generic_total(BonusFrequency::Monthly), Some(Decimal::new(15, 0)));
    /// ```
    pub fn generic_total(&self, frequency: BonusFrequency) -> Option<Decimal> {
        self.generic_bonuses
            .iter()
            .filter(|b| b.frequency == frequency)
            .try_fold(Decimal::ZERO, |total, b| total.checked_add(b.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bonus_amount_serialization() {
        let bonus = BonusAmount {
            name: "Prima por hijo".to_string(),
            amount: dec("25.00"),
            frequency: BonusFrequency::Monthly,
        };

        let json = serde_json::to_string(&bonus).unwrap();
        assert!(json.contains("\"name\":\"Prima por hijo\""));
        assert!(json.contains("\"amount\":\"25.00\""));
        assert!(json.contains("\"frequency\":\"monthly\""));
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "seniority_bonus".to_string(),
            rule_name: "Seniority Bonus".to_string(),
            input: serde_json::json!({"years_of_service": 7}),
            output: serde_json::json!({"percentage": "0.05"}),
            reasoning: "7 years qualifies for the 5 year tier".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"rule_id\":\"seniority_bonus\""));
        assert!(json.contains("\"years_of_service\":7"));
    }

    #[test]
    fn test_generic_total_with_no_bonuses_is_zero() {
        let breakdown = BenefitsBreakdown {
            employee_cedula: "V-1".to_string(),
            computed_on: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            monthly_salary: dec("1000"),
            years_of_service: 0,
            seniority_bonus: Decimal::ZERO,
            academic_bonus: Decimal::ZERO,
            generic_bonuses: vec![],
            audit_trace: AuditTrace {
                steps: vec![],
                duration_us: 0,
            },
        };

        assert_eq!(breakdown.generic_total(BonusFrequency::Annual), Some(Decimal::ZERO));
    }
}
