//! Course and course payment models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A course offered in an enrollment period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Full price of the course.
    pub price: Decimal,
    /// The enrollment period the course runs in.
    pub period_id: String,
}

/// A payment made by a student towards a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePayment {
    /// The paying student's cedula.
    pub student_cedula: String,
    /// The course being paid.
    pub course_id: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Date of the payment.
    pub paid_on: NaiveDate,
}

impl CoursePayment {
    /// Checks that the payment is for a positive amount by an identified
    /// student.
    pub fn validate(&self) -> EngineResult<()> {
        if self.student_cedula.trim().is_empty() {
            return Err(EngineError::InvalidInput {
                field: "student_cedula".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "amount".to_string(),
                message: format!(
                    "must be greater than zero, got {} for course '{}'",
                    self.amount, self.course_id
                ),
            });
        }
        Ok(())
    }
}

/// What a student still owes on a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDebt {
    /// The student's cedula.
    pub student_cedula: String,
    /// The course.
    pub course_id: String,
    /// Full price of the course.
    pub course_price: Decimal,
    /// Sum of the student's payments towards the course.
    pub paid: Decimal,
    /// Outstanding amount, never negative.
    pub debt: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_payment_deserialization() {
        let yaml = r#"
student_cedula: "V-30111222"
course_id: "robotica-2025"
amount: "150.00"
paid_on: "2025-02-10"
"#;
        let payment: CoursePayment = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(payment.amount, Decimal::new(15000, 2));
        assert_eq!(payment.paid_on, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
    }

    fn payment(cedula: &str, amount: Decimal) -> CoursePayment {
        CoursePayment {
            student_cedula: cedula.to_string(),
            course_id: "robotica-2025".to_string(),
            amount,
            paid_on: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        assert!(payment("V-30111222", Decimal::new(1, 2)).validate().is_ok());

        for amount in [Decimal::ZERO, Decimal::new(-50, 0)] {
            match payment("V-30111222", amount).validate() {
                Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "amount"),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_blank_student() {
        let result = payment("  ", Decimal::new(100, 0)).validate();
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }
}
