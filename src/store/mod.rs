//! Storage seam for employees, reference tables, settings and payments.
//!
//! The calculator never talks to storage directly; the service layer reads
//! fresh rows through [`PayrollStore`] on every call and writes finalized
//! payments back through it. Errors are typed ([`StoreError`]) so callers
//! match on the kind of failure rather than on message text.

mod error;
mod memory;

use rust_decimal::Decimal;

use crate::models::{
    AcademicBonusTier, Course, CoursePayment, Employee, FoodProgramPayment, GenericBonus,
    PayrollPayment, PerformanceEvaluationPayment, PerformanceTier, Period, SeniorityBonusTier,
};

pub use error::{Entity, StoreError, StoreResult};
pub use memory::InMemoryStore;

/// Column set that payments must be unique on.
pub const PAYMENT_UNIQUE_COLUMNS: &str = "employee_cedula, period_id";

/// Persistent storage used by the payroll service.
///
/// Payment inserts must reject a second payment of the same kind for the
/// same employee and period with [`StoreError::UniqueViolation`].
pub trait PayrollStore: Send + Sync {
    /// Fetches an employee by cedula.
    fn employee(&self, cedula: &str) -> StoreResult<Employee>;

    /// Returns the seniority tiers, sorted ascending by threshold.
    fn seniority_tiers(&self) -> StoreResult<Vec<SeniorityBonusTier>>;

    /// Returns the academic tiers.
    fn academic_tiers(&self) -> StoreResult<Vec<AcademicBonusTier>>;

    /// Returns the generic primas.
    fn generic_bonuses(&self) -> StoreResult<Vec<GenericBonus>>;

    /// Returns the performance tiers, sorted ascending by minimum score.
    fn performance_tiers(&self) -> StoreResult<Vec<PerformanceTier>>;

    /// Fetches a configuration value.
    fn setting(&self, key: &str) -> StoreResult<Decimal>;

    /// Replaces an existing configuration value.
    ///
    /// Fails with [`StoreError::NotFound`] if `key` has never been set.
    fn put_setting(&self, key: &str, value: Decimal) -> StoreResult<()>;

    /// Fetches a period by id.
    fn period(&self, id: &str) -> StoreResult<Period>;

    /// Fetches a course by id.
    fn course(&self, id: &str) -> StoreResult<Course>;

    /// Returns a student's payments towards a course.
    fn course_payments(
        &self,
        student_cedula: &str,
        course_id: &str,
    ) -> StoreResult<Vec<CoursePayment>>;

    /// Records a course payment. Fails with [`StoreError::Validation`] for a
    /// non-positive amount and [`StoreError::NotFound`] for an unknown course.
    fn insert_course_payment(&self, payment: CoursePayment) -> StoreResult<()>;

    /// Records a payroll payment.
    fn insert_payroll_payment(&self, payment: PayrollPayment) -> StoreResult<()>;

    /// Returns an employee's payroll payments, oldest first.
    fn payroll_payments(&self, employee_cedula: &str) -> StoreResult<Vec<PayrollPayment>>;

    /// Records a food-program payment.
    fn insert_food_program_payment(&self, payment: FoodProgramPayment) -> StoreResult<()>;

    /// Records a performance-evaluation payment.
    fn insert_performance_evaluation(
        &self,
        payment: PerformanceEvaluationPayment,
    ) -> StoreResult<()>;
}
