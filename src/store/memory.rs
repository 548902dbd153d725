//! [`InMemoryStore`], a [`PayrollStore`] held in process memory.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;

use crate::config::{BonusTables, SeedData};
use crate::models::{
    AcademicBonusTier, Course, CoursePayment, Employee, FoodProgramPayment, GenericBonus,
    PayrollPayment, PerformanceEvaluationPayment, PerformanceTier, Period, SeniorityBonusTier,
};

use super::{Entity, PAYMENT_UNIQUE_COLUMNS, PayrollStore, StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    employees: HashMap<String, Employee>,
    bonus_tables: BonusTables,
    settings: HashMap<String, Decimal>,
    periods: HashMap<String, Period>,
    courses: HashMap<String, Course>,
    course_payments: Vec<CoursePayment>,
    payroll_payments: Vec<PayrollPayment>,
    food_program_payments: Vec<FoodProgramPayment>,
    evaluations: Vec<PerformanceEvaluationPayment>,
}

/// A store backed by maps behind a single lock.
///
/// Uniqueness checks and inserts happen under the same write guard, so two
/// concurrent payments for one employee and period cannot both succeed.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates a store pre-populated from seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        let tables = Tables {
            employees: seed
                .employees
                .into_iter()
                .map(|e| (e.cedula.clone(), e))
                .collect(),
            bonus_tables: seed.tables,
            settings: seed.settings,
            periods: seed.periods.into_iter().map(|p| (p.id.clone(), p)).collect(),
            courses: seed.courses.into_iter().map(|c| (c.id.clone(), c)).collect(),
            course_payments: seed.course_payments,
            ..Default::default()
        };
        Self {
            inner: RwLock::new(tables),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

fn not_found(entity: Entity, key: &str) -> StoreError {
    StoreError::NotFound {
        entity,
        key: key.to_string(),
    }
}

fn payment_conflict() -> StoreError {
    StoreError::UniqueViolation {
        column: PAYMENT_UNIQUE_COLUMNS.to_string(),
    }
}

impl PayrollStore for InMemoryStore {
    fn employee(&self, cedula: &str) -> StoreResult<Employee> {
        self.read()?
            .employees
            .get(cedula)
            .cloned()
            .ok_or_else(|| not_found(Entity::Employee, cedula))
    }

    fn seniority_tiers(&self) -> StoreResult<Vec<SeniorityBonusTier>> {
        Ok(self.read()?.bonus_tables.seniority().to_vec())
    }

    fn academic_tiers(&self) -> StoreResult<Vec<AcademicBonusTier>> {
        Ok(self.read()?.bonus_tables.academic().to_vec())
    }

    fn generic_bonuses(&self) -> StoreResult<Vec<GenericBonus>> {
        Ok(self.read()?.bonus_tables.generic().to_vec())
    }

    fn performance_tiers(&self) -> StoreResult<Vec<PerformanceTier>> {
        Ok(self.read()?.bonus_tables.performance().to_vec())
    }

    fn setting(&self, key: &str) -> StoreResult<Decimal> {
        self.read()?
            .settings
            .get(key)
            .copied()
            .ok_or_else(|| not_found(Entity::Setting, key))
    }

    fn put_setting(&self, key: &str, value: Decimal) -> StoreResult<()> {
        let mut tables = self.write()?;
        let slot = tables
            .settings
            .get_mut(key)
            .ok_or_else(|| not_found(Entity::Setting, key))?;
        *slot = value;
        Ok(())
    }

    fn period(&self, id: &str) -> StoreResult<Period> {
        self.read()?
            .periods
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(Entity::Period, id))
    }

    fn course(&self, id: &str) -> StoreResult<Course> {
        self.read()?
            .courses
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(Entity::Course, id))
    }

    fn course_payments(
        &self,
        student_cedula: &str,
        course_id: &str,
    ) -> StoreResult<Vec<CoursePayment>> {
        Ok(self
            .read()?
            .course_payments
            .iter()
            .filter(|p| p.student_cedula == student_cedula && p.course_id == course_id)
            .cloned()
            .collect())
    }

    fn insert_course_payment(&self, payment: CoursePayment) -> StoreResult<()> {
        if payment.amount <= Decimal::ZERO {
            return Err(StoreError::Validation {
                field: "amount".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        let mut tables = self.write()?;
        if !tables.courses.contains_key(&payment.course_id) {
            return Err(not_found(Entity::Course, &payment.course_id));
        }
        tables.course_payments.push(payment);
        Ok(())
    }

    fn insert_payroll_payment(&self, payment: PayrollPayment) -> StoreResult<()> {
        let mut tables = self.write()?;
        let duplicate = tables.payroll_payments.iter().any(|p| {
            p.employee_cedula == payment.employee_cedula && p.period_id == payment.period_id
        });
        if duplicate {
            return Err(payment_conflict());
        }
        tables.payroll_payments.push(payment);
        Ok(())
    }

    fn payroll_payments(&self, employee_cedula: &str) -> StoreResult<Vec<PayrollPayment>> {
        Ok(self
            .read()?
            .payroll_payments
            .iter()
            .filter(|p| p.employee_cedula == employee_cedula)
            .cloned()
            .collect())
    }

    fn insert_food_program_payment(&self, payment: FoodProgramPayment) -> StoreResult<()> {
        let mut tables = self.write()?;
        let duplicate = tables.food_program_payments.iter().any(|p| {
            p.employee_cedula == payment.employee_cedula && p.period_id == payment.period_id
        });
        if duplicate {
            return Err(payment_conflict());
        }
        tables.food_program_payments.push(payment);
        Ok(())
    }

    fn insert_performance_evaluation(
        &self,
        payment: PerformanceEvaluationPayment,
    ) -> StoreResult<()> {
        let mut tables = self.write()?;
        let duplicate = tables.evaluations.iter().any(|p| {
            p.employee_cedula == payment.employee_cedula && p.period_id == payment.period_id
        });
        if duplicate {
            return Err(payment_conflict());
        }
        tables.evaluations.push(payment);
        Ok(())
    }
}
