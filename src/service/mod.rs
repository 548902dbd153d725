//! Payroll service: the operations exposed to callers.
//!
//! [`PayrollService`] reads fresh settings and reference tables from the
//! store on every call, runs the pure calculation rules, and writes
//! finalized payments back. Store-level uniqueness violations on payments
//! are reported as [`EngineError::AlreadyPaid`].

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    COURSE_DEBT_FLOOR, FOOD_PROGRAM_FLOOR, calculate_benefits, calculate_course_debt,
    calculate_food_program_total, calculate_payroll_totals, calculate_performance_bonus,
    sum_course_payments,
};
use crate::config::{BonusTables, SettingsService, StoredSettings, WageParameters};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Actor, BenefitsBreakdown, CourseDebt, CoursePayment, FoodProgramPayment, PayrollAdditions,
    PayrollAssignments, PayrollDeductions, PayrollPayment, PayrollTotals,
    PerformanceEvaluationPayment, Period, PeriodKind,
};
use crate::store::{PayrollStore, StoreError};

/// Input for recording a payroll payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayrollPayment {
    /// The employee being paid.
    pub employee_cedula: String,
    /// A period of kind `payroll`.
    pub period_id: String,
    /// Assignment bonuses.
    pub assignments: PayrollAssignments,
    /// Additional earnings; missing entries count as zero.
    #[serde(default)]
    pub additions: PayrollAdditions,
    /// Deductions.
    pub deductions: PayrollDeductions,
}

/// Input for recording a food-program payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodProgramPayment {
    /// The employee being paid.
    pub employee_cedula: String,
    /// A period of kind `food_program`.
    pub period_id: String,
    /// Full benefit for the period.
    pub total_benefit: Decimal,
    /// Amount withheld for absences.
    pub absence_deduction: Decimal,
}

/// Input for recording a performance evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerformanceEvaluation {
    /// The evaluated employee.
    pub employee_cedula: String,
    /// A period of kind `evaluation`.
    pub period_id: String,
    /// Score from 0 to 100.
    pub score: u32,
}

/// Input for recording a student's payment towards a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCoursePayment {
    /// The paying student.
    pub student_cedula: String,
    /// The course being paid.
    pub course_id: String,
    /// Amount paid, greater than zero.
    pub amount: Decimal,
    /// Date of the payment, inside the course's enrollment period.
    pub paid_on: NaiveDate,
}

/// The payroll operations, backed by a [`PayrollStore`].
pub struct PayrollService<S> {
    store: Arc<S>,
}

impl<S> Clone for PayrollService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PayrollStore> PayrollService<S> {
    /// Creates a service over a shared store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn settings(&self) -> StoredSettings<'_, S> {
        StoredSettings::new(self.store.as_ref())
    }

    fn bonus_tables(&self) -> EngineResult<BonusTables> {
        Ok(BonusTables::new(
            self.store.seniority_tiers()?,
            self.store.academic_tiers()?,
            self.store.generic_bonuses()?,
            self.store.performance_tiers()?,
        ))
    }

    /// Computes every bonus an employee is entitled to on `today`.
    pub fn benefits_for(&self, cedula: &str, today: NaiveDate) -> EngineResult<BenefitsBreakdown> {
        let employee = self.store.employee(cedula)?;
        let tables = self.bonus_tables()?;
        let wages = WageParameters::load(&self.settings())?;

        let breakdown = calculate_benefits(&employee, &tables, &wages, today)?;
        debug!(
            cedula,
            years_of_service = breakdown.years_of_service,
            seniority_bonus = %breakdown.seniority_bonus,
            academic_bonus = %breakdown.academic_bonus,
            "Computed benefits"
        );
        Ok(breakdown)
    }

    /// Computes payroll totals without recording anything.
    pub fn preview_totals(
        &self,
        assignments: &PayrollAssignments,
        additions: &PayrollAdditions,
        deductions: &PayrollDeductions,
    ) -> EngineResult<PayrollTotals> {
        calculate_payroll_totals(assignments, additions, deductions)
    }

    /// Records a payroll payment with its computed totals.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Unauthorized`] if the actor may not record payments
    /// - [`EngineError::InvalidInput`] for negative amounts or a period of the wrong kind
    /// - [`EngineError::AlreadyPaid`] if the employee was already paid for the period
    /// - [`EngineError::CalculationError`] if a total overflows
    pub fn create_payroll_payment(
        &self,
        input: NewPayrollPayment,
        actor: &Actor,
    ) -> EngineResult<PayrollPayment> {
        authorize_payment(actor, "record payroll payments")?;
        validate_payroll_amounts(&input)?;

        let employee = self.store.employee(&input.employee_cedula)?;
        self.period_of_kind(&input.period_id, PeriodKind::Payroll)?;
        let employee_name = employee.full_name();

        let totals =
            calculate_payroll_totals(&input.assignments, &input.additions, &input.deductions)?;
        let payment = PayrollPayment {
            id: Uuid::new_v4(),
            employee_cedula: employee.cedula,
            period_id: input.period_id,
            base_salary: employee.monthly_salary,
            assignments: input.assignments,
            additions: input.additions,
            deductions: input.deductions,
            totals,
            created_at: Utc::now(),
        };

        self.store
            .insert_payroll_payment(payment.clone())
            .map_err(|e| already_paid(e, &payment.employee_cedula, &payment.period_id))?;

        info!(
            payment_id = %payment.id,
            cedula = %payment.employee_cedula,
            employee = %employee_name,
            period = %payment.period_id,
            total_payroll = %payment.totals.total_payroll,
            actor = %actor.username,
            "Payroll payment recorded"
        );
        Ok(payment)
    }

    /// Records a food-program payment.
    ///
    /// The amount to receive is not floored: an absence deduction larger
    /// than the benefit is stored as a negative amount.
    pub fn create_food_program_payment(
        &self,
        input: NewFoodProgramPayment,
        actor: &Actor,
    ) -> EngineResult<FoodProgramPayment> {
        authorize_payment(actor, "record food-program payments")?;
        require_non_negative("total_benefit", input.total_benefit)?;
        require_non_negative("absence_deduction", input.absence_deduction)?;

        let employee = self.store.employee(&input.employee_cedula)?;
        self.period_of_kind(&input.period_id, PeriodKind::FoodProgram)?;

        let total_to_receive = calculate_food_program_total(
            input.total_benefit,
            input.absence_deduction,
            FOOD_PROGRAM_FLOOR,
        )?;
        if total_to_receive.is_sign_negative() {
            warn!(
                cedula = %employee.cedula,
                period = %input.period_id,
                total_to_receive = %total_to_receive,
                "Food-program absence deduction exceeds benefit"
            );
        }

        let payment = FoodProgramPayment {
            id: Uuid::new_v4(),
            employee_cedula: employee.cedula,
            period_id: input.period_id,
            total_benefit: input.total_benefit,
            absence_deduction: input.absence_deduction,
            total_to_receive,
            created_at: Utc::now(),
        };

        self.store
            .insert_food_program_payment(payment.clone())
            .map_err(|e| already_paid(e, &payment.employee_cedula, &payment.period_id))?;

        info!(
            payment_id = %payment.id,
            cedula = %payment.employee_cedula,
            period = %payment.period_id,
            total_to_receive = %payment.total_to_receive,
            actor = %actor.username,
            "Food-program payment recorded"
        );
        Ok(payment)
    }

    /// Records a performance evaluation and its bonus.
    pub fn create_performance_evaluation(
        &self,
        input: NewPerformanceEvaluation,
        actor: &Actor,
    ) -> EngineResult<PerformanceEvaluationPayment> {
        authorize_payment(actor, "record performance evaluations")?;

        let employee = self.store.employee(&input.employee_cedula)?;
        self.period_of_kind(&input.period_id, PeriodKind::Evaluation)?;
        let tiers = self.store.performance_tiers()?;

        let bonus = calculate_performance_bonus(&employee, input.score, &tiers, 1)?;
        let payment = PerformanceEvaluationPayment {
            id: Uuid::new_v4(),
            employee_cedula: employee.cedula,
            period_id: input.period_id,
            score: bonus.score,
            percentage: bonus.percentage,
            amount: bonus.amount,
            created_at: Utc::now(),
        };

        self.store
            .insert_performance_evaluation(payment.clone())
            .map_err(|e| already_paid(e, &payment.employee_cedula, &payment.period_id))?;

        info!(
            payment_id = %payment.id,
            cedula = %payment.employee_cedula,
            score = payment.score,
            amount = %payment.amount,
            actor = %actor.username,
            "Performance evaluation recorded"
        );
        Ok(payment)
    }

    /// Records a student's payment towards a course and returns the
    /// remaining debt.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Unauthorized`] if the actor may not record payments
    /// - [`EngineError::CourseNotFound`] for an unknown course
    /// - [`EngineError::InvalidInput`] for a non-positive amount, or a payment
    ///   date outside the course's enrollment period
    pub fn record_course_payment(
        &self,
        input: NewCoursePayment,
        actor: &Actor,
    ) -> EngineResult<CourseDebt> {
        authorize_payment(actor, "record course payments")?;
        let payment = CoursePayment {
            student_cedula: input.student_cedula,
            course_id: input.course_id,
            amount: input.amount,
            paid_on: input.paid_on,
        };
        payment.validate()?;

        let course = self.store.course(&payment.course_id)?;
        let enrollment = self.period_of_kind(&course.period_id, PeriodKind::Enrollment)?;
        if !enrollment.contains_date(payment.paid_on) {
            return Err(EngineError::InvalidInput {
                field: "paid_on".to_string(),
                message: format!(
                    "{} is outside enrollment period '{}' ({} to {})",
                    payment.paid_on, enrollment.id, enrollment.start_date, enrollment.end_date
                ),
            });
        }

        let student_cedula = payment.student_cedula.clone();
        let amount = payment.amount;
        self.store.insert_course_payment(payment)?;
        info!(
            student = %student_cedula,
            course_id = %course.id,
            amount = %amount,
            actor = %actor.username,
            "Course payment recorded"
        );

        self.student_course_debt(&student_cedula, &course.id)
    }

    /// Computes what a student still owes on a course.
    pub fn student_course_debt(
        &self,
        student_cedula: &str,
        course_id: &str,
    ) -> EngineResult<CourseDebt> {
        let course = self.store.course(course_id)?;
        let payments = self.store.course_payments(student_cedula, course_id)?;
        let paid = sum_course_payments(&payments)?;

        Ok(CourseDebt {
            student_cedula: student_cedula.to_string(),
            course_id: course.id,
            course_price: course.price,
            paid,
            debt: calculate_course_debt(course.price, paid, COURSE_DEBT_FLOOR)?,
        })
    }

    /// Returns a configuration value.
    pub fn get_setting(&self, key: &str) -> EngineResult<Decimal> {
        self.settings().get(key)
    }

    /// Changes a configuration value on behalf of an administrator.
    pub fn update_setting(&self, key: &str, value: Decimal, actor: &Actor) -> EngineResult<()> {
        self.settings().set(key, value, actor)
    }

    fn period_of_kind(&self, period_id: &str, kind: PeriodKind) -> EngineResult<Period> {
        let period = self.store.period(period_id)?;
        if period.kind != kind {
            return Err(EngineError::InvalidInput {
                field: "period_id".to_string(),
                message: format!(
                    "period '{}' is a {:?} period, expected {:?}",
                    period_id, period.kind, kind
                ),
            });
        }
        Ok(period)
    }
}

fn authorize_payment(actor: &Actor, action: &str) -> EngineResult<()> {
    if actor.can_record_payments() {
        Ok(())
    } else {
        Err(EngineError::Unauthorized {
            actor: actor.username.clone(),
            action: action.to_string(),
        })
    }
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    Ok(())
}

fn validate_payroll_amounts(input: &NewPayrollPayment) -> EngineResult<()> {
    let a = &input.assignments;
    let d = &input.deductions;
    let fields = [
        ("assignments.academic", a.academic),
        ("assignments.seniority", a.seniority),
        ("assignments.per_child", a.per_child),
        ("assignments.compensatory", a.compensatory),
        ("deductions.housing_policy", d.housing_policy),
        ("deductions.social_security", d.social_security),
        ("deductions.unemployment_insurance", d.unemployment_insurance),
    ];
    for (field, value) in fields {
        require_non_negative(field, value)?;
    }
    for value in input.additions.amounts() {
        require_non_negative("additions", value)?;
    }
    Ok(())
}

fn already_paid(error: StoreError, employee: &str, period: &str) -> EngineError {
    match error {
        StoreError::UniqueViolation { .. } => EngineError::AlreadyPaid {
            employee: employee.to_string(),
            period: period.to_string(),
        },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{INTEGRAL_SALARY_KEY, MINIMUM_WAGE_KEY, SeedData};
    use crate::models::{
        AcademicBonusTier, AcademicLevel, BonusBase, BonusFrequency, BonusKind, Course,
        CoursePayment, Employee, GenericBonus, PerformanceTier, PostgraduateLevel, Role,
        SeniorityBonusTier,
    };
    use crate::store::InMemoryStore;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn actor(role: Role) -> Actor {
        Actor {
            username: "mrodriguez".to_string(),
            role,
        }
    }

    fn period(id: &str, kind: PeriodKind) -> Period {
        Period {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 1, 31),
        }
    }

    fn create_test_service() -> PayrollService<InMemoryStore> {
        let mut seed = SeedData::default();
        seed.settings.insert(MINIMUM_WAGE_KEY.to_string(), dec("130"));
        seed.settings.insert(INTEGRAL_SALARY_KEY.to_string(), dec("1.5"));
        seed.tables = BonusTables::new(
            vec![
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
                level: AcademicLevel::Masters,
                percentage: dec("0.25"),
            }],
            vec![GenericBonus {
                name: "Bono de alimentación".to_string(),
                factor: dec("0.5"),
                base: BonusBase::MinimumWage,
                frequency: BonusFrequency::Monthly,
                kind: BonusKind::Factor,
            }],
            vec![PerformanceTier {
                min_score: 70,
                percentage: dec("0.10"),
            }],
        );
        seed.employees.push(Employee {
            cedula: "V-12345678".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            monthly_salary: dec("1000"),
            avec_hire_date: date(2018, 1, 15),
            academic_title: None,
            postgraduate_level: PostgraduateLevel::Masters,
            children_count: 1,
            weekly_hours: dec("40"),
        });
        seed.periods.push(period("2025-01", PeriodKind::Payroll));
        seed.periods.push(period("pae-2025-01", PeriodKind::FoodProgram));
        seed.periods.push(period("eval-2025", PeriodKind::Evaluation));
        seed.periods.push(period("ins-2025-1", PeriodKind::Enrollment));
        seed.courses.push(Course {
            id: "robotica-2025".to_string(),
            name: "Robótica".to_string(),
            price: dec("500"),
            period_id: "ins-2025-1".to_string(),
        });
        seed.course_payments.push(CoursePayment {
            student_cedula: "V-30111222".to_string(),
            course_id: "robotica-2025".to_string(),
            amount: dec("600"),
            paid_on: date(2025, 1, 10),
        });

        PayrollService::new(Arc::new(InMemoryStore::from_seed(seed)))
    }

    fn payroll_input() -> NewPayrollPayment {
        NewPayrollPayment {
            employee_cedula: "V-12345678".to_string(),
            period_id: "2025-01".to_string(),
            assignments: PayrollAssignments {
                academic: dec("100"),
                seniority: dec("50"),
                ..Default::default()
            },
            additions: PayrollAdditions::default(),
            deductions: PayrollDeductions {
                housing_policy: dec("30"),
                social_security: dec("20"),
                unemployment_insurance: dec("10"),
            },
        }
    }

    #[test]
    fn test_benefits_for_uses_stored_settings() {
        let service = create_test_service();
        let breakdown = service.benefits_for("V-12345678", date(2025, 6, 30)).unwrap();

        assert_eq!(breakdown.seniority_bonus, dec("50"));
        assert_eq!(breakdown.academic_bonus, dec("250"));
        assert_eq!(breakdown.generic_bonuses[0].amount, dec("65"));

        service
            .update_setting(MINIMUM_WAGE_KEY, dec("175"), &actor(Role::Admin))
            .unwrap();
        let breakdown = service.benefits_for("V-12345678", date(2025, 6, 30)).unwrap();
        assert_eq!(breakdown.generic_bonuses[0].amount, dec("87.5"));
    }

    #[test]
    fn test_benefits_for_unknown_employee() {
        let service = create_test_service();
        let result = service.benefits_for("V-0", date(2025, 6, 30));
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_create_payroll_payment_stores_totals() {
        let service = create_test_service();
        let payment = service
            .create_payroll_payment(payroll_input(), &actor(Role::PayrollClerk))
            .unwrap();

        assert_eq!(payment.base_salary, dec("1000"));
        assert_eq!(payment.totals.total_payroll, dec("90"));
        assert_eq!(service.store().payroll_payments("V-12345678").unwrap().len(), 1);
    }

    #[test]
    fn test_second_payroll_payment_is_already_paid() {
        let service = create_test_service();
        service
            .create_payroll_payment(payroll_input(), &actor(Role::Admin))
            .unwrap();

        let result = service.create_payroll_payment(payroll_input(), &actor(Role::Admin));
        match result {
            Err(EngineError::AlreadyPaid { employee, period }) => {
                assert_eq!(employee, "V-12345678");
                assert_eq!(period, "2025-01");
            }
            other => panic!("Expected AlreadyPaid, got {:?}", other),
        }
    }

    #[test]
    fn test_viewer_cannot_record_payments() {
        let service = create_test_service();
        let result = service.create_payroll_payment(payroll_input(), &actor(Role::Viewer));
        assert!(matches!(result, Err(EngineError::Unauthorized { .. })));
    }

    #[test]
    fn test_payroll_payment_rejects_wrong_period_kind() {
        let service = create_test_service();
        let mut input = payroll_input();
        input.period_id = "pae-2025-01".to_string();

        let result = service.create_payroll_payment(input, &actor(Role::Admin));
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "period_id"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_payroll_payment_rejects_negative_deduction() {
        let service = create_test_service();
        let mut input = payroll_input();
        input.deductions.social_security = dec("-1");

        let result = service.create_payroll_payment(input, &actor(Role::Admin));
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_food_program_payment_may_be_negative() {
        let service = create_test_service();
        let payment = service
            .create_food_program_payment(
                NewFoodProgramPayment {
                    employee_cedula: "V-12345678".to_string(),
                    period_id: "pae-2025-01".to_string(),
                    total_benefit: dec("200"),
                    absence_deduction: dec("250"),
                },
                &actor(Role::PayrollClerk),
            )
            .unwrap();

        assert_eq!(payment.total_to_receive, dec("-50"));
    }

    #[test]
    fn test_performance_evaluation_records_bonus() {
        let service = create_test_service();
        let input = NewPerformanceEvaluation {
            employee_cedula: "V-12345678".to_string(),
            period_id: "eval-2025".to_string(),
            score: 85,
        };

        let payment = service
            .create_performance_evaluation(input.clone(), &actor(Role::Admin))
            .unwrap();
        assert_eq!(payment.amount, dec("100"));

        let again = service.create_performance_evaluation(input, &actor(Role::Admin));
        assert!(matches!(again, Err(EngineError::AlreadyPaid { .. })));
    }

    #[test]
    fn test_overpaid_course_has_zero_debt() {
        let service = create_test_service();
        let debt = service.student_course_debt("V-30111222", "robotica-2025").unwrap();

        assert_eq!(debt.paid, dec("600"));
        assert_eq!(debt.debt, Decimal::ZERO);
    }

    #[test]
    fn test_student_without_payments_owes_full_price() {
        let service = create_test_service();
        let debt = service.student_course_debt("V-1", "robotica-2025").unwrap();
        assert_eq!(debt.debt, dec("500"));
    }

    #[test]
    fn test_unknown_course_is_not_found() {
        let service = create_test_service();
        let result = service.student_course_debt("V-1", "nope");
        assert!(matches!(result, Err(EngineError::CourseNotFound { .. })));
    }

    #[test]
    fn test_update_setting_requires_admin() {
        let service = create_test_service();
        let result =
            service.update_setting(MINIMUM_WAGE_KEY, dec("200"), &actor(Role::PayrollClerk));

        assert!(matches!(result, Err(EngineError::Unauthorized { .. })));
        assert_eq!(service.get_setting(MINIMUM_WAGE_KEY).unwrap(), dec("130"));
    }

    #[test]
    fn test_unknown_setting() {
        let service = create_test_service();
        let result = service.get_setting("tasa_cambio");
        assert!(matches!(result, Err(EngineError::SettingNotFound { .. })));
    }

    fn course_payment(amount: &str, paid_on: NaiveDate) -> NewCoursePayment {
        NewCoursePayment {
            student_cedula: "V-30555666".to_string(),
            course_id: "robotica-2025".to_string(),
            amount: dec(amount),
            paid_on,
        }
    }

    #[test]
    fn test_course_payment_reduces_debt() {
        let service = create_test_service();

        let debt = service
            .record_course_payment(course_payment("150", date(2025, 1, 20)), &actor(Role::Admin))
            .unwrap();
        assert_eq!(debt.paid, dec("150"));
        assert_eq!(debt.debt, dec("350"));

        let debt = service
            .record_course_payment(
                course_payment("400", date(2025, 1, 31)),
                &actor(Role::PayrollClerk),
            )
            .unwrap();
        assert_eq!(debt.paid, dec("550"));
        assert_eq!(debt.debt, Decimal::ZERO);
    }

    #[test]
    fn test_course_payment_outside_enrollment_period_rejected() {
        let service = create_test_service();
        let result = service
            .record_course_payment(course_payment("150", date(2025, 2, 1)), &actor(Role::Admin));

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "paid_on"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        let debt = service.student_course_debt("V-30555666", "robotica-2025").unwrap();
        assert_eq!(debt.paid, Decimal::ZERO);
    }

    #[test]
    fn test_course_payment_must_be_positive() {
        let service = create_test_service();
        let result = service
            .record_course_payment(course_payment("0", date(2025, 1, 20)), &actor(Role::Admin));

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "amount"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_viewer_cannot_record_course_payment() {
        let service = create_test_service();
        let result = service
            .record_course_payment(course_payment("150", date(2025, 1, 20)), &actor(Role::Viewer));
        assert!(matches!(result, Err(EngineError::Unauthorized { .. })));
    }

    #[test]
    fn test_overflowing_payroll_amounts_store_nothing() {
        let service = create_test_service();
        let mut input = payroll_input();
        input.assignments.academic = Decimal::MAX;
        input.assignments.seniority = Decimal::MAX;

        let result = service.create_payroll_payment(input, &actor(Role::Admin));

        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
        assert!(service.store().payroll_payments("V-12345678").unwrap().is_empty());
    }
}
