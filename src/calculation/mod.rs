//! Calculation logic for the benefits and payroll engine.
//!
//! Each rule lives in its own module and is a pure function of its inputs:
//! seniority, academic and generic bonuses, payroll totals, food-program
//! totals, course debt and performance bonuses. Rules that feed the
//! benefits breakdown return an [`AuditStep`](crate::models::AuditStep)
//! alongside their amount. Amounts are combined with overflow-checked
//! arithmetic, so an out-of-range result is an error rather than a panic.

mod academic_bonus;
mod benefits;
mod course_debt;
mod floor_policy;
mod food_program;
mod generic_bonus;
mod money;
mod payroll_totals;
mod performance_bonus;
mod seniority_bonus;

pub use academic_bonus::{
    AcademicBonusResult, AcademicLevelSource, LICENCIADO_TITLE_MARKER, TSU_TITLE_MARKER,
    calculate_academic_bonus, resolve_academic_level,
};
pub use benefits::calculate_benefits;
pub use course_debt::{calculate_course_debt, sum_course_payments};
pub use floor_policy::{COURSE_DEBT_FLOOR, FOOD_PROGRAM_FLOOR, FloorPolicy};
pub use food_program::calculate_food_program_total;
pub use generic_bonus::{
    GenericBonusesResult, SALARY_DAYS_PER_MONTH, calculate_generic_bonuses,
    evaluate_generic_bonus,
};
pub use payroll_totals::calculate_payroll_totals;
pub use performance_bonus::{
    MAX_EVALUATION_SCORE, PerformanceBonusResult, calculate_performance_bonus,
    select_performance_tier,
};
pub use seniority_bonus::{
    SeniorityBonusResult, calculate_seniority_bonus, select_seniority_tier, years_of_service,
};
