//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod actor;
mod bonus;
mod calculation_result;
mod course;
mod employee;
mod payment;
mod period;

pub use actor::{Actor, Role};
pub use bonus::{
    AcademicBonusTier, BonusBase, BonusFrequency, BonusKind, GenericBonus, PerformanceTier,
    SeniorityBonusTier,
};
pub use calculation_result::{AuditStep, AuditTrace, BenefitsBreakdown, BonusAmount};
pub use course::{Course, CourseDebt, CoursePayment};
pub use employee::{AcademicLevel, Employee, PostgraduateLevel};
pub use payment::{
    FoodProgramPayment, PayrollAdditions, PayrollAssignments, PayrollDeductions, PayrollPayment,
    PayrollTotals, PerformanceEvaluationPayment,
};
pub use period::{Period, PeriodKind};
