//! Configuration loading and management for the payroll engine.
//!
//! This module loads the seed configuration from YAML files (settings, bonus
//! tables and reference records) and provides the [`SettingsService`] through
//! which system-wide constants are read and changed at runtime.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/avec").unwrap();
//! println!("Loaded {} seniority tiers", config.tables().seniority().len());
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{SettingsService, StoredSettings, WageParameters};
pub use types::{
    AcademicBonusFile, BonusTables, CoursesFile, EmployeesFile, GenericBonusFile,
    INTEGRAL_SALARY_KEY, MINIMUM_WAGE_KEY, PerformanceTierFile, PeriodsFile, SeedData,
    SeniorityBonusFile, SettingsFile,
};
