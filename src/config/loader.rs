//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the settings,
//! bonus tables and seed records from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AcademicBonusFile, BonusTables, CoursesFile, EmployeesFile, GenericBonusFile,
    PerformanceTierFile, PeriodsFile, SeedData, SeniorityBonusFile, SettingsFile,
};

/// Loads and provides access to the seed configuration.
///
/// # Directory Structure
///
/// ```text
/// config/avec/
/// ├── settings.yaml           # sueldo_minimo, salario_integral, ...
/// ├── seniority_bonuses.yaml  # primas de antigüedad
/// ├── academic_bonuses.yaml   # primas académicas
/// ├── bonuses.yaml            # generic primas
/// ├── performance_tiers.yaml  # optional
/// ├── employees.yaml          # optional
/// ├── periods.yaml            # optional
/// └── courses.yaml            # optional
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/avec").unwrap();
/// println!("{} generic bonuses", loader.tables().generic().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    seed: SeedData,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a required file is missing, any file contains
    /// invalid YAML, or a seeded employee or course payment is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<SettingsFile>(&path.join("settings.yaml"))?;
        let seniority =
            Self::load_yaml::<SeniorityBonusFile>(&path.join("seniority_bonuses.yaml"))?;
        let academic = Self::load_yaml::<AcademicBonusFile>(&path.join("academic_bonuses.yaml"))?;
        let generic = Self::load_yaml::<GenericBonusFile>(&path.join("bonuses.yaml"))?;

        let performance = Self::load_optional_yaml::<PerformanceTierFile>(
            &path.join("performance_tiers.yaml"),
        )?
        .map(|f| f.tiers)
        .unwrap_or_default();
        let employees = Self::load_optional_yaml::<EmployeesFile>(&path.join("employees.yaml"))?
            .map(|f| f.employees)
            .unwrap_or_default();
        let periods = Self::load_optional_yaml::<PeriodsFile>(&path.join("periods.yaml"))?
            .map(|f| f.periods)
            .unwrap_or_default();
        let (courses, course_payments) =
            match Self::load_optional_yaml::<CoursesFile>(&path.join("courses.yaml"))? {
                Some(file) => (file.courses, file.payments),
                None => (Vec::new(), Vec::new()),
            };

        for employee in &employees {
            employee.validate()?;
        }
        for payment in &course_payments {
            payment.validate()?;
            if !courses.iter().any(|c| c.id == payment.course_id) {
                return Err(EngineError::CourseNotFound {
                    course_id: payment.course_id.clone(),
                });
            }
        }

        let seed = SeedData {
            settings: settings.settings,
            tables: BonusTables::new(seniority.tiers, academic.tiers, generic.bonuses, performance),
            employees,
            periods,
            courses,
            course_payments,
        };

        debug!(
            path = %path.display(),
            employees = seed.employees.len(),
            generic_bonuses = seed.tables.generic().len(),
            "Loaded seed configuration"
        );

        Ok(Self { seed })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads a YAML file that may be absent.
    fn load_optional_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_yaml(path).map(Some)
    }

    /// Returns the bonus tables.
    pub fn tables(&self) -> &BonusTables {
        &self.seed.tables
    }

    /// Returns everything that was loaded.
    pub fn seed(&self) -> &SeedData {
        &self.seed
    }

    /// Consumes the loader, returning the loaded data.
    pub fn into_seed(self) -> SeedData {
        self.seed
    }
}
