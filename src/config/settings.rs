//! The configuration service for system-wide constants.
//!
//! Constants such as the minimum wage live in the store and can change at
//! runtime, so every read goes through [`SettingsService`] instead of being
//! looked up ad hoc. Writes require an administrator.

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Actor;
use crate::store::PayrollStore;

use super::types::{INTEGRAL_SALARY_KEY, MINIMUM_WAGE_KEY};

/// Read and write access to system-wide constants.
pub trait SettingsService {
    /// Returns the current value of `key`.
    fn get(&self, key: &str) -> EngineResult<Decimal>;

    /// Stores `value` under `key` on behalf of `actor`.
    ///
    /// Fails with [`EngineError::Unauthorized`] unless the actor may manage
    /// settings, with [`EngineError::InvalidInput`] for negative values, and
    /// with [`EngineError::SettingNotFound`] for a key that does not exist.
    /// Settings are seeded from configuration; writes never create keys.
    fn set(&self, key: &str, value: Decimal, actor: &Actor) -> EngineResult<()>;
}

/// A [`SettingsService`] that reads through to a [`PayrollStore`].
pub struct StoredSettings<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: PayrollStore + ?Sized> StoredSettings<'a, S> {
    /// Wraps a store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: PayrollStore + ?Sized> SettingsService for StoredSettings<'_, S> {
    fn get(&self, key: &str) -> EngineResult<Decimal> {
        Ok(self.store.setting(key)?)
    }

    fn set(&self, key: &str, value: Decimal, actor: &Actor) -> EngineResult<()> {
        if !actor.can_manage_settings() {
            return Err(EngineError::Unauthorized {
                actor: actor.username.clone(),
                action: format!("change setting '{}'", key),
            });
        }
        if value.is_sign_negative() {
            return Err(EngineError::InvalidInput {
                field: key.to_string(),
                message: "cannot be negative".to_string(),
            });
        }

        self.store.put_setting(key, value)?;
        info!(key, value = %value, actor = %actor.username, "Setting updated");
        Ok(())
    }
}

/// The wage constants the generic bonuses are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageParameters {
    /// Statutory minimum wage (`sueldo_minimo`).
    pub minimum_wage: Decimal,
    /// Multiplier turning base salary into integral salary (`salario_integral`).
    pub integral_salary_multiplier: Decimal,
}

impl WageParameters {
    /// Reads the current wage constants from the settings service.
    pub fn load(settings: &impl SettingsService) -> EngineResult<Self> {
        Ok(Self {
            minimum_wage: settings.get(MINIMUM_WAGE_KEY)?,
            integral_salary_multiplier: settings.get(INTEGRAL_SALARY_KEY)?,
        })
    }
}
