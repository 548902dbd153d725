//! Request types for the payroll API.
//!
//! Payment bodies deserialize straight into the service inputs
//! ([`NewPayrollPayment`](crate::service::NewPayrollPayment) and friends);
//! this module holds the remaining bodies, query strings and the caller
//! identity headers.

use axum::http::HeaderMap;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Actor, PayrollAdditions, PayrollAssignments, PayrollDeductions, Role};

use super::response::ApiError;

/// Header carrying the caller's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Header carrying the caller's login name.
pub const USER_NAME_HEADER: &str = "x-user-name";

/// Username recorded when no name header is sent.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Query string for `GET /employees/:cedula/benefits`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenefitsQuery {
    /// Calculation date; today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request body for `POST /payroll/totals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollTotalsRequest {
    /// Assignment bonuses.
    pub assignments: PayrollAssignments,
    /// Additional earnings; any may be omitted.
    #[serde(default)]
    pub additions: PayrollAdditions,
    /// Deductions.
    pub deductions: PayrollDeductions,
}

/// Request body for `POST /students/:cedula/courses/:course_id/payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePaymentRequest {
    /// Amount paid.
    pub amount: Decimal,
    /// Date of the payment.
    pub paid_on: NaiveDate,
}

/// Request body for `PUT /settings/:key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingUpdateRequest {
    /// The new value.
    pub value: Decimal,
}

/// Builds the calling [`Actor`] from the identity headers.
///
/// A request without a role header is treated as a viewer. An unknown role
/// is a validation error.
pub fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let username = headers
        .get(USER_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(ANONYMOUS_USER)
        .to_string();

    let role = match headers.get(USER_ROLE_HEADER) {
        None => Role::Viewer,
        Some(value) => value
            .to_str()
            .map_err(|_| ApiError::validation_error("Rol de usuario inválido"))?
            .parse::<Role>()
            .map_err(|e| ApiError::with_details("INVALID_ROLE", "Rol de usuario inválido", e))?,
    };

    Ok(Actor { username, role })
}
