//! HTTP API module for the payroll engine.
//!
//! This module provides the JSON endpoints for benefits, payroll totals,
//! payments, evaluations, course payments and debt, and settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ANONYMOUS_USER, BenefitsQuery, CoursePaymentRequest, PayrollTotalsRequest,
    SettingUpdateRequest, USER_NAME_HEADER, USER_ROLE_HEADER, actor_from_headers,
};
pub use response::{ActionResponse, ApiError, ApiErrorResponse, ResponseKind};
pub use state::AppState;
