//! Response types for the payroll API.
//!
//! Every response, success or failure, uses the same envelope:
//!
//! ```json
//! {"type": "success", "message": "Pago de nómina registrado", "data": {...}}
//! {"type": "error", "message": "Empleado no encontrado", "data": {"code": "EMPLOYEE_NOT_FOUND"}}
//! ```

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::store::StoreError;

/// Whether a response reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Error,
}

/// The response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    /// Success or error.
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    /// User-facing message, in Spanish.
    pub message: String,
    /// The payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ActionResponse<T> {
    /// Creates a success envelope.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            kind: ResponseKind::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// API error details carried in the `data` field of an error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// User-facing message, in Spanish.
    #[serde(skip)]
    pub message: String,
    /// Optional technical details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error.
    pub fn validation_error(details: impl Into<String>) -> Self {
        Self::with_details("VALIDATION_ERROR", "Datos inválidos", details)
    }

    /// Creates a malformed JSON error.
    pub fn malformed_json(details: impl Into<String>) -> Self {
        Self::with_details("MALFORMED_JSON", "El cuerpo de la solicitud no es JSON válido", details)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let body = ActionResponse {
            kind: ResponseKind::Error,
            message: self.error.message.clone(),
            data: Some(self.error),
        };
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(body),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let details = error.to_string();
        let (status, code, message) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Error de configuración",
            ),
            EngineError::EmployeeNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "EMPLOYEE_NOT_FOUND",
                "Empleado no encontrado",
            ),
            EngineError::CourseNotFound { .. } => {
                (StatusCode::NOT_FOUND, "COURSE_NOT_FOUND", "Curso no encontrado")
            }
            EngineError::PeriodNotFound { .. } => {
                (StatusCode::NOT_FOUND, "PERIOD_NOT_FOUND", "Periodo no encontrado")
            }
            EngineError::SettingNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "SETTING_NOT_FOUND",
                "Configuración no encontrada",
            ),
            EngineError::InvalidEmployee { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_EMPLOYEE",
                "Datos del empleado inválidos",
            ),
            EngineError::InvalidInput { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Datos inválidos")
            }
            EngineError::AlreadyPaid { .. } => (
                StatusCode::CONFLICT,
                "ALREADY_PAID",
                "El empleado ya tiene un pago registrado para este periodo",
            ),
            EngineError::Unauthorized { .. } => (
                StatusCode::FORBIDDEN,
                "UNAUTHORIZED",
                "No tiene permisos para realizar esta acción",
            ),
            EngineError::Store(StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Registro no encontrado")
            }
            EngineError::Store(StoreError::UniqueViolation { .. }) => {
                (StatusCode::CONFLICT, "DUPLICATE", "El registro ya existe")
            }
            EngineError::Store(StoreError::Validation { .. }) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Datos inválidos")
            }
            EngineError::Store(StoreError::Unavailable(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                "Error interno del servidor",
            ),
            EngineError::CalculationError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CALCULATION_ERROR",
                "Error en el cálculo",
            ),
        };

        ApiErrorResponse::new(status, ApiError::with_details(code, message, details))
    }
}
