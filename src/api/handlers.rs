//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::service::{
    NewCoursePayment, NewFoodProgramPayment, NewPayrollPayment, NewPerformanceEvaluation,
};

use super::request::{
    BenefitsQuery, CoursePaymentRequest, PayrollTotalsRequest, SettingUpdateRequest,
    actor_from_headers,
};
use super::response::{ActionResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/:cedula/benefits", get(benefits_handler))
        .route("/payroll/totals", post(payroll_totals_handler))
        .route("/payroll/payments", post(payroll_payment_handler))
        .route("/food-program/payments", post(food_program_payment_handler))
        .route("/evaluations", post(evaluation_handler))
        .route(
            "/students/:cedula/courses/:course_id/debt",
            get(course_debt_handler),
        )
        .route(
            "/students/:cedula/courses/:course_id/payments",
            post(course_payment_handler),
        )
        .route(
            "/settings/:key",
            get(get_setting_handler).put(update_setting_handler),
        )
        .with_state(state)
}

/// Converts a JSON body rejection into an error response.
///
/// Well-formed JSON that does not fit the request type (a missing field, a
/// wrong type, an unparseable amount) is a validation error; only syntax
/// errors are reported as malformed JSON.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "El encabezado Content-Type debe ser application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Turns a service result into a response envelope, logging the outcome.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    result: EngineResult<T>,
    status: StatusCode,
    message: &str,
) -> Response {
    match result {
        Ok(data) => {
            info!(correlation_id = %correlation_id, status = status.as_u16(), "{}", message);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ActionResponse::success(message, data)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /employees/:cedula/benefits`.
///
/// Returns the seniority, academic and generic bonuses for the employee on
/// the `date` query parameter, or today.
async fn benefits_handler(
    State(state): State<AppState>,
    Path(cedula): Path<String>,
    query: Result<Query<BenefitsQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, cedula = %cedula, "Processing benefits request");

    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
            return ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
                .into_response();
        }
    };
    let today = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let result = state.service().benefits_for(&cedula, today);
    respond(correlation_id, result, StatusCode::OK, "Beneficios calculados")
}

/// Handler for `POST /payroll/totals`.
///
/// Computes the totals of a prospective payroll payment without storing it.
async fn payroll_totals_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollTotalsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll totals request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let result = state.service().preview_totals(
        &request.assignments,
        &request.additions,
        &request.deductions,
    );
    respond(correlation_id, result, StatusCode::OK, "Totales calculados")
}

/// Handler for `POST /payroll/payments`.
async fn payroll_payment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewPayrollPayment>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll payment");

    let actor = match actor_from_headers(&headers) {
        Ok(actor) => actor,
        Err(error) => return ApiErrorResponse::bad_request(error).into_response(),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let result = state.service().create_payroll_payment(request, &actor);
    respond(correlation_id, result, StatusCode::CREATED, "Pago de nómina registrado")
}

/// Handler for `POST /food-program/payments`.
async fn food_program_payment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewFoodProgramPayment>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing food-program payment");

    let actor = match actor_from_headers(&headers) {
        Ok(actor) => actor,
        Err(error) => return ApiErrorResponse::bad_request(error).into_response(),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let result = state.service().create_food_program_payment(request, &actor);
    respond(
        correlation_id,
        result,
        StatusCode::CREATED,
        "Pago del programa alimentario registrado",
    )
}

/// Handler for `POST /evaluations`.
async fn evaluation_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewPerformanceEvaluation>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing performance evaluation");

    let actor = match actor_from_headers(&headers) {
        Ok(actor) => actor,
        Err(error) => return ApiErrorResponse::bad_request(error).into_response(),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let result = state.service().create_performance_evaluation(request, &actor);
    respond(
        correlation_id,
        result,
        StatusCode::CREATED,
        "Evaluación de desempeño registrada",
    )
}

/// Handler for `GET /students/:cedula/courses/:course_id/debt`.
async fn course_debt_handler(
    State(state): State<AppState>,
    Path((cedula, course_id)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        cedula = %cedula,
        course_id = %course_id,
        "Processing course debt request"
    );

    let result = state.service().student_course_debt(&cedula, &course_id);
    respond(correlation_id, result, StatusCode::OK, "Deuda calculada")
}

/// Handler for `POST /students/:cedula/courses/:course_id/payments`.
///
/// Responds with the student's remaining debt on the course.
async fn course_payment_handler(
    State(state): State<AppState>,
    Path((cedula, course_id)): Path<(String, String)>,
    headers: HeaderMap,
    payload: Result<Json<CoursePaymentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        cedula = %cedula,
        course_id = %course_id,
        "Processing course payment"
    );

    let actor = match actor_from_headers(&headers) {
        Ok(actor) => actor,
        Err(error) => return ApiErrorResponse::bad_request(error).into_response(),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let input = NewCoursePayment {
        student_cedula: cedula,
        course_id,
        amount: request.amount,
        paid_on: request.paid_on,
    };
    let result = state.service().record_course_payment(input, &actor);
    respond(correlation_id, result, StatusCode::CREATED, "Pago del curso registrado")
}

#[derive(Serialize)]
struct SettingValue {
    key: String,
    value: rust_decimal::Decimal,
}

/// Handler for `GET /settings/:key`.
async fn get_setting_handler(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let result = state
        .service()
        .get_setting(&key)
        .map(|value| SettingValue { key, value });
    respond(correlation_id, result, StatusCode::OK, "Configuración obtenida")
}

/// Handler for `PUT /settings/:key`. Administrators only.
async fn update_setting_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<SettingUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, key = %key, "Processing setting update");

    let actor = match actor_from_headers(&headers) {
        Ok(actor) => actor,
        Err(error) => return ApiErrorResponse::bad_request(error).into_response(),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let result = state
        .service()
        .update_setting(&key, request.value, &actor)
        .map(|()| SettingValue {
            key,
            value: request.value,
        });
    respond(correlation_id, result, StatusCode::OK, "Configuración actualizada")
}
