//! HTTP request handlers for the payroll API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceReport, EmployeeDirectory, PayrollResult};
use crate::service::{PayrollService, build_attendance_report};

use super::request::{AttendanceRequest, PayrollRequest, attendance_log};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/attendance", post(attendance_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message, e.g. "missing field `year`"
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /payroll.
///
/// Runs one semi-monthly payroll for the employee and attendance in the body.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match run_payroll(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                period = %result.pay_period.period_type,
                gross_pay = %result.gross_pay(),
                net_pay = %result.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll completed successfully"
            );
            json_ok(result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn run_payroll(state: &AppState, request: PayrollRequest) -> EngineResult<PayrollResult> {
    let employee_id = request.employee.id.clone();
    let attendance = attendance_log(&employee_id, request.attendance)?;

    let mut employees = EmployeeDirectory::new();
    employees
        .insert(request.employee)
        .map_err(|employee| EngineError::InvalidEmployee {
            field: "id".to_string(),
            message: format!("duplicate employee id '{}'", employee.id),
        })?;

    let service = PayrollService::new(
        employees,
        attendance,
        state.calendar().clone(),
        state.statutory().clone(),
    );
    service.run_payroll(&employee_id, request.year, request.month, request.period_type)
}

/// Handler for POST /attendance.
///
/// Returns per-day breakdowns and their summary for the requested range.
async fn attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match attendance_report(&state, request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %report.employee_id,
                days = report.days.len(),
                total_hours = %report.summary.total_hours,
                "Attendance report completed"
            );
            json_ok(report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn attendance_report(state: &AppState, request: AttendanceRequest) -> EngineResult<AttendanceReport> {
    let log = attendance_log(&request.employee_id, request.attendance)?;
    build_attendance_report(
        &log,
        state.calendar(),
        &request.employee_id,
        request.start_date,
        request.end_date,
    )
}
