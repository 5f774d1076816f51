//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::batch_totals;
use crate::draft::DraftManager;
use crate::validation::{scan_warnings, validate_batch};

use super::request::PreviewRequest;
use super::response::{ApiError, ApiErrorResponse, PreviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/preview", post(preview_handler))
        .with_state(state)
}

/// Handler for POST /payroll/preview.
///
/// Seeds a draft batch from the request roster, applies the optional
/// attendance report, manual edits, and exclusions in that order, and
/// returns the full preview: rows, totals, warnings, and validation
/// messages.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Select the rule set effective for the pay date
    let rules = match state.rules_for(request.period.pay_date) {
        Ok(rules) => rules.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                pay_date = %request.period.pay_date,
                error = %err,
                "Rule selection failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let employee_count = request.employees.len();
    let mut manager = DraftManager::new(request.employees, request.period.into(), rules);

    // Attendance reconciliation happens before manual edits so edits win
    if let Some(report) = &request.attendance {
        match manager.apply_attendance(report) {
            Ok(touched) => {
                info!(
                    correlation_id = %correlation_id,
                    rows_touched = touched,
                    "Attendance report applied"
                );
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Attendance reconciliation failed"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        }
    }

    for edit in &request.edits {
        if !manager.set_field(&edit.employee_id, edit.field, edit.value) {
            // Out-of-bounds or unknown-row edits are dropped, not fatal
            warn!(
                correlation_id = %correlation_id,
                employee_id = %edit.employee_id,
                field = ?edit.field,
                value = %edit.value,
                "Edit rejected"
            );
        }
    }

    for employee_id in &request.excluded {
        manager.exclude(employee_id);
    }

    let response = PreviewResponse {
        totals: batch_totals(&manager),
        warnings: scan_warnings(&manager),
        validation_messages: validate_batch(&manager),
        rows: manager.rows().to_vec(),
    };

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        employees = employee_count,
        gross_pay = %response.totals.gross_pay,
        warnings = response.warnings.len(),
        validation_messages = response.validation_messages.len(),
        duration_us = duration.as_micros(),
        "Preview completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
