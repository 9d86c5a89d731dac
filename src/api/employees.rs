//! Employee API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use uuid::Uuid;

use super::{ApiResponse, ApiResult};
use crate::db::InsertReceipt;
use crate::errors::AppError;
use crate::models::Employee;
use crate::AppState;

/// POST /employee - Create a new employee.
///
/// Any id in the body is discarded; the service assigns a fresh one. The
/// response carries the store's insert receipt, not the record itself.
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<InsertReceipt> {
    let Json(mut employee) = body.map_err(|err| AppError::BadRequest(err.body_text()))?;

    employee.id = Uuid::new_v4().to_string();

    let receipt = state.store.insert(&employee).await?;
    Ok(ApiResponse::created(receipt))
}

/// GET /employee/{id} - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    match state.store.find_by_id(&id).await {
        Ok(Some(employee)) => Ok(ApiResponse::ok(employee)),
        // A failed lookup surfaces like a missing record; the store has
        // already logged the underlying error.
        Ok(None) | Err(_) => Err(AppError::NotFound(format!("Employee not found: {id}"))),
    }
}

/// GET /employee - List all employees.
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let employees = state.store.find_all().await?;
    Ok(ApiResponse::ok(employees))
}

/// PUT /employee/{id} - Replace an employee's fields.
///
/// Returns the number of modified documents; an unknown id is a successful
/// zero-count update, not an error.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<u64> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("Invalid employee id".to_string()));
    }

    let Json(mut employee) = body.map_err(|err| AppError::BadRequest(err.body_text()))?;

    // The path id wins over whatever the body carries.
    employee.id = id.clone();

    let modified = state.store.update_by_id(&id, &employee).await?;
    Ok(ApiResponse::ok(modified))
}

/// DELETE /employee/{id} - Delete a single employee.
///
/// Deleting an unknown id is a successful zero-count delete.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<u64> {
    let deleted = state.store.delete_by_id(&id).await?;
    Ok(ApiResponse::ok(deleted))
}

/// DELETE /employee - Delete every employee.
pub async fn delete_all_employees(State(state): State<AppState>) -> ApiResult<u64> {
    let deleted = state.store.delete_all().await?;
    Ok(ApiResponse::ok(deleted))
}
