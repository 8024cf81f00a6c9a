//! Employee API Handlers
//!
//! Thin delegation to the employee service. Failures bubble up as
//! `DirectoryError`, whose `IntoResponse` impl maps the carried status
//! code to the response status and the message to the body.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use directory_client::DirectoryResult;
use shared::{Employee, EmployeeCreationInput};

/// GET /api/v1/employee - full collection
pub async fn list(State(state): State<ServerState>) -> DirectoryResult<Json<Vec<Employee>>> {
    let employees = state.employees.all().await?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/search/{search_string} - name substring search
pub async fn search(
    State(state): State<ServerState>,
    Path(search_string): Path<String>,
) -> DirectoryResult<Json<Vec<Employee>>> {
    let employees = state.employees.search_by_name(&search_string).await?;
    tracing::info!(
        search = %search_string,
        count = employees.len(),
        "Employee name search"
    );
    Ok(Json(employees))
}

/// GET /api/v1/employee/{id} - single employee
///
/// The upstream may answer with a null record on 200; that null is passed
/// through. An upstream 404 surfaces as a 404.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> DirectoryResult<Json<Option<Employee>>> {
    let employee = state.employees.by_id(&id).await?;
    Ok(Json(employee))
}

/// GET /api/v1/employee/highestSalary
pub async fn highest_salary(State(state): State<ServerState>) -> DirectoryResult<Json<u32>> {
    let highest = state.employees.highest_salary().await?;
    Ok(Json(highest))
}

/// GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn top_ten_earner_names(
    State(state): State<ServerState>,
) -> DirectoryResult<Json<Vec<String>>> {
    let names = state.employees.top_earners(10).await?;
    Ok(Json(names))
}

/// POST /api/v1/employee - create an employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreationInput>,
) -> DirectoryResult<(StatusCode, Json<Employee>)> {
    let employee = state.employees.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// DELETE /api/v1/employee/{id} - delete, answering with the deleted name
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> DirectoryResult<Json<String>> {
    let name = state.employees.delete_by_id(&id).await?;
    Ok(Json(name))
}
