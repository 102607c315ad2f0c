use axum::{extract::State, Json};

use service::directory::domain::{DeleteEmployeeInput, DeleteReceipt, Employee};
use service::directory::service::DirectoryService;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub directory: DirectoryService,
    pub liveness: &'static str,
}

#[utoipa::path(get, path = "/employees", tag = "employees", responses((status = 200, description = "OK")))]
pub async fn list_employees(State(state): State<ServerState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.directory.list().await?;
    Ok(Json(employees))
}

#[utoipa::path(post, path = "/delete-employee", tag = "employees", request_body = crate::openapi::DeleteEmployeeRequest, responses((status = 200, description = "Deleted"), (status = 401, description = "Unauthorized"), (status = 404, description = "Not Found")))]
pub async fn delete_employee(
    State(state): State<ServerState>,
    Json(input): Json<DeleteEmployeeInput>,
) -> Result<Json<DeleteReceipt>, ApiError> {
    let receipt = state.directory.delete(input).await?;
    Ok(Json(receipt))
}
