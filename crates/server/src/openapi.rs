use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: String,
    pub code: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub last_login: String,
}

#[derive(ToSchema)]
pub struct DeleteEmployeeRequest {
    pub employee_id: String,
    pub company_username: String,
    pub company_password: String,
}

#[derive(ToSchema)]
pub struct DeleteEmployeeResponse {
    pub message: String,
    pub remaining_employees: Vec<EmployeeDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::employees::list_employees,
        crate::routes::employees::delete_employee,
    ),
    components(
        schemas(
            EmployeeDoc,
            DeleteEmployeeRequest,
            DeleteEmployeeResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
