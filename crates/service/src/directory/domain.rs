use serde::{Deserialize, Serialize};

/// Public field set of a directory record, as served over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub code: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub last_login: String,
}

impl From<models::employee::Model> for Employee {
    fn from(m: models::employee::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            status: m.status,
            last_login: m.last_login,
        }
    }
}

/// Deletion input: target id plus the submitted company credential pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEmployeeInput {
    pub employee_id: String,
    pub company_username: String,
    pub company_password: String,
}

/// Outcome of a successful deletion: confirmation plus a snapshot of the
/// records remaining immediately afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub message: String,
    pub remaining_employees: Vec<Employee>,
}
