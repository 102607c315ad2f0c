use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{DeleteEmployeeInput, DeleteReceipt, Employee};
use super::repository::EmployeeStore;
use crate::errors::ServiceError;

/// Expected company credential pair, supplied at startup.
#[derive(Clone)]
pub struct DirectoryConfig {
    pub company_username: String,
    pub company_password: String,
}

/// Request-facing directory operations, independent of storage backend and
/// web framework. Holds no per-request state.
#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn EmployeeStore>,
    cfg: DirectoryConfig,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn EmployeeStore>, cfg: DirectoryConfig) -> Self {
        Self { store, cfg }
    }

    /// List every record, in storage iteration order.
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        self.store.list().await
    }

    /// Delete an employee after checking the shared credential pair.
    ///
    /// The credential check runs before any mutation; a mismatch reports
    /// `Unauthorized` without distinguishing bad username from bad password.
    /// On success the receipt carries a snapshot of the remaining records
    /// taken immediately after the removal.
    #[instrument(skip(self, input), fields(employee_id = %input.employee_id))]
    pub async fn delete(&self, input: DeleteEmployeeInput) -> Result<DeleteReceipt, ServiceError> {
        if input.company_username != self.cfg.company_username
            || input.company_password != self.cfg.company_password
        {
            warn!("credential mismatch on delete");
            return Err(ServiceError::Unauthorized);
        }

        self.store.remove(&input.employee_id).await?;

        let remaining = self.store.list().await?;
        info!(remaining = remaining.len(), "employee_deleted");
        Ok(DeleteReceipt {
            message: "Employee deleted successfully".into(),
            remaining_employees: remaining,
        })
    }
}
