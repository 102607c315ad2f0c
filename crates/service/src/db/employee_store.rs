use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::directory::domain::Employee;
use crate::directory::repository::EmployeeStore;
use crate::errors::ServiceError;

/// Table-backed record store on the `employees` table. The primary key
/// makes a removal a single-row commit; the snapshot re-read that follows
/// is a separate statement and may observe interleaved writes.
pub struct SeaOrmEmployeeStore {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let rows = models::employee::list_all(&self.db).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        let removed = models::employee::delete_by_id(&self.db, id).await?;
        if removed == 0 {
            return Err(ServiceError::not_found("employee"));
        }
        Ok(())
    }
}
