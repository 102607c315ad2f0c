use async_trait::async_trait;

use super::domain::Employee;
use crate::errors::ServiceError;

/// Record-store abstraction implemented by both storage backends.
///
/// `list` re-reads the full backing store on every call; there is no caching
/// layer. `remove` deletes every record whose id matches and persists before
/// returning. Under the database backend the primary key makes that exactly
/// one row; the flat file cannot enforce uniqueness, so duplicates all go.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError>;
    async fn remove(&self, id: &str) -> Result<(), ServiceError>;
}

/// Simple in-memory store for tests and doc examples
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MockEmployeeStore {
        records: Mutex<Vec<Employee>>,
    }

    impl MockEmployeeStore {
        pub fn seeded(records: Vec<Employee>) -> Self {
            Self { records: Mutex::new(records) }
        }
    }

    #[async_trait]
    impl EmployeeStore for MockEmployeeStore {
        async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn remove(&self, id: &str) -> Result<(), ServiceError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|e| e.id != id);
            if records.len() == before {
                return Err(ServiceError::not_found("employee"));
            }
            Ok(())
        }
    }
}
