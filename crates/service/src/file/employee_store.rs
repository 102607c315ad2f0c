use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::directory::domain::Employee;
use crate::directory::repository::EmployeeStore;
use crate::errors::ServiceError;
use crate::storage::delimited::DelimitedTable;

pub const EMPLOYEE_HEADER: &[&str] =
    &["id", "code", "email", "first_name", "last_name", "status", "last_login"];

/// Flat-file record store: the whole file is parsed on every read and
/// rewritten on every mutation.
///
/// Nothing enforces id uniqueness in the file, so `remove` drops every row
/// matching the id. Mutations are serialized through one lock held across
/// the whole load-mutate-rewrite cycle.
pub struct FileEmployeeStore {
    table: DelimitedTable,
    write_lock: Mutex<()>,
}

impl FileEmployeeStore {
    /// Open the store at the given file path. Creates the file with just
    /// the header row when missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let table = DelimitedTable::open(path, EMPLOYEE_HEADER).await?;
        Ok(Arc::new(Self { table, write_lock: Mutex::new(()) }))
    }

    /// Replace the file contents with the given records. Records are
    /// provisioned out-of-band; this is that path, used by seeding and tests.
    pub async fn seed(&self, employees: &[Employee]) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let rows: Vec<Vec<String>> = employees.iter().map(to_row).collect();
        self.table.store(&rows).await
    }
}

fn to_row(e: &Employee) -> Vec<String> {
    vec![
        e.id.clone(),
        e.code.clone(),
        e.email.clone(),
        e.first_name.clone(),
        e.last_name.clone(),
        e.status.clone(),
        e.last_login.clone(),
    ]
}

fn from_row(row: Vec<String>) -> Employee {
    // `DelimitedTable::load` only yields rows with exactly seven fields.
    let mut it = row.into_iter();
    Employee {
        id: it.next().unwrap_or_default(),
        code: it.next().unwrap_or_default(),
        email: it.next().unwrap_or_default(),
        first_name: it.next().unwrap_or_default(),
        last_name: it.next().unwrap_or_default(),
        status: it.next().unwrap_or_default(),
        last_login: it.next().unwrap_or_default(),
    }
}

#[async_trait]
impl EmployeeStore for FileEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let rows = self.table.load().await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let rows = self.table.load().await?;
        let before = rows.len();
        let kept: Vec<Vec<String>> = rows
            .into_iter()
            .filter(|r| r.first().map_or(true, |v| v != id))
            .collect();
        if kept.len() == before {
            return Err(ServiceError::not_found("employee"));
        }
        self.table.store(&kept).await?;
        Ok(())
    }
}
