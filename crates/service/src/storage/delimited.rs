use std::path::PathBuf;

use tokio::fs;
use tracing::warn;

use crate::errors::ServiceError;

/// Comma-delimited flat-file table: a header line naming the columns, then
/// one line per row. Field values must not contain the delimiter or
/// newlines; rows with the wrong field count are skipped on load.
///
/// Every `load` re-reads the file and every `store` rewrites it wholesale.
pub struct DelimitedTable {
    path: PathBuf,
    header: &'static [&'static str],
}

const DELIMITER: char = ',';

impl DelimitedTable {
    /// Open a table at `path`. Creates the file with just the header line
    /// (and any missing parent directories) when it does not exist.
    pub async fn open<P: Into<PathBuf>>(path: P, header: &'static [&'static str]) -> Result<Self, ServiceError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.ok();
        }
        if fs::metadata(&path).await.is_err() {
            let mut line = header.join(",");
            line.push('\n');
            fs::write(&path, line).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        }
        Ok(Self { path, header })
    }

    /// Parse the whole file into rows of exactly `header.len()` fields.
    pub async fn load(&self) -> Result<Vec<Vec<String>>, ServiceError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut lines = content.lines();
        // Header line carries no data; the field order is fixed by `header`.
        let _ = lines.next();

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split(DELIMITER).map(str::to_string).collect();
            if fields.len() != self.header.len() {
                warn!(line = idx + 2, got = fields.len(), want = self.header.len(), "skipping malformed row");
                continue;
            }
            rows.push(fields);
        }
        Ok(rows)
    }

    /// Rewrite the whole file: header first, then one line per row.
    pub async fn store(&self, rows: &[Vec<String>]) -> Result<(), ServiceError> {
        let mut out = String::new();
        out.push_str(&self.header.join(","));
        out.push('\n');
        for row in rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        fs::write(&self.path, out)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[&str] = &["id", "name"];

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("delimited_table_{}.csv", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn open_creates_file_with_header() -> Result<(), anyhow::Error> {
        let path = tmp_path();
        let table = DelimitedTable::open(&path, HEADER).await?;
        assert_eq!(table.load().await?.len(), 0);

        let content = tokio::fs::read_to_string(&path).await?;
        assert_eq!(content, "id,name\n");

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn store_then_load_preserves_rows_and_order() -> Result<(), anyhow::Error> {
        let path = tmp_path();
        let table = DelimitedTable::open(&path, HEADER).await?;

        let rows = vec![
            vec!["1".to_string(), "alice".to_string()],
            vec!["2".to_string(), "bob".to_string()],
        ];
        table.store(&rows).await?;
        assert_eq!(table.load().await?, rows);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn load_skips_rows_with_wrong_field_count() -> Result<(), anyhow::Error> {
        let path = tmp_path();
        tokio::fs::write(&path, "id,name\n1,alice\nbroken-line\n2,bob\n").await?;

        let table = DelimitedTable::open(&path, HEADER).await?;
        let rows = table.load().await?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["2".to_string(), "bob".to_string()]);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
