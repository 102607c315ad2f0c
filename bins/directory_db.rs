//! Table-backed employee directory service.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run_db().await
}
