use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use migration::MigratorTrait;
use server::routes::{self, employees::ServerState};
use service::db::employee_store::SeaOrmEmployeeStore;
use service::directory::domain::Employee;
use service::directory::service::{DirectoryConfig, DirectoryService};
use service::file::employee_store::FileEmployeeStore;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn credentials() -> DirectoryConfig {
    DirectoryConfig { company_username: "admin".into(), company_password: "company123".into() }
}

fn employee(id: &str) -> Employee {
    Employee {
        id: id.into(),
        code: format!("C-{id}"),
        email: format!("{id}@x.com"),
        first_name: "A".into(),
        last_name: "B".into(),
        status: "active".into(),
        last_login: "2024-01-01".into(),
    }
}

struct TestApp {
    base_url: String,
}

async fn spawn_router(state: ServerState) -> anyhow::Result<TestApp> {
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

/// File-backed instance with an isolated temp file per test run.
async fn start_file_server(seed: &[Employee]) -> anyhow::Result<TestApp> {
    let path = format!("target/test-data/{}/employees.csv", Uuid::new_v4());
    let store = FileEmployeeStore::new(&path).await?;
    store.seed(seed).await?;

    let state = ServerState {
        directory: DirectoryService::new(store, credentials()),
        liveness: "File-backed employee directory running",
    };
    spawn_router(state).await
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_root_and_health() -> anyhow::Result<()> {
    let app = start_file_server(&[]).await?;

    let res = client().get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["message"].as_str().unwrap().contains("running"));

    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_list_twice_is_stable() -> anyhow::Result<()> {
    let app = start_file_server(&[employee("E1"), employee("E2")]).await?;
    let c = client();

    let first = c.get(format!("{}/employees", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    let second = c.get(format!("{}/employees", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(first, second);

    let ids: Vec<&str> = first.as_array().unwrap().iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["E1", "E2"]);
    assert_eq!(first[0]["first_name"], "A");
    assert_eq!(first[0]["last_login"], "2024-01-01");
    Ok(())
}

#[tokio::test]
async fn e2e_delete_with_valid_credentials() -> anyhow::Result<()> {
    let app = start_file_server(&[employee("E1"), employee("E2")]).await?;
    let c = client();

    let res = c
        .post(format!("{}/delete-employee", app.base_url))
        .json(&json!({"employee_id": "E1", "company_username": "admin", "company_password": "company123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Employee deleted successfully");
    let remaining = body["remaining_employees"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], "E2");

    // the deletion is visible to subsequent reads
    let listed = c.get(format!("{}/employees", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_wrong_password_is_unauthorized_and_mutates_nothing() -> anyhow::Result<()> {
    let app = start_file_server(&[employee("E1"), employee("E2")]).await?;
    let c = client();

    // repeating the failed delete never mutates the store
    for _ in 0..2 {
        let res = c
            .post(format!("{}/delete-employee", app.base_url))
            .json(&json!({"employee_id": "E1", "company_username": "admin", "company_password": "wrongpass"}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
        let body = res.json::<serde_json::Value>().await?;
        assert!(body["error"].as_str().unwrap().contains("credentials"));
    }

    let listed = c.get(format!("{}/employees", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(listed.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn e2e_missing_id_is_not_found() -> anyhow::Result<()> {
    let app = start_file_server(&[employee("E1")]).await?;
    let c = client();

    let res = c
        .post(format!("{}/delete-employee", app.base_url))
        .json(&json!({"employee_id": "E9", "company_username": "admin", "company_password": "company123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].as_str().unwrap().contains("not found"));

    let listed = c.get(format!("{}/employees", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    Ok(())
}

/// Table-backed instance; skipped without a reachable database.
#[tokio::test]
async fn e2e_db_backend_delete_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return Ok(());
    }

    let id = format!("e2e-{}", Uuid::new_v4());
    let seeded = employee(&id);
    models::employee::insert(
        &db,
        models::employee::Model {
            id: seeded.id.clone(),
            code: seeded.code.clone(),
            email: seeded.email.clone(),
            first_name: seeded.first_name.clone(),
            last_name: seeded.last_name.clone(),
            status: seeded.status.clone(),
            last_login: seeded.last_login.clone(),
        },
    )
    .await?;

    let state = ServerState {
        directory: DirectoryService::new(Arc::new(SeaOrmEmployeeStore::new(db)), credentials()),
        liveness: "PostgreSQL employee directory running",
    };
    let app = spawn_router(state).await?;
    let c = client();

    let listed = c.get(format!("{}/employees", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert!(listed.as_array().unwrap().iter().any(|e| e["id"] == id.as_str()));

    let res = c
        .post(format!("{}/delete-employee", app.base_url))
        .json(&json!({"employee_id": id, "company_username": "admin", "company_password": "company123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["remaining_employees"].as_array().unwrap().iter().all(|e| e["id"] != id.as_str()));

    // the record is gone, so a repeat is a 404
    let res = c
        .post(format!("{}/delete-employee", app.base_url))
        .json(&json!({"employee_id": id, "company_username": "admin", "company_password": "company123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
