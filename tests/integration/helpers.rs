//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use penyaluran_api::{AppState, build_app};
use penyaluran_core::config::{AppConfig, DatabaseConfig, StorageConfig};
use penyaluran_database::DatabasePool;
use penyaluran_database::migration::run_migrations;
use penyaluran_database::seed::seed_programs;

const BOUNDARY: &str = "penyaluran-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
    upload_dir: TempDir,
    _db_dir: TempDir,
}

impl TestApp {
    /// Create a new test application on a fresh database and upload directory
    pub async fn new() -> Self {
        Self::with_max_upload(1024 * 1024).await
    }

    pub async fn with_max_upload(max_upload_size_bytes: u64) -> Self {
        let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let upload_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config = AppConfig {
            database: DatabaseConfig {
                url: format!("sqlite://{}", db_dir.path().join("test.db").display()),
                ..Default::default()
            },
            storage: StorageConfig {
                upload_dir: upload_dir.path().display().to_string(),
                max_upload_size_bytes,
                ..Default::default()
            },
            ..Default::default()
        };

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        seed_programs(db.pool()).await.expect("Failed to seed");

        let state = AppState::build(config, db.clone())
            .await
            .expect("Failed to build state");

        Self {
            router: build_app(state),
            db,
            upload_dir,
            _db_dir: db_dir,
        }
    }

    /// Make a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let req = Request::builder().method(method).uri(path);
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a multipart request with text fields and an optional `proof` file
    pub async fn multipart(
        &self,
        method: &str,
        path: &str,
        fields: &[(&str, &str)],
        proof: Option<(&str, &[u8])>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields, proof)))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a URL-encoded form request
    pub async fn form(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Fetch raw bytes, e.g. a served proof file
    pub async fn get_raw(&self, path: &str) -> (StatusCode, Bytes) {
        let req = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        (status, body)
    }

    /// Look up a seeded program's ID by name
    pub async fn program_id(&self, name: &str) -> i64 {
        let response = self.request("GET", "/api/programs", None).await;
        response
            .body
            .as_array()
            .and_then(|programs| programs.iter().find(|p| p["name"] == name))
            .and_then(|p| p["id"].as_i64())
            .expect("Seeded program not found")
    }

    /// Submit a complete report and return its JSON
    pub async fn create_report(&self, program: &str, region: &str, recipients: u32) -> Value {
        let program_id = self.program_id(program).await.to_string();
        let recipients = recipients.to_string();
        let response = self
            .multipart(
                "POST",
                "/api/reports",
                &[
                    ("programId", program_id.as_str()),
                    ("recipientCount", recipients.as_str()),
                    ("region", region),
                    ("distributionDate", "2024-08-17"),
                    ("note", "Penyaluran tahap 1"),
                ],
                Some(("bukti penyaluran.pdf", &b"%PDF-1.4 bukti"[..])),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }

    /// Number of files in the upload directory
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn multipart_body(fields: &[(&str, &str)], proof: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, data)) = proof {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"proof\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
