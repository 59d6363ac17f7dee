//! Integration tests for routing, fallbacks, and supporting endpoints.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_programs_are_seeded() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/programs", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<_> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["PKH", "BLT", "Bansos"]);
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/laporan", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let app = helpers::TestApp::new().await;

    for (method, path) in [
        ("PATCH", "/api/reports"),
        ("DELETE", "/api/reports"),
        ("POST", "/api/reports/1"),
        ("GET", "/api/reports/1/approve"),
    ] {
        let response = app.request(method, path, None).await;
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        assert_eq!(response.body["message"], "Metode tidak diizinkan");
    }
}

#[tokio::test]
async fn test_missing_upload_is_404() {
    let app = helpers::TestApp::new().await;

    let (status, _) = app.get_raw("/uploads/tidak-ada.pdf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
