//! Integration tests for report upload, editing, and deletion.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_report_is_pending_and_retrievable() {
    let app = helpers::TestApp::new().await;

    let created = app.create_report("PKH", "Sleman", 120).await;
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["recipientCount"], 120);
    assert_eq!(created["note"], "Penyaluran tahap 1");
    let proof = created["proof"].as_str().unwrap();
    assert!(proof.starts_with("/uploads/"));
    assert!(proof.ends_with("-bukti_penyaluran.pdf"));

    let id = created["id"].as_i64().unwrap();
    let response = app.request("GET", &format!("/api/reports/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["region"], "Sleman");
    assert_eq!(response.body["program"]["name"], "PKH");
    assert_eq!(response.body["distributionDate"], "2024-08-17T00:00:00Z");

    let (status, bytes) = app.get_raw(proof).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&bytes[..], b"%PDF-1.4 bukti");
}

#[tokio::test]
async fn test_create_report_missing_field_persists_nothing() {
    let app = helpers::TestApp::new().await;
    let program_id = app.program_id("BLT").await.to_string();

    let complete = [
        ("programId", program_id.as_str()),
        ("recipientCount", "10"),
        ("region", "Bantul"),
        ("distributionDate", "2024-08-17"),
    ];

    for skip in 0..complete.len() {
        let fields: Vec<_> = complete
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, field)| *field)
            .collect();

        let response = app
            .multipart("POST", "/api/reports", &fields, Some(("bukti.jpg", &b"jpeg"[..])))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["message"], "Semua field wajib diisi");
    }

    let list = app.request("GET", "/api/reports", None).await;
    assert_eq!(list.body, json!([]));
    assert_eq!(app.stored_files(), 0);
}

#[tokio::test]
async fn test_create_report_without_file() {
    let app = helpers::TestApp::new().await;
    let program_id = app.program_id("PKH").await.to_string();

    let response = app
        .multipart(
            "POST",
            "/api/reports",
            &[
                ("programId", program_id.as_str()),
                ("recipientCount", "10"),
                ("region", "Bantul"),
                ("distributionDate", "2024-08-17"),
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "File bukti tidak ditemukan atau tidak valid"
    );
}

#[tokio::test]
async fn test_create_report_rejects_bad_values() {
    let app = helpers::TestApp::new().await;
    let program_id = app.program_id("PKH").await.to_string();

    let cases = [
        ("recipientCount", "banyak"),
        ("recipientCount", "-5"),
        ("distributionDate", "17/08/2024"),
        ("programId", "999"),
    ];
    for (name, value) in cases {
        let mut fields = vec![
            ("programId", program_id.as_str()),
            ("recipientCount", "10"),
            ("region", "Bantul"),
            ("distributionDate", "2024-08-17"),
        ];
        for field in fields.iter_mut() {
            if field.0 == name {
                field.1 = value;
            }
        }

        let response = app
            .multipart("POST", "/api/reports", &fields, Some(("a.pdf", &b"pdf"[..])))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{name}={value}");
    }
    assert_eq!(app.stored_files(), 0);
}

#[tokio::test]
async fn test_create_report_oversized_file() {
    let app = helpers::TestApp::with_max_upload(8).await;
    let program_id = app.program_id("PKH").await.to_string();

    let response = app
        .multipart(
            "POST",
            "/api/reports",
            &[
                ("programId", program_id.as_str()),
                ("recipientCount", "10"),
                ("region", "Bantul"),
                ("distributionDate", "2024-08-17"),
            ],
            Some(("besar.pdf", &b"0123456789abcdef"[..])),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_files(), 0);
}

#[tokio::test]
async fn test_update_status_reflected_in_get() {
    let app = helpers::TestApp::new().await;
    let first = app.create_report("PKH", "Sleman", 10).await;
    let second = app.create_report("BLT", "Sleman", 20).await;

    let first_id = first["id"].as_i64().unwrap();
    let response = app
        .request(
            "PUT",
            &format!("/api/reports/{first_id}"),
            Some(json!({ "status": "Disetujui" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Disetujui");

    let second_id = second["id"].as_i64().unwrap();
    let response = app
        .form("PUT", &format!("/api/reports/{second_id}"), "status=Ditolak")
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let first = app
        .request("GET", &format!("/api/reports/{first_id}"), None)
        .await;
    assert_eq!(first.body["status"], "Disetujui");
    assert_eq!(first.body["region"], "Sleman");
    assert_eq!(first.body["recipientCount"], 10);

    let second = app
        .request("GET", &format!("/api/reports/{second_id}"), None)
        .await;
    assert_eq!(second.body["status"], "Ditolak");
}

#[tokio::test]
async fn test_update_multipart_keeps_empty_fields() {
    let app = helpers::TestApp::new().await;
    let created = app.create_report("Bansos", "Klaten", 30).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .multipart(
            "PUT",
            &format!("/api/reports/{id}"),
            &[("recipientCount", "45"), ("region", ""), ("note", "")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["recipientCount"], 45);
    assert_eq!(response.body["region"], "Klaten");
    assert_eq!(response.body["note"], "Penyaluran tahap 1");
    assert_eq!(response.body["proof"], created["proof"]);
}

#[tokio::test]
async fn test_update_rejects_unknown_status() {
    let app = helpers::TestApp::new().await;
    let created = app.create_report("PKH", "Sleman", 10).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/reports/{id}"),
            Some(json!({ "status": "Selesai" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            "/api/reports/9999",
            Some(json!({ "status": "Selesai" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Laporan tidak ditemukan");
}

#[tokio::test]
async fn test_delete_removes_from_list() {
    let app = helpers::TestApp::new().await;
    let keep = app.create_report("PKH", "Sleman", 10).await;
    let gone = app.create_report("PKH", "Bantul", 5).await;
    assert_eq!(app.stored_files(), 2);

    let gone_id = gone["id"].as_i64().unwrap();
    let response = app
        .request("DELETE", &format!("/api/reports/{gone_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Laporan berhasil dihapus");

    let list = app.request("GET", "/api/reports", None).await;
    let ids: Vec<_> = list
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].clone())
        .collect();
    assert_eq!(ids, vec![keep["id"].clone()]);
    assert_eq!(app.stored_files(), 1);

    let again = app
        .request("DELETE", &format!("/api/reports/{gone_id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_by_region() {
    let app = helpers::TestApp::new().await;
    app.create_report("PKH", "Sleman", 10).await;
    app.create_report("BLT", "Bantul", 20).await;
    app.create_report("Bansos", "Sleman", 30).await;

    let response = app.request("GET", "/api/reports?region=Sleman", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let reports = response.body.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r["region"] == "Sleman"));

    let response = app.request("GET", "/api/reports?region=Kulon%20Progo", None).await;
    assert_eq!(response.body, json!([]));

    let response = app.request("GET", "/api/reports", None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_invalid_and_missing_ids() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/reports/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/reports/77", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Laporan tidak ditemukan");
}

#[tokio::test]
async fn test_malformed_query_and_path_are_json_400() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/reports?region=Sleman&region=Bantul", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].is_string());

    for (method, path) in [
        ("GET", "/api/reports/%FF"),
        ("DELETE", "/api/reports/%FF"),
        ("POST", "/api/reports/%FF/approve"),
    ] {
        let response = app.request(method, path, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{method} {path}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_statistics_with_largest_recipient_counts() {
    let app = helpers::TestApp::new().await;
    let program_id = app.program_id("PKH").await.to_string();

    let too_large = app
        .multipart(
            "POST",
            "/api/reports",
            &[
                ("programId", program_id.as_str()),
                ("recipientCount", "9223372036854775807"),
                ("region", "Sleman"),
                ("distributionDate", "2024-08-17"),
            ],
            Some(("a.pdf", &b"pdf"[..])),
        )
        .await;
    assert_eq!(too_large.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_files(), 0);

    app.create_report("PKH", "Sleman", u32::MAX).await;
    app.create_report("PKH", "Sleman", u32::MAX).await;

    let response = app.request("GET", "/api/dashboard/statistics", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let expected = 2 * i64::from(u32::MAX);
    assert_eq!(response.body["recipientPerProgram"]["PKH"], expected);
    assert_eq!(response.body["distributionPerRegion"]["Sleman"], expected);
}
