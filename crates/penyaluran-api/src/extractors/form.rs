//! `ReportForm` extractor: report fields from multipart, URL-encoded, or JSON bodies.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::{Form, Json};
use serde_json::{Map, Value};

use penyaluran_core::error::AppError;
use penyaluran_service::{ProofUpload, ReportFields};

use crate::error::ApiError;

/// Multipart field carrying the proof file.
const PROOF_FIELD: &str = "proof";

/// Report fields plus an optional proof file, whatever the body encoding.
///
/// A request without a recognised content type yields empty fields.
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub fields: ReportFields,
    pub proof: Option<ProofUpload>,
}

impl<S> FromRequest<S> for ReportForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("Form tidak valid: {}", e.body_text())))?;
            Ok(read_multipart(multipart).await?)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("Form tidak valid: {}", e.body_text())))?;
            let mut form = Self::default();
            for (name, value) in pairs {
                form.fields.set(&name, value);
            }
            Ok(form)
        } else if content_type.starts_with("application/json") {
            let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("JSON tidak valid: {}", e.body_text())))?;
            Ok(Self {
                fields: fields_from_json(object),
                proof: None,
            })
        } else {
            Ok(Self::default())
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ReportForm, AppError> {
    let mut form = ReportForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Form tidak valid: {}", e.body_text())))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == PROOF_FIELD {
            let file_name = field.file_name().map(String::from);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Gagal membaca file: {}", e.body_text())))?;
            form.proof = Some(ProofUpload { file_name, data });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::validation(format!("Form tidak valid: {}", e.body_text())))?;
            form.fields.set(&name, value);
        }
    }

    Ok(form)
}

/// Scalars are taken as text; nulls, arrays, and objects are ignored.
fn fields_from_json(object: Map<String, Value>) -> ReportFields {
    let mut fields = ReportFields::default();
    for (name, value) in object {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        fields.set(&name, text);
    }
    fields
}
