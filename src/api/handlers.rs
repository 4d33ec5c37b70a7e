use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::path::Path;

use super::error::{ApiError, ApiResult};
use super::state::ApiState;

// Historic default key, kept as-is (typo included) so existing clients keep
// resolving the same object.
const DEFAULT_KEY: &str = "deafult-filename.pdf";
const DEFAULT_HTML: &str =
    "<html><head></head><body><h1>It works! This is the default PDF.</h1></body></html>";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub filename: String,
    pub html: String,
}

/// Render the posted HTML to a PDF and publish it with public-read access.
///
/// An empty request body falls back to the default filename and placeholder
/// document. A non-empty body must carry both `filename` and `html`; a
/// missing field fails the request before anything is rendered or uploaded.
pub async fn generate_pdf(
    body: web::Bytes,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    // TODO: clean the filename and append .pdf when missing
    let (filename, html) = if body.is_empty() {
        (DEFAULT_KEY.to_string(), DEFAULT_HTML.to_string())
    } else {
        let request: GenerateRequest = serde_json::from_slice(&body)?;
        (request.filename, request.html)
    };

    // Render into transient local storage first. The file is read once for
    // the upload and left for the environment to reclaim.
    let filepath = Path::new(&state.config.temp_dir).join(&filename);
    state
        .renderer
        .render(&html, &filepath)
        .await
        .map_err(|e| {
            tracing::error!("Failed to render {}: {}", filename, e);
            ApiError::internal_server_error(format!("Failed to render PDF: {}", e))
        })?;

    let pdf_bytes = tokio::fs::read(&filepath).await.map_err(|e| {
        tracing::error!("Failed to read rendered file {}: {}", filepath.display(), e);
        ApiError::internal_server_error(format!("Failed to read rendered PDF: {}", e))
    })?;

    let url = state
        .store
        .put_public(
            &state.config.s3_bucket_name,
            &filename,
            pdf_bytes,
            "application/pdf",
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to upload {}: {}", filename, e);
            ApiError::internal_server_error(format!("Failed to upload PDF: {}", e))
        })?;

    Ok(HttpResponse::Ok()
        .append_header(("Access-Control-Allow-Origin", "*"))
        .append_header(("Access-Control-Allow-Credentials", "true"))
        .body(url))
}
