//! Axum route handlers for the Creation API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::creation::{assemble, CompositionRequest};
use crate::errors::AppError;
use crate::state::AppState;

pub const DOWNLOAD_FILE_NAME: &str = "created_document.pdf";

/// POST /api/v1/create/pdf
///
/// Composes a single-page PDF from multipart form fields and returns it as a download.
/// Layout and rendering run on the blocking pool; a failure returns no document bytes.
pub async fn handle_create_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let request_id = Uuid::new_v4();
    let request =
        CompositionRequest::from_multipart(multipart, &state.config.default_author).await?;

    info!(
        %request_id,
        font = %request.font_name,
        font_size = request.font_size_pt,
        has_image = request.image.is_some(),
        "Creating PDF"
    );

    let backend = Arc::clone(&state.backend);
    let pdf = tokio::task::spawn_blocking(move || {
        let _span = info_span!("compose", %request_id).entered();
        assemble(&request, backend.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in composition: {e}")))??;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={DOWNLOAD_FILE_NAME}"),
            ),
        ],
        pdf,
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
