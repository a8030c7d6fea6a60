use super::FormJson;
use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use tax_forms::{FormRecord, FormRenderer, FormType, RenderPath, ScheduleC, ScheduleE};

/// Render a Schedule C submission to PDF
pub async fn generate_schedule_c(
    State(state): State<AppState>,
    FormJson(form): FormJson<ScheduleC>,
) -> Result<impl IntoResponse> {
    generate(state, form.into()).await
}

/// Render a Schedule E submission to PDF
pub async fn generate_schedule_e(
    State(state): State<AppState>,
    FormJson(form): FormJson<ScheduleE>,
) -> Result<impl IntoResponse> {
    generate(state, form.into()).await
}

async fn generate(state: AppState, record: FormRecord) -> Result<impl IntoResponse> {
    let form_type = record.form_type();
    tracing::info!(form = %form_type, "generation request");

    let templates = state.templates.clone();
    let capabilities = state.capabilities;

    // Template parsing and drawing are CPU bound
    let document = tokio::task::spawn_blocking(move || {
        FormRenderer::new(templates.as_ref(), capabilities).render_record(&record)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    match document.path {
        RenderPath::Template { fields_filled } => {
            tracing::info!(form = %form_type, fields_filled, bytes = document.bytes.len(), "generated from template");
        }
        RenderPath::Fallback => {
            tracing::info!(form = %form_type, bytes = document.bytes.len(), "generated fallback report");
        }
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, content_disposition(form_type)),
        ],
        document.bytes,
    ))
}

fn content_disposition(form_type: FormType) -> &'static str {
    match form_type {
        FormType::ScheduleC => "attachment; filename=schedule_c_report.pdf",
        FormType::ScheduleE => "attachment; filename=schedule_e_report.pdf",
    }
}
