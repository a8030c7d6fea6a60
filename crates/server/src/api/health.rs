use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tax_forms::FormType;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Tax Forms Generator API",
        "status": "running",
    }))
}

/// Backend availability and which templates are present
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let templates: serde_json::Map<String, Value> = FormType::ALL
        .iter()
        .map(|form_type| {
            (
                form_type.to_string(),
                Value::Bool(state.templates.contains(*form_type)),
            )
        })
        .collect();

    Json(json!({
        "status": "healthy",
        "capabilities": state.capabilities,
        "templates": templates,
    }))
}
